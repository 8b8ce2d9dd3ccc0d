//! Plain-text grid export.
//!
//! One line per row (`y_pos`), one column per layer (`x_pos`):
//!
//! ```text
//!   | 0         | 1
//! 0 | Token.sol | lib/Math.sol
//! 1 | Vault.sol | ·
//! ```
//!
//! Empty cells show `·`, placeholder nodes show `+`.

use serde::Serialize;

use depgrid_core::graph::{Dag, GraphNode};

use super::{Error, Exporter};

const HOLE: &str = "·";
const PLACEHOLDER: &str = "+";
const SEPARATOR: &str = " | ";

#[derive(Debug, Clone, Copy, Default)]
pub struct TextExporter;

impl TextExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for TextExporter {
    fn export<T: Serialize>(&self, dag: &Dag<T>) -> Result<String, Error> {
        let (Some(max_x), Some(max_y)) = (dag.max_x(), dag.max_y()) else {
            return Ok(String::new());
        };

        let mut rows = vec![vec![HOLE.to_string(); max_x + 1]; max_y + 1];
        for node in dag.nodes() {
            let cell = &mut rows[node.y_pos()][node.x_pos()];
            if *cell != HOLE {
                return Err(Error::Render(format!(
                    "cell ({}, {}) holds both `{cell}` and `{}`",
                    node.x_pos(),
                    node.y_pos(),
                    node.id()
                )));
            }
            *cell = label(node);
        }

        let header: Vec<String> = (0..=max_x).map(|x| x.to_string()).collect();
        let widths: Vec<usize> = (0..=max_x)
            .map(|x| {
                rows.iter()
                    .map(|row| row[x].chars().count())
                    .chain([header[x].len()])
                    .max()
                    .unwrap_or_default()
            })
            .collect();
        let label_width = max_y.to_string().len();

        let mut out = format_line(&" ".repeat(label_width), &header, &widths);
        for (y, row) in rows.iter().enumerate() {
            out.push_str(&format_line(&format!("{y:>label_width$}"), row, &widths));
        }
        Ok(out)
    }
}

fn label<T>(node: &GraphNode<T>) -> String {
    if node.id().is_placeholder() {
        PLACEHOLDER.to_string()
    } else {
        node.id().to_string()
    }
}

fn format_line(row_label: &str, cells: &[String], widths: &[usize]) -> String {
    let mut line = row_label.to_string();
    for (cell, &width) in cells.iter().zip(widths) {
        line.push_str(SEPARATOR);
        line.push_str(&format!("{cell:<width$}"));
    }
    let mut line = line.trim_end().to_string();
    line.push('\n');
    line
}
