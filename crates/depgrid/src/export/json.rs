//! JSON export.

use serde::Serialize;

use depgrid_core::graph::Dag;

use super::{Error, Exporter};

/// Serializes the whole [`Dag`] as `{"nodes": [...], "edges": [...]}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Exporter for JsonExporter {
    fn export<T: Serialize>(&self, dag: &Dag<T>) -> Result<String, Error> {
        let json = if self.pretty {
            serde_json::to_string_pretty(dag)?
        } else {
            serde_json::to_string(dag)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use depgrid_core::{
        graph::{Edge, GraphNode},
        identifier::Id,
    };

    use super::*;

    fn sample() -> Dag<String> {
        Dag::new(
            vec![
                GraphNode::new(Id::new("app"), 0, 0, Some("app".to_string())),
                GraphNode::new(Id::new("ghost"), 1, 0, None),
            ],
            vec![Edge::new("ghost", "app")],
        )
    }

    #[test]
    fn test_compact_output() {
        let json = JsonExporter::new(false).export(&sample()).unwrap();

        assert_eq!(
            json,
            concat!(
                r#"{"nodes":[{"id":"app","xPos":0,"yPos":0,"yRelative":0,"element":"app"},"#,
                r#"{"id":"ghost","xPos":1,"yPos":0,"yRelative":0}],"#,
                r#""edges":[{"from":"ghost","to":"app"}]}"#
            )
        );
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let json = JsonExporter::new(true).export(&sample()).unwrap();

        assert!(json.contains('\n'));
        let parsed: Dag<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }
}
