//! Configuration types for depgrid layout and output.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file; every field has a default.
//!
//! - [`AppConfig`] - Top-level configuration combining layout and output settings.
//! - [`LayoutConfig`] - Cycle handling and root inference.
//! - [`OutputConfig`] - Output format and placeholder filling.
//!
//! # Example
//!
//! ```
//! # use depgrid::config::{AppConfig, CyclePolicy, OutputFormat};
//! let config = AppConfig::default();
//! assert_eq!(config.layout().cycle_policy(), CyclePolicy::Reject);
//! assert_eq!(config.output().format(), OutputFormat::Json);
//! ```

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, output: OutputConfig) -> Self {
        Self { layout, output }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Mutable access to the output section, used to apply CLI overrides.
    pub fn output_mut(&mut self) -> &mut OutputConfig {
        &mut self.output
    }
}

/// What to do when the edges contain a dependency cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Fail with [`DepgridError::Cycle`](crate::DepgridError::Cycle).
    #[default]
    Reject,
    /// Lay the graph out anyway. Nodes on a cycle can never have all of
    /// their dependents placed, so they and everything behind them are
    /// left out of the grid.
    Allow,
}

/// Layout configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    cycle_policy: CyclePolicy,

    /// Pick roots automatically when none are declared.
    #[serde(default = "default_true")]
    infer_roots: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cycle_policy: CyclePolicy::default(),
            infer_roots: true,
        }
    }
}

impl LayoutConfig {
    pub fn new(cycle_policy: CyclePolicy, infer_roots: bool) -> Self {
        Self {
            cycle_policy,
            infer_roots,
        }
    }

    pub fn cycle_policy(&self) -> CyclePolicy {
        self.cycle_policy
    }

    pub fn infer_roots(&self) -> bool {
        self.infer_roots
    }
}

/// Serialization format of a laid-out graph.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The [`Dag`](depgrid_core::graph::Dag) structure as JSON.
    #[default]
    Json,
    /// A fixed-width table with one row per `y_pos` and one column per `x_pos`.
    Text,
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            _ => Err("Unsupported output format"),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Text => "text",
        })
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    format: OutputFormat,

    /// Fill empty cells of the grid with placeholder nodes before export.
    #[serde(default)]
    fill_placeholders: bool,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            fill_placeholders: false,
            pretty: true,
        }
    }
}

impl OutputConfig {
    pub fn new(format: OutputFormat, fill_placeholders: bool, pretty: bool) -> Self {
        Self {
            format,
            fill_placeholders,
            pretty,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn fill_placeholders(&self) -> bool {
        self.fill_placeholders
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    pub fn set_fill_placeholders(&mut self, fill: bool) {
        self.fill_placeholders = fill;
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.layout().cycle_policy(), CyclePolicy::Reject);
        assert!(config.layout().infer_roots());
        assert_eq!(config.output().format(), OutputFormat::Json);
        assert!(!config.output().fill_placeholders());
        assert!(config.output().pretty());
    }

    #[test]
    fn test_empty_toml_matches_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert!(config.layout().infer_roots());
        assert!(config.output().pretty());
    }

    #[test]
    fn test_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            cycle_policy = "allow"
            infer_roots = false

            [output]
            format = "text"
            fill_placeholders = true
            pretty = false
            "#,
        )
        .unwrap();

        assert_eq!(config.layout().cycle_policy(), CyclePolicy::Allow);
        assert!(!config.layout().infer_roots());
        assert_eq!(config.output().format(), OutputFormat::Text);
        assert!(config.output().fill_placeholders());
        assert!(!config.output().pretty());
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[layout]\ncycle_policy = \"repair\"");

        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("svg".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Text.to_string(), "text");
    }
}
