//! Output rendering for an ordered path (v0.1)
//!
//! - `text`: numbered lines, one edge per line
//! - `json`: array of edge objects
//! - `yaml`: an edge document, readable again by `pathsort sort`

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::ast::{Edge, SCHEMA_V01};
use crate::error::{PathsortError, Result};

/// Output format enum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Numbered human-readable lines (default)
    #[default]
    Text,

    /// Pretty-printed JSON array
    Json,

    /// YAML edge document
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("expected 'text', 'json' or 'yaml', got '{other}'")),
        }
    }
}

/// Borrowed view serialized as an edge document, avoids cloning edges
#[derive(Serialize)]
struct DocumentView<'a> {
    schema: &'static str,
    edges: &'a [&'a Edge],
}

/// Render `path` in `format`. Text output carries no trailing newline.
pub fn render(path: &[&Edge], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(path)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(path).map_err(|e| PathsortError::Serialize {
                details: e.to_string(),
            })
        }
        OutputFormat::Yaml => {
            let view = DocumentView {
                schema: SCHEMA_V01,
                edges: path,
            };
            serde_yaml::to_string(&view).map_err(|e| PathsortError::Serialize {
                details: e.to_string(),
            })
        }
    }
}

fn render_text(path: &[&Edge]) -> String {
    let mut out = String::new();
    for (step, edge) in path.iter().enumerate() {
        if step > 0 {
            out.push('\n');
        }
        // Writing to a String never fails
        let _ = write!(out, "{}. {}", step + 1, edge);
    }
    out
}
