//! EdgeDocument - edge list file format (v0.1)
//!
//! Accepted shapes:
//!
//! ```yaml
//! schema: pathsort/edges@0.1   # optional
//! edges:
//!   - from: Dubai
//!     to: abu dhabi
//!     description: EK 1
//! ```
//!
//! or a bare top-level sequence of edges. JSON parses as YAML, so `.json`
//! files go through the same path.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{PathsortError, Result};

use super::edge::Edge;

/// Expected schema version for v0.1 edge documents
pub const SCHEMA_V01: &str = "pathsort/edges@0.1";

/// Document parsed from YAML (raw)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DocumentRaw {
    Full {
        #[serde(default)]
        schema: Option<String>,
        edges: Vec<Edge>,
    },
    Bare(Vec<Edge>),
}

/// A set of edges read from disk, in file order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub edges: Vec<Edge>,
}

impl<'de> Deserialize<'de> for EdgeDocument {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match DocumentRaw::deserialize(deserializer)? {
            DocumentRaw::Full { schema, edges } => EdgeDocument { schema, edges },
            DocumentRaw::Bare(edges) => EdgeDocument {
                schema: None,
                edges,
            },
        })
    }
}

impl EdgeDocument {
    /// Wrap edges in a document stamped with the current schema
    pub fn new(edges: Vec<Edge>) -> Self {
        Self {
            schema: Some(SCHEMA_V01.to_string()),
            edges,
        }
    }

    /// Parse a YAML or JSON document
    pub fn parse(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Read and parse a document from disk
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        let document = Self::parse(&source)?;
        debug!(edges = document.edges.len(), "parsed edge document");
        Ok(document)
    }

    /// Run every document-level check (schema, then labels)
    pub fn validate(&self) -> Result<()> {
        self.validate_schema()?;
        self.validate_labels()
    }

    /// Schema is optional; when present it must be v0.1
    pub fn validate_schema(&self) -> Result<()> {
        match self.schema.as_deref() {
            None | Some(SCHEMA_V01) => Ok(()),
            Some(other) => Err(PathsortError::InvalidSchema {
                expected: SCHEMA_V01.to_string(),
                actual: other.to_string(),
            }),
        }
    }

    /// Reject blank `from`/`to` labels (index is 0-based, in file order)
    pub fn validate_labels(&self) -> Result<()> {
        for (index, edge) in self.edges.iter().enumerate() {
            if edge.from().trim().is_empty() {
                return Err(PathsortError::EmptyLabel {
                    index,
                    field: "from",
                });
            }
            if edge.to().trim().is_empty() {
                return Err(PathsortError::EmptyLabel { index, field: "to" });
            }
        }
        Ok(())
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}
