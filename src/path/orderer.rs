//! PathOrderer - `sort` entry point
//!
//! Returns the input edges in path order from the unique source to the
//! sink, or one of `DuplicateOrigin`, `Cycle`, `MultipleStarts`. There is
//! no partial result.

use serde::{Deserialize, Serialize};

use crate::ast::Edge;
use crate::error::Result;

use super::index::EdgeIndex;

/// What `sort` does with an empty edge set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyInput {
    /// No edges means no start: fail with `Cycle`
    #[default]
    Reject,
    /// No edges sort to no edges
    Allow,
}

impl std::str::FromStr for EmptyInput {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "allow" => Ok(Self::Allow),
            other => Err(format!("expected 'reject' or 'allow', got '{other}'")),
        }
    }
}

/// Options for [`PathOrderer`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub empty_input: EmptyInput,
}

/// Orders an unordered edge set into a single path.
///
/// Stateless apart from its options; one orderer can serve any number of
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathOrderer {
    options: SortOptions,
}

impl PathOrderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SortOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> SortOptions {
        self.options
    }

    /// Sort `edges` into path order, borrowing them.
    ///
    /// Input order is irrelevant: every permutation of a valid set yields
    /// the same output.
    pub fn sort<'a>(&self, edges: &'a [Edge]) -> Result<Vec<&'a Edge>> {
        if edges.is_empty() && self.options.empty_input == EmptyInput::Allow {
            return Ok(Vec::new());
        }
        EdgeIndex::build(edges)?.order()
    }

    /// Same contract as [`PathOrderer::sort`], moving the edges into the
    /// result instead of borrowing them.
    pub fn sort_owned(&self, edges: Vec<Edge>) -> Result<Vec<Edge>> {
        if edges.is_empty() && self.options.empty_input == EmptyInput::Allow {
            return Ok(Vec::new());
        }
        let order = EdgeIndex::build(&edges)?.order_slots()?;

        let mut pending: Vec<Option<Edge>> = edges.into_iter().map(Some).collect();
        Ok(order
            .into_iter()
            .filter_map(|slot| pending[slot].take())
            .collect())
    }
}

/// Sort with default options (empty input is rejected)
pub fn sort(edges: &[Edge]) -> Result<Vec<&Edge>> {
    PathOrderer::new().sort(edges)
}
