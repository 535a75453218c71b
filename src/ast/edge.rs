//! Edge - a directed (from, to, description) triple
//!
//! Labels keep their original casing. Graph structure only ever compares
//! folded labels, see [`fold_label`].

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable directed edge between two labelled nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    from: String,
    to: String,
    #[serde(default)]
    description: String,
}

impl Edge {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            description: description.into(),
        }
    }

    /// Origin label, verbatim
    #[inline]
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Destination label, verbatim
    #[inline]
    pub fn to(&self) -> &str {
        &self.to
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Case-folded origin, used as the node key
    #[inline]
    pub fn from_key(&self) -> Cow<'_, str> {
        fold_label(&self.from)
    }

    /// Case-folded destination
    #[inline]
    pub fn to_key(&self) -> Cow<'_, str> {
        fold_label(&self.to)
    }

    /// True when `next` continues the path right after `self`
    pub fn chains_into(&self, next: &Edge) -> bool {
        self.to_key() == next.from_key()
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

/// Fold a node label for structural comparison.
///
/// Returns `Cow::Borrowed` when the label is already folded (zero allocation),
/// which is the common case for lowercase input.
pub fn fold_label(label: &str) -> Cow<'_, str> {
    let already_folded = label
        .chars()
        .all(|c| c.to_lowercase().eq(std::iter::once(c)));
    if already_folded {
        Cow::Borrowed(label)
    } else {
        Cow::Owned(label.to_lowercase())
    }
}
