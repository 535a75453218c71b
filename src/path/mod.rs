//! Path Module - ordering an edge set into a single path
//!
//! - `index`: EdgeIndex built per call (origin keys, in-degree, traversal)
//! - `orderer`: PathOrderer, the `sort` entry point and its options
//!
//! Nothing here is shared between calls: every `sort` builds its own index
//! and drops it on return, so concurrent callers need no coordination.
//! The module never logs; reporting failures is the caller's job.

mod index;
mod orderer;

// Re-export public types
pub use index::EdgeIndex;
pub use orderer::{sort, EmptyInput, PathOrderer, SortOptions};
