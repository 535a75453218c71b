//! Pathsort - rebuild a single path from an unordered edge set (v0.1)
//!
//! ## Module Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        DOMAIN MODEL                          │
//! │  ast/       Edge value type, EdgeDocument (YAML/JSON input)  │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                            CORE                              │
//! │  path/      EdgeIndex + PathOrderer (pure, no I/O, no logs)  │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        OUTER LAYER                           │
//! │  output     text / json / yaml rendering                     │
//! │  config     ~/.config/pathsort/config.toml + env overrides   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pathsort::{sort, Edge};
//!
//! let edges = vec![
//!     Edge::new("Dubai", "abu dhabi", "EK 1"),
//!     Edge::new("doha", "Dubai", "QR 2"),
//! ];
//! let path = sort(&edges).unwrap();
//! assert_eq!(path[0].from(), "doha");
//! assert_eq!(path[1].from(), "Dubai");
//! ```

// ═══════════════════════════════════════════════════════════════
// DOMAIN MODEL
// ═══════════════════════════════════════════════════════════════
pub mod ast;

// ═══════════════════════════════════════════════════════════════
// CORE
// ═══════════════════════════════════════════════════════════════
pub mod path;

// ═══════════════════════════════════════════════════════════════
// OUTER LAYER
// ═══════════════════════════════════════════════════════════════
pub mod config;
pub mod output;

// ═══════════════════════════════════════════════════════════════
// CROSS-CUTTING
// ═══════════════════════════════════════════════════════════════
pub mod error;

// ═══════════════════════════════════════════════════════════════
// PUBLIC API RE-EXPORTS
// ═══════════════════════════════════════════════════════════════

pub use ast::{Edge, EdgeDocument};
pub use config::PathsortConfig;
pub use error::{FixSuggestion, PathsortError, Result};
pub use output::{render, OutputFormat};
pub use path::{sort, EdgeIndex, EmptyInput, PathOrderer, SortOptions};
