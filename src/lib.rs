//! cctr: a small tr-style character transliterator
//!
//! This library exposes cctr's spec expansion and line transformations for
//! use in tests. The main binary is at src/main.rs.

pub mod class_table;
pub mod cli;
pub mod config;
pub mod expander;
pub mod logger;
pub mod processor;
pub mod range;
pub mod transform;

// Re-export commonly used types for convenience
pub use expander::{expand, ExpandedSet, Expander};
pub use processor::{process, RunSummary};
pub use range::{expand_range, RangeBoundaries};
pub use transform::{delete, squeeze, translate, Mode, Transformer};
