#![deny(missing_docs)]
//! Loading and inheritance resolution for layered configuration documents.
//!
//! A document may name its parent through the `_BASE_` key; the parent is
//! loaded recursively (relative to the referencing file) and the child is
//! merged over it. [`load_cfg_with_defaults`] additionally merges the
//! resolved document over the framework defaults, so untouched fields are
//! inherited unchanged.

/// Framework default configuration tree.
pub mod defaults;

/// Error types for document loading.
pub mod error;

/// Document loading and `_BASE_` resolution.
pub mod loader;

/// Command-line style `KEY VALUE` override lists.
pub mod overrides;

pub use crate::defaults::defaults;
pub use crate::error::LoadError;
pub use crate::loader::{load_cfg, load_cfg_with_defaults, BASE_KEY};
pub use crate::overrides::{apply_overrides, parse_override_list};
