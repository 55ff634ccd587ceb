#![deny(missing_docs)]
//! # detcfg
//!
//! Layered configuration engine for detectron2-style training pipelines:
//! value tree and merge semantics, `_BASE_` inheritance resolution, and
//! name-to-factory registries for component selection.

#[doc(inline)]
pub use detcfg_core::{CfgError, CfgNode, CfgValue, KeyPath};

#[doc(inline)]
pub use detcfg_loader as loader;

#[doc(inline)]
pub use detcfg_registry as registry;
