#![deny(missing_docs)]
//! Configuration value tree for detectron2-style training configs.
//!
//! A configuration document is a tree of named fields grouped into sections
//! (`MODEL`, `INPUT`, `SOLVER`, ...). Child documents override their base
//! document field by field: nested sections merge key-by-key, leaf values are
//! replaced wholesale.
//!
//! ```
//! use detcfg_core::CfgNode;
//!
//! let mut cfg = CfgNode::from_yaml_str("SOLVER:\n  BASE_LR: 0.02\n  MAX_ITER: 40000\n")?;
//! let overlay = CfgNode::from_yaml_str("SOLVER:\n  MAX_ITER: 90000\n")?;
//! cfg.merge_from(&overlay);
//!
//! assert_eq!(cfg.get_i64("SOLVER.MAX_ITER")?, 90000);
//! assert_eq!(cfg.get_f64("SOLVER.BASE_LR")?, 0.02);
//! # Ok::<(), detcfg_core::CfgError>(())
//! ```

/// Error types for the configuration tree.
pub mod error;

/// Configuration node, merge and dotted-key access.
pub mod node;

/// Dotted key paths (`MODEL.BACKBONE.NAME`).
pub mod path;

/// Python-style tuple literal parsing (`(900, 1350)`).
pub mod tuple;

/// Configuration leaf values.
pub mod value;

pub use crate::error::CfgError;
pub use crate::node::CfgNode;
pub use crate::path::KeyPath;
pub use crate::tuple::parse_tuple_literal;
pub use crate::value::CfgValue;
