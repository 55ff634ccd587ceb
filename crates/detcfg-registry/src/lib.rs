#![deny(missing_docs)]
//! Name-to-factory registries for configuration component selection.
//!
//! Resolved configuration documents select implementations by name:
//! `MODEL.META_ARCHITECTURE: "VideoSemanticSegmentor"` picks a registered
//! builder out of a table keyed by that string. This crate provides the
//! table and the validation of such choice fields; what the factories
//! actually construct is up to the caller.

/// Error types for registry lookup and registration.
pub mod error;

/// The registry table.
pub mod registry;

/// Validation of registry-name fields in a resolved config.
pub mod validate;

pub use crate::error::RegistryError;
pub use crate::registry::{FactoryFn, Registry};
pub use crate::validate::check_choice;
