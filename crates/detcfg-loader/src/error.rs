use std::path::PathBuf;

use detcfg_core::CfgError;

/// An error type for document loading and inheritance resolution.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// The document file could not be read.
    #[error("failed to read config file {path:?}")]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document did not parse as a configuration tree.
    #[error("failed to parse config file {path:?}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: CfgError,
    },

    /// A `_BASE_` reference pointed at a file that does not exist.
    #[error("_BASE_ of {referenced_by:?} not found: {path:?}")]
    BaseNotFound {
        /// The missing base path, as resolved.
        path: PathBuf,
        /// The document that referenced it.
        referenced_by: PathBuf,
    },

    /// A chain of `_BASE_` references looped back on itself.
    #[error("circular _BASE_ inheritance through {path:?}")]
    CircularBase {
        /// First document revisited along the chain.
        path: PathBuf,
    },

    /// The `_BASE_` key held something other than a path string.
    #[error("_BASE_ in {path:?} must be a path string, found {found}")]
    BadBaseType {
        /// Document carrying the bad `_BASE_`.
        path: PathBuf,
        /// Type actually found under `_BASE_`.
        found: &'static str,
    },

    /// An override list did not come in `KEY VALUE` pairs.
    #[error("override list must be KEY VALUE pairs, got {0} items")]
    OddOverrideList(usize),

    /// Error from the configuration tree itself.
    #[error(transparent)]
    Cfg(#[from] CfgError),
}
