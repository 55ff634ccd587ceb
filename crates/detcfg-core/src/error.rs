/// An error type for the configuration tree.
#[derive(thiserror::Error, Debug)]
pub enum CfgError {
    /// A dotted key did not resolve to a value.
    #[error("key not found: {0}")]
    MissingKey(String),

    /// A dotted key path was empty or contained an empty segment.
    #[error("invalid key path: {0:?}")]
    InvalidKeyPath(String),

    /// A value had a different type than the accessor expected.
    #[error("expected {expected} at {key}, found {found}")]
    TypeMismatch {
        /// Full dotted path of the offending value.
        key: String,
        /// Type the accessor expected.
        expected: &'static str,
        /// Type actually present.
        found: &'static str,
    },

    /// Path traversal reached a leaf where a section was required.
    #[error("cannot traverse {key}: {found} is not a section")]
    NotASection {
        /// Full dotted path of the leaf.
        key: String,
        /// Type of the leaf that blocked traversal.
        found: &'static str,
    },

    /// A parenthesized scalar did not parse as a tuple literal.
    #[error("malformed tuple literal {literal:?}: {reason}")]
    BadTupleLiteral {
        /// The literal as it appeared in the document.
        literal: String,
        /// What went wrong.
        reason: String,
    },

    /// A tuple had a different arity than the accessor expected.
    #[error("expected a {expected}-tuple at {key}, found {found} elements")]
    TupleArity {
        /// Full dotted path of the tuple.
        key: String,
        /// Expected number of elements.
        expected: usize,
        /// Actual number of elements.
        found: usize,
    },

    /// The YAML document used structure the config model does not admit.
    #[error("unsupported YAML structure: {0}")]
    UnsupportedYaml(String),

    /// Error from the YAML parser or emitter.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
