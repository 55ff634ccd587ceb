use detcfg_core::CfgError;

/// An error type for registry lookup and registration.
#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    /// A config field named an implementation nobody registered.
    #[error("no {registry} named {name:?}, known: {known:?}")]
    UnknownName {
        /// Registry the lookup ran against.
        registry: &'static str,
        /// The unresolved name.
        name: String,
        /// All registered names, sorted.
        known: Vec<String>,
    },

    /// An implementation name was registered twice.
    #[error("{registry} already has an entry named {name:?}")]
    DuplicateName {
        /// Registry the registration ran against.
        registry: &'static str,
        /// The duplicated name.
        name: String,
    },

    /// A choice field was present but not a string, or otherwise unreadable.
    #[error(transparent)]
    Cfg(#[from] CfgError),
}
