use std::collections::BTreeMap;
use std::fmt;

use detcfg_core::CfgNode;

use crate::error::RegistryError;

/// A factory building a component from a resolved configuration.
pub type FactoryFn<T> = fn(&CfgNode) -> T;

/// A named table of component factories, keyed by the strings configuration
/// documents use to select implementations.
pub struct Registry<T> {
    name: &'static str,
    table: BTreeMap<String, FactoryFn<T>>,
}

impl<T> Registry<T> {
    /// Creates an empty registry, e.g. `Registry::new("META_ARCHITECTURE")`.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            table: BTreeMap::new(),
        }
    }

    /// The registry's name, used in error messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registers a factory under a name. Registering the same name twice
    /// is an error.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        factory: FactoryFn<T>,
    ) -> Result<(), RegistryError> {
        let key = key.into();
        if self.table.contains_key(&key) {
            return Err(RegistryError::DuplicateName {
                registry: self.name,
                name: key,
            });
        }
        self.table.insert(key, factory);
        Ok(())
    }

    /// Looks up the factory registered under a name.
    pub fn get(&self, key: &str) -> Result<FactoryFn<T>, RegistryError> {
        self.table
            .get(key)
            .copied()
            .ok_or_else(|| RegistryError::UnknownName {
                registry: self.name,
                name: key.to_string(),
                known: self.registered_names(),
            })
    }

    /// Looks up `key` and runs its factory against `cfg`.
    pub fn build(&self, key: &str, cfg: &CfgNode) -> Result<T, RegistryError> {
        Ok(self.get(key)?(cfg))
    }

    /// Returns true if a factory is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// All registered names, sorted.
    pub fn registered_names(&self) -> Vec<String> {
        self.table.keys().cloned().collect()
    }

    /// Number of registered factories.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("entries", &self.registered_names())
            .finish()
    }
}
