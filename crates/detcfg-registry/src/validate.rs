use detcfg_core::{CfgError, CfgNode, CfgValue};

use crate::error::RegistryError;
use crate::registry::Registry;

/// Checks that a registry-name field in a resolved config, if set, names a
/// registered implementation.
///
/// A missing field or an empty string means the component is unused and
/// passes; any other string must resolve in the registry. A non-string
/// value is a type error.
pub fn check_choice<T>(
    registry: &Registry<T>,
    cfg: &CfgNode,
    path: &str,
) -> Result<(), RegistryError> {
    let value = match cfg.get(path) {
        Ok(value) => value,
        Err(CfgError::MissingKey(_)) => return Ok(()),
        Err(err) => return Err(err.into()),
    };
    let name = match value {
        CfgValue::Str(s) => s,
        other => {
            return Err(RegistryError::Cfg(CfgError::TypeMismatch {
                key: path.to_string(),
                expected: "string",
                found: other.type_name(),
            }))
        }
    };
    if name.is_empty() {
        return Ok(());
    }
    registry.get(name).map(|_| ())
}
