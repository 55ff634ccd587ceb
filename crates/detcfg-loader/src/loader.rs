use std::fs;
use std::path::{Path, PathBuf};

use detcfg_core::{CfgNode, CfgValue};

use crate::defaults::defaults;
use crate::error::LoadError;

/// Key a document uses to name its parent document.
pub const BASE_KEY: &str = "_BASE_";

/// Loads a configuration document and resolves its `_BASE_` chain.
///
/// A relative `_BASE_` path is resolved against the directory of the file
/// that references it; an absolute path is honored as-is. The `_BASE_` key
/// itself never appears in the resolved tree. Cycles are detected on
/// canonicalized paths and reported with the first revisited document.
pub fn load_cfg(path: impl AsRef<Path>) -> Result<CfgNode, LoadError> {
    let mut chain = Vec::new();
    load_recursive(path.as_ref(), None, &mut chain)
}

/// Loads a document as [`load_cfg`] and merges it over the framework
/// defaults, so fields no document in the chain touched keep their
/// default values.
pub fn load_cfg_with_defaults(path: impl AsRef<Path>) -> Result<CfgNode, LoadError> {
    let resolved = load_cfg(path)?;
    let mut cfg = defaults();
    cfg.merge_from(&resolved);
    Ok(cfg)
}

fn load_recursive(
    path: &Path,
    referenced_by: Option<&Path>,
    chain: &mut Vec<PathBuf>,
) -> Result<CfgNode, LoadError> {
    let canonical = path.canonicalize().map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            if let Some(parent) = referenced_by {
                return LoadError::BaseNotFound {
                    path: path.to_path_buf(),
                    referenced_by: parent.to_path_buf(),
                };
            }
        }
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    if chain.contains(&canonical) {
        return Err(LoadError::CircularBase { path: canonical });
    }
    chain.push(canonical.clone());

    let text = fs::read_to_string(&canonical).map_err(|source| LoadError::Io {
        path: canonical.clone(),
        source,
    })?;
    let mut doc = CfgNode::from_yaml_str(&text).map_err(|source| LoadError::Parse {
        path: canonical.clone(),
        source,
    })?;

    let resolved = match doc.remove(BASE_KEY) {
        None => doc,
        Some(CfgValue::Str(base)) => {
            let base_path = resolve_base_path(&canonical, &base);
            log::debug!(
                "resolving {BASE_KEY} {:?} of {:?}",
                base_path,
                canonical
            );
            let mut merged = load_recursive(&base_path, Some(&canonical), chain)?;
            merged.merge_from(&doc);
            merged
        }
        Some(other) => {
            return Err(LoadError::BadBaseType {
                path: canonical,
                found: other.type_name(),
            })
        }
    };

    chain.pop();
    Ok(resolved)
}

fn resolve_base_path(document: &Path, base: &str) -> PathBuf {
    let base_path = Path::new(base);
    if base_path.is_absolute() {
        return base_path.to_path_buf();
    }
    match document.parent() {
        Some(dir) => dir.join(base_path),
        None => base_path.to_path_buf(),
    }
}
