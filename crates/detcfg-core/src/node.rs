use std::collections::BTreeMap;

use serde::ser::{Serialize, Serializer};

use crate::error::CfgError;
use crate::path::KeyPath;
use crate::value::CfgValue;

/// A configuration section: an ordered map of field names to values.
///
/// Keys are kept sorted so dumps are deterministic, matching how the Python
/// framework sorts keys when serializing a config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CfgNode(BTreeMap<String, CfgValue>);

impl CfgNode {
    /// Creates an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields directly in this section.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the section has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the fields directly in this section, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CfgValue)> {
        self.0.iter()
    }

    /// Inserts a field directly into this section, returning the previous
    /// value if the key was present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CfgValue>) -> Option<CfgValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a field directly from this section.
    pub fn remove(&mut self, key: &str) -> Option<CfgValue> {
        self.0.remove(key)
    }

    /// Looks up a value by dotted path, if present.
    pub fn try_get(&self, path: &str) -> Option<&CfgValue> {
        self.get(path).ok()
    }

    /// Looks up a value by dotted path.
    ///
    /// Errors carry the exact dotted prefix where resolution stopped.
    pub fn get(&self, path: &str) -> Result<&CfgValue, CfgError> {
        let key_path = KeyPath::parse(path)?;
        let segments = key_path.segments();
        let mut node = self;
        for (i, segment) in segments.iter().enumerate() {
            let value = node
                .0
                .get(segment)
                .ok_or_else(|| CfgError::MissingKey(key_path.prefix(i)))?;
            if i + 1 == segments.len() {
                return Ok(value);
            }
            node = match value {
                CfgValue::Node(n) => n,
                other => {
                    return Err(CfgError::NotASection {
                        key: key_path.prefix(i),
                        found: other.type_name(),
                    })
                }
            };
        }
        Err(CfgError::InvalidKeyPath(path.to_string()))
    }

    /// Looks up a boolean by dotted path.
    pub fn get_bool(&self, path: &str) -> Result<bool, CfgError> {
        self.get(path)?
            .as_bool()
            .ok_or_else(|| self.type_mismatch(path, "bool"))
    }

    /// Looks up an integer by dotted path.
    pub fn get_i64(&self, path: &str) -> Result<i64, CfgError> {
        self.get(path)?
            .as_i64()
            .ok_or_else(|| self.type_mismatch(path, "int"))
    }

    /// Looks up a float by dotted path. Integers promote.
    pub fn get_f64(&self, path: &str) -> Result<f64, CfgError> {
        self.get(path)?
            .as_f64()
            .ok_or_else(|| self.type_mismatch(path, "float"))
    }

    /// Looks up a string by dotted path.
    pub fn get_str(&self, path: &str) -> Result<&str, CfgError> {
        match self.get(path)? {
            CfgValue::Str(s) => Ok(s),
            _ => Err(self.type_mismatch(path, "string")),
        }
    }

    /// Looks up a tuple by dotted path.
    pub fn get_tuple(&self, path: &str) -> Result<&[CfgValue], CfgError> {
        match self.get(path)? {
            CfgValue::Tuple(items) => Ok(items),
            _ => Err(self.type_mismatch(path, "tuple")),
        }
    }

    /// Looks up a list by dotted path.
    pub fn get_list(&self, path: &str) -> Result<&[CfgValue], CfgError> {
        match self.get(path)? {
            CfgValue::List(items) => Ok(items),
            _ => Err(self.type_mismatch(path, "list")),
        }
    }

    /// Looks up a nested section by dotted path.
    pub fn get_node(&self, path: &str) -> Result<&CfgNode, CfgError> {
        match self.get(path)? {
            CfgValue::Node(node) => Ok(node),
            _ => Err(self.type_mismatch(path, "section")),
        }
    }

    /// Looks up a numeric 2-tuple by dotted path, e.g. a size range like
    /// `INPUT.MIN_SIZE_TRAIN: (900, 1350)`.
    pub fn get_pair(&self, path: &str) -> Result<(f64, f64), CfgError> {
        let items = self.get_tuple(path)?;
        if items.len() != 2 {
            return Err(CfgError::TupleArity {
                key: path.to_string(),
                expected: 2,
                found: items.len(),
            });
        }
        let lo = items[0]
            .as_f64()
            .ok_or_else(|| self.type_mismatch(path, "numeric tuple"))?;
        let hi = items[1]
            .as_f64()
            .ok_or_else(|| self.type_mismatch(path, "numeric tuple"))?;
        Ok((lo, hi))
    }

    /// Sets a value by dotted path, creating intermediate sections.
    ///
    /// Fails if traversal hits an existing leaf where a section is needed.
    pub fn set(&mut self, path: &str, value: impl Into<CfgValue>) -> Result<(), CfgError> {
        let key_path = KeyPath::parse(path)?;
        let segments = key_path.segments();
        let (last, parents) = match segments.split_last() {
            Some(split) => split,
            None => return Err(CfgError::InvalidKeyPath(path.to_string())),
        };
        let mut node = self;
        for (i, segment) in parents.iter().enumerate() {
            let slot = node
                .0
                .entry(segment.clone())
                .or_insert_with(|| CfgValue::Node(CfgNode::new()));
            node = match slot {
                CfgValue::Node(n) => n,
                other => {
                    return Err(CfgError::NotASection {
                        key: key_path.prefix(i),
                        found: other.type_name(),
                    })
                }
            };
        }
        node.0.insert(last.clone(), value.into());
        Ok(())
    }

    /// Merges another section into this one, recursively.
    ///
    /// Nested sections merge key-by-key; every other value replaces the
    /// existing field wholesale. Merging the same overlay twice yields the
    /// same tree as merging it once.
    pub fn merge_from(&mut self, overlay: &CfgNode) {
        for (key, value) in &overlay.0 {
            let merged = match (self.0.get_mut(key), value) {
                (Some(CfgValue::Node(dst)), CfgValue::Node(src)) => {
                    dst.merge_from(src);
                    true
                }
                _ => false,
            };
            if !merged {
                self.0.insert(key.clone(), value.clone());
            }
        }
    }

    /// Parses a YAML document into a configuration section.
    ///
    /// The document root must be a mapping with string keys; plain scalars
    /// shaped like `(a, b)` parse as tuple literals.
    pub fn from_yaml_str(text: &str) -> Result<Self, CfgError> {
        let value: serde_yaml::Value = serde_yaml::from_str(text)?;
        match value {
            serde_yaml::Value::Mapping(mapping) => Self::from_yaml_mapping(mapping),
            serde_yaml::Value::Null => Ok(Self::new()),
            other => Err(CfgError::UnsupportedYaml(format!(
                "document root must be a mapping, found {}",
                yaml_kind(&other)
            ))),
        }
    }

    pub(crate) fn from_yaml_mapping(mapping: serde_yaml::Mapping) -> Result<Self, CfgError> {
        let mut node = Self::new();
        for (key, value) in mapping {
            let key = match key {
                serde_yaml::Value::String(s) => s,
                other => {
                    return Err(CfgError::UnsupportedYaml(format!(
                        "non-string key: {}",
                        yaml_kind(&other)
                    )))
                }
            };
            node.0.insert(key, CfgValue::from_yaml(value)?);
        }
        Ok(node)
    }

    /// Dumps the section as a YAML document with sorted keys.
    ///
    /// Tuples render back as their literal text, so a dump re-parses to an
    /// equal tree.
    pub fn to_yaml_string(&self) -> Result<String, CfgError> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn type_mismatch(&self, path: &str, expected: &'static str) -> CfgError {
        let found = self
            .try_get(path)
            .map(CfgValue::type_name)
            .unwrap_or("nothing");
        CfgError::TypeMismatch {
            key: path.to_string(),
            expected,
            found,
        }
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "bool",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged value",
    }
}

impl Serialize for CfgNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter())
    }
}

impl FromIterator<(String, CfgValue)> for CfgNode {
    fn from_iter<I: IntoIterator<Item = (String, CfgValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
