use std::fmt;

use serde::ser::{Serialize, Serializer};

use crate::error::CfgError;
use crate::node::CfgNode;
use crate::tuple::{looks_like_tuple, parse_tuple_literal, render_tuple_literal};

/// A configuration leaf or subtree.
///
/// Documents use a restricted value syntax: booleans, integers, floats,
/// strings, YAML lists, Python-style tuples and nested sections.
#[derive(Debug, Clone, PartialEq)]
pub enum CfgValue {
    /// YAML null.
    Null,
    /// A boolean flag, e.g. `MASK_ON: false`.
    Bool(bool),
    /// An integer hyperparameter, e.g. `MAX_ITER: 90000`.
    Int(i64),
    /// A float hyperparameter, e.g. `BASE_LR: 0.02`.
    Float(f64),
    /// A string, e.g. a registry name or a path.
    Str(String),
    /// A fixed-arity tuple, e.g. `MIN_SIZE_TRAIN: (900, 1350)`.
    Tuple(Vec<CfgValue>),
    /// A YAML list, e.g. `FPN_STRIDES: [8, 16, 32, 64, 128]`.
    List(Vec<CfgValue>),
    /// A nested section.
    Node(CfgNode),
}

impl CfgValue {
    /// The value's type name, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            CfgValue::Null => "null",
            CfgValue::Bool(_) => "bool",
            CfgValue::Int(_) => "int",
            CfgValue::Float(_) => "float",
            CfgValue::Str(_) => "string",
            CfgValue::Tuple(_) => "tuple",
            CfgValue::List(_) => "list",
            CfgValue::Node(_) => "section",
        }
    }

    /// Returns the boolean if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CfgValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CfgValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a float. Integers promote.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CfgValue::Float(f) => Some(*f),
            CfgValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the string if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CfgValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is a `Tuple`.
    pub fn as_tuple(&self) -> Option<&[CfgValue]> {
        match self {
            CfgValue::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the elements if this is a `List`.
    pub fn as_list(&self) -> Option<&[CfgValue]> {
        match self {
            CfgValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested section if this is a `Node`.
    pub fn as_node(&self) -> Option<&CfgNode> {
        match self {
            CfgValue::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Constructs a tuple value.
    pub fn tuple(items: impl IntoIterator<Item = CfgValue>) -> Self {
        CfgValue::Tuple(items.into_iter().collect())
    }

    /// Constructs a list value.
    pub fn list(items: impl IntoIterator<Item = CfgValue>) -> Self {
        CfgValue::List(items.into_iter().collect())
    }

    /// Parses a raw scalar using the restricted value syntax.
    ///
    /// Understands booleans (`true`/`True`), null (`null`/`None`/`~`),
    /// integers, floats and tuple literals; everything else is a string.
    /// This is how command-line override values are interpreted.
    pub fn parse_scalar(raw: &str) -> Result<Self, CfgError> {
        let t = raw.trim();
        if looks_like_tuple(t) {
            return Ok(CfgValue::Tuple(parse_tuple_literal(t)?));
        }
        match t {
            "true" | "True" => return Ok(CfgValue::Bool(true)),
            "false" | "False" => return Ok(CfgValue::Bool(false)),
            "null" | "None" | "~" => return Ok(CfgValue::Null),
            _ => {}
        }
        if let Ok(i) = t.parse::<i64>() {
            return Ok(CfgValue::Int(i));
        }
        if let Ok(f) = t.parse::<f64>() {
            return Ok(CfgValue::Float(f));
        }
        Ok(CfgValue::Str(t.to_string()))
    }

    /// Converts a parsed YAML value into a config value.
    ///
    /// Plain scalars shaped like `(a, b)` are tuple literals; YAML mappings
    /// become nested sections (string keys only).
    pub fn from_yaml(value: serde_yaml::Value) -> Result<Self, CfgError> {
        match value {
            serde_yaml::Value::Null => Ok(CfgValue::Null),
            serde_yaml::Value::Bool(b) => Ok(CfgValue::Bool(b)),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(CfgValue::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(CfgValue::Float(f))
                } else {
                    Err(CfgError::UnsupportedYaml(format!(
                        "number out of range: {n}"
                    )))
                }
            }
            serde_yaml::Value::String(s) => {
                if looks_like_tuple(&s) {
                    Ok(CfgValue::Tuple(parse_tuple_literal(&s)?))
                } else {
                    Ok(CfgValue::Str(s))
                }
            }
            serde_yaml::Value::Sequence(seq) => {
                let items = seq
                    .into_iter()
                    .map(CfgValue::from_yaml)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(CfgValue::List(items))
            }
            serde_yaml::Value::Mapping(mapping) => {
                Ok(CfgValue::Node(CfgNode::from_yaml_mapping(mapping)?))
            }
            serde_yaml::Value::Tagged(tagged) => Err(CfgError::UnsupportedYaml(format!(
                "tagged value {}",
                tagged.tag
            ))),
        }
    }
}

impl fmt::Display for CfgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfgValue::Null => write!(f, "null"),
            CfgValue::Bool(b) => write!(f, "{b}"),
            CfgValue::Int(i) => write!(f, "{i}"),
            CfgValue::Float(v) => write!(f, "{v:?}"),
            CfgValue::Str(s) => write!(f, "{s}"),
            CfgValue::Tuple(items) => write!(f, "{}", render_tuple_literal(items)),
            CfgValue::List(items) => {
                let rendered: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            CfgValue::Node(node) => write!(f, "{{{} keys}}", node.len()),
        }
    }
}

impl Serialize for CfgValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CfgValue::Null => serializer.serialize_unit(),
            CfgValue::Bool(b) => serializer.serialize_bool(*b),
            CfgValue::Int(i) => serializer.serialize_i64(*i),
            CfgValue::Float(v) => serializer.serialize_f64(*v),
            CfgValue::Str(s) => serializer.serialize_str(s),
            // Tuples dump back as the literal text they were parsed from.
            CfgValue::Tuple(items) => serializer.serialize_str(&render_tuple_literal(items)),
            CfgValue::List(items) => serializer.collect_seq(items),
            CfgValue::Node(node) => node.serialize(serializer),
        }
    }
}

impl From<bool> for CfgValue {
    fn from(b: bool) -> Self {
        CfgValue::Bool(b)
    }
}

impl From<i64> for CfgValue {
    fn from(i: i64) -> Self {
        CfgValue::Int(i)
    }
}

impl From<f64> for CfgValue {
    fn from(f: f64) -> Self {
        CfgValue::Float(f)
    }
}

impl From<&str> for CfgValue {
    fn from(s: &str) -> Self {
        CfgValue::Str(s.to_string())
    }
}

impl From<String> for CfgValue {
    fn from(s: String) -> Self {
        CfgValue::Str(s)
    }
}

impl From<CfgNode> for CfgValue {
    fn from(node: CfgNode) -> Self {
        CfgValue::Node(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalar_bool_variants() {
        assert_eq!(CfgValue::parse_scalar("true").unwrap(), CfgValue::Bool(true));
        assert_eq!(CfgValue::parse_scalar("True").unwrap(), CfgValue::Bool(true));
        assert_eq!(
            CfgValue::parse_scalar("False").unwrap(),
            CfgValue::Bool(false)
        );
    }

    #[test]
    fn test_parse_scalar_numbers() {
        assert_eq!(CfgValue::parse_scalar("90000").unwrap(), CfgValue::Int(90000));
        assert_eq!(CfgValue::parse_scalar("0.02").unwrap(), CfgValue::Float(0.02));
        assert_eq!(CfgValue::parse_scalar("-1").unwrap(), CfgValue::Int(-1));
    }

    #[test]
    fn test_parse_scalar_tuple_and_string() {
        assert_eq!(
            CfgValue::parse_scalar("(900, 1350)").unwrap(),
            CfgValue::Tuple(vec![CfgValue::Int(900), CfgValue::Int(1350)])
        );
        assert_eq!(
            CfgValue::parse_scalar("FCOSHead").unwrap(),
            CfgValue::Str("FCOSHead".to_string())
        );
    }

    #[test]
    fn test_as_f64_promotes_int() {
        assert_eq!(CfgValue::Int(2).as_f64(), Some(2.0));
        assert_eq!(CfgValue::Float(0.5).as_f64(), Some(0.5));
        assert_eq!(CfgValue::Str("2".to_string()).as_f64(), None);
    }

    #[test]
    fn test_float_int_distinction_survives_yaml() {
        let float = CfgValue::from_yaml(serde_yaml::from_str("0.02").unwrap()).unwrap();
        let int = CfgValue::from_yaml(serde_yaml::from_str("2").unwrap()).unwrap();
        assert_eq!(float, CfgValue::Float(0.02));
        assert_eq!(int, CfgValue::Int(2));
    }

    #[test]
    fn test_from_yaml_tuple_string() {
        let value = CfgValue::from_yaml(serde_yaml::Value::String("(640, 800)".to_string()));
        assert_eq!(
            value.unwrap(),
            CfgValue::Tuple(vec![CfgValue::Int(640), CfgValue::Int(800)])
        );
    }

    #[test]
    fn test_from_yaml_malformed_tuple_is_error() {
        let value = CfgValue::from_yaml(serde_yaml::Value::String("(640, oops)".to_string()));
        assert!(matches!(value, Err(CfgError::BadTupleLiteral { .. })));
    }
}
