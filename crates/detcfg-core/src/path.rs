use std::fmt;
use std::str::FromStr;

use crate::error::CfgError;

/// A dotted key path into a configuration tree, e.g. `MODEL.BACKBONE.NAME`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Parses a dotted path. Empty paths and empty segments are rejected.
    pub fn parse(path: &str) -> Result<Self, CfgError> {
        if path.is_empty() {
            return Err(CfgError::InvalidKeyPath(path.to_string()));
        }
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(CfgError::InvalidKeyPath(path.to_string()));
        }
        Ok(Self(segments))
    }

    /// The path segments, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The dotted prefix up to and including segment `index`.
    ///
    /// Used to report the exact point where traversal failed.
    pub fn prefix(&self, index: usize) -> String {
        self.0[..=index].join(".")
    }
}

impl FromStr for KeyPath {
    type Err = CfgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested() {
        let path = KeyPath::parse("MODEL.BACKBONE.NAME").unwrap();
        assert_eq!(path.segments(), &["MODEL", "BACKBONE", "NAME"]);
        assert_eq!(path.to_string(), "MODEL.BACKBONE.NAME");
    }

    #[test]
    fn test_parse_single_segment() {
        let path = KeyPath::parse("OUTPUT_DIR").unwrap();
        assert_eq!(path.segments(), &["OUTPUT_DIR"]);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(KeyPath::parse("").is_err());
        assert!(KeyPath::parse("MODEL..NAME").is_err());
        assert!(KeyPath::parse(".MODEL").is_err());
        assert!(KeyPath::parse("MODEL.").is_err());
    }

    #[test]
    fn test_prefix() {
        let path = KeyPath::parse("MODEL.FCOS.NMS_TH").unwrap();
        assert_eq!(path.prefix(0), "MODEL");
        assert_eq!(path.prefix(1), "MODEL.FCOS");
        assert_eq!(path.prefix(2), "MODEL.FCOS.NMS_TH");
    }
}
