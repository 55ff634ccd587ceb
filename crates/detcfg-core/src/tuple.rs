//! Parser for the restricted tuple-literal syntax configuration documents
//! use for fixed-arity fields, e.g. `MIN_SIZE_TRAIN: (900, 1350)` or
//! `TRAIN: ("coco_2017_train",)`. YAML itself sees these as plain strings;
//! the Python framework eval-parses them, and this module mirrors that with
//! a small recursive-descent parser over numbers, quoted strings and nested
//! tuples.

use crate::error::CfgError;
use crate::value::CfgValue;

/// Returns true if a scalar string is shaped like a tuple literal.
pub(crate) fn looks_like_tuple(s: &str) -> bool {
    let t = s.trim();
    t.starts_with('(') && t.ends_with(')')
}

/// Parses a tuple literal into its element values.
///
/// Accepts integers, floats, single- or double-quoted strings and nested
/// tuples, with an optional trailing comma (`(900,)` is a 1-tuple, `()` is
/// empty). Anything else is a [`CfgError::BadTupleLiteral`].
pub fn parse_tuple_literal(input: &str) -> Result<Vec<CfgValue>, CfgError> {
    let mut cur = Cursor::new(input.trim());
    let items = parse_tuple(&mut cur)?;
    cur.skip_ws();
    if cur.peek().is_some() {
        return Err(cur.bad("trailing characters after closing ')'"));
    }
    Ok(items)
}

struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn bad(&self, reason: impl Into<String>) -> CfgError {
        CfgError::BadTupleLiteral {
            literal: self.input.to_string(),
            reason: reason.into(),
        }
    }
}

fn parse_tuple(cur: &mut Cursor<'_>) -> Result<Vec<CfgValue>, CfgError> {
    cur.skip_ws();
    if !cur.eat('(') {
        return Err(cur.bad("expected '('"));
    }
    let mut items = Vec::new();
    loop {
        cur.skip_ws();
        if cur.eat(')') {
            break;
        }
        items.push(parse_item(cur)?);
        cur.skip_ws();
        if cur.eat(',') {
            continue;
        }
        if cur.eat(')') {
            break;
        }
        return Err(cur.bad("expected ',' or ')' after element"));
    }
    Ok(items)
}

fn parse_item(cur: &mut Cursor<'_>) -> Result<CfgValue, CfgError> {
    match cur.peek() {
        Some('(') => Ok(CfgValue::Tuple(parse_tuple(cur)?)),
        Some(q @ ('"' | '\'')) => parse_quoted(cur, q),
        Some(_) => parse_number(cur),
        None => Err(cur.bad("unterminated tuple")),
    }
}

fn parse_quoted(cur: &mut Cursor<'_>, quote: char) -> Result<CfgValue, CfgError> {
    cur.bump();
    let mut out = String::new();
    loop {
        match cur.bump() {
            Some(c) if c == quote => return Ok(CfgValue::Str(out)),
            Some(c) => out.push(c),
            None => return Err(cur.bad("unterminated string element")),
        }
    }
}

fn parse_number(cur: &mut Cursor<'_>) -> Result<CfgValue, CfgError> {
    let start = cur.pos;
    while matches!(cur.peek(), Some(c) if c.is_ascii_digit() || "+-.eE_".contains(c)) {
        cur.bump();
    }
    let raw = &cur.input[start..cur.pos];
    if raw.is_empty() {
        return Err(cur.bad("expected a number, string or nested tuple"));
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Ok(CfgValue::Int(i));
    }
    if let Ok(f) = raw.parse::<f64>() {
        return Ok(CfgValue::Float(f));
    }
    Err(cur.bad(format!("not a numeric element: {raw:?}")))
}

/// Renders tuple elements back into the literal syntax, round-trip stable
/// with [`parse_tuple_literal`]. 1-tuples keep the trailing comma.
pub(crate) fn render_tuple_literal(items: &[CfgValue]) -> String {
    let rendered: Vec<String> = items.iter().map(render_element).collect();
    if rendered.len() == 1 {
        format!("({},)", rendered[0])
    } else {
        format!("({})", rendered.join(", "))
    }
}

fn render_element(value: &CfgValue) -> String {
    match value {
        CfgValue::Int(i) => i.to_string(),
        CfgValue::Float(f) => format!("{f:?}"),
        CfgValue::Str(s) => format!("\"{s}\""),
        CfgValue::Tuple(items) => render_tuple_literal(items),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_pair() {
        let items = parse_tuple_literal("(900, 1350)").unwrap();
        assert_eq!(items, vec![CfgValue::Int(900), CfgValue::Int(1350)]);
    }

    #[test]
    fn test_no_spaces() {
        let items = parse_tuple_literal("(900,1350)").unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_floats_and_ints_mix() {
        let items = parse_tuple_literal("(0.5, 2)").unwrap();
        assert_eq!(items, vec![CfgValue::Float(0.5), CfgValue::Int(2)]);
    }

    #[test]
    fn test_trailing_comma_singleton() {
        let items = parse_tuple_literal("(800,)").unwrap();
        assert_eq!(items, vec![CfgValue::Int(800)]);
    }

    #[test]
    fn test_empty_tuple() {
        assert_eq!(parse_tuple_literal("()").unwrap(), Vec::new());
    }

    #[test]
    fn test_string_elements() {
        let items = parse_tuple_literal("(\"coco_2017_train\",)").unwrap();
        assert_eq!(items, vec![CfgValue::Str("coco_2017_train".to_string())]);
    }

    #[test]
    fn test_nested_tuple() {
        let items = parse_tuple_literal("((32, 64), (128,))").unwrap();
        assert_eq!(
            items,
            vec![
                CfgValue::Tuple(vec![CfgValue::Int(32), CfgValue::Int(64)]),
                CfgValue::Tuple(vec![CfgValue::Int(128)]),
            ]
        );
    }

    #[test]
    fn test_negative_and_scientific() {
        let items = parse_tuple_literal("(-1, 1e-4)").unwrap();
        assert_eq!(items, vec![CfgValue::Int(-1), CfgValue::Float(1e-4)]);
    }

    #[test]
    fn test_rejects_trailing_junk() {
        assert!(parse_tuple_literal("(1, 2) extra").is_err());
    }

    #[test]
    fn test_rejects_non_numeric_bareword() {
        assert!(parse_tuple_literal("(foo, 2)").is_err());
    }

    #[test]
    fn test_rejects_unterminated() {
        assert!(parse_tuple_literal("(1, 2").is_err());
        assert!(parse_tuple_literal("('abc)").is_err());
    }

    #[test]
    fn test_render_round_trip() {
        for literal in ["(900, 1350)", "(800,)", "()", "(\"a\", \"b\")", "(0.5, 2)"] {
            let items = parse_tuple_literal(literal).unwrap();
            let rendered = render_tuple_literal(&items);
            assert_eq!(parse_tuple_literal(&rendered).unwrap(), items);
        }
    }

    #[test]
    fn test_render_keeps_floatness() {
        let rendered = render_tuple_literal(&[CfgValue::Float(2.0), CfgValue::Float(0.02)]);
        assert_eq!(rendered, "(2.0, 0.02)");
    }
}
