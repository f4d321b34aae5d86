//! Centroid description parsing
//!
//! Descriptions are stored as text in the plan catalog. Cleanly exported
//! artifacts hold JSON; older exports hold Python-style literals (single
//! quotes, `True`/`None`, tuples). Parsing tries strict JSON first, then a
//! permissive literal rewrite, and reports failure as a tagged outcome
//! rather than driving control flow through errors.

use serde_json::Value;

/// Outcome of the two-step description parse
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedDescription {
    Parsed(Value),
    ParseFailed,
}

impl ParsedDescription {
    #[inline]
    #[must_use]
    pub fn ok(self) -> Option<Value> {
        match self {
            ParsedDescription::Parsed(value) => Some(value),
            ParsedDescription::ParseFailed => None,
        }
    }
}

/// Parse a stored centroid description: strict JSON, then permissive literal
#[must_use]
pub fn parse_description(text: &str) -> ParsedDescription {
    if let Ok(value) = serde_json::from_str(text) {
        return ParsedDescription::Parsed(value);
    }
    match rewrite_literal(text).and_then(|rewritten| serde_json::from_str(&rewritten).ok()) {
        Some(value) => ParsedDescription::Parsed(value),
        None => ParsedDescription::ParseFailed,
    }
}

/// Rewrite a Python-style literal into JSON
///
/// Handles single-quoted strings, `True`/`False`/`None`, and tuples. Returns
/// `None` on structurally broken input (e.g. an unterminated string).
fn rewrite_literal(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                out.push('"');
                loop {
                    let c = chars.next()?;
                    match c {
                        '\\' => {
                            let escaped = chars.next()?;
                            if escaped == '\'' {
                                out.push('\'');
                            } else {
                                out.push('\\');
                                out.push(escaped);
                            }
                        }
                        '\'' => {
                            out.push('"');
                            break;
                        }
                        '"' => out.push_str("\\\""),
                        _ => out.push(c),
                    }
                }
            }
            '"' => {
                out.push('"');
                loop {
                    let c = chars.next()?;
                    out.push(c);
                    match c {
                        '\\' => out.push(chars.next()?),
                        '"' => break,
                        _ => {}
                    }
                }
            }
            '(' => out.push('['),
            ')' => out.push(']'),
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut word = String::new();
                word.push(c);
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_alphanumeric() || next == '_' {
                        word.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                match word.as_str() {
                    "True" => out.push_str("true"),
                    "False" => out.push_str("false"),
                    "None" => out.push_str("null"),
                    _ => out.push_str(&word),
                }
            }
            _ => out.push(c),
        }
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strict_json() {
        let parsed = parse_description(r#"{"avg_day_mins": 120.5}"#);
        assert_eq!(parsed, ParsedDescription::Parsed(json!({"avg_day_mins": 120.5})));
    }

    #[test]
    fn test_python_literal_fallback() {
        let parsed = parse_description("{'avg_day_mins': 120.5, 'heavy_user': True}");
        assert_eq!(
            parsed,
            ParsedDescription::Parsed(json!({"avg_day_mins": 120.5, "heavy_user": true}))
        );
    }

    #[test]
    fn test_fallback_matches_strict_equivalent() {
        let strict = parse_description(r#"{"tier": "gold"}"#).ok().unwrap();
        let permissive = parse_description("{'tier': 'gold'}").ok().unwrap();
        assert_eq!(strict, permissive);
    }

    #[test]
    fn test_tuple_becomes_array() {
        let parsed = parse_description("(1.5, 2.5, None)");
        assert_eq!(parsed, ParsedDescription::Parsed(json!([1.5, 2.5, null])));
    }

    #[test]
    fn test_escaped_quote_inside_literal() {
        let parsed = parse_description(r"{'note': 'customer\'s plan'}");
        assert_eq!(
            parsed,
            ParsedDescription::Parsed(json!({"note": "customer's plan"}))
        );
    }

    #[test]
    fn test_plain_list() {
        let parsed = parse_description("[264.5, 87.2, 10.1]");
        assert_eq!(parsed, ParsedDescription::Parsed(json!([264.5, 87.2, 10.1])));
    }

    #[test]
    fn test_garbage_fails_both_ways() {
        assert_eq!(parse_description("not a literal {"), ParsedDescription::ParseFailed);
        assert_eq!(parse_description("{'unterminated: 1"), ParsedDescription::ParseFailed);
    }
}
