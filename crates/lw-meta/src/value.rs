//! Metadata values.

use serde_json::Value;

/// Value of one metadata field.
#[derive(Clone, Debug, PartialEq)]
pub enum MetaValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
}

impl MetaValue {
    /// Whether the value is an empty string or an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Str(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Int(_) | Self::Float(_) | Self::Bool(_) => false,
        }
    }

    /// String-like view: the string itself, or `None` for other variants.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Number as integer when it has no fractional part.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    pub fn number(n: f64) -> Self {
        if n.fract() == 0.0 && n.abs() < 1e15 {
            Self::Int(n as i64)
        } else {
            Self::Float(n)
        }
    }

    /// Text used when the value is shown in a document body.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Int(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(true) => "Yes".to_owned(),
            Self::Bool(false) => "No".to_owned(),
            Self::List(items) => items.join(", "),
        }
    }

    /// Append the `key: value` right-hand side.
    ///
    /// Strings are double-quoted with JSON escapes, which is also valid YAML.
    /// Lists are bracketed lists of quoted strings.
    pub(crate) fn write_to(&self, out: &mut String) {
        match self {
            Self::Str(s) => out.push_str(&quote(s)),
            Self::Int(n) => out.push_str(&n.to_string()),
            Self::Float(f) if f.is_finite() => out.push_str(&f.to_string()),
            Self::Float(_) => out.push_str("null"),
            Self::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Self::List(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&quote(item));
                }
                out.push(']');
            }
        }
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for MetaValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for MetaValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

fn quote(s: &str) -> String {
    Value::String(s.to_owned()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(value: &MetaValue) -> String {
        let mut out = String::new();
        value.write_to(&mut out);
        out
    }

    #[test]
    fn test_write_scalars() {
        assert_eq!(written(&MetaValue::from("Evocation")), r#""Evocation""#);
        assert_eq!(written(&MetaValue::Int(0)), "0");
        assert_eq!(written(&MetaValue::Float(0.5)), "0.5");
        assert_eq!(written(&MetaValue::Bool(true)), "true");
    }

    #[test]
    fn test_write_escapes_quotes() {
        assert_eq!(
            written(&MetaValue::from(r#"a "quoted" \ path"#)),
            r#""a \"quoted\" \\ path""#
        );
    }

    #[test]
    fn test_write_list() {
        let list = MetaValue::List(vec!["V".to_owned(), "S".to_owned()]);
        assert_eq!(written(&list), r#"["V", "S"]"#);
        assert_eq!(written(&MetaValue::List(Vec::new())), "[]");
    }

    #[test]
    fn test_number_prefers_int() {
        assert_eq!(MetaValue::number(15.0), MetaValue::Int(15));
        assert_eq!(MetaValue::number(1.5), MetaValue::Float(1.5));
    }

    #[test]
    fn test_is_empty() {
        assert!(MetaValue::from("  ").is_empty());
        assert!(MetaValue::List(Vec::new()).is_empty());
        assert!(!MetaValue::Int(0).is_empty());
        assert!(!MetaValue::Bool(false).is_empty());
    }
}
