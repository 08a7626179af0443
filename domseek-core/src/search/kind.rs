//! Search values and their kinds

use std::fmt;

use regex::{Regex, RegexBuilder};
use serde_json::{json, Value as JsonValue};

use crate::dom::Node;

use super::error::PatternError;

/// The closed set of shapes a search value can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Text,
    Pattern,
    Node,
    List,
    Other,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Text => "Text",
            Kind::Pattern => "Pattern",
            Kind::Node => "Node",
            Kind::List => "List",
            Kind::Other => "Other",
        };
        f.write_str(name)
    }
}

/// A compiled regular expression that remembers how it was written
///
/// Flags use the `/source/flags` letters: `i` (case-insensitive), `m`
/// (multi-line), `s` (dot matches newline). `g`, `u` and `y` are accepted and
/// have no effect on an existence test.
#[derive(Clone)]
pub struct Pattern {
    regex: Regex,
    source: String,
    flags: String,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, PatternError> {
        Self::with_flags(source, "")
    }

    pub fn with_flags(source: &str, flags: &str) -> Result<Self, PatternError> {
        let mut builder = RegexBuilder::new(source);
        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'g' | 'u' | 'y' => {}
                other => return Err(PatternError::UnknownFlag(other)),
            }
        }
        Ok(Self {
            regex: builder.build()?,
            source: source.to_string(),
            flags: flags.to_string(),
        })
    }

    /// Parse a `/source/flags` literal
    ///
    /// Returns `None` when `literal` is not written that way, so callers can
    /// fall back to treating it as text.
    pub fn from_literal(literal: &str) -> Option<Result<Self, PatternError>> {
        let body = literal.strip_prefix('/')?;
        let end = body.rfind('/')?;
        let (source, flags) = (&body[..end], &body[end + 1..]);
        if source.is_empty() || !flags.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(Self::with_flags(source, flags))
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({})", self)
    }
}

/// A raw search input, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Pattern(Pattern),
    Node(Node),
    List(Vec<Value>),
    /// Anything else, named by its type (`"Number"`, `"Object"`, ...)
    Other(String),
}

impl Value {
    pub fn kind(&self) -> Kind {
        classify(self)
    }
}

/// Classify a raw value. Total: every value has exactly one kind.
pub fn classify(value: &Value) -> Kind {
    match value {
        Value::Text(_) => Kind::Text,
        Value::Pattern(_) => Kind::Pattern,
        Value::Node(_) => Kind::Node,
        Value::List(_) => Kind::List,
        Value::Other(_) => Kind::Other,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{:?}", text),
            Value::Pattern(pattern) => write!(f, "{}", pattern),
            Value::Node(node) => f.write_str(&node.describe()),
            Value::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Other(name) => write!(f, "<{}>", name),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Pattern> for Value {
    fn from(pattern: Pattern) -> Self {
        Value::Pattern(pattern)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(node)
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        Value::Node(node.clone())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// Decode a value from JSON
///
/// Strings are text, arrays are lists, and `{"pattern": "..", "flags": ".."}`
/// objects are patterns. Everything else, including objects holding an
/// invalid pattern, is [`Value::Other`].
impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::String(text) => Value::Text(text),
            JsonValue::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => {
                let Some(source) = map.get("pattern").and_then(JsonValue::as_str) else {
                    return Value::Other("Object".to_string());
                };
                let flags = map.get("flags").and_then(JsonValue::as_str).unwrap_or("");
                match Pattern::with_flags(source, flags) {
                    Ok(pattern) => Value::Pattern(pattern),
                    Err(error) => {
                        tracing::warn!(
                            target: "domseek::search",
                            source,
                            flags,
                            %error,
                            "ignoring invalid pattern"
                        );
                        Value::Other("Object".to_string())
                    }
                }
            }
            JsonValue::Number(_) => Value::Other("Number".to_string()),
            JsonValue::Bool(_) => Value::Other("Boolean".to_string()),
            JsonValue::Null => Value::Other("Null".to_string()),
        }
    }
}

/// Encode a value as JSON, the inverse of the decoding above for text,
/// patterns and lists. Nodes are written as their short description.
impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Text(text) => JsonValue::String(text.clone()),
            Value::Pattern(pattern) => json!({
                "pattern": pattern.source(),
                "flags": pattern.flags(),
            }),
            Value::Node(node) => json!({ "node": node.describe() }),
            Value::List(items) => JsonValue::Array(items.iter().map(JsonValue::from).collect()),
            Value::Other(name) => json!({ "other": name }),
        }
    }
}
