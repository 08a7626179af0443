//! Search terms: raw values normalized against a container
//!
//! A text token may be two things at once: literal text and a selector. The
//! heuristic below decides which, conservatively. Any token containing a space
//! is text, so a caller can force the literal reading of `span.note` by
//! writing ` span.note`; the leading space is trimmed before matching.
//!
//! A token read as a selector is resolved to its first match. Unless that
//! node is pinned down by an id, other matches could be the intended one,
//! and the term keeps its source text so candidates can be enumerated again
//! once anchors are checked.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::dom::Node;
use crate::lookup::resolve_one;
use crate::selector::Selector;

use super::error::SearchError;
use super::kind::{Kind, Pattern, Value};
use super::options::ContainsOptions;

/// Tokens this shape may be selectors: a tag (up to ten letters), optionally
/// followed by an id, class, attribute or alternation tail; or a bare `#id`.
static SELECTOR_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(([a-z]{1,10})([#.\[,][^ ]+)?|#([^ #]+))$").unwrap()
});

/// What a term looks for once normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermValue {
    Text(String),
    Pattern(Pattern),
    Node(Node),
    /// A node term whose narrowing lookup found nothing
    Unresolved { selector: String },
}

/// A normalized search term
///
/// `original_text` is set exactly when the term is multi-candidate: the
/// selector it was resolved from, kept to enumerate every match later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    value: TermValue,
    original_text: Option<String>,
}

impl SearchTerm {
    pub fn single(value: TermValue) -> Self {
        Self {
            value,
            original_text: None,
        }
    }

    pub fn multi_candidate(first: Node, selector: impl Into<String>) -> Self {
        Self {
            value: TermValue::Node(first),
            original_text: Some(selector.into()),
        }
    }

    pub fn value(&self) -> &TermValue {
        &self.value
    }

    pub fn kind(&self) -> Kind {
        match self.value {
            TermValue::Text(_) => Kind::Text,
            TermValue::Pattern(_) => Kind::Pattern,
            TermValue::Node(_) | TermValue::Unresolved { .. } => Kind::Node,
        }
    }

    /// Empty text or a node that could not be resolved: nothing to look for
    pub fn is_blank(&self) -> bool {
        match &self.value {
            TermValue::Text(text) => text.is_empty(),
            TermValue::Unresolved { .. } => true,
            TermValue::Pattern(_) | TermValue::Node(_) => false,
        }
    }

    pub fn is_multi_candidate(&self) -> bool {
        self.original_text.is_some()
    }

    pub fn original_text(&self) -> Option<&str> {
        self.original_text.as_deref()
    }
}

/// Whether a token has the shape of a selector. No tree access.
pub fn looks_like_selector(token: &str) -> bool {
    !token.contains(' ') && SELECTOR_SHAPE.is_match(token)
}

/// Resolve `token` as a selector under `root`, if it looks like one
///
/// Tokens that look like selectors but do not parse are text.
pub fn maybe_selector(token: &str, root: &Node) -> Option<Node> {
    if !looks_like_selector(token) {
        return None;
    }
    match Selector::parse(token) {
        Ok(selector) => selector.first_match(root),
        Err(error) => {
            debug!(target: "domseek::search", token, %error, "selector-shaped token is text");
            None
        }
    }
}

/// Normalize one raw value against `root`
pub fn normalize(
    raw: &Value,
    root: &Node,
    options: &ContainsOptions,
) -> Result<SearchTerm, SearchError> {
    let term = match raw {
        Value::Text(token) => match maybe_selector(token, root) {
            Some(node) if node.id().is_some() => SearchTerm::single(TermValue::Node(node)),
            Some(node) => match options.narrowing_id() {
                Some(id) => {
                    let selector = format!("{}#{}", token, id);
                    let value = match resolve_one(&selector, root)? {
                        Some(narrowed) => TermValue::Node(narrowed),
                        None => TermValue::Unresolved { selector },
                    };
                    SearchTerm::single(value)
                }
                None => SearchTerm::multi_candidate(node, token.as_str()),
            },
            None => SearchTerm::single(TermValue::Text(token.trim().to_string())),
        },
        Value::Pattern(pattern) => SearchTerm::single(TermValue::Pattern(pattern.clone())),
        Value::Node(node) => SearchTerm::single(TermValue::Node(node.clone())),
        Value::List(_) | Value::Other(_) => {
            return Err(SearchError::UnsupportedSearchKind(raw.kind()))
        }
    };

    debug!(
        target: "domseek::search",
        raw = %raw,
        kind = %term.kind(),
        multi_candidate = term.is_multi_candidate(),
        "normalized search term"
    );
    Ok(term)
}
