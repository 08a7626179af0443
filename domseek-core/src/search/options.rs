//! Options for a containment search

use crate::dom::Node;

use super::kind::{Kind, Pattern};

/// Position constraint: the match must come after or before this
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    Text(String),
    Pattern(Pattern),
    Node(Node),
}

impl Anchor {
    pub fn kind(&self) -> Kind {
        match self {
            Anchor::Text(_) => Kind::Text,
            Anchor::Pattern(_) => Kind::Pattern,
            Anchor::Node(_) => Kind::Node,
        }
    }

    /// An empty text anchor constrains nothing
    fn is_blank(&self) -> bool {
        matches!(self, Anchor::Text(text) if text.is_empty())
    }
}

impl From<&str> for Anchor {
    fn from(text: &str) -> Self {
        Anchor::Text(text.to_string())
    }
}

impl From<String> for Anchor {
    fn from(text: String) -> Self {
        Anchor::Text(text)
    }
}

impl From<Pattern> for Anchor {
    fn from(pattern: Pattern) -> Self {
        Anchor::Pattern(pattern)
    }
}

impl From<Node> for Anchor {
    fn from(node: Node) -> Self {
        Anchor::Node(node)
    }
}

impl From<&Node> for Anchor {
    fn from(node: &Node) -> Self {
        Anchor::Node(node.clone())
    }
}

/// Options accepted by [`contains`](crate::search::contains)
///
/// - `after` / `before`: anchors the match must follow / precede
/// - `details`: report which list elements were found instead of a boolean
/// - `id`: narrows a selector-shaped search token to the node with this id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainsOptions {
    pub after: Option<Anchor>,
    pub before: Option<Anchor>,
    pub details: bool,
    pub id: Option<String>,
}

impl ContainsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn after(mut self, anchor: impl Into<Anchor>) -> Self {
        self.after = Some(anchor.into());
        self
    }

    pub fn before(mut self, anchor: impl Into<Anchor>) -> Self {
        self.before = Some(anchor.into());
        self
    }

    pub fn details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The `after` anchor, unless absent or blank
    pub fn after_anchor(&self) -> Option<&Anchor> {
        self.after.as_ref().filter(|anchor| !anchor.is_blank())
    }

    /// The `before` anchor, unless absent or blank
    pub fn before_anchor(&self) -> Option<&Anchor> {
        self.before.as_ref().filter(|anchor| !anchor.is_blank())
    }

    pub fn has_anchors(&self) -> bool {
        self.after_anchor().is_some() || self.before_anchor().is_some()
    }

    /// The `id` option, unless absent or empty
    pub(crate) fn narrowing_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = ContainsOptions::new()
            .after("avant")
            .before(Pattern::new("apr.s").unwrap())
            .details(true)
            .id("target");

        assert_eq!(options.after, Some(Anchor::Text("avant".to_string())));
        assert_eq!(options.before.as_ref().map(Anchor::kind), Some(Kind::Pattern));
        assert!(options.details);
        assert_eq!(options.narrowing_id(), Some("target"));
        assert!(options.has_anchors());
    }

    #[test]
    fn test_blank_anchors_are_ignored() {
        let options = ContainsOptions::new().after("").id("");

        assert!(options.after.is_some());
        assert_eq!(options.after_anchor(), None);
        assert!(!options.has_anchors());
        assert_eq!(options.narrowing_id(), None);
    }
}
