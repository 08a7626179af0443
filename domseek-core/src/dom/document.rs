//! Parsed HTML documents

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::RcDom;

use super::node::Node;

/// An HTML document parsed into an rcdom tree
///
/// Parsing follows the HTML5 tree-construction rules, so any input yields a
/// document: fragments are wrapped into `<html><head></head><body>…</body>`.
pub struct Document {
    dom: RcDom,
}

impl Document {
    pub fn parse(source: &str) -> Self {
        let dom = parse_document(RcDom::default(), Default::default()).one(source);
        Self { dom }
    }

    /// The document node itself (parent of `<html>`)
    pub fn node(&self) -> Node {
        Node::from_handle(self.dom.document.clone())
    }

    pub fn body(&self) -> Option<Node> {
        self.node()
            .descendants()
            .find(|node| node.tag_name() == Some("body"))
    }

    /// Default search root: `<body>`, or the document node when there is none
    pub fn root(&self) -> Node {
        self.body().unwrap_or_else(|| self.node())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_lands_in_body() {
        let doc = Document::parse("<p id=\"intro\">Bonjour</p>");
        let root = doc.root();

        assert_eq!(root.tag_name(), Some("body"));
        assert_eq!(root.inner_html().unwrap(), "<p id=\"intro\">Bonjour</p>");
        assert!(doc.node().is_document());
        assert!(doc.node().contains(&root));
    }

    #[test]
    fn test_text_is_escaped_like_inner_html() {
        let doc = Document::parse("<p>a &amp; b &lt; c</p>");
        let paragraph = doc.root().element_children()[0].clone();

        assert_eq!(paragraph.inner_html().unwrap(), "a &amp; b &lt; c");
        assert_eq!(paragraph.text_content(), "a & b < c");
    }
}
