//! Matching one normalized term against a container

use tracing::trace;

use crate::dom::Node;
use crate::lookup::resolve_all;

use super::error::SearchError;
use super::options::{Anchor, ContainsOptions};
use super::siblings::{is_after, is_before};
use super::term::{SearchTerm, TermValue};
use super::window::window;

/// Whether `container` holds `term`, honoring the anchors in `options`
///
/// Text and patterns are searched in the container's inner HTML, restricted
/// to the anchor window when anchors are set. Nodes must be the container or
/// one of its descendants, and with anchors some candidate must sit in the
/// right sibling position.
pub fn match_one(
    container: &Node,
    term: &SearchTerm,
    options: &ContainsOptions,
) -> Result<bool, SearchError> {
    let anchored = options.has_anchors();
    let found = match term.value() {
        TermValue::Text(text) => {
            let content = container.inner_html()?;
            content.contains(text.as_str())
                && (!anchored
                    || anchor_window(&content, options).contains(text.as_str()))
        }
        TermValue::Pattern(pattern) => {
            let content = container.inner_html()?;
            pattern.is_match(&content)
                && (!anchored || pattern.is_match(anchor_window(&content, options)))
        }
        TermValue::Node(node) => {
            container.contains(node)
                && (!anchored || first_candidate(container, term, options)?.is_some())
        }
        TermValue::Unresolved { .. } => false,
    };

    trace!(
        target: "domseek::search",
        container = %container.describe(),
        kind = %term.kind(),
        anchored,
        found,
        "matched one term"
    );
    Ok(found)
}

fn anchor_window<'a>(content: &'a str, options: &ContainsOptions) -> &'a str {
    window(content, options.after_anchor(), options.before_anchor())
}

/// First candidate for a node term that satisfies the node anchors
///
/// A multi-candidate term is resolved again against `container` and every
/// match is tried in document order; a single term has one candidate. The
/// winner comes back as a fresh single term.
pub fn first_candidate(
    container: &Node,
    term: &SearchTerm,
    options: &ContainsOptions,
) -> Result<Option<SearchTerm>, SearchError> {
    let candidates = match (term.original_text(), term.value()) {
        (Some(selector), _) => resolve_all(selector, container)?,
        (None, TermValue::Node(node)) => vec![node.clone()],
        (None, _) => Vec::new(),
    };

    let after = options.after_anchor();
    let before = options.before_anchor();
    for candidate in candidates {
        let placed = after.map_or(true, |anchor| follows(&candidate, anchor))
            && before.map_or(true, |anchor| precedes(&candidate, anchor));
        trace!(
            target: "domseek::search",
            candidate = %candidate.describe(),
            placed,
            "tried candidate"
        );
        if placed {
            return Ok(Some(SearchTerm::single(TermValue::Node(candidate))));
        }
    }
    Ok(None)
}

fn follows(candidate: &Node, anchor: &Anchor) -> bool {
    match anchor {
        Anchor::Node(anchor) => is_after(candidate, anchor),
        Anchor::Text(_) | Anchor::Pattern(_) => false,
    }
}

fn precedes(candidate: &Node, anchor: &Anchor) -> bool {
    match anchor {
        Anchor::Node(anchor) => is_before(candidate, anchor),
        Anchor::Text(_) | Anchor::Pattern(_) => false,
    }
}
