//! Containment search
//!
//! [`contains`] answers one question: does a container hold a given thing,
//! possibly after and/or before an anchor? The thing searched can be
//!
//! - literal text, found in the container's inner HTML
//! - a [`Pattern`], matched against the same HTML
//! - a [`Node`], which must be the container or one of its descendants
//! - a list of the above, answered as a boolean or as [`Details`]
//!
//! Text that looks like a selector (`div.child`, `li#target`) is resolved
//! against the container and searched as a node. When several nodes match
//! and anchors are given, every match is tried before giving up.
//!
//! Text and pattern terms take text or pattern anchors, node terms take node
//! anchors; any other pairing is an [`SearchError::IncompatibleAnchorType`].

pub mod aggregate;
pub mod compat;
pub mod error;
pub mod kind;
pub mod matcher;
pub mod options;
pub mod outcome;
pub mod siblings;
pub mod term;
pub mod window;

use tracing::debug;

use crate::dom::{Document, Node};
use crate::lookup::ContainerRef;

pub use aggregate::match_list;
pub use compat::check_compatible;
pub use error::{PatternError, SearchError};
pub use kind::{classify, Kind, Pattern, Value};
pub use matcher::{first_candidate, match_one};
pub use options::{Anchor, ContainsOptions};
pub use outcome::{Details, Outcome};
pub use siblings::{is_after, is_before};
pub use term::{looks_like_selector, maybe_selector, normalize, SearchTerm, TermValue};
pub use window::window;

/// Search `container` for `searched`
///
/// The container defaults to the document's `<body>`; a selector is looked
/// up in the whole document. Single terms always answer with
/// [`Outcome::Found`]; lists answer with [`Outcome::Detailed`] when
/// `options.details` is set.
pub fn contains(
    document: &Document,
    container: impl Into<ContainerRef>,
    searched: impl Into<Value>,
    options: &ContainsOptions,
) -> Result<Outcome, SearchError> {
    let container = container.into();
    let searched = searched.into();

    let Some(node) = container.resolve(document)? else {
        return Err(SearchError::MissingContainer {
            container: container.describe(),
        });
    };
    debug!(
        target: "domseek::search",
        container = %node.describe(),
        searched = %searched,
        kind = %searched.kind(),
        "contains"
    );

    match &searched {
        Value::List(items) => match_list(&node, items, options),
        Value::Text(_) | Value::Pattern(_) | Value::Node(_) | Value::Other(_) => {
            search_one(&node, &searched, options).map(Outcome::Found)
        }
    }
}

/// A single term that normalizes to nothing answers `false` before any
/// anchor check. Inside a list the same term is matched like any other.
fn search_one(container: &Node, raw: &Value, options: &ContainsOptions) -> Result<bool, SearchError> {
    let term = normalize(raw, container, options)?;
    if term.is_blank() {
        debug!(target: "domseek::search", raw = %raw, "nothing to search");
        return Ok(false);
    }
    check_compatible(term.kind(), options)?;
    match_one(container, &term, options)
}
