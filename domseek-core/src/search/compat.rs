//! Anchor kind checks
//!
//! Text and patterns are positioned against text anchors (text or pattern);
//! nodes only against node anchors.

use super::error::SearchError;
use super::kind::Kind;
use super::options::ContainsOptions;

fn compatible(term: Kind, anchor: Kind) -> bool {
    matches!(
        (term, anchor),
        (Kind::Text | Kind::Pattern, Kind::Text | Kind::Pattern) | (Kind::Node, Kind::Node)
    )
}

/// Fails on the first anchor whose kind cannot position a `term` match
pub fn check_compatible(term: Kind, options: &ContainsOptions) -> Result<(), SearchError> {
    for anchor in [options.before_anchor(), options.after_anchor()]
        .into_iter()
        .flatten()
    {
        if !compatible(term, anchor.kind()) {
            return Err(SearchError::IncompatibleAnchorType {
                term,
                anchor: anchor.kind(),
            });
        }
    }
    Ok(())
}
