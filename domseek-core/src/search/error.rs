//! Search errors

use crate::dom::DomError;
use crate::selector::SelectorError;

use super::kind::Kind;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("container '{container}' not found")]
    MissingContainer { container: String },

    #[error("incompatible types in contains: '{term}' and '{anchor}'")]
    IncompatibleAnchorType { term: Kind, anchor: Kind },

    #[error("contains only searches text, patterns, nodes or lists of them (not '{0}')")]
    UnsupportedSearchKind(Kind),

    #[error(transparent)]
    InvalidSelector(#[from] SelectorError),

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Failure to build a [`Pattern`](super::Pattern)
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("unsupported pattern flag '{0}'")]
    UnknownFlag(char),

    #[error(transparent)]
    Regex(#[from] regex::Error),
}
