//! Selector engine
//!
//! A CSS selector subset, large enough for the lookups the search engine
//! performs:
//!
//! - type selectors and `*`
//! - `#id`, `.class`, `[attr]` and `[attr=value]` (quoted or bare values)
//! - compound sequences such as `li.piege#target`
//! - descendant (whitespace) and child (`>`) combinators
//! - comma separated alternatives
//!
//! Pseudo-classes, pseudo-elements and the other attribute operators are
//! rejected with a [`SelectorError`].
//!
//! Matching follows `querySelectorAll`: candidates are the strict descendants
//! of the search root, in document order, but the ancestor part of a complex
//! selector may match nodes above the root.

pub mod ast;
pub mod error;
pub mod parser;
pub mod tokens;

use std::fmt;
use std::str::FromStr;

use crate::dom::Node;

pub use ast::SelectorList;
pub use error::SelectorError;
pub use parser::parse_selector;

/// A parsed selector together with its source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    list: SelectorList,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let list = parse_selector(source)?;
        Ok(Self {
            source: source.to_string(),
            list,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, node: &Node) -> bool {
        self.list.matches(node)
    }

    /// First matching descendant of `root` in document order
    pub fn first_match(&self, root: &Node) -> Option<Node> {
        root.descendants().find(|node| self.matches(node))
    }

    /// Every matching descendant of `root` in document order
    pub fn all_matches(&self, root: &Node) -> Vec<Node> {
        root.descendants().filter(|node| self.matches(node)).collect()
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Selector::parse(source)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
