//! Parsed selectors and how they match nodes
//!
//! Matching runs right to left, the way browsers do it: the last compound of
//! a complex selector must match the candidate, then combinators climb the
//! ancestor chain. Ancestors above the search root take part in matching,
//! only the candidates themselves are confined to the root's subtree.

use crate::dom::Node;

/// One simple selector inside a compound
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Universal,
    Type(String),
    Id(String),
    Class(String),
    Attribute { name: String, value: Option<String> },
}

impl SimpleSelector {
    fn matches(&self, node: &Node) -> bool {
        match self {
            SimpleSelector::Universal => true,
            SimpleSelector::Type(name) => node
                .tag_name()
                .is_some_and(|tag| tag.eq_ignore_ascii_case(name)),
            SimpleSelector::Id(id) => node.attr("id").as_deref() == Some(id.as_str()),
            SimpleSelector::Class(class) => node.has_class(class),
            SimpleSelector::Attribute { name, value: None } => node.has_attr(name),
            SimpleSelector::Attribute {
                name,
                value: Some(value),
            } => node.attr(name).as_deref() == Some(value.as_str()),
        }
    }
}

/// A run of simple selectors with no combinator between them: `li.piege#x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    pub parts: Vec<SimpleSelector>,
}

impl Compound {
    pub fn matches(&self, node: &Node) -> bool {
        node.is_element() && self.parts.iter().all(|part| part.matches(node))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
}

/// Compounds joined by combinators: `ul#list > li.item span`
///
/// `combinators[i]` sits between `compounds[i]` and `compounds[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexSelector {
    pub compounds: Vec<Compound>,
    pub combinators: Vec<Combinator>,
}

impl ComplexSelector {
    pub fn new(first: Compound, rest: Vec<(Combinator, Compound)>) -> Self {
        let mut compounds = vec![first];
        let mut combinators = Vec::with_capacity(rest.len());
        for (combinator, compound) in rest {
            combinators.push(combinator);
            compounds.push(compound);
        }
        Self {
            compounds,
            combinators,
        }
    }

    pub fn matches(&self, node: &Node) -> bool {
        self.matches_at(node, self.compounds.len() - 1)
    }

    fn matches_at(&self, node: &Node, index: usize) -> bool {
        if !self.compounds[index].matches(node) {
            return false;
        }
        if index == 0 {
            return true;
        }
        match self.combinators[index - 1] {
            Combinator::Child => node
                .parent()
                .is_some_and(|parent| self.matches_at(&parent, index - 1)),
            Combinator::Descendant => {
                let mut ancestor = node.parent();
                while let Some(candidate) = ancestor {
                    if self.matches_at(&candidate, index - 1) {
                        return true;
                    }
                    ancestor = candidate.parent();
                }
                false
            }
        }
    }
}

/// Comma-separated alternatives; a node matches when any alternative does
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList(pub Vec<ComplexSelector>);

impl SelectorList {
    pub fn matches(&self, node: &Node) -> bool {
        self.0.iter().any(|selector| selector.matches(node))
    }
}
