//! Lookup utilities
//!
//! Thin helpers over the selector engine: resolving selectors against a root
//! node or a whole document, turning a container reference into a node, and
//! normalizing class specifications.

use crate::dom::{Document, Node};
use crate::selector::{Selector, SelectorError};

/// First descendant of `root` matching `selector`
pub fn resolve_one(selector: &str, root: &Node) -> Result<Option<Node>, SelectorError> {
    Ok(Selector::parse(selector)?.first_match(root))
}

/// Every descendant of `root` matching `selector`, in document order
pub fn resolve_all(selector: &str, root: &Node) -> Result<Vec<Node>, SelectorError> {
    Ok(Selector::parse(selector)?.all_matches(root))
}

/// Single lookup, over the whole document unless `within` is given
pub fn get(
    document: &Document,
    selector: &str,
    within: Option<&Node>,
) -> Result<Option<Node>, SelectorError> {
    match within {
        Some(root) => resolve_one(selector, root),
        None => resolve_one(selector, &document.node()),
    }
}

/// Multi lookup, under `<body>` unless `within` is given
pub fn get_all(
    document: &Document,
    selector: &str,
    within: Option<&Node>,
) -> Result<Vec<Node>, SelectorError> {
    match within {
        Some(root) => resolve_all(selector, root),
        None => resolve_all(selector, &document.root()),
    }
}

/// Where a search happens: the document root, a selector, or a node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContainerRef {
    #[default]
    Root,
    Selector(String),
    Node(Node),
}

impl ContainerRef {
    /// Resolve to a node; `Ok(None)` when a selector matches nothing
    ///
    /// A blank selector stands for the root.
    pub fn resolve(&self, document: &Document) -> Result<Option<Node>, SelectorError> {
        match self {
            ContainerRef::Root => Ok(Some(document.root())),
            ContainerRef::Selector(selector) if selector.trim().is_empty() => {
                Ok(Some(document.root()))
            }
            ContainerRef::Selector(selector) => get(document, selector, None),
            ContainerRef::Node(node) => Ok(Some(node.clone())),
        }
    }

    /// Label used in errors and logs
    pub fn describe(&self) -> String {
        match self {
            ContainerRef::Root => "<root>".to_string(),
            ContainerRef::Selector(selector) => selector.clone(),
            ContainerRef::Node(node) => node.describe(),
        }
    }
}

impl From<&str> for ContainerRef {
    fn from(selector: &str) -> Self {
        ContainerRef::Selector(selector.to_string())
    }
}

impl From<String> for ContainerRef {
    fn from(selector: String) -> Self {
        ContainerRef::Selector(selector)
    }
}

impl From<Node> for ContainerRef {
    fn from(node: Node) -> Self {
        ContainerRef::Node(node)
    }
}

impl From<&Node> for ContainerRef {
    fn from(node: &Node) -> Self {
        ContainerRef::Node(node.clone())
    }
}

impl<T: Into<ContainerRef>> From<Option<T>> for ContainerRef {
    fn from(container: Option<T>) -> Self {
        container.map_or(ContainerRef::Root, Into::into)
    }
}

/// A class requirement: `"css1 css2"`, `"css1.css2"`, or a ready list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassSpec {
    Joined(String),
    List(Vec<String>),
}

impl From<&str> for ClassSpec {
    fn from(spec: &str) -> Self {
        ClassSpec::Joined(spec.to_string())
    }
}

impl From<String> for ClassSpec {
    fn from(spec: String) -> Self {
        ClassSpec::Joined(spec)
    }
}

impl From<Vec<String>> for ClassSpec {
    fn from(classes: Vec<String>) -> Self {
        ClassSpec::List(classes)
    }
}

impl From<Vec<&str>> for ClassSpec {
    fn from(classes: Vec<&str>) -> Self {
        ClassSpec::List(classes.into_iter().map(str::to_string).collect())
    }
}

/// Split a class specification into class names
///
/// Strings are split on spaces and dots, empty pieces dropped. Lists are
/// returned as given.
pub fn normalize_class(spec: impl Into<ClassSpec>) -> Vec<String> {
    match spec.into() {
        ClassSpec::Joined(joined) => joined
            .split([' ', '.'])
            .map(str::trim)
            .filter(|class| !class.is_empty())
            .map(str::to_string)
            .collect(),
        ClassSpec::List(classes) => classes,
    }
}
