//! Parameterized lookup
//!
//! [`find_all`] starts from the matches of a selector inside a container and
//! keeps the nodes that satisfy every given parameter:
//!
//! - `text`: the node [`contains`](crate::search::contains) this value
//! - `id`: the node's id equals it
//! - `class`: the node carries every listed class
//! - `dataset`: each `data-*` attribute, named by its dataset key, equals the
//!   given value
//! - `after` / `before`: the node follows / precedes this sibling

use crate::dom::{Document, Node};
use crate::lookup::{get_all, normalize_class, ClassSpec, ContainerRef};
use crate::search::{contains, is_after, is_before, ContainsOptions, SearchError, Value};

/// Parameters for [`find`] and [`find_all`]; unset parameters always hold
#[derive(Debug, Clone, Default)]
pub struct FindParams {
    text: Option<Value>,
    within: ContainerRef,
    id: Option<String>,
    classes: Vec<String>,
    dataset: Vec<(String, String)>,
    after: Option<Node>,
    before: Option<Node>,
}

impl FindParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<Value>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Same as [`text`](Self::text)
    pub fn content(self, content: impl Into<Value>) -> Self {
        self.text(content)
    }

    pub fn within(mut self, container: impl Into<ContainerRef>) -> Self {
        self.within = container.into();
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Required classes: `"a b"`, `"a.b"` or a list
    pub fn class(mut self, spec: impl Into<ClassSpec>) -> Self {
        self.classes = normalize_class(spec);
        self
    }

    /// Require `data-*` attribute `key` (dataset form, `sortOrder`) to equal `value`
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dataset.push((key.into(), value.into()));
        self
    }

    pub fn after(mut self, sibling: &Node) -> Self {
        self.after = Some(sibling.clone());
        self
    }

    pub fn before(mut self, sibling: &Node) -> Self {
        self.before = Some(sibling.clone());
        self
    }

    fn accepts(&self, document: &Document, node: &Node) -> Result<bool, SearchError> {
        if let Some(id) = &self.id {
            if node.attr("id").as_deref() != Some(id.as_str()) {
                return Ok(false);
            }
        }
        if !self.classes.iter().all(|class| node.has_class(class)) {
            return Ok(false);
        }
        if !self
            .dataset
            .iter()
            .all(|(key, value)| node.dataset(key).as_deref() == Some(value.as_str()))
        {
            return Ok(false);
        }
        if let Some(sibling) = &self.after {
            if !is_after(node, sibling) {
                return Ok(false);
            }
        }
        if let Some(sibling) = &self.before {
            if !is_before(node, sibling) {
                return Ok(false);
            }
        }
        match &self.text {
            Some(text) => Ok(contains(document, node, text.clone(), &ContainsOptions::new())?.is_found()),
            None => Ok(true),
        }
    }
}

/// Every match of `selector` in the container that satisfies `params`
pub fn find_all(
    document: &Document,
    selector: &str,
    params: &FindParams,
) -> Result<Vec<Node>, SearchError> {
    let Some(container) = params.within.resolve(document)? else {
        return Err(SearchError::MissingContainer {
            container: params.within.describe(),
        });
    };

    let mut found = Vec::new();
    for candidate in get_all(document, selector, Some(&container))? {
        if params.accepts(document, &candidate)? {
            found.push(candidate);
        }
    }
    Ok(found)
}

/// First match of `selector` in the container that satisfies `params`
pub fn find(
    document: &Document,
    selector: &str,
    params: &FindParams,
) -> Result<Option<Node>, SearchError> {
    let Some(container) = params.within.resolve(document)? else {
        return Err(SearchError::MissingContainer {
            container: params.within.describe(),
        });
    };

    for candidate in get_all(document, selector, Some(&container))? {
        if params.accepts(document, &candidate)? {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}
