//! Node handles over the rcdom tree

use std::fmt;
use std::rc::{Rc, Weak};

use html5ever::serialize::{serialize, SerializeOpts, TraversalScope};
use markup5ever_rcdom::{Handle, NodeData, SerializableHandle};

use super::error::DomError;

/// Handle to one node of a parsed document
///
/// Cloning a `Node` clones the handle, not the subtree. Two handles compare
/// equal only when they refer to the very same node, which is what the
/// sibling walks and containment checks rely on.
#[derive(Clone)]
pub struct Node(Handle);

impl Node {
    pub fn from_handle(handle: Handle) -> Self {
        Self(handle)
    }

    pub fn handle(&self) -> &Handle {
        &self.0
    }

    pub fn is_element(&self) -> bool {
        matches!(self.0.data, NodeData::Element { .. })
    }

    pub fn is_document(&self) -> bool {
        matches!(self.0.data, NodeData::Document)
    }

    /// Local tag name for elements (`"div"`, `"li"`), `None` for other nodes
    pub fn tag_name(&self) -> Option<&str> {
        match &self.0.data {
            NodeData::Element { name, .. } => Some(&*name.local),
            _ => None,
        }
    }

    /// Attribute value by name, compared ASCII case-insensitively
    pub fn attr(&self, name: &str) -> Option<String> {
        match &self.0.data {
            NodeData::Element { attrs, .. } => attrs
                .borrow()
                .iter()
                .find(|attr| (*attr.name.local).eq_ignore_ascii_case(name))
                .map(|attr| attr.value.to_string()),
            _ => None,
        }
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// The stable identifier, when the node carries a non-empty `id`
    pub fn id(&self) -> Option<String> {
        self.attr("id").filter(|id| !id.is_empty())
    }

    pub fn classes(&self) -> Vec<String> {
        self.attr("class")
            .map(|value| value.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|value| value.split_whitespace().any(|c| c == class))
    }

    /// Reads a `data-*` attribute through its dataset key
    ///
    /// Keys follow the DOM dataset convention: `index` reads `data-index`,
    /// `sortOrder` reads `data-sort-order`.
    pub fn dataset(&self, key: &str) -> Option<String> {
        let mut name = String::from("data-");
        for ch in key.chars() {
            if ch.is_ascii_uppercase() {
                name.push('-');
                name.push(ch.to_ascii_lowercase());
            } else {
                name.push(ch);
            }
        }
        self.attr(&name)
    }

    pub fn parent(&self) -> Option<Node> {
        let weak = self.0.parent.take();
        let parent = weak.as_ref().and_then(Weak::upgrade);
        self.0.parent.set(weak);
        parent.map(Node)
    }

    pub fn children(&self) -> Vec<Node> {
        self.0.children.borrow().iter().cloned().map(Node).collect()
    }

    pub fn element_children(&self) -> Vec<Node> {
        self.children()
            .into_iter()
            .filter(Node::is_element)
            .collect()
    }

    pub fn next_sibling(&self) -> Option<Node> {
        self.following_siblings().into_iter().next()
    }

    pub fn previous_sibling(&self) -> Option<Node> {
        self.preceding_siblings().into_iter().next()
    }

    /// Siblings after this node, nearest first. Text nodes are included.
    pub fn following_siblings(&self) -> Vec<Node> {
        match self.position_in_parent() {
            Some((parent, index)) => parent.0.children.borrow()[index + 1..]
                .iter()
                .cloned()
                .map(Node)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Siblings before this node, nearest first. Text nodes are included.
    pub fn preceding_siblings(&self) -> Vec<Node> {
        match self.position_in_parent() {
            Some((parent, index)) => parent.0.children.borrow()[..index]
                .iter()
                .rev()
                .cloned()
                .map(Node)
                .collect(),
            None => Vec::new(),
        }
    }

    fn position_in_parent(&self) -> Option<(Node, usize)> {
        let parent = self.parent()?;
        let index = parent
            .0
            .children
            .borrow()
            .iter()
            .position(|child| Rc::ptr_eq(child, &self.0))?;
        Some((parent, index))
    }

    /// Descendant-or-self containment
    pub fn contains(&self, other: &Node) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node == *self {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// Strict descendants in document (pre-)order
    pub fn descendants(&self) -> Descendants {
        Descendants {
            stack: self.0.children.borrow().iter().rev().cloned().collect(),
        }
    }

    /// Markup of the node's children, the string substring searches run on
    pub fn inner_html(&self) -> Result<String, DomError> {
        self.serialize_scope(TraversalScope::ChildrenOnly(None))
    }

    pub fn outer_html(&self) -> Result<String, DomError> {
        if self.is_document() {
            // rcdom refuses to serialize the document node itself
            return self.inner_html();
        }
        self.serialize_scope(TraversalScope::IncludeNode)
    }

    fn serialize_scope(&self, traversal_scope: TraversalScope) -> Result<String, DomError> {
        let mut output = Vec::new();
        let opts = SerializeOpts {
            traversal_scope,
            ..Default::default()
        };
        serialize(&mut output, &SerializableHandle::from(self.0.clone()), opts)?;
        Ok(String::from_utf8(output)?)
    }

    /// Concatenated text of every descendant text node
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        if let NodeData::Text { contents } = &self.0.data {
            text.push_str(&contents.borrow());
        }
        for node in self.descendants() {
            if let NodeData::Text { contents } = &node.0.data {
                text.push_str(&contents.borrow());
            }
        }
        text
    }

    /// Short selector-like label used in logs and reports: `li#id.class`
    pub fn describe(&self) -> String {
        match &self.0.data {
            NodeData::Element { name, .. } => {
                let mut label = name.local.to_string();
                if let Some(id) = self.id() {
                    label.push('#');
                    label.push_str(&id);
                }
                for class in self.classes() {
                    label.push('.');
                    label.push_str(&class);
                }
                label
            }
            NodeData::Document => "#document".to_string(),
            NodeData::Text { .. } => "#text".to_string(),
            NodeData::Comment { .. } => "#comment".to_string(),
            NodeData::Doctype { .. } => "#doctype".to_string(),
            NodeData::ProcessingInstruction { .. } => "#processing-instruction".to_string(),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node(<{}>)", self.describe())
    }
}

/// Pre-order walk over the strict descendants of a node
pub struct Descendants {
    stack: Vec<Handle>,
}

impl Iterator for Descendants {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        let handle = self.stack.pop()?;
        self.stack
            .extend(handle.children.borrow().iter().rev().cloned());
        Some(Node(handle))
    }
}
