//! Host tree
//!
//! The content tree searched by this crate is an HTML document parsed with
//! html5ever into a `markup5ever_rcdom` tree. Two types wrap it:
//!
//! - [`Document`] owns the parsed tree and knows its default search root
//!   (the `<body>` element).
//! - [`Node`] is a cheap, clonable handle to one node of that tree. Equality is
//!   identity: two handles are equal when they point at the same node.
//!
//! The search core only reads the tree. Navigation (parent, siblings,
//! children), attribute access and inner-HTML serialization are everything it
//! needs.

pub mod document;
pub mod error;
pub mod node;

pub use document::Document;
pub use error::DomError;
pub use node::{Descendants, Node};
