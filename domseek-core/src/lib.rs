//! # domseek
//!
//! Containment search over HTML node trees.
//!
//! The entry point is [`contains`]: given a parsed [`Document`], a container
//! and a search value, it tells whether the container holds that value.
//! Values are text, regular-expression [`Pattern`]s, nodes, or lists mixing
//! them; [`ContainsOptions`] adds `after`/`before` anchors, detailed list
//! results and id narrowing.
//!
//! Layout
//!
//! - `dom`: the host tree (html5ever + rcdom) and the [`Node`] handle
//! - `selector`: the CSS selector subset used for every lookup
//! - `lookup`: selector lookups, container references, class specs
//! - `search`: classification, normalization, matching, the facade
//! - `find`: selector lookups filtered by text, id, class, dataset, placement
//!
//! Everything is read-only. Trees are `Rc`-based and stay on one thread.

pub mod dom;
pub mod find;
pub mod lookup;
pub mod search;
pub mod selector;

pub use dom::{Document, DomError, Node};
pub use find::{find, find_all, FindParams};
pub use lookup::{get, get_all, normalize_class, resolve_all, resolve_one, ClassSpec, ContainerRef};
pub use search::{
    classify, contains, Anchor, ContainsOptions, Details, Kind, Outcome, Pattern, PatternError,
    SearchError, Value,
};
pub use selector::{Selector, SelectorError};
