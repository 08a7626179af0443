//! Search results

use serde_json::{json, Value as JsonValue};

use super::kind::Value;

/// Which elements of a searched list were found, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details {
    pub found: Vec<Value>,
    pub unfound: Vec<Value>,
}

impl Details {
    /// Every element was found
    pub fn all(&self) -> bool {
        self.unfound.is_empty()
    }

    /// At least one element was found
    pub fn one(&self) -> bool {
        !self.found.is_empty()
    }

    pub fn to_json(&self) -> JsonValue {
        json!({
            "all": self.all(),
            "one": self.one(),
            "found": self.found.iter().map(JsonValue::from).collect::<Vec<_>>(),
            "unfound": self.unfound.iter().map(JsonValue::from).collect::<Vec<_>>(),
        })
    }
}

/// Result of [`contains`](super::contains)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(bool),
    /// Returned for lists searched with `details` set
    Detailed(Details),
}

impl Outcome {
    /// The boolean answer: for details, whether everything was found
    pub fn is_found(&self) -> bool {
        match self {
            Outcome::Found(found) => *found,
            Outcome::Detailed(details) => details.all(),
        }
    }

    pub fn details(&self) -> Option<&Details> {
        match self {
            Outcome::Found(_) => None,
            Outcome::Detailed(details) => Some(details),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            Outcome::Found(found) => json!({ "found": found }),
            Outcome::Detailed(details) => details.to_json(),
        }
    }
}
