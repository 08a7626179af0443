//! Selector parse errors

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unexpected character at byte {position} in selector '{selector}'")]
    UnexpectedCharacter { selector: String, position: usize },

    #[error("malformed selector '{selector}' near byte {position}")]
    Malformed { selector: String, position: usize },
}
