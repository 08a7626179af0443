//! Token definitions for the selector subset
//!
//! Selectors are tokenized with logos, then passed through
//! [`strip_insignificant_whitespace`] so that every whitespace token left in
//! the stream is a descendant combinator. The parser never has to decide
//! whether a blank is padding or structure.

use logos::Logos;
use std::ops::Range;

use super::error::SelectorError;

/// All possible tokens in a selector
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[token("#")]
    Hash,
    #[token(".")]
    Dot,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("=")]
    Equals,
    #[token(",")]
    Comma,
    #[token(">")]
    Child,
    #[token("*")]
    Star,

    // Names: tags, ids, classes, attribute names and bare attribute values
    #[regex(r"([_a-zA-Z0-9\-]|[^\x00-\x7F])+", |lex| lex.slice().to_string())]
    Ident(String),

    #[regex(r#""[^"]*""#, unquote)]
    #[regex(r"'[^']*'", unquote)]
    Quoted(String),
}

pub type TokenLocation = (Token, Range<usize>);

fn unquote(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Tokenize a selector, keeping byte ranges for error reporting
pub fn tokenize_with_locations(source: &str) -> Result<Vec<TokenLocation>, SelectorError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(SelectorError::UnexpectedCharacter {
                    selector: source.to_string(),
                    position: lexer.span().start,
                })
            }
        }
    }

    Ok(tokens)
}

/// Drop whitespace that is not a descendant combinator
///
/// Whitespace is padding at either end of the selector, around `,` and `>`,
/// and anywhere inside `[...]`.
pub fn strip_insignificant_whitespace(tokens: Vec<TokenLocation>) -> Vec<TokenLocation> {
    let mut kept: Vec<TokenLocation> = Vec::with_capacity(tokens.len());
    let mut bracket_depth = 0usize;

    for (index, (token, span)) in tokens.iter().enumerate() {
        match token {
            Token::OpenBracket => bracket_depth += 1,
            Token::CloseBracket => bracket_depth = bracket_depth.saturating_sub(1),
            Token::Whitespace => {
                let previous = kept.last().map(|(token, _)| token);
                let next = tokens.get(index + 1).map(|(token, _)| token);
                let combinator = bracket_depth == 0
                    && previous.is_some_and(|t| !matches!(t, Token::Comma | Token::Child))
                    && next.is_some_and(|t| !matches!(t, Token::Comma | Token::Child));
                if !combinator {
                    continue;
                }
            }
            _ => {}
        }
        kept.push((token.clone(), span.clone()));
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        strip_insignificant_whitespace(tokenize_with_locations(source).unwrap())
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn test_compound_tokens() {
        assert_eq!(
            kinds("div#monDiv.classe"),
            vec![
                Token::Ident("div".to_string()),
                Token::Hash,
                Token::Ident("monDiv".to_string()),
                Token::Dot,
                Token::Ident("classe".to_string()),
            ]
        );
    }

    #[test]
    fn test_quoted_attribute_value() {
        assert_eq!(
            kinds("input[ type = \"text\" ]"),
            vec![
                Token::Ident("input".to_string()),
                Token::OpenBracket,
                Token::Ident("type".to_string()),
                Token::Equals,
                Token::Quoted("text".to_string()),
                Token::CloseBracket,
            ]
        );
    }

    #[test]
    fn test_whitespace_kept_only_as_combinator() {
        assert_eq!(
            kinds("  ul li , p > a "),
            vec![
                Token::Ident("ul".to_string()),
                Token::Whitespace,
                Token::Ident("li".to_string()),
                Token::Comma,
                Token::Ident("p".to_string()),
                Token::Child,
                Token::Ident("a".to_string()),
            ]
        );
    }

    #[test]
    fn test_accented_names() {
        assert_eq!(
            kinds(".élève"),
            vec![Token::Dot, Token::Ident("élève".to_string())]
        );
    }

    #[test]
    fn test_unexpected_character() {
        let error = tokenize_with_locations("div:hover").unwrap_err();
        assert_eq!(
            error,
            SelectorError::UnexpectedCharacter {
                selector: "div:hover".to_string(),
                position: 3,
            }
        );
    }
}
