//! Selector parser
//!
//! Grammar (after whitespace normalization):
//!
//! ```text
//! <list>      = <complex> ("," <complex>)*
//! <complex>   = <compound> (<combinator> <compound>)*
//! <combinator>= " " | ">"
//! <compound>  = (<name> | "*")? <subclass>*        -- at least one part
//! <subclass>  = "#" <name> | "." <name> | "[" <name> ("=" <value>)? "]"
//! ```

use chumsky::{prelude::*, Stream};

use super::ast::{Combinator, ComplexSelector, Compound, SelectorList, SimpleSelector};
use super::error::SelectorError;
use super::tokens::{strip_insignificant_whitespace, tokenize_with_locations, Token, TokenLocation};

type ParserError = Simple<TokenLocation>;

fn token(expected: Token) -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    filter::<TokenLocation, _, ParserError>(move |(token, _): &TokenLocation| *token == expected)
        .ignored()
}

fn name() -> impl Parser<TokenLocation, String, Error = ParserError> + Clone {
    filter_map(|span, (token, _): TokenLocation| match token {
        Token::Ident(name) => Ok(name),
        other => Err(Simple::custom(
            span,
            format!("expected a name, found {:?}", other),
        )),
    })
}

fn attribute_value() -> impl Parser<TokenLocation, String, Error = ParserError> + Clone {
    filter_map(|span, (token, _): TokenLocation| match token {
        Token::Ident(value) | Token::Quoted(value) => Ok(value),
        other => Err(Simple::custom(
            span,
            format!("expected an attribute value, found {:?}", other),
        )),
    })
}

fn compound() -> impl Parser<TokenLocation, Compound, Error = ParserError> + Clone {
    let id = token(Token::Hash).ignore_then(name()).map(SimpleSelector::Id);
    let class = token(Token::Dot).ignore_then(name()).map(SimpleSelector::Class);
    let attribute = token(Token::OpenBracket)
        .ignore_then(name())
        .then(token(Token::Equals).ignore_then(attribute_value()).or_not())
        .then_ignore(token(Token::CloseBracket))
        .map(|(name, value)| SimpleSelector::Attribute { name, value });

    let type_selector = name()
        .map(SimpleSelector::Type)
        .or(token(Token::Star).to(SimpleSelector::Universal));

    type_selector
        .or_not()
        .then(id.or(class).or(attribute).repeated())
        .try_map(|(head, rest), span| {
            let mut parts: Vec<SimpleSelector> = head.into_iter().collect();
            parts.extend(rest);
            if parts.is_empty() {
                Err(Simple::custom(span, "expected a selector"))
            } else {
                Ok(Compound { parts })
            }
        })
}

fn selector_list() -> impl Parser<TokenLocation, SelectorList, Error = ParserError> {
    let combinator = token(Token::Whitespace)
        .to(Combinator::Descendant)
        .or(token(Token::Child).to(Combinator::Child));

    let complex = compound()
        .then(combinator.then(compound()).repeated())
        .map(|(first, rest)| ComplexSelector::new(first, rest));

    complex
        .separated_by(token(Token::Comma))
        .at_least(1)
        .then_ignore(end())
        .map(SelectorList)
}

/// Parse a selector string into a [`SelectorList`]
pub fn parse_selector(source: &str) -> Result<SelectorList, SelectorError> {
    let tokens = strip_insignificant_whitespace(tokenize_with_locations(source)?);
    if tokens.is_empty() {
        return Err(SelectorError::Empty);
    }

    let eoi = source.len()..source.len();
    let stream = Stream::from_iter(
        eoi,
        tokens
            .into_iter()
            .map(|(token, span)| ((token, span.clone()), span)),
    );

    selector_list().parse(stream).map_err(|errors| {
        let position = errors
            .first()
            .map(|error| error.span().start)
            .unwrap_or_default();
        SelectorError::Malformed {
            selector: source.to_string(),
            position,
        }
    })
}
