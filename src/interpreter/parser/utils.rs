use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Consumes the next token, which must be of the given kind.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `kind`: The required token kind.
///
/// # Returns
/// The consumed `(Token, line)` pair.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token has a different kind,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind)
                                                    -> ParseResult<&'a (Token, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some(pair) if pair.0.kind == kind => Ok(pair),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected {kind}, found {tok}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a plain identifier and returns its name and line.
///
/// The next token must be [`TokenKind::Id`]. Keywords are never accepted
/// here, whatever their case.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (tok, line) = expect(tokens, TokenKind::Id)?;
    Ok((tok.text.clone(), *line))
}

/// Consumes the next token if it has the given kind.
///
/// # Returns
/// `true` if a token was consumed.
pub(in crate::interpreter::parser) fn consume_if<'a, I>(tokens: &mut Peekable<I>,
                                                        kind: TokenKind)
                                                        -> bool
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next_if(|(tok, _)| tok.kind == kind).is_some()
}
