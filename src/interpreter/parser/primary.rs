use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_expression},
    },
    util::num::parse_integer_literal,
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - integer literals
/// - negative integer literals (`-5`)
/// - variable references
/// - parenthesized expressions
///
/// A minus sign is only part of a primary when a literal follows it
/// directly. There is no general negation, so `-x`, `-(1)` and `- -1` are
/// rejected.
///
/// Grammar:
/// ```text
///     primary := NUM
///              | "-" NUM
///              | ID
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token { kind: TokenKind::Num,
                      text, },
              line)) => Ok(Expr::Number { value: parse_integer_literal(text, *line)?,
                                          line:  *line, }),
        Some((Token { kind: TokenKind::Minus,
                      .. },
              line)) => parse_negative_literal(tokens, *line),
        Some((Token { kind: TokenKind::Id,
                      text, },
              line)) => Ok(Expr::Variable { name: text.clone(),
                                            line: *line, }),
        Some((Token { kind: TokenKind::ParenL,
                      .. },
              line)) => parse_grouping(tokens, *line),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected an expression, found {tok}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses the literal after a leading `-`.
fn parse_negative_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token { kind: TokenKind::Num,
                      text, },
              _)) => Ok(Expr::Number { value: parse_integer_literal(&format!("-{text}"), line)?,
                                       line }),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token:
                                                                   format!("expected a number after '-', found {tok}"),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses `( expression )` and returns the inner expression unchanged.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token { kind: TokenKind::ParenR,
                      .. },
              _)) => Ok(expr),
        Some(_) => Err(ParseError::ExpectedClosingParen { line }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
