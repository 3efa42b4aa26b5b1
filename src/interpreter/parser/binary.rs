use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A binary expression tree combining primary nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_primary(tokens)?;
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = *line;
            tokens.next();
            let right = parse_primary(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token kind to its corresponding binary operator.
///
/// # Parameters
/// - `kind`: Token kind to convert.
///
/// # Returns
/// `Some(BinaryOperator)` for `+`, `-`, `*` and `/`, otherwise `None`.
///
/// # Example
/// ```
/// use intsub::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Divide), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(TokenKind::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Multiply => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        _ => None,
    }
}
