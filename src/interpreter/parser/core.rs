use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_additive, program::parse_program},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and descends through multiplication to
/// primary expressions.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens)
}

/// Parses a complete token sequence into a [`Program`].
///
/// The whole sequence must form exactly one program; tokens left over after
/// `end NAME` are rejected. When the tokens run out early, the reported line
/// is the line of the last token.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; no recovery is attempted.
///
/// # Example
/// ```
/// use intsub::{interpreter::parser::core::parse_tokens, tokenize};
///
/// let tokens = tokenize("program P integer x subroutine P() output x endsubroutine end P").unwrap();
/// let program = parse_tokens(&tokens).unwrap();
///
/// assert_eq!(program.name, "P");
/// assert_eq!(program.body.len(), 1);
/// ```
pub fn parse_tokens(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();

    parse_program(&mut iter).map_err(|e| match e {
                                ParseError::UnexpectedEndOfInput { .. } => {
                                    ParseError::UnexpectedEndOfInput { line: last_line }
                                },
                                other => other,
                            })
}
