use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::expect,
        },
    },
};

/// Parses a single statement.
///
/// A statement is one of:
/// - `output <expression>`, which always ends its output with a newline.
/// - `<identifier> <- <expression>`.
///
/// Statements need no separator: an expression ends at the first token that
/// cannot continue it.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// - `UnexpectedToken` if the statement starts with anything other than
///   `output` or an identifier, or an assignment lacks `<-`.
/// - Propagates any error from expression parsing.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token { kind: TokenKind::Output,
                      .. },
              line)) => {
            let value = parse_expression(tokens)?;
            Ok(Statement::Output { value,
                                   newline: true,
                                   line: *line })
        },
        Some((Token { kind: TokenKind::Id,
                      text, },
              line)) => {
            expect(tokens, TokenKind::Assign)?;
            let value = parse_expression(tokens)?;
            Ok(Statement::Assignment { name: text.clone(),
                                       value,
                                       line: *line })
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected a statement, found {tok}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
