use std::iter::Peekable;

use crate::{
    ast::{Block, Identifier, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{consume_if, expect, parse_identifier},
        },
    },
};

/// Parses a whole program.
///
/// Grammar: `program := head declarations subroutine tail`
///
/// The name after `end` must be exactly the name after `program`; the
/// comparison is case-sensitive. The subroutine name is not checked.
///
/// # Errors
/// - `NameMismatch` if the head and tail names differ.
/// - `UnexpectedTrailingTokens` if anything follows the tail.
/// - Propagates any error from the parts.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, line) = parse_head(tokens)?;
    let variables = parse_declarations(tokens)?;
    let body = parse_subroutine(tokens)?;
    let (tail, tail_line) = parse_tail(tokens)?;

    if name != tail {
        return Err(ParseError::NameMismatch { head: name,
                                              tail,
                                              line: tail_line });
    }

    if let Some((tok, line)) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: tok.to_string(),
                                                          line:  *line, });
    }

    Ok(Program { name,
                 variables,
                 body,
                 line })
}

/// Grammar: `head := "program" ID`
///
/// Returns the program name and the line of the `program` keyword.
fn parse_head<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, line) = expect(tokens, TokenKind::Program)?;
    let (name, _) = parse_identifier(tokens)?;
    Ok((name, *line))
}

/// Parses one or more `integer` declaration lines.
///
/// Grammar:
/// ```text
///     declarations := ("integer" variables)+
///     variables    := ID ("," ID)*
/// ```
///
/// All names are collected into one list in source order. Repeated names are
/// kept as they are.
fn parse_declarations<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Identifier>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut variables = Vec::new();

    expect(tokens, TokenKind::Integer)?;
    loop {
        loop {
            let (name, line) = parse_identifier(tokens)?;
            variables.push(Identifier { name, line });
            if !consume_if(tokens, TokenKind::Comma) {
                break;
            }
        }
        if !consume_if(tokens, TokenKind::Integer) {
            break;
        }
    }

    Ok(variables)
}

/// Parses the subroutine and its statements.
///
/// Grammar: `subroutine := "subroutine" ID "(" ")" statement+ "endsubroutine"`
fn parse_subroutine<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)>
{
    expect(tokens, TokenKind::Subroutine)?;
    parse_identifier(tokens)?;
    expect(tokens, TokenKind::ParenL)?;
    expect(tokens, TokenKind::ParenR)?;

    let mut body = Block::default();
    loop {
        if !body.is_empty() && consume_if(tokens, TokenKind::EndSubroutine) {
            break;
        }
        body.push(parse_statement(tokens)?);
    }

    Ok(body)
}

/// Grammar: `tail := "end" ID`
///
/// Returns the closing name and the line of the `end` keyword.
fn parse_tail<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, line) = expect(tokens, TokenKind::End)?;
    let (name, _) = parse_identifier(tokens)?;
    Ok((name, *line))
}
