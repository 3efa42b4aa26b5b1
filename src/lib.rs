//! # intsub
//!
//! intsub is an interpreter for a tiny imperative language with integer
//! variables, written in Rust. A source file holds one named program with
//! `integer` declarations and one subroutine whose body assigns variables and
//! outputs integer expressions:
//!
//! ```text
//! program Demo
//! integer x, y
//! subroutine Demo()
//! x <- 10
//! y <- x / 3
//! output y
//! endsubroutine
//! end Demo
//! ```
//!
//! Source text is tokenized, parsed into an AST and evaluated by walking the
//! tree. The first error at any stage stops the run.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{evaluator::core::run_program, lexer::Token, parser::core::parse_tokens},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator, and is never modified
/// after construction.
///
/// # Responsibilities
/// - Defines the program, statement and expression types.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing
/// or evaluating code. Every error carries the source line it relates to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the runtime value
/// type.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers shared by the parser and the evaluator.
pub mod util;

/// Tokenizes a source text into `(Token, line)` pairs.
///
/// # Errors
/// Returns a [`ParseError::UnrecognizedInput`] for input no token rule
/// matches.
///
/// # Examples
/// ```
/// use intsub::{interpreter::lexer::TokenKind, tokenize};
///
/// let tokens = tokenize("# comment\nx <- 3").unwrap();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].0.kind, TokenKind::Assign);
/// assert_eq!(tokens[1].1, 2);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    interpreter::lexer::tokenize(source)
}

/// Tokenizes and parses a source text into a [`Program`].
///
/// # Errors
/// Returns the first lexical or syntax error.
///
/// # Examples
/// ```
/// use intsub::parse;
///
/// let program = parse("program A integer x subroutine A() output x endsubroutine end A");
/// assert!(program.is_ok());
///
/// // The closing name must repeat the program name.
/// let program = parse("program A integer x subroutine A() output x endsubroutine end B");
/// assert!(program.is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    parse_tokens(&tokens)
}

/// Runs a source text, writing the program's output to `output`.
///
/// Output written before a failing statement stays written.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. The boxed error is
/// either a [`ParseError`] or a
/// [`RuntimeError`](crate::error::RuntimeError).
///
/// # Examples
/// ```
/// use intsub::run;
///
/// let mut out = Vec::new();
/// run("program P integer x subroutine P() output 2 + 3 * 4 endsubroutine end P",
///     &mut out).unwrap();
/// assert_eq!(out, b"14\n");
///
/// // `y` is not declared.
/// let res = run("program P integer x subroutine P() y <- 1 endsubroutine end P",
///               &mut Vec::new());
/// assert!(res.is_err());
/// ```
pub fn run<W: Write>(source: &str, output: W) -> Result<(), Box<dyn std::error::Error>> {
    let program = parse(source)?;
    run_program(&program, output)?;
    Ok(())
}

/// Runs a source text, writing the program's output to standard output.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
pub fn get_result(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    run(source, std::io::stdout().lock())
}
