/// Parses expressions at the two binary precedence levels.
///
/// `*` and `/` bind tighter than `+` and `-`; both levels are
/// left-associative.
pub mod binary;
/// Core parsing functions and types.
///
/// Defines the parse result type and the entry points that turn a token
/// sequence into a [`Program`](crate::ast::Program).
pub mod core;
/// Parses atomic expressions: literals, negative literals, variable
/// references and parenthesized expressions.
pub mod primary;
/// Parses the program skeleton: head, declarations, subroutine body and tail.
pub mod program;
/// Parses the two statement forms, `output` and assignment.
pub mod statement;
/// Shared helpers for consuming expected tokens.
pub mod utils;
