/// Lexing and parsing errors.
///
/// Defines every error that can be raised before evaluation starts: input the
/// lexer cannot tokenize, token sequences the grammar rejects, literals that do
/// not fit the integer type and a program whose closing name differs from its
/// opening name.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a parsed program, such as use
/// of an undeclared variable, division by zero or arithmetic overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
