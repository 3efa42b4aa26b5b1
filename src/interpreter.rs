/// The evaluator module executes a parsed program.
///
/// The evaluator walks the AST, binds declared variables, performs integer
/// arithmetic and writes the results of `output` statements. It is the last
/// stage of interpretation.
///
/// # Responsibilities
/// - Evaluates expressions to numbers and executes statements in order.
/// - Manages the variable context of one program run.
/// - Reports runtime errors such as unknown variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens for
/// numbers, identifiers, keywords and punctuation. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input text into tokens with kind, lexeme and line.
/// - Recognizes keywords regardless of case.
/// - Skips whitespace and line comments, and reports unrecognized input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser checks the token stream against the program grammar and
/// constructs a [`Program`](crate::ast::Program) node.
///
/// # Responsibilities
/// - Converts tokens into declarations, statements and expressions.
/// - Applies operator precedence and associativity.
/// - Validates that a program is closed by its own name.
pub mod parser;
/// The value module defines the runtime number type.
pub mod value;
