#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// No token rule matched the input at this position.
    UnrecognizedInput {
        /// The text that could not be tokenized.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// Description of what was expected and what was found.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The last source line that was read.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line of the opening parenthesis.
        line: usize,
    },
    /// Found extra tokens after the closing `end` of the program.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The literal as written, including a leading minus if present.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The name after `end` differs from the name after `program`.
    NameMismatch {
        /// The name given after `program`.
        head: String,
        /// The name given after `end`.
        tail: String,
        /// The source line of the `end` keyword.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedInput { text, line } => {
                write!(f, "Error on line {line}: Unrecognized input: '{text}'.")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after the end of the program: {token}"),

            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },

            Self::NameMismatch { head, tail, line } => write!(f,
                                                              "Error on line {line}: Program '{head}' is closed by 'end {tail}'."),
        }
    }
}

impl std::error::Error for ParseError {}
