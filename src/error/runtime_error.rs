#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read or assign a variable that was never declared.
    UnboundIdentifier {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing to the output failed.
    Output {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundIdentifier { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
