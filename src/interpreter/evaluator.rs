/// Binary operator evaluation logic.
///
/// Implements checked integer addition, subtraction, multiplication and floor
/// division.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, expression evaluation and the entry point
/// that runs a whole program.
pub mod core;

/// Statement evaluation.
///
/// Executes assignments and output statements.
pub mod statement;
