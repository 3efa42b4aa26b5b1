/// The runtime value of every expression: a signed 64-bit integer.
///
/// `Number` is also the literal node stored in the AST, so a literal evaluates
/// to itself. Its `Display` form is the decimal text written by `output`.
///
/// # Example
/// ```
/// use intsub::interpreter::value::Number;
///
/// assert_eq!(Number(-42).to_string(), "-42");
/// assert_eq!(Number::default(), Number(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Number(pub i64);

impl Number {
    /// The value every declared variable starts with.
    pub const ZERO: Self = Self(0);

    /// Returns the wrapped integer.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
