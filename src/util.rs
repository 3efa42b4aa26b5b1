/// Numeric helpers.
///
/// This module provides checked conversions from literal text to numbers and
/// the floor division used by `/`. All functions report failure instead of
/// wrapping or panicking.
pub mod num;
