//! Parse errors.
//!
//! The `Display` text of each variant is what the chat user sees, so it is
//! kept stable.

use thiserror::Error;

/// Errors that abort a parse. No partial options are produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A string- or integer-valued flag had no value word after it.
    #[error("Missing value for option: {0}")]
    MissingOptionValue(char),
    /// An integer-valued flag's value word is not a base-10 integer.
    #[error("-{0} has to be followed by an integer.")]
    InvalidNumericValue(char),
}

impl ParseError {
    /// The flag letter the error refers to.
    pub fn letter(&self) -> char {
        match self {
            Self::MissingOptionValue(letter) | Self::InvalidNumericValue(letter) => *letter,
        }
    }
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_names_the_offending_flag() {
        assert_eq!(ParseError::MissingOptionValue('f').letter(), 'f');
        assert_eq!(ParseError::InvalidNumericValue('W').letter(), 'W');
    }
}
