//! Field validation for student records.
//!
//! Valid identifiers:
//! - Start with `a` or `A`
//! - Followed by exactly 8 ASCII digits
//!
//! Valid scores:
//! - 1 to 3 ASCII digits, no sign
//! - Numeric value of at most 100

use crate::model::MAX_SCORE;

const ID_DIGITS: usize = 8;
const SCORE_MAX_LEN: usize = 3;

/// Validates a student identifier.
///
/// # Examples
/// ```
/// use scorebook::validation::validate_id;
///
/// assert!(validate_id("a12345678").is_ok());
/// assert!(validate_id("A00000000").is_ok());
///
/// assert!(validate_id("").is_err());
/// assert!(validate_id("b12345678").is_err());
/// assert!(validate_id("a1234567").is_err());
/// assert!(validate_id("a123456789").is_err());
/// ```
pub fn validate_id(input: &str) -> Result<(), IdValidationError> {
    let mut chars = input.chars();
    let prefix = chars.next().ok_or(IdValidationError::Empty)?;
    if prefix != 'a' && prefix != 'A' {
        return Err(IdValidationError::InvalidPrefix(prefix));
    }

    let mut digits = 0;
    for ch in chars {
        if !ch.is_ascii_digit() {
            return Err(IdValidationError::InvalidCharacter(ch));
        }
        digits += 1;
    }

    if digits != ID_DIGITS {
        return Err(IdValidationError::WrongDigitCount(digits));
    }

    Ok(())
}

/// Validates a score and returns its numeric value.
///
/// # Examples
/// ```
/// use scorebook::validation::validate_score;
///
/// assert_eq!(validate_score("0"), Ok(0));
/// assert_eq!(validate_score("100"), Ok(100));
///
/// assert!(validate_score("101").is_err());
/// assert!(validate_score("1000").is_err());
/// assert!(validate_score("-5").is_err());
/// ```
pub fn validate_score(input: &str) -> Result<u8, ScoreValidationError> {
    if input.is_empty() {
        return Err(ScoreValidationError::Empty);
    }

    if let Some(ch) = input.chars().find(|ch| !ch.is_ascii_digit()) {
        return Err(ScoreValidationError::InvalidCharacter(ch));
    }

    if input.len() > SCORE_MAX_LEN {
        return Err(ScoreValidationError::TooLong(input.len()));
    }

    let value = input
        .bytes()
        .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
    match u8::try_from(value) {
        Ok(score) if score <= MAX_SCORE => Ok(score),
        _ => Err(ScoreValidationError::OutOfRange(value)),
    }
}

/// Error type for identifier validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdValidationError {
    /// Identifier is empty
    Empty,
    /// Identifier does not start with `a` or `A`
    InvalidPrefix(char),
    /// A character after the prefix is not a digit
    InvalidCharacter(char),
    /// The digit run is not exactly eight long
    WrongDigitCount(usize),
}

impl std::fmt::Display for IdValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdValidationError::Empty => write!(f, "student ID cannot be empty"),
            IdValidationError::InvalidPrefix(ch) => {
                write!(f, "student ID must start with \"a\", found '{}'", ch)
            }
            IdValidationError::InvalidCharacter(ch) => {
                write!(f, "student ID contains non-digit character '{}'", ch)
            }
            IdValidationError::WrongDigitCount(n) => {
                write!(f, "student ID must have {} digits, found {}", ID_DIGITS, n)
            }
        }
    }
}

impl std::error::Error for IdValidationError {}

/// Error type for score validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreValidationError {
    /// Score is empty
    Empty,
    /// Score contains something other than a digit
    InvalidCharacter(char),
    /// Score has more than three digits
    TooLong(usize),
    /// Score is above the maximum
    OutOfRange(u16),
}

impl std::fmt::Display for ScoreValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreValidationError::Empty => write!(f, "score cannot be empty"),
            ScoreValidationError::InvalidCharacter(ch) => {
                write!(f, "score contains non-digit character '{}'", ch)
            }
            ScoreValidationError::TooLong(n) => {
                write!(f, "score must have at most {} digits, found {}", SCORE_MAX_LEN, n)
            }
            ScoreValidationError::OutOfRange(v) => {
                write!(f, "score must be between 0 and {}, found {}", MAX_SCORE, v)
            }
        }
    }
}

impl std::error::Error for ScoreValidationError {}
