//! Raw guess parsing
//!
//! Mirrors the browser's `parseInt(raw, 10)`: surrounding whitespace is
//! ignored, a sign is allowed, and only the leading run of digits counts.

use thiserror::Error;

use crate::consts::{MAX_GUESS, MIN_GUESS};

/// Why a raw guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidGuess {
    #[error("no guess entered")]
    Empty,
    #[error("guess is not a number")]
    NotANumber,
    #[error("guess must be between {} and {}", MIN_GUESS, MAX_GUESS)]
    OutOfRange,
}

/// Parse a raw guess into a value in `MIN_GUESS..=MAX_GUESS`
pub fn parse_guess(raw: &str) -> Result<u32, InvalidGuess> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidGuess::Empty);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return Err(InvalidGuess::NotANumber);
    }

    // Too many digits to fit is still a number, just far out of range
    let value: u32 = unsigned[..digits_len]
        .parse()
        .map_err(|_| InvalidGuess::OutOfRange)?;

    if negative || !(MIN_GUESS..=MAX_GUESS).contains(&value) {
        return Err(InvalidGuess::OutOfRange);
    }

    Ok(value)
}
