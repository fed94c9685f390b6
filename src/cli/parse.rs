// src/cli/parse.rs
use thiserror::Error;

use crate::models::{MAX_PASSWORD_COUNT, MAX_PASSWORD_LENGTH, MIN_PASSWORD_COUNT, MIN_PASSWORD_LENGTH};

pub const USAGE: &str = "Usage: password_generator [length] [count], where length is 8 to 32 characters (default 8) and count is the number of passwords to generate (default 10)";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("{}", USAGE)]
    Usage,

    #[error("Error: No conversion of the command line argument {0} was performed.")]
    NoConversion(String),

    #[error("Error: Not all of the command line argument {0} was converted to long.")]
    PartialConversion(String),

    #[error("Error: Converting command line argument {0} to long.")]
    Overflow(String),

    #[error("Error: Password length {0} is out of range, it must be between {min} and {max}.", min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH)]
    LengthOutOfRange(i64),

    #[error("Error: Password count {0} is out of range, it must be between {min} and {max}.", min = MIN_PASSWORD_COUNT, max = MAX_PASSWORD_COUNT)]
    CountOutOfRange(i64),
}

pub type Result<T> = std::result::Result<T, ArgumentError>;

/// Parse a whole token as a signed 64-bit integer.
///
/// Leading ASCII whitespace and one optional sign are accepted. The digit run is
/// checked for overflow before the remainder is checked for garbage, so
/// `99999999999999999999x` reports an overflow.
pub fn parse_long(arg: &str) -> Result<i64> {
    let trimmed = arg.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let bytes = trimmed.as_bytes();

    let sign_len = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digit_len = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digit_len == 0 {
        return Err(ArgumentError::NoConversion(arg.to_string()));
    }

    let (number, rest) = trimmed.split_at(sign_len + digit_len);
    // Only overflow is left once the prefix is all digits
    let value = number
        .parse::<i64>()
        .map_err(|_| ArgumentError::Overflow(arg.to_string()))?;

    if !rest.is_empty() {
        return Err(ArgumentError::PartialConversion(arg.to_string()));
    }

    Ok(value)
}

pub fn parse_length(arg: &str) -> Result<usize> {
    let value = parse_long(arg)?;
    if value < MIN_PASSWORD_LENGTH as i64 || value > MAX_PASSWORD_LENGTH as i64 {
        return Err(ArgumentError::LengthOutOfRange(value));
    }
    Ok(value as usize)
}

pub fn parse_count(arg: &str) -> Result<u64> {
    let value = parse_long(arg)?;
    // The upper bound is i64::MAX, which parse_long already enforces
    if value < MIN_PASSWORD_COUNT as i64 {
        return Err(ArgumentError::CountOutOfRange(value));
    }
    Ok(value as u64)
}
