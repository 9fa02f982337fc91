//! Helpers for choosing puzzle seeds.

use std::num::ParseIntError;

use sha2::{Digest as _, Sha256};

/// Upper bound (exclusive) of seeds produced by [`random_seed`].
pub const RANDOM_SEED_LIMIT: u32 = 1_000_000;

/// Returns a random seed in `[0, 1_000_000)` for practice puzzles.
#[must_use]
pub fn random_seed() -> u32 {
    rand::random::<u32>() % RANDOM_SEED_LIMIT
}

/// Returns the seed of the daily puzzle: the decimal number `YYYYMMDD`.
///
/// ```
/// use tetonor_generator::seed::daily_seed;
///
/// assert_eq!(daily_seed(2026, 10, 18), 20_261_018);
/// ```
#[must_use]
pub fn daily_seed(year: u16, month: u8, day: u8) -> u32 {
    u32::from(year) * 10_000 + u32::from(month) * 100 + u32::from(day)
}

/// Derives a seed from a free-form phrase.
///
/// Uses the first four bytes of the phrase's SHA-256 digest, so equal phrases
/// give equal puzzles.
#[must_use]
pub fn seed_from_phrase(phrase: &str) -> u32 {
    let digest = Sha256::digest(phrase.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Error returned by [`parse_daily_seed`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseDateError {
    /// The text is not shaped like `YYYY-MM-DD`.
    #[display("expected a date formatted as YYYY-MM-DD")]
    Format,
    /// A component is not a number.
    #[display("invalid date component: {_0}")]
    Number(ParseIntError),
    /// Month or day is out of range.
    #[display("month or day out of range")]
    OutOfRange,
}

/// Parses an ISO date (`YYYY-MM-DD`) into its [`daily_seed`].
///
/// Only the component ranges are checked, not the calendar.
///
/// # Errors
///
/// Returns [`ParseDateError`] if `date` is malformed or out of range.
pub fn parse_daily_seed(date: &str) -> Result<u32, ParseDateError> {
    let mut parts = date.trim().split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(ParseDateError::Format);
    };
    let year = year.parse::<u16>().map_err(ParseDateError::Number)?;
    let month = month.parse::<u8>().map_err(ParseDateError::Number)?;
    let day = day.parse::<u8>().map_err(ParseDateError::Number)?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(ParseDateError::OutOfRange);
    }
    Ok(daily_seed(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_seed_in_range() {
        for _ in 0..100 {
            assert!(random_seed() < RANDOM_SEED_LIMIT);
        }
    }

    #[test]
    fn test_daily_seed_pads_month_and_day() {
        assert_eq!(daily_seed(2025, 1, 5), 20_250_105);
    }

    #[test]
    fn test_phrase_seed_is_stable() {
        assert_eq!(seed_from_phrase("tetonor"), seed_from_phrase("tetonor"));
        assert_ne!(seed_from_phrase("tetonor"), seed_from_phrase("Tetonor"));
        // SHA-256("") starts with e3 b0 c4 42.
        assert_eq!(seed_from_phrase(""), 0xe3b0_c442);
    }

    #[test]
    fn test_parse_daily_seed() {
        assert_eq!(parse_daily_seed("2026-10-18"), Ok(20_261_018));
        assert_eq!(parse_daily_seed("2026-10"), Err(ParseDateError::Format));
        assert_eq!(
            parse_daily_seed("2026-10-18-1"),
            Err(ParseDateError::Format)
        );
        assert_eq!(
            parse_daily_seed("2026-13-01"),
            Err(ParseDateError::OutOfRange)
        );
        assert!(matches!(
            parse_daily_seed("2026-xx-01"),
            Err(ParseDateError::Number(_))
        ));
    }
}
