//! Caller-facing identifier handling.
//!
//! Identifiers arrive as strings (typically a URL path segment) and are
//! converted to the integer primary key before any store lookup.

use crate::error::{DomainError, DomainResult};

/// Integer primary key of a user record.
pub type UserId = i32;

/// Parse a caller-supplied identifier into a [`UserId`].
///
/// Uses leading-numeric-prefix semantics: leading whitespace and byte order
/// marks are skipped, one optional sign is accepted, then the longest run of
/// ASCII decimal digits is read. Anything after the digits is ignored, so
/// `"42abc"` yields `42`.
///
/// Returns [`DomainError::InvalidIdentifier`] when no digits lead the string
/// or the value does not fit a `UserId`.
pub fn parse_identifier(raw: &str) -> DomainResult<UserId> {
    let trimmed = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return Err(DomainError::invalid_identifier(raw));
    }

    let digits = &unsigned[..end];
    let parsed = if negative {
        format!("-{}", digits).parse::<UserId>()
    } else {
        digits.parse::<UserId>()
    };

    parsed.map_err(|_| DomainError::invalid_identifier(raw))
}
