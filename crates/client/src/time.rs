//! Time expression resolution for the search range.
//!
//! Responsibilities:
//! - Resolve `"now"`, absolute timestamps, and relative offsets
//!   (`-<n><m|h|d|w>`) to the wire timestamp format.
//!
//! Does NOT handle:
//! - Time zones: the wire format is a local naive timestamp; the zone is
//!   sent separately with the job request.
//!
//! Invariants:
//! - Absolute inputs are validated by parsing but passed through unchanged,
//!   never reformatted.
//! - Resolution happens once at startup for each of `from` and `to`.

use chrono::{Local, NaiveDateTime, TimeDelta};

use crate::error::{ClientError, Result};

/// Timestamp format accepted and produced by the search-job API.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Resolve a time expression against the current local time.
pub fn resolve(expr: &str) -> Result<String> {
    resolve_at(expr, Local::now().naive_local())
}

/// Resolve a time expression against an explicit `now`.
pub fn resolve_at(expr: &str, now: NaiveDateTime) -> Result<String> {
    if expr == "now" {
        return Ok(now.format(WIRE_FORMAT).to_string());
    }

    if NaiveDateTime::parse_from_str(expr, WIRE_FORMAT).is_ok() {
        return Ok(expr.to_string());
    }

    if let Some(delta) = parse_offset(expr) {
        let resolved = now
            .checked_sub_signed(delta)
            .ok_or_else(|| ClientError::InvalidTimeExpression(expr.to_string()))?;
        return Ok(resolved.format(WIRE_FORMAT).to_string());
    }

    Err(ClientError::InvalidTimeExpression(expr.to_string()))
}

/// Parse a relative offset of the form `-<integer><unit>`.
fn parse_offset(expr: &str) -> Option<TimeDelta> {
    let rest = expr.strip_prefix('-')?;
    let unit = rest.chars().last()?;
    let digits = &rest[..rest.len() - unit.len_utf8()];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let quantity: i64 = digits.parse().ok()?;

    match unit {
        'm' => TimeDelta::try_minutes(quantity),
        'h' => TimeDelta::try_hours(quantity),
        'd' => TimeDelta::try_days(quantity),
        'w' => TimeDelta::try_weeks(quantity),
        _ => None,
    }
}
