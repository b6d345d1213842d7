/*!
 * Timecode validation for dialogue events.
 *
 * ASS timestamps are written as `H:MM:SS:CC`: a single hour digit, two-digit
 * minutes and seconds, and two-digit centiseconds. Only the shape is
 * checked here; ordering between start and end is left to the caller.
 */

use once_cell::sync::Lazy;
use regex::Regex;

// @const: ASS timestamp regex, whole string must match
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]:[0-5][0-9]:[0-5][0-9]:[0-9][0-9]$").unwrap()
});

/// Check that a timestamp has the `H:MM:SS:CC` shape with minutes and
/// seconds in `00..=59`
pub fn is_valid_timestamp(timestamp: &str) -> bool {
    TIMESTAMP_REGEX.is_match(timestamp)
}
