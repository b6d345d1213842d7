/*!
 * Style attribute checks.
 *
 * Colors are ABGR hex strings (`AABBGGRR`) rendered after an `&H` prefix;
 * decoration flags use the ASS convention of `0` for off and `-1` for on.
 */

/// Flag value meaning "off"
pub const FLAG_OFF: i32 = 0;

/// Flag value meaning "on"
pub const FLAG_ON: i32 = -1;

/// Check that a color is exactly 8 hexadecimal digits
pub fn is_valid_abgr(color: &str) -> bool {
    color.len() == 8 && color.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Check that a decoration flag is either [`FLAG_OFF`] or [`FLAG_ON`]
pub fn is_valid_flag(value: i32) -> bool {
    value == FLAG_OFF || value == FLAG_ON
}
