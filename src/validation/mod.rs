/*!
 * Field-level validation for ASS documents.
 *
 * # Architecture
 *
 * - `timecodes`: `H:MM:SS:CC` timestamp shape checks for events
 * - `colors`: ABGR color and on/off flag checks for styles
 */

pub mod colors;
pub mod timecodes;

pub use colors::{is_valid_abgr, is_valid_flag, FLAG_OFF, FLAG_ON};
pub use timecodes::is_valid_timestamp;
