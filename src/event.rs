use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::validation::is_valid_timestamp;

// @module: Dialogue events

// @struct: Single timed dialogue line
// Rendered as `Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    // @field: Render layer, higher draws on top
    pub layer: i32,

    // @field: Start time, `H:MM:SS:CC`
    pub start: String,

    // @field: End time, `H:MM:SS:CC`
    pub end: String,

    // @field: Name of the style to apply, not checked against the document
    pub style: String,

    // @field: Speaker label
    pub name: String,

    // @field: Left margin in pixels
    #[serde(rename = "marginLeft")]
    pub margin_l: u32,

    // @field: Right margin in pixels
    #[serde(rename = "marginRight")]
    pub margin_r: u32,

    // @field: Vertical margin in pixels
    #[serde(rename = "marginV")]
    pub margin_v: u32,

    // @field: Transition effect, passed through as-is
    pub effect: String,

    // @field: Dialogue text, passed through as-is
    pub text: String,
}

impl Event {
    /// Creates a dialogue line on layer 0 with no margins, name or effect
    pub fn new(start: &str, end: &str, style: &str, text: &str) -> Self {
        Event {
            start: start.to_string(),
            end: end.to_string(),
            style: style.to_string(),
            text: text.to_string(),
            ..Default::default()
        }
    }

    // @validates: Start then end timestamp shape
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_timestamp(&self.start) {
            return Err(ValidationError::InvalidStartTime(self.start.clone()));
        }
        if !is_valid_timestamp(&self.end) {
            return Err(ValidationError::InvalidEndTime(self.end.clone()));
        }
        Ok(())
    }
}
