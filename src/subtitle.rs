/*!
 * The subtitle document model.
 *
 * A `Subtitle` owns its script metadata, target resolution, timer and the
 * ordered style and event collections. Collections hold `Option`s so that a
 * document deserialized with `null` slots can be represented and rejected
 * by validation instead of failing somewhere less obvious.
 */

use anyhow::{Context, Result};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::event::Event;
use crate::export_config::ExportConfig;
use crate::style::Style;

/// An ASS subtitle document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Subtitle {
    /// Script title
    pub title: String,

    /// Original script credit
    pub origin_script: String,

    /// Target rendering width in pixels, 0 means unset
    #[serde(rename = "playResX")]
    pub player_width: u64,

    /// Target rendering height in pixels, 0 means unset
    #[serde(rename = "playResY")]
    pub player_height: u64,

    /// Color depth
    pub play_depth: u64,

    /// Playback speed multiplier, must not be negative
    pub timer: f32,

    /// Styles in rendering order
    pub styles: Vec<Option<Style>>,

    /// Events in playback order
    pub events: Vec<Option<Event>>,
}

impl Subtitle {
    /// Create an empty document with a title
    pub fn new(title: &str) -> Self {
        Subtitle {
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Append a style
    pub fn push_style(&mut self, style: Style) {
        self.styles.push(Some(style));
    }

    /// Append an event
    pub fn push_event(&mut self, event: Event) {
        self.events.push(Some(event));
    }

    /// Parse a document from its JSON representation
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse subtitle document")
    }

    /// Serialize the document to JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize subtitle document")
    }

    /// Check the timer, then every style, then every event.
    ///
    /// Stops at the first problem found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timer < 0.0 {
            return Err(ValidationError::InvalidTimer(self.timer));
        }

        for (index, style) in self.styles.iter().enumerate() {
            let style = style.as_ref().ok_or(ValidationError::MissingStyle { index })?;
            style.validate()?;
        }

        for (index, event) in self.events.iter().enumerate() {
            let event = event.as_ref().ok_or(ValidationError::MissingEvent { index })?;
            event.validate()?;
        }

        trace!(
            "Validated subtitle '{}': {} styles, {} events",
            self.title,
            self.styles.len(),
            self.events.len()
        );
        Ok(())
    }

    /// Return a copy of the document with unset fields filled from `config`
    pub fn fulfilled(&self, config: &ExportConfig) -> Subtitle {
        let mut working = self.clone();
        working.fulfill(config);
        working
    }

    /// Fill unset fields in place.
    ///
    /// A single missing dimension is derived from the other one by whole
    /// multiples of the default resolution, so heights that are not a
    /// multiple of the default height truncate.
    pub fn fulfill(&mut self, config: &ExportConfig) {
        if self.origin_script.is_empty() {
            self.origin_script = config.default_origin_script.clone();
        }

        let (def_width, def_height) = (config.default_player_width, config.default_player_height);
        if self.player_width == 0 && self.player_height == 0 {
            self.player_width = def_width;
            self.player_height = def_height;
        } else if self.player_width == 0 {
            self.player_width = scale_dimension(def_width, self.player_height, def_height);
        } else if self.player_height == 0 {
            self.player_height = scale_dimension(def_height, self.player_width, def_width);
        }

        for style in self.styles.iter_mut().flatten() {
            if style.font_name.is_empty() {
                style.font_name = config.default_font_name.clone();
            }
        }

        debug!(
            "Fulfilled subtitle '{}': {}x{}, origin '{}'",
            self.title, self.player_width, self.player_height, self.origin_script
        );
    }
}

// @returns: `target_default` times the whole multiples of `other_default` in `other`,
// 0 when `other_default` is 0
fn scale_dimension(target_default: u64, other: u64, other_default: u64) -> u64 {
    target_default.wrapping_mul(other.checked_div(other_default).unwrap_or(0))
}
