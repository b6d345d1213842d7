use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Export configuration module
/// Holds the fallback values used when a document leaves fields unset and
/// the fixed trailing fields written on every `Style:` line.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    /// Width used when the document sets no resolution
    #[serde(default = "default_player_width")]
    pub default_player_width: u64,

    /// Height used when the document sets no resolution
    #[serde(default = "default_player_height")]
    pub default_player_height: u64,

    /// Font used for styles without a font name
    #[serde(default = "default_font_name")]
    pub default_font_name: String,

    /// Original script credit used when the document leaves it empty
    #[serde(default = "default_origin_script")]
    pub default_origin_script: String,

    /// Constants written after the colors on every style line
    #[serde(default)]
    pub style_line: StyleLineConstants,
}

/// Fixed fields of a `Style:` line that are not taken from the style itself.
///
/// The `[V4+ Styles]` format lists Bold through Encoding after the four
/// colors; the exporter always writes these values, whatever the style says.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleLineConstants {
    pub bold: i32,
    pub italic: i32,
    pub underline: i32,
    pub strike_out: i32,
    pub scale_x: u32,
    pub scale_y: u32,
    pub spacing: u32,
    pub angle: u32,
    pub border_style: u32,
    pub outline: u32,
    pub shadow: u32,
    pub alignment: u32,
    pub margin_l: u32,
    pub margin_r: u32,
    pub margin_v: u32,
    pub encoding: u32,
}

impl Default for StyleLineConstants {
    fn default() -> Self {
        Self {
            bold: 1,
            italic: 0,
            underline: 0,
            strike_out: 0,
            scale_x: 100,
            scale_y: 100,
            spacing: 0,
            angle: 0,
            border_style: 1,
            outline: 2,
            shadow: 0,
            alignment: 2,
            margin_l: 20,
            margin_r: 20,
            margin_v: 2,
            encoding: 0,
        }
    }
}

fn default_player_width() -> u64 {
    1920
}

fn default_player_height() -> u64 {
    1080
}

fn default_font_name() -> String {
    "Arial".to_string()
}

fn default_origin_script() -> String {
    "unknown".to_string()
}

impl ExportConfig {
    /// Load a configuration override from JSON, missing keys take the defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ExportConfig =
            serde_json::from_str(json).context("Failed to parse export configuration")?;
        config.validate()?;
        Ok(config)
    }

    // @validates: Defaults are usable for fulfillment
    pub fn validate(&self) -> Result<()> {
        if self.default_player_width == 0 || self.default_player_height == 0 {
            return Err(anyhow!(
                "Default resolution must be non-zero, got {}x{}",
                self.default_player_width,
                self.default_player_height
            ));
        }

        if self.default_font_name.trim().is_empty() {
            return Err(anyhow!("Default font name cannot be empty"));
        }

        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_player_width: default_player_width(),
            default_player_height: default_player_height(),
            default_font_name: default_font_name(),
            default_origin_script: default_origin_script(),
            style_line: StyleLineConstants::default(),
        }
    }
}
