use serde::{Deserialize, Serialize};

use crate::errors::{ColorField, FlagField, ValidationError};
use crate::validation::{is_valid_abgr, is_valid_flag};

/// A named bundle of font, color and decoration attributes referenced by events.
///
/// Colors are ABGR hex strings without the `&H` prefix; an empty color is
/// treated as unset. Decoration flags use `0` for off and `-1` for on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    pub name: String,
    /// Font family, falls back to the configured default font when empty
    #[serde(rename = "font")]
    pub font_name: String,
    pub font_size: i32,
    pub primary_color: String,
    pub second_color: String,
    pub outline_color: String,
    pub back_color: String,
    pub bold: i32,
    pub italic: i32,
    pub underline: i32,
    pub strike_out: i32,
    pub scale_x: i32,
    pub scale_y: i32,
}

impl Style {
    /// Creates a style with the given name and everything else unset
    pub fn new(name: &str) -> Self {
        Style {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn colors(&self) -> [(ColorField, &str); 4] {
        [
            (ColorField::Primary, self.primary_color.as_str()),
            (ColorField::Secondary, self.second_color.as_str()),
            (ColorField::Outline, self.outline_color.as_str()),
            (ColorField::Back, self.back_color.as_str()),
        ]
    }

    fn flags(&self) -> [(FlagField, i32); 4] {
        [
            (FlagField::Bold, self.bold),
            (FlagField::Italic, self.italic),
            (FlagField::Underline, self.underline),
            (FlagField::StrikeOut, self.strike_out),
        ]
    }

    /// Checks colors then flags, returning the first failure found
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, color) in self.colors() {
            if !color.is_empty() && !is_valid_abgr(color) {
                return Err(ValidationError::InvalidColor {
                    field,
                    value: color.to_string(),
                });
            }
        }

        for (field, value) in self.flags() {
            if !is_valid_flag(value) {
                return Err(ValidationError::InvalidFlag { field, value });
            }
        }

        Ok(())
    }
}
