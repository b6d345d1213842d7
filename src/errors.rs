/*!
 * Error types for the assgen library.
 *
 * Validation failures and sink failures are kept apart so callers can tell
 * a malformed document (fix the model and retry) from an I/O problem.
 */

use std::fmt;

use thiserror::Error;

/// Color fields of a style, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    Primary,
    Secondary,
    Outline,
    Back,
}

impl fmt::Display for ColorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
            Self::Back => "back",
        };
        write!(f, "{}", name)
    }
}

/// On/off decoration flags of a style, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagField {
    Bold,
    Italic,
    Underline,
    StrikeOut,
}

impl fmt::Display for FlagField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::StrikeOut => "StrikeOut",
        };
        write!(f, "{}", name)
    }
}

/// Errors raised while checking a subtitle document against format constraints
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Event start time does not look like `H:MM:SS:CC`
    #[error("Invalid start time: {0}")]
    InvalidStartTime(String),

    /// Event end time does not look like `H:MM:SS:CC`
    #[error("Invalid end time: {0}")]
    InvalidEndTime(String),

    /// Style color is neither empty nor 8 hex digits
    #[error("Invalid {field} color: {value}")]
    InvalidColor {
        /// Which color failed
        field: ColorField,
        /// The rejected value
        value: String,
    },

    /// Style flag is neither 0 nor -1
    #[error("Invalid style {field}: {value}")]
    InvalidFlag {
        /// Which flag failed
        field: FlagField,
        /// The rejected value
        value: i32,
    },

    /// Timer multiplier is negative
    #[error("Invalid timer: {0:.6}")]
    InvalidTimer(f32),

    /// A slot in the styles collection is empty
    #[error("Style cannot be null (index {index})")]
    MissingStyle {
        /// Position in the styles collection
        index: usize,
    },

    /// A slot in the events collection is empty
    #[error("Event cannot be null (index {index})")]
    MissingEvent {
        /// Position in the events collection
        index: usize,
    },
}

/// Errors that can occur while exporting a subtitle document
#[derive(Error, Debug)]
pub enum ExportError {
    /// The document failed validation, nothing was written
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The output sink rejected a write or flush
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),

    /// Rendering into the in-memory buffer failed
    #[error("Format error: {0}")]
    Format(#[from] fmt::Error),
}

impl ExportError {
    /// Whether the failure came from validation rather than the sink
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
