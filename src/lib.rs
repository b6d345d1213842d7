/*!
 * # assgen - SubStation Alpha subtitle writer
 *
 * A Rust library that holds a subtitle document in memory, validates it
 * against the ASS v4.00+ format constraints and renders it as text.
 *
 * ## Features
 *
 * - Typed model for script info, styles and dialogue events
 * - Fail-fast validation of timestamps, ABGR colors, style flags and timer
 * - Default fulfillment for origin script, resolution and font names
 * - Byte-stable rendering of `[Script Info]`, `[V4+ Styles]` and `[Events]`
 * - JSON (de)serialization of documents and export configuration
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `event`: Dialogue lines
 * - `style`: Named text styles
 * - `subtitle`: The document aggregate, validation and fulfillment
 * - `validation`: Field-level checks:
 *   - `validation::timecodes`: `H:MM:SS:CC` timestamps
 *   - `validation::colors`: ABGR colors and on/off flags
 * - `export_config`: Fallback values and fixed style line fields
 * - `renderer`: Export to any `std::io::Write` sink
 * - `errors`: Custom error types for the library
 *
 * ## Example
 *
 * ```
 * use assgen::{export, Event, Style, Subtitle};
 *
 * let mut sub = Subtitle::new("Demo");
 * sub.push_style(Style::new("Default"));
 * sub.push_event(Event::new("0:00:01:00", "0:00:04:00", "Default", "Hello"));
 *
 * let mut out = Vec::new();
 * let written = export(&sub, &mut out).unwrap();
 * assert_eq!(written, out.len() as u64);
 * ```
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(non_snake_case)]

// Public modules
pub mod errors;
pub mod event;
pub mod export_config;
pub mod renderer;
pub mod style;
pub mod subtitle;
pub mod validation;

// Re-export main types for easier usage
pub use errors::{ColorField, ExportError, FlagField, ValidationError};
pub use event::Event;
pub use export_config::{ExportConfig, StyleLineConstants};
pub use renderer::{export, export_with_config, render_to_string};
pub use style::Style;
pub use subtitle::Subtitle;
