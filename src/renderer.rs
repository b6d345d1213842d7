/*!
 * ASS v4.00+ rendering.
 *
 * Export runs validate, fulfill, render in one pass. The whole document is
 * rendered into memory first and handed to the sink as one write, so a
 * validation failure never leaves partial output behind.
 */

use std::fmt::Write as _;
use std::io;

use log::debug;

use crate::errors::ExportError;
use crate::event::Event;
use crate::export_config::{ExportConfig, StyleLineConstants};
use crate::style::Style;
use crate::subtitle::Subtitle;

// @const: Script info literals
const SCRIPT_TYPE: &str = "v4.00+";
const COLLISIONS: &str = "Normal";

// @const: Section format lines
const STYLES_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding";
const EVENTS_FORMAT: &str = "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

/// Export a subtitle with the default configuration.
///
/// Returns the number of bytes written to `sink`.
pub fn export<W: io::Write>(subtitle: &Subtitle, sink: &mut W) -> Result<u64, ExportError> {
    export_with_config(subtitle, sink, &ExportConfig::default())
}

/// Export a subtitle, filling unset fields from `config`
pub fn export_with_config<W: io::Write>(
    subtitle: &Subtitle,
    sink: &mut W,
    config: &ExportConfig,
) -> Result<u64, ExportError> {
    let document = render_to_string(subtitle, config)?;

    sink.write_all(document.as_bytes())?;
    sink.flush()?;

    debug!("Exported subtitle '{}' ({} bytes)", subtitle.title, document.len());
    Ok(document.len() as u64)
}

/// Validate, fulfill and render a subtitle without touching any sink
pub fn render_to_string(subtitle: &Subtitle, config: &ExportConfig) -> Result<String, ExportError> {
    subtitle.validate()?;

    let working = subtitle.fulfilled(config);
    let mut out = String::new();

    out.push('\n');
    render_script_info(&mut out, &working)?;
    out.push('\n');

    writeln!(out, "[V4+ Styles]")?;
    writeln!(out, "{}", STYLES_FORMAT)?;
    for style in working.styles.iter().flatten() {
        writeln!(out, "{}", render_style_line(style, &config.style_line))?;
    }
    out.push_str("\n\n");

    writeln!(out, "[Events]")?;
    writeln!(out, "{}", EVENTS_FORMAT)?;
    for event in working.events.iter().flatten() {
        writeln!(out, "{}", render_dialogue_line(event))?;
    }
    out.push('\n');

    Ok(out)
}

/// Write the `[Script Info]` section of an already fulfilled subtitle
pub fn render_script_info(out: &mut String, subtitle: &Subtitle) -> std::fmt::Result {
    writeln!(out, "[Script Info]")?;
    writeln!(out, "Title: {}", subtitle.title)?;
    writeln!(out, "Original Script: {}", subtitle.origin_script)?;
    writeln!(out, "ScriptType: {}", SCRIPT_TYPE)?;
    writeln!(out, "Collisions: {}", COLLISIONS)?;
    writeln!(out, "PlayResX: {}", subtitle.player_width)?;
    writeln!(out, "PlayResY: {}", subtitle.player_height)?;
    writeln!(out, "Timer: {:.4}", subtitle.timer)
}

/// Format one `Style:` line, without the trailing newline.
///
/// Only name, font, size and colors come from the style; everything after
/// the colors is taken from `constants`.
pub fn render_style_line(style: &Style, constants: &StyleLineConstants) -> String {
    let c = constants;
    format!(
        "Style: {},{},{},&H{},&H{},&H{},&H{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
        style.name,
        style.font_name,
        style.font_size,
        style.primary_color,
        style.second_color,
        style.outline_color,
        style.back_color,
        c.bold,
        c.italic,
        c.underline,
        c.strike_out,
        c.scale_x,
        c.scale_y,
        c.spacing,
        c.angle,
        c.border_style,
        c.outline,
        c.shadow,
        c.alignment,
        c.margin_l,
        c.margin_r,
        c.margin_v,
        c.encoding
    )
}

/// Format one `Dialogue:` line, without the trailing newline
pub fn render_dialogue_line(event: &Event) -> String {
    format!(
        "Dialogue: {},{},{},{},{},{:04},{:04},{:04},{},{}",
        event.layer,
        event.start,
        event.end,
        event.style,
        event.name,
        event.margin_l,
        event.margin_r,
        event.margin_v,
        event.effect,
        event.text
    )
}

impl Subtitle {
    /// Export this subtitle to `sink` with the default configuration
    pub fn write_to<W: io::Write>(&self, sink: &mut W) -> Result<u64, ExportError> {
        export(self, sink)
    }
}
