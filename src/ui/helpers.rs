use std::io::{self, Write};

use anyhow::Error;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use ratatui::style::Color;

use crate::models::{Theme, CHORUS_MARKER};

/// How much text a hymn carries, bucketed for layout decisions. Short hymns
/// read better in a tighter column; long ones need the full width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContentSize {
    Compact,
    Medium,
    Expanded,
}

impl ContentSize {
    pub(crate) fn classify(lyrics_count: usize) -> Self {
        if lyrics_count <= 5 {
            ContentSize::Compact
        } else if lyrics_count <= 15 {
            ContentSize::Medium
        } else {
            ContentSize::Expanded
        }
    }

    /// Horizontal margin applied to the reading pane, shrinking as the hymn
    /// grows so long texts keep their line width usable.
    pub(crate) fn horizontal_margin(self, width: u16) -> u16 {
        let fraction = match self {
            ContentSize::Compact => 5,
            ContentSize::Medium => 8,
            ContentSize::Expanded => 12,
        };
        width / fraction
    }
}

/// Blank lines inserted between verse lines for a given displayed size. This
/// is the terminal stand-in for font pixels: bigger preference, airier text.
pub(crate) fn lyric_spacing(effective_font_size: u16) -> u16 {
    match effective_font_size {
        0..=19 => 0,
        20..=25 => 1,
        _ => 2,
    }
}

/// Whether a lyric line is a chorus and should get the emphasized styling.
pub(crate) fn is_chorus_line(line: &str) -> bool {
    line.contains(CHORUS_MARKER)
}

/// Foreground colors for the two themes. A terminal cannot repaint its
/// background reliably across emulators, so the theme maps to the chrome and
/// text colors instead.
pub(crate) struct Palette {
    pub(crate) text: Color,
    pub(crate) dim: Color,
    pub(crate) accent: Color,
    pub(crate) chorus: Color,
}

pub(crate) fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            text: Color::White,
            dim: Color::DarkGray,
            accent: Color::Yellow,
            chorus: Color::LightYellow,
        },
        Theme::Light => Palette {
            text: Color::Black,
            dim: Color::Gray,
            // Yellow reads poorly on light backgrounds.
            accent: Color::Blue,
            chorus: Color::Magenta,
        },
    }
}

/// Send `text` to the terminal clipboard via an OSC 52 escape sequence.
/// Best-effort: emulators without OSC 52 support ignore the sequence, and
/// write failures are swallowed by the caller.
pub(crate) fn copy_to_clipboard(text: &str) -> io::Result<()> {
    let encoded = STANDARD.encode(text.as_bytes());
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]52;c;{encoded}\x1b\\")?;
    stdout.flush()
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_size_buckets_match_the_line_counts() {
        assert_eq!(ContentSize::classify(1), ContentSize::Compact);
        assert_eq!(ContentSize::classify(5), ContentSize::Compact);
        assert_eq!(ContentSize::classify(6), ContentSize::Medium);
        assert_eq!(ContentSize::classify(15), ContentSize::Medium);
        assert_eq!(ContentSize::classify(16), ContentSize::Expanded);
    }

    #[test]
    fn lyric_spacing_grows_with_the_displayed_size() {
        assert_eq!(lyric_spacing(14), 0);
        assert_eq!(lyric_spacing(18), 0);
        assert_eq!(lyric_spacing(20), 1);
        assert_eq!(lyric_spacing(26), 2);
        assert_eq!(lyric_spacing(32), 2);
    }

    #[test]
    fn chorus_detection_uses_the_marker() {
        assert!(is_chorus_line("አዝ ፡ ሃሌ ሉያ"));
        assert!(!is_chorus_line("ሃሌ ሉያ"));
    }
}
