//! Domain models shared by the repository, the search core, and the TUI. The
//! intent is that these types stay light-weight data holders so other layers
//! can focus on presentation and persistence logic. Keeping the commentary
//! here means later refactors can reconstruct the assumptions even if other
//! context is lost.

use std::fmt;

use serde::Deserialize;

/// Lyric lines containing this marker are choruses and get rendered with
/// distinct emphasis. Purely a presentation concern; the search core treats
/// chorus lines like any other text.
pub const CHORUS_MARKER: &str = "አዝ";

/// A single hymn record from the bundled collection. The `id` doubles as the
/// hymn number printed on song sheets, which is why search treats a numeric
/// query as a direct id lookup before falling back to text matching.
#[derive(Debug, Clone, Deserialize)]
pub struct Mezmur {
    /// Unique hymn number. Navigation assumes the collection covers a
    /// contiguous `1..=N` range, so this is both identity and position.
    pub id: u32,
    /// Title displayed in lists, cards, and the reading header.
    pub title: String,
    /// Verse lines in singing order. Always at least one line; the first line
    /// doubles as the preview text on collection cards.
    pub lyrics: Vec<String>,
    /// Optional explanatory translation shown beneath the lyrics.
    #[serde(default)]
    pub meaning: Option<String>,
    /// Optional classification tag. Unused by current logic but kept in the
    /// record so future filtering does not need a data migration.
    #[serde(default)]
    pub category: Option<String>,
}

impl Mezmur {
    /// Concatenate title and lyrics into the lowercased haystack the query
    /// matcher searches. Built per call; the collection is small enough that
    /// caching would only add invalidation concerns.
    pub fn searchable_text(&self) -> String {
        let mut text = self.title.clone();
        for line in &self.lyrics {
            text.push(' ');
            text.push_str(line);
        }
        text.to_lowercase()
    }

    /// First lyric line, used as the preview under each collection card.
    pub fn preview_line(&self) -> &str {
        self.lyrics.first().map(String::as_str).unwrap_or("")
    }

    /// Plain-text payload handed to the clipboard sink: title, blank line,
    /// then the verse lines joined by newlines.
    pub fn clipboard_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.lyrics.join("\n"))
    }
}

impl fmt::Display for Mezmur {
    /// Write `id. title` to any formatter so the type plays nicely with
    /// widgets and the export listing that consume strings implicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id, self.title)
    }
}

/// Reading theme. Stored as a lowercase string so the persisted value stays
/// human-readable in the prefs table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored theme value. Anything unrecognized is treated as
    /// absent so a corrupted row degrades to the caller's default.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Mezmur {
        Mezmur {
            id: 3,
            title: "ሆሣዕና በአርያም".to_string(),
            lyrics: vec!["ሆሣዕና በአርያም".to_string(), "ለዳዊት ልጅ".to_string()],
            meaning: None,
            category: None,
        }
    }

    #[test]
    fn searchable_text_joins_title_and_lyrics() {
        let text = sample().searchable_text();
        assert_eq!(text, "ሆሣዕና በአርያም ሆሣዕና በአርያም ለዳዊት ልጅ");
    }

    #[test]
    fn searchable_text_lowercases_latin_content() {
        let mut m = sample();
        m.title = "Tinsae HYMN".to_string();
        assert!(m.searchable_text().starts_with("tinsae hymn"));
    }

    #[test]
    fn clipboard_text_separates_title_with_blank_line() {
        assert_eq!(
            sample().clipboard_text(),
            "ሆሣዕና በአርያም\n\nሆሣዕና በአርያም\nለዳዊት ልጅ"
        );
    }

    #[test]
    fn theme_round_trips_through_storage_string() {
        assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn theme_toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
