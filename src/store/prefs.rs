//! User preferences and their persistence. The in-memory [`Preferences`]
//! value is the single source of truth while the app runs; every mutation is
//! followed by an explicit [`save_preferences`] call at the call site, which
//! keeps the pure state testable without a database and makes the write
//! sequence visible in tests.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::models::Theme;

/// Smallest reading size a user can set.
pub const FONT_MIN: u16 = 14;
/// Largest reading size a user can set.
pub const FONT_MAX: u16 = 32;
/// Reading size used when nothing is stored.
pub const FONT_DEFAULT: u16 = 20;
/// Increment applied by the `+`/`-` keys.
pub const FONT_STEP: u16 = 2;

/// Terminal widths below this count as narrow. On a narrow viewport the
/// displayed size is capped at [`NARROW_FONT_CAP`] without touching the
/// stored preference.
pub const NARROW_BREAKPOINT: u16 = 80;
/// Upper display bound while the viewport is narrow.
pub const NARROW_FONT_CAP: u16 = 18;

const KEY_THEME: &str = "theme";
const KEY_FONT_SIZE: &str = "font_size";
const KEY_FAVORITES: &str = "favorites";

/// Everything the reader remembers across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    /// Stored reading size. Explicit sets clamp into `[FONT_MIN, FONT_MAX]`;
    /// a stored out-of-range value is accepted as-is at load and only
    /// corrected by the next explicit set.
    pub font_size: u16,
    /// Favorited hymn ids. Stale ids referencing hymns that left the
    /// collection are tolerated; they never match anything.
    pub favorites: BTreeSet<u32>,
}

impl Preferences {
    /// Defaults used when nothing is stored. The theme default comes from
    /// the system dark-mode signal queried once at startup.
    pub fn defaults(system_prefers_dark: bool) -> Self {
        Self {
            theme: if system_prefers_dark {
                Theme::Dark
            } else {
                Theme::Light
            },
            font_size: FONT_DEFAULT,
            favorites: BTreeSet::new(),
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Set the stored reading size, clamped into the allowed range.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size.clamp(FONT_MIN, FONT_MAX);
    }

    pub fn increase_font_size(&mut self) {
        self.set_font_size(self.font_size.saturating_add(FONT_STEP));
    }

    pub fn decrease_font_size(&mut self) {
        self.set_font_size(self.font_size.saturating_sub(FONT_STEP));
    }

    /// Flip a hymn's favorite mark. Two calls in a row restore the original
    /// set. Returns whether the id is favorited afterwards so callers can
    /// phrase a status message.
    pub fn toggle_favorite(&mut self, id: u32) -> bool {
        if self.favorites.remove(&id) {
            false
        } else {
            self.favorites.insert(id);
            true
        }
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.contains(&id)
    }
}

/// The reading size actually displayed for a given terminal width. A narrow
/// viewport caps the size at [`NARROW_FONT_CAP`]; this is recomputed every
/// frame and never written back, so widening the terminal restores the
/// stored preference.
pub fn effective_font_size(stored: u16, viewport_width: u16) -> u16 {
    if viewport_width < NARROW_BREAKPOINT {
        stored.min(NARROW_FONT_CAP)
    } else {
        stored
    }
}

/// Load preferences, falling back per-key to defaults. A missing or
/// malformed value is treated as absent rather than an error: losing a
/// preference to corruption is an acceptable degradation, losing startup is
/// not.
pub fn load_preferences(conn: &Connection, system_prefers_dark: bool) -> Result<Preferences> {
    let mut prefs = Preferences::defaults(system_prefers_dark);

    if let Some(value) = read_value(conn, KEY_THEME)? {
        if let Some(theme) = Theme::parse(&value) {
            prefs.theme = theme;
        }
    }

    if let Some(value) = read_value(conn, KEY_FONT_SIZE)? {
        // Parsed as-is, without clamping: an out-of-range stored size keeps
        // working until the user next adjusts it.
        if let Ok(size) = value.parse::<u16>() {
            prefs.font_size = size;
        }
    }

    if let Some(value) = read_value(conn, KEY_FAVORITES)? {
        if let Ok(ids) = serde_json::from_str::<Vec<u32>>(&value) {
            prefs.favorites = ids.into_iter().collect();
        }
    }

    Ok(prefs)
}

/// Write all three preference keys. Callers invoke this after every
/// mutation; the values are tiny, so rewriting everything keeps the store
/// logic free of dirty tracking.
pub fn save_preferences(conn: &Connection, prefs: &Preferences) -> Result<()> {
    write_value(conn, KEY_THEME, prefs.theme.as_str())?;
    write_value(conn, KEY_FONT_SIZE, &prefs.font_size.to_string())?;
    let favorites: Vec<u32> = prefs.favorites.iter().copied().collect();
    let encoded =
        serde_json::to_string(&favorites).context("failed to encode favorite ids")?;
    write_value(conn, KEY_FAVORITES, &encoded)?;
    Ok(())
}

fn read_value(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM prefs WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .with_context(|| format!("failed to read pref {key}"))
}

fn write_value(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO prefs (key, value) VALUES (?1, ?2)",
        params![key, value],
    )
    .with_context(|| format!("failed to write pref {key}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::init_schema;

    fn open_store() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    fn put(conn: &Connection, key: &str, value: &str) {
        write_value(conn, key, value).unwrap();
    }

    #[test]
    fn empty_store_yields_defaults_with_system_theme() {
        let conn = open_store();
        let dark = load_preferences(&conn, true).unwrap();
        assert_eq!(dark.theme, Theme::Dark);
        assert_eq!(dark.font_size, FONT_DEFAULT);
        assert!(dark.favorites.is_empty());

        let light = load_preferences(&conn, false).unwrap();
        assert_eq!(light.theme, Theme::Light);
    }

    #[test]
    fn stored_theme_beats_the_system_signal() {
        let conn = open_store();
        put(&conn, KEY_THEME, "light");
        let prefs = load_preferences(&conn, true).unwrap();
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn malformed_values_degrade_to_defaults() {
        let conn = open_store();
        put(&conn, KEY_THEME, "sepia");
        put(&conn, KEY_FONT_SIZE, "not-a-number");
        put(&conn, KEY_FAVORITES, "{broken");
        let prefs = load_preferences(&conn, true).unwrap();
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.font_size, FONT_DEFAULT);
        assert!(prefs.favorites.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let conn = open_store();
        let mut prefs = Preferences::defaults(false);
        prefs.toggle_theme();
        prefs.set_font_size(26);
        prefs.toggle_favorite(4);
        prefs.toggle_favorite(1);
        save_preferences(&conn, &prefs).unwrap();

        let loaded = load_preferences(&conn, false).unwrap();
        assert_eq!(loaded, prefs);
        // BTreeSet keeps the persisted array ascending.
        assert_eq!(
            read_value(&conn, KEY_FAVORITES).unwrap().unwrap(),
            "[1,4]"
        );
    }

    #[test]
    fn last_write_wins() {
        let conn = open_store();
        let mut prefs = Preferences::defaults(false);
        save_preferences(&conn, &prefs).unwrap();
        prefs.set_font_size(30);
        save_preferences(&conn, &prefs).unwrap();
        assert_eq!(load_preferences(&conn, false).unwrap().font_size, 30);
    }

    #[test]
    fn out_of_range_stored_size_loads_as_is_until_next_set() {
        let conn = open_store();
        put(&conn, KEY_FONT_SIZE, "40");
        let mut prefs = load_preferences(&conn, true).unwrap();
        assert_eq!(prefs.font_size, 40);
        prefs.set_font_size(40);
        assert_eq!(prefs.font_size, FONT_MAX);
    }

    #[test]
    fn explicit_sets_clamp_into_range() {
        let mut prefs = Preferences::defaults(true);
        prefs.set_font_size(8);
        assert_eq!(prefs.font_size, FONT_MIN);
        prefs.set_font_size(100);
        assert_eq!(prefs.font_size, FONT_MAX);
    }

    #[test]
    fn step_adjustments_respect_the_bounds() {
        let mut prefs = Preferences::defaults(true);
        prefs.set_font_size(FONT_MAX);
        prefs.increase_font_size();
        assert_eq!(prefs.font_size, FONT_MAX);
        prefs.set_font_size(FONT_MIN);
        prefs.decrease_font_size();
        assert_eq!(prefs.font_size, FONT_MIN);
    }

    #[test]
    fn favorite_toggle_is_an_involution() {
        let mut prefs = Preferences::defaults(true);
        let before = prefs.favorites.clone();
        assert!(prefs.toggle_favorite(3));
        assert!(prefs.is_favorite(3));
        assert!(!prefs.toggle_favorite(3));
        assert_eq!(prefs.favorites, before);
    }

    #[test]
    fn narrow_viewport_caps_the_displayed_size_only() {
        assert_eq!(effective_font_size(26, NARROW_BREAKPOINT - 1), NARROW_FONT_CAP);
        assert_eq!(effective_font_size(26, NARROW_BREAKPOINT), 26);
        // Sizes already under the cap pass through unchanged.
        assert_eq!(effective_font_size(16, 40), 16);
    }
}
