//! Persistence module split across logical submodules.

mod connection;
mod prefs;

pub use connection::{ensure_schema, init_schema};
pub use prefs::{
    effective_font_size, load_preferences, save_preferences, Preferences, FONT_DEFAULT, FONT_MAX,
    FONT_MIN, FONT_STEP, NARROW_BREAKPOINT, NARROW_FONT_CAP,
};
