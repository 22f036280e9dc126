//! Binary entry point that glues the bundled hymn repository and the SQLite
//! preference store to the TUI. The bootstrapping pipeline is deliberately
//! short: open the store, load preferences, validate the bundled collection,
//! and drive the Ratatui event loop until the user exits.

use mezmur_reader::{ensure_schema, load_preferences, run_app, App, Repository};

/// Terminals carry no reliable dark-mode signal, so the theme default when
/// nothing is stored leans dark, the common case for terminal emulators.
const DEFAULT_PREFERS_DARK: bool = true;

fn main() -> anyhow::Result<()> {
    let conn = ensure_schema()?;
    let prefs = load_preferences(&conn, DEFAULT_PREFERS_DARK)?;
    let repo = Repository::bundled()?;

    let mut app = App::new(conn, repo, prefs);
    run_app(&mut app)
}
