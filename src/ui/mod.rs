//! Ratatui front-end. The interesting state transitions live in `app`; the
//! `screens` module holds per-screen backing state, `helpers` holds the pure
//! presentation helpers, and `terminal` owns the raw-mode lifecycle.

mod app;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
