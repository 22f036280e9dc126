//! Core library surface for the Mezmur Reader TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as potential external tooling can reuse the same
//! pieces. The search, selection, and preference logic lives in plain
//! modules with no UI dependency, which is what keeps it testable without a
//! terminal attached.

#[cfg(feature = "export")]
pub mod export;
pub mod models;
pub mod reader;
pub mod repo;
pub mod search;
pub mod store;
pub mod ui;

/// Convenience re-exports for the persistence layer, typically used by
/// `main.rs` to initialize the preference store.
pub use store::{ensure_schema, load_preferences, save_preferences, Preferences};

/// The primary domain types other layers manipulate.
pub use models::{Mezmur, Theme};
pub use repo::Repository;

/// The pure core: query matching and selection navigation.
pub use reader::Selection;
pub use search::filter_mezmurs;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
