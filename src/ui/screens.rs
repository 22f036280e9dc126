//! Backing state for the two screens. Both keep a cached list of matching
//! hymn ids that gets rebuilt whenever the query or the favorites filter
//! changes, mirroring how the persistence-free parts of the app stay cheap to
//! re-render every frame.

use std::time::{Duration, Instant};

use crate::search::filter_mezmurs;
use crate::repo::Repository;
use crate::store::Preferences;

/// How long the "Copied" indicator stays up after a copy.
pub(crate) const COPIED_RESET: Duration = Duration::from_secs(2);

/// State behind the collection view: the search query, the favorites-only
/// toggle, and the highlighted card.
pub(crate) struct CollectionScreen {
    pub(crate) query: String,
    pub(crate) favorites_only: bool,
    pub(crate) filtered: Vec<u32>,
    pub(crate) selected: usize,
}

impl CollectionScreen {
    pub(crate) fn new(repo: &Repository, prefs: &Preferences) -> Self {
        let mut screen = Self {
            query: String::new(),
            favorites_only: false,
            filtered: Vec::new(),
            selected: 0,
        };
        screen.apply_filter(repo, prefs);
        screen
    }

    /// Rebuild the visible subset. The query matcher keeps ascending-id
    /// order; the favorites filter is applied on top of its result, exactly
    /// as the reading order requires.
    pub(crate) fn apply_filter(&mut self, repo: &Repository, prefs: &Preferences) {
        let mut matches = filter_mezmurs(repo.all(), &self.query);
        if self.favorites_only {
            matches.retain(|m| prefs.is_favorite(m.id));
        }
        self.filtered = matches.iter().map(|m| m.id).collect();
        self.ensure_in_bounds();
    }

    pub(crate) fn set_query(&mut self, query: String, repo: &Repository, prefs: &Preferences) {
        self.query = query;
        self.apply_filter(repo, prefs);
    }

    pub(crate) fn toggle_favorites_only(
        &mut self,
        repo: &Repository,
        prefs: &Preferences,
    ) -> bool {
        self.favorites_only = !self.favorites_only;
        self.apply_filter(repo, prefs);
        self.favorites_only
    }

    /// Id of the highlighted card, if the filtered list is non-empty.
    pub(crate) fn current_id(&self) -> Option<u32> {
        self.filtered.get(self.selected).copied()
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.filtered.is_empty() {
            return;
        }
        let len = self.filtered.len() as isize;
        let mut new = self.selected as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        if !self.filtered.is_empty() {
            self.selected = 0;
        }
    }

    pub(crate) fn select_last(&mut self) {
        if !self.filtered.is_empty() {
            self.selected = self.filtered.len() - 1;
        }
    }

    fn ensure_in_bounds(&mut self) {
        if self.filtered.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.filtered.len() {
            self.selected = self.filtered.len() - 1;
        }
    }
}

/// State behind the reading view: the sidebar list with its own search, the
/// lyric scroll offset, and the transient copied indicator.
pub(crate) struct ReadingScreen {
    pub(crate) sidebar_query: String,
    pub(crate) sidebar: Vec<u32>,
    pub(crate) sidebar_selected: usize,
    pub(crate) scroll: u16,
    copied_at: Option<Instant>,
}

impl ReadingScreen {
    pub(crate) fn new(repo: &Repository) -> Self {
        let mut screen = Self {
            sidebar_query: String::new(),
            sidebar: Vec::new(),
            sidebar_selected: 0,
            scroll: 0,
            copied_at: None,
        };
        screen.apply_sidebar_filter(repo);
        screen
    }

    /// The sidebar runs the same matcher as the collection search but lists
    /// every hymn regardless of the favorites toggle, like the original
    /// sidebar does.
    pub(crate) fn apply_sidebar_filter(&mut self, repo: &Repository) {
        self.sidebar = filter_mezmurs(repo.all(), &self.sidebar_query)
            .iter()
            .map(|m| m.id)
            .collect();
        if self.sidebar.is_empty() {
            self.sidebar_selected = 0;
        } else if self.sidebar_selected >= self.sidebar.len() {
            self.sidebar_selected = self.sidebar.len() - 1;
        }
    }

    pub(crate) fn set_sidebar_query(&mut self, query: String, repo: &Repository) {
        self.sidebar_query = query;
        self.apply_sidebar_filter(repo);
    }

    pub(crate) fn sidebar_current_id(&self) -> Option<u32> {
        self.sidebar.get(self.sidebar_selected).copied()
    }

    pub(crate) fn move_sidebar_selection(&mut self, offset: isize) {
        if self.sidebar.is_empty() {
            return;
        }
        let len = self.sidebar.len() as isize;
        let mut new = self.sidebar_selected as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.sidebar_selected = new as usize;
    }

    /// Align the sidebar highlight with the hymn that is actually open, used
    /// after next/previous/random moved the selection from outside.
    pub(crate) fn sync_sidebar_to(&mut self, id: u32) {
        if let Some(pos) = self.sidebar.iter().position(|&entry| entry == id) {
            self.sidebar_selected = pos;
        }
    }

    pub(crate) fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub(crate) fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub(crate) fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    /// Arm (or re-arm) the copied indicator. A second copy while the first
    /// is still showing just restarts the window; the older stamp becomes
    /// irrelevant, so overlapping expiries need no special handling.
    pub(crate) fn mark_copied(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    pub(crate) fn copied_showing(&self) -> bool {
        self.copied_at.is_some()
    }

    /// Drop the indicator once its window has passed. Called from the poll
    /// loop tick.
    pub(crate) fn expire_copied(&mut self) {
        if let Some(at) = self.copied_at {
            if at.elapsed() >= COPIED_RESET {
                self.copied_at = None;
            }
        }
    }
}
