//! Selection state for the reading view: which hymn is open, if any, and the
//! sequential/random navigation over the collection. Ephemeral by design —
//! nothing here is persisted, and returning to the collection view resets it.

use rand::Rng;

/// Hymn numbers start at 1; `previous` clamps here.
const MIN_ID: u32 = 1;

/// The currently open hymn, or none while the collection view is showing.
///
/// Operations never fail: selecting an id that is not in the repository is
/// allowed and simply renders an empty reading pane. Navigation assumes the
/// contiguous `1..=N` numbering the repository guarantees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    open_id: Option<u32>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_id(&self) -> Option<u32> {
        self.open_id
    }

    pub fn is_open(&self) -> bool {
        self.open_id.is_some()
    }

    /// Open a hymn unconditionally. No validation against the repository;
    /// the renderer handles a lookup miss.
    pub fn select(&mut self, id: u32) {
        self.open_id = Some(id);
    }

    /// Return to the collection view.
    pub fn clear(&mut self) {
        self.open_id = None;
    }

    /// Step forward, clamped to `max_id`. A no-op at the boundary and while
    /// nothing is open.
    pub fn next(&mut self, max_id: u32) {
        if let Some(id) = self.open_id {
            self.open_id = Some(id.saturating_add(1).min(max_id));
        }
    }

    /// Step backward, clamped to 1. A no-op at the boundary and while
    /// nothing is open.
    pub fn previous(&mut self) {
        if let Some(id) = self.open_id {
            self.open_id = Some(id.saturating_sub(1).max(MIN_ID));
        }
    }

    /// Jump to a uniformly random hymn in `1..=max_id`. The current hymn is
    /// not excluded; landing on it again is fine.
    pub fn random<R: Rng>(&mut self, rng: &mut R, max_id: u32) {
        if max_id >= MIN_ID {
            self.select(rng.gen_range(MIN_ID..=max_id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn starts_with_nothing_open() {
        assert_eq!(Selection::new().open_id(), None);
    }

    #[test]
    fn select_and_clear() {
        let mut sel = Selection::new();
        sel.select(5);
        assert_eq!(sel.open_id(), Some(5));
        sel.clear();
        assert_eq!(sel.open_id(), None);
    }

    #[test]
    fn select_does_not_validate_against_bounds() {
        let mut sel = Selection::new();
        sel.select(9999);
        assert_eq!(sel.open_id(), Some(9999));
    }

    #[test]
    fn navigation_is_a_noop_while_closed() {
        let mut sel = Selection::new();
        sel.next(10);
        sel.previous();
        assert_eq!(sel.open_id(), None);
    }

    #[test]
    fn three_hymn_walk_clamps_at_both_ends() {
        let mut sel = Selection::new();
        sel.select(2);
        sel.next(3);
        assert_eq!(sel.open_id(), Some(3));
        sel.next(3);
        assert_eq!(sel.open_id(), Some(3));
        sel.previous();
        sel.previous();
        assert_eq!(sel.open_id(), Some(1));
        sel.previous();
        assert_eq!(sel.open_id(), Some(1));
    }

    #[test]
    fn repeated_steps_converge_to_the_boundary_and_stay() {
        let mut sel = Selection::new();
        sel.select(7);
        for _ in 0..20 {
            sel.previous();
        }
        assert_eq!(sel.open_id(), Some(1));
        for _ in 0..20 {
            sel.next(9);
        }
        assert_eq!(sel.open_id(), Some(9));
    }

    #[test]
    fn random_stays_within_bounds() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut sel = Selection::new();
        for _ in 0..100 {
            sel.random(&mut rng, 12);
            let id = sel.open_id().unwrap();
            assert!((1..=12).contains(&id));
        }
    }

    #[test]
    fn random_on_singleton_collection_picks_the_only_hymn() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut sel = Selection::new();
        sel.random(&mut rng, 1);
        assert_eq!(sel.open_id(), Some(1));
    }
}
