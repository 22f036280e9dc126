//! The immutable hymn repository. The collection ships inside the binary as a
//! JSON asset, gets validated and sorted once at startup, and is never
//! mutated afterwards. Everything downstream (search, navigation, rendering)
//! borrows from this one structure.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::Mezmur;

/// The hymn collection compiled into the binary.
const BUNDLED_DATA: &str = include_str!("../data/mezmurs.json");

/// Problems detected while loading the bundled collection. These are build
/// defects rather than runtime conditions, so they abort startup.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to parse bundled hymn data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bundled hymn collection is empty")]
    Empty,
    #[error("duplicate hymn id {0}")]
    DuplicateId(u32),
    #[error("hymn {0} has an empty title")]
    EmptyTitle(u32),
    #[error("hymn {0} has no lyric lines")]
    NoLyrics(u32),
}

/// Ordered, id-indexed view over the bundled hymns. Kept sorted by ascending
/// id so every list the UI renders inherits the canonical order for free.
#[derive(Debug)]
pub struct Repository {
    mezmurs: Vec<Mezmur>,
    index: HashMap<u32, usize>,
}

impl Repository {
    /// Parse and validate the compiled-in collection.
    pub fn bundled() -> Result<Self, RepositoryError> {
        Self::from_json(BUNDLED_DATA)
    }

    /// Build a repository from raw JSON. Split out from [`Self::bundled`] so
    /// tests can feed hand-written collections through the same validation.
    pub fn from_json(data: &str) -> Result<Self, RepositoryError> {
        let mezmurs: Vec<Mezmur> = serde_json::from_str(data)?;
        Self::from_records(mezmurs)
    }

    pub fn from_records(mut mezmurs: Vec<Mezmur>) -> Result<Self, RepositoryError> {
        if mezmurs.is_empty() {
            return Err(RepositoryError::Empty);
        }
        mezmurs.sort_by_key(|m| m.id);

        let mut index = HashMap::with_capacity(mezmurs.len());
        for (pos, mezmur) in mezmurs.iter().enumerate() {
            if index.insert(mezmur.id, pos).is_some() {
                return Err(RepositoryError::DuplicateId(mezmur.id));
            }
            if mezmur.title.trim().is_empty() {
                return Err(RepositoryError::EmptyTitle(mezmur.id));
            }
            if mezmur.lyrics.is_empty() {
                return Err(RepositoryError::NoLyrics(mezmur.id));
            }
        }

        Ok(Self { mezmurs, index })
    }

    /// O(1) lookup by hymn number. A miss is not an error; the reading view
    /// simply renders empty for ids that fell out of the collection.
    pub fn get(&self, id: u32) -> Option<&Mezmur> {
        self.index.get(&id).map(|&pos| &self.mezmurs[pos])
    }

    /// The full collection in ascending-id order.
    pub fn all(&self) -> &[Mezmur] {
        &self.mezmurs
    }

    pub fn len(&self) -> usize {
        self.mezmurs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mezmurs.is_empty()
    }

    /// Highest id used by navigation clamping. Sequential navigation treats
    /// ids as contiguous `1..=N`, matching how the collection is numbered.
    pub fn max_id(&self) -> u32 {
        self.mezmurs.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, title: &str) -> Mezmur {
        Mezmur {
            id,
            title: title.to_string(),
            lyrics: vec!["ሃሌ ሉያ".to_string()],
            meaning: None,
            category: None,
        }
    }

    #[test]
    fn bundled_collection_loads_and_is_contiguous() {
        let repo = Repository::bundled().unwrap();
        assert!(!repo.is_empty());
        for (offset, mezmur) in repo.all().iter().enumerate() {
            assert_eq!(mezmur.id, offset as u32 + 1);
        }
        assert_eq!(repo.max_id(), repo.len() as u32);
    }

    #[test]
    fn records_are_sorted_regardless_of_input_order() {
        let repo =
            Repository::from_records(vec![record(3, "ሦስት"), record(1, "አንድ"), record(2, "ሁለት")])
                .unwrap();
        let ids: Vec<u32> = repo.all().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn lookup_by_id_hits_and_misses() {
        let repo = Repository::from_records(vec![record(1, "አንድ"), record(2, "ሁለት")]).unwrap();
        assert_eq!(repo.get(2).unwrap().title, "ሁለት");
        assert!(repo.get(99).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Repository::from_records(vec![record(1, "አንድ"), record(1, "ድግምት")]).unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateId(1)));
    }

    #[test]
    fn empty_collection_is_rejected() {
        assert!(matches!(
            Repository::from_records(Vec::new()).unwrap_err(),
            RepositoryError::Empty
        ));
    }

    #[test]
    fn records_without_lyrics_are_rejected() {
        let mut bad = record(1, "ባዶ");
        bad.lyrics.clear();
        assert!(matches!(
            Repository::from_records(vec![bad]).unwrap_err(),
            RepositoryError::NoLyrics(1)
        ));
    }
}
