//! Favorites export, compiled only into the `export` build variant. Produces
//! a plain-text listing of the favorited hymns and writes it next to wherever
//! the reader was launched from.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::repo::Repository;

/// File name offered to the user.
pub const EXPORT_FILE_NAME: &str = "mezmur-favorites.txt";

/// One `id. title` line per favorited hymn, ascending by id. Stale favorite
/// ids with no matching hymn are skipped silently.
pub fn favorites_listing(repo: &Repository, favorites: &BTreeSet<u32>) -> String {
    let mut lines = String::new();
    for &id in favorites {
        if let Some(mezmur) = repo.get(id) {
            lines.push_str(&mezmur.to_string());
            lines.push('\n');
        }
    }
    lines
}

/// Write the listing to `path`. Callers surface failures as a footer status
/// message; nothing here is fatal.
pub fn write_favorites(path: &Path, repo: &Repository, favorites: &BTreeSet<u32>) -> Result<()> {
    std::fs::write(path, favorites_listing(repo, favorites))
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mezmur;

    fn repo() -> Repository {
        let records = (1..=3)
            .map(|id| Mezmur {
                id,
                title: format!("መዝሙር {id}"),
                lyrics: vec!["ሃሌ ሉያ".to_string()],
                meaning: None,
                category: None,
            })
            .collect();
        Repository::from_records(records).unwrap()
    }

    #[test]
    fn listing_is_ascending_and_skips_stale_ids() {
        let favorites: BTreeSet<u32> = [3, 1, 99].into_iter().collect();
        let listing = favorites_listing(&repo(), &favorites);
        assert_eq!(listing, "1. መዝሙር 1\n3. መዝሙር 3\n");
    }

    #[test]
    fn empty_favorites_produce_an_empty_listing() {
        assert!(favorites_listing(&repo(), &BTreeSet::new()).is_empty());
    }

    #[test]
    fn listing_lands_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);
        let favorites: BTreeSet<u32> = [2].into_iter().collect();
        write_favorites(&path, &repo(), &favorites).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "2. መዝሙር 2\n");
    }
}
