//! The query matcher. Both search boxes in the UI (the collection search and
//! the reading-view sidebar) route through [`filter_mezmurs`] so the two can
//! never drift apart in behavior — a property the tests pin down explicitly.

use crate::models::Mezmur;

/// Trim and lowercase a raw query. Exposed so callers and tests can assert
/// the matcher is invariant under pre-normalized input.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Select the hymns matching `query`, preserving ascending-id order.
///
/// Matching rules, in order:
/// 1. An empty (or whitespace-only) query selects the whole collection.
/// 2. If the entire normalized query parses as a number, a hymn with exactly
///    that id matches unconditionally, so typing a hymn number always finds
///    the hymn even when the digits never appear in its text.
/// 3. Otherwise the query splits into whitespace-separated terms, and a hymn
///    matches when every term occurs somewhere in the lowercased
///    concatenation of its title and lyrics.
///
/// The numeric rule is a short-circuit, not an exclusive mode: a numeric
/// query that matches no id still falls through to substring matching, so
/// "7" also finds hymns whose text contains a literal "7".
pub fn filter_mezmurs<'a>(mezmurs: &'a [Mezmur], query: &str) -> Vec<&'a Mezmur> {
    let normalized = normalize_query(query);
    if normalized.is_empty() {
        return mezmurs.iter().collect();
    }

    let id_query: Option<u32> = normalized.parse().ok();
    let terms: Vec<&str> = normalized.split_whitespace().collect();

    mezmurs
        .iter()
        .filter(|m| {
            if id_query == Some(m.id) {
                return true;
            }
            let content = m.searchable_text();
            terms.iter().all(|term| content.contains(term))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mezmur(id: u32, title: &str, lyrics: &[&str]) -> Mezmur {
        Mezmur {
            id,
            title: title.to_string(),
            lyrics: lyrics.iter().map(|s| s.to_string()).collect(),
            meaning: None,
            category: None,
        }
    }

    fn fixture() -> Vec<Mezmur> {
        vec![
            mezmur(1, "ሰላም ብዕል", &["ሰላም ለኩልክሙ", "ብዕል ወክብር"]),
            mezmur(2, "ብዕል ብቻ", &["ብዕል ብቻ ይበቃል"]),
            mezmur(3, "በዮርዳኖስ ተጠመቀ", &["ሃሌ ሉያ", "መዝሙር 7 ይዘመራል"]),
            mezmur(4, "Tinsae Hymn", &["Christ is risen", "Halleluja"]),
        ]
    }

    fn ids(result: &[&Mezmur]) -> Vec<u32> {
        result.iter().map(|m| m.id).collect()
    }

    #[test]
    fn empty_query_returns_whole_collection_in_order() {
        let all = fixture();
        assert_eq!(ids(&filter_mezmurs(&all, "")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn whitespace_only_query_behaves_as_empty() {
        let all = fixture();
        assert_eq!(ids(&filter_mezmurs(&all, "   ")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn result_is_subset_with_ascending_ids() {
        let all = fixture();
        for query in ["ብዕል", "ሰላም", "7", "hymn", "no-such-text"] {
            let result = filter_mezmurs(&all, query);
            assert!(result.len() <= all.len());
            for pair in result.windows(2) {
                assert!(pair[0].id < pair[1].id, "query {query:?} broke ordering");
            }
        }
    }

    #[test]
    fn matching_is_invariant_under_pre_normalization() {
        let all = fixture();
        let raw = "  TINSAE  ";
        assert_eq!(
            ids(&filter_mezmurs(&all, raw)),
            ids(&filter_mezmurs(&all, &normalize_query(raw)))
        );
    }

    #[test]
    fn terms_match_case_insensitively_across_title_and_lyrics() {
        let all = fixture();
        assert_eq!(ids(&filter_mezmurs(&all, "RISEN")), vec![4]);
        assert_eq!(ids(&filter_mezmurs(&all, "ሃሌ")), vec![3]);
    }

    #[test]
    fn numeric_query_short_circuits_on_id_match() {
        let all = fixture();
        // Hymn 2 contains no digit "2" anywhere in its text.
        assert_eq!(ids(&filter_mezmurs(&all, "2")), vec![2]);
    }

    #[test]
    fn numeric_query_still_matches_literal_digits_in_text() {
        let all = fixture();
        // "7" is not an id, but hymn 3 sings about mezmur 7.
        assert_eq!(ids(&filter_mezmurs(&all, "7")), vec![3]);
    }

    #[test]
    fn multi_term_query_requires_every_term() {
        let all = fixture();
        // Both hymns contain "ብዕል", only the first also contains "ሰላም".
        assert_eq!(ids(&filter_mezmurs(&all, "ሰላም ብዕል")), vec![1]);
    }

    #[test]
    fn multi_term_result_refines_single_term_results() {
        let all = fixture();
        let combined = ids(&filter_mezmurs(&all, "ሰላም ብዕል"));
        let first = ids(&filter_mezmurs(&all, "ሰላም"));
        let second = ids(&filter_mezmurs(&all, "ብዕል"));
        for id in &combined {
            assert!(first.contains(id) && second.contains(id));
        }
    }

    #[test]
    fn terms_may_match_in_different_lines() {
        let all = fixture();
        // "ሰላም" appears in the title, "ወክብር" only in the second lyric line.
        assert_eq!(ids(&filter_mezmurs(&all, "ሰላም ወክብር")), vec![1]);
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        let all = fixture();
        assert!(filter_mezmurs(&all, "የለም የማይገኝ").is_empty());
    }
}
