//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.
//!
//! They only look at records the store is about to create, never at data
//! loaded from storage, and run before anything is written.

use crate::models::Club;

/// A freshly minted id is non-empty and unused in its collection
pub fn assert_fresh_id<'a, I>(id: &str, existing: I, collection: &str)
where
    I: IntoIterator<Item = &'a str>,
{
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert!(!id.is_empty(), "Empty id minted for {}", collection);
    for other in existing {
        debug_assert!(other != id, "Minted id {} already used in {}", id, collection);
    }
}

/// A new event or recruitment refers to a club the store knows
pub fn assert_club_resolves(clubs: &[Club], club_id: &str, record: &str) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert!(
        clubs.iter().any(|c| c.id == club_id),
        "New {} refers to unknown club {}",
        record,
        club_id
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::initial_clubs;

    #[test]
    fn test_valid_records_pass() {
        let clubs = initial_clubs();
        assert_fresh_id("11", clubs.iter().map(|c| c.id.as_str()), "clubs");
        assert_club_resolves(&clubs, "3", "event");
    }

    #[test]
    #[should_panic(expected = "already used")]
    fn test_reused_id_detected() {
        assert_fresh_id("1", ["1", "2"], "clubs");
    }

    #[test]
    #[should_panic(expected = "Empty id")]
    fn test_empty_id_detected() {
        assert_fresh_id("", std::iter::empty(), "events");
    }

    #[test]
    #[should_panic(expected = "unknown club")]
    fn test_dangling_club_detected() {
        assert_club_resolves(&initial_clubs(), "99", "recruitment");
    }
}
