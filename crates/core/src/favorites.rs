//! Favorites list rules.
//!
//! A user's favorites are an ordered list of campsite ids with no duplicates.
//! Every store implementation mutates the list through these functions so the
//! ordering and uniqueness rules live in one place.

use std::fmt;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// List mutations
// ---------------------------------------------------------------------------

/// Append each id from `incoming` that is not already in `existing`.
///
/// Insertion order is preserved. Returns how many ids were appended; zero
/// means the caller must not persist anything.
pub fn merge_campsites(existing: &mut Vec<DbId>, incoming: &[DbId]) -> usize {
    let before = existing.len();
    for &id in incoming {
        if !existing.contains(&id) {
            existing.push(id);
        }
    }
    existing.len() - before
}

/// Append a single campsite unless it is already present.
///
/// Returns `false` when the list already held the id.
pub fn add_campsite(list: &mut Vec<DbId>, campsite_id: DbId) -> bool {
    merge_campsites(list, &[campsite_id]) == 1
}

/// Result of removing one campsite from a favorites list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// The id was present and has been removed.
    Removed,
    /// The list is non-empty but does not contain the id.
    NotInList,
    /// The list has no entries at all.
    Empty,
}

/// Remove `campsite_id` from `list`, keeping the others in relative order.
pub fn remove_campsite(list: &mut Vec<DbId>, campsite_id: DbId) -> Removal {
    if list.is_empty() {
        return Removal::Empty;
    }
    match list.iter().position(|&id| id == campsite_id) {
        Some(idx) => {
            list.remove(idx);
            Removal::Removed
        }
        None => Removal::NotInList,
    }
}

/// Return the first id that appears more than once in `ids`.
pub fn first_duplicate(ids: &[DbId]) -> Option<DbId> {
    ids.iter()
        .enumerate()
        .find(|&(idx, id)| ids[..idx].contains(id))
        .map(|(_, &id)| id)
}

// ---------------------------------------------------------------------------
// Informational notices
// ---------------------------------------------------------------------------

/// Plain-text body for a request that succeeded without changing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteNotice {
    /// Bulk add found every submitted campsite already in the list.
    NothingNew,
    /// Delete-all found no record for the user.
    NoneToDelete,
    AlreadyFavorite { name: String, campsite_id: DbId },
    InvalidCampsite { campsite_id: DbId },
    NotInList { campsite_id: DbId },
    /// Single remove on a user with no record or an empty list.
    NoFavorites { user_id: DbId },
}

impl fmt::Display for FavoriteNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FavoriteNotice::NothingNew => f.write_str(
                "No new favorites were added, all new favorites already exist for this user",
            ),
            FavoriteNotice::NoneToDelete => f.write_str("You do not have any favorites to delete"),
            FavoriteNotice::AlreadyFavorite { name, campsite_id } => {
                write!(f, "{name} (id: {campsite_id}) is already a favorite campsite")
            }
            FavoriteNotice::InvalidCampsite { campsite_id } => {
                write!(f, "Campsite with id {campsite_id} is not a valid campsite")
            }
            FavoriteNotice::NotInList { campsite_id } => {
                write!(f, "Campsite to remove (id: {campsite_id}) is not in your favorites")
            }
            FavoriteNotice::NoFavorites { user_id } => {
                write!(f, "There are no favorites for this user (id: {user_id}) to delete.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_into_empty_keeps_submitted_order() {
        let mut ids = Vec::new();
        assert_eq!(merge_campsites(&mut ids, &[4, 2, 9]), 3);
        assert_eq!(ids, vec![4, 2, 9]);
    }

    #[test]
    fn merge_skips_ids_already_present() {
        let mut ids = vec![1];
        assert_eq!(merge_campsites(&mut ids, &[1, 2]), 1);
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn merge_of_known_ids_appends_nothing() {
        let mut ids = vec![1, 2];
        assert_eq!(merge_campsites(&mut ids, &[2, 1]), 0);
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn merge_collapses_repeats_within_the_batch() {
        let mut ids = vec![1];
        assert_eq!(merge_campsites(&mut ids, &[3, 3]), 1);
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut ids = vec![5, 6, 7, 8];
        assert_eq!(remove_campsite(&mut ids, 6), Removal::Removed);
        assert_eq!(ids, vec![5, 7, 8]);
    }

    #[test]
    fn remove_last_entry_leaves_empty_list() {
        let mut ids = vec![5];
        assert_eq!(remove_campsite(&mut ids, 5), Removal::Removed);
        assert!(ids.is_empty());
        assert_eq!(remove_campsite(&mut ids, 5), Removal::Empty);
    }

    #[test]
    fn remove_missing_id_reports_not_in_list() {
        let mut ids = vec![5, 6];
        assert_eq!(remove_campsite(&mut ids, 42), Removal::NotInList);
        assert_eq!(ids, vec![5, 6]);
    }

    #[test]
    fn first_duplicate_finds_repeat() {
        assert_eq!(first_duplicate(&[1, 2, 3]), None);
        assert_eq!(first_duplicate(&[1, 2, 1, 2]), Some(1));
        assert_eq!(first_duplicate(&[]), None);
    }

    #[test]
    fn add_single_appends_once() {
        let mut ids = vec![3];
        assert!(add_campsite(&mut ids, 4));
        assert!(!add_campsite(&mut ids, 3));
        assert!(!add_campsite(&mut ids, 4));
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn notices_render_ids_and_names() {
        let notice = FavoriteNotice::AlreadyFavorite {
            name: "React Lake Campground".to_string(),
            campsite_id: 1,
        };
        assert_eq!(
            notice.to_string(),
            "React Lake Campground (id: 1) is already a favorite campsite"
        );
        assert_eq!(
            FavoriteNotice::InvalidCampsite { campsite_id: 9 }.to_string(),
            "Campsite with id 9 is not a valid campsite"
        );
        assert_eq!(
            FavoriteNotice::NoFavorites { user_id: 2 }.to_string(),
            "There are no favorites for this user (id: 2) to delete."
        );
    }
}
