//! Projections over the user directory.
//!
//! Each function reads every record in directory order and extracts one
//! field (or part of one). None of them can fail: where a record has no
//! value to contribute, the entry is `None` and serializes as JSON `null`.

use crate::models::user::{HobbyRecord, UserRecord};

/// Names of all users, in record order.
pub fn names(users: &[UserRecord]) -> Vec<&str> {
    users.iter().map(|user| user.name.as_str()).collect()
}

/// Locations of all users, in record order.
pub fn locations(users: &[UserRecord]) -> Vec<&str> {
    users.iter().map(|user| user.location.as_str()).collect()
}

/// Full occupation history of every user, one entry per record.
pub fn occupations(users: &[UserRecord]) -> Vec<&[String]> {
    users.iter().map(|user| user.occupation.as_slice()).collect()
}

/// Most recent occupation of every user.
///
/// A user with no occupations yields `None`.
pub fn latest_occupations(users: &[UserRecord]) -> Vec<Option<&str>> {
    users.iter().map(UserRecord::latest_occupation).collect()
}

/// One hobby per user, picked by position.
///
/// With `index = None` the user at position `i` contributes its own
/// `hobbies[i]`. This pairing of record position with hobby position is the
/// long-standing behavior of `GET /hobbies` and is kept as is. With
/// `index = Some(n)` every user contributes `hobbies[n]`.
///
/// Out-of-range positions yield `None`.
pub fn hobbies_at(users: &[UserRecord], index: Option<usize>) -> Vec<Option<&HobbyRecord>> {
    users
        .iter()
        .enumerate()
        .map(|(position, user)| user.hobbies.get(index.unwrap_or(position)))
        .collect()
}

/// Names of every hobby whose type equals `kind` exactly.
///
/// Results are flattened across users: record order first, then hobby order
/// within each record.
pub fn hobby_names_of_type<'a>(users: &'a [UserRecord], kind: &str) -> Vec<&'a str> {
    users
        .iter()
        .flat_map(|user| user.hobbies.iter())
        .filter(|hobby| hobby.kind == kind)
        .map(|hobby| hobby.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::UserDirectory;

    fn user(name: &str, occupation: &[&str], hobbies: &[(&str, &str)]) -> UserRecord {
        UserRecord {
            name: name.to_string(),
            location: format!("{name} town"),
            occupation: occupation.iter().map(|o| o.to_string()).collect(),
            hobbies: hobbies
                .iter()
                .map(|(n, k)| HobbyRecord::new(*n, *k))
                .collect(),
        }
    }

    #[test]
    fn names_and_locations_follow_record_order() {
        let seed = UserDirectory::seed();
        assert_eq!(names(seed.records()), ["Donald Duck", "Mickey Mouse"]);
        assert_eq!(locations(seed.records()), ["NYC", "Orlando"]);
    }

    #[test]
    fn occupations_are_unmodified() {
        let seed = UserDirectory::seed();
        let projected = occupations(seed.records());
        assert_eq!(projected.len(), 2);
        for (entry, record) in projected.iter().zip(seed.records()) {
            assert_eq!(*entry, record.occupation.as_slice());
        }
    }

    #[test]
    fn latest_occupation_is_none_for_empty_history() {
        let users = vec![
            user("a", &["first", "second"], &[]),
            user("b", &[], &[]),
        ];
        assert_eq!(latest_occupations(&users), [Some("second"), None]);
    }

    #[test]
    fn hobbies_pair_record_position_with_hobby_position() {
        let seed = UserDirectory::seed();
        let picked = hobbies_at(seed.records(), None);
        assert_eq!(
            picked,
            [
                Some(&HobbyRecord::new("Chilling", "current")),
                Some(&HobbyRecord::new("Billiards", "past")),
            ]
        );
    }

    #[test]
    fn hobbies_out_of_range_is_none() {
        let users = vec![
            user("a", &[], &[("x", "current")]),
            user("b", &[], &[("y", "current")]),
            user("c", &[], &[]),
        ];
        let picked = hobbies_at(&users, None);
        assert_eq!(picked, [Some(&HobbyRecord::new("x", "current")), None, None]);
    }

    #[test]
    fn explicit_hobby_index_applies_to_every_record() {
        let seed = UserDirectory::seed();
        let picked = hobbies_at(seed.records(), Some(0));
        assert_eq!(
            picked,
            [
                Some(&HobbyRecord::new("Chilling", "current")),
                Some(&HobbyRecord::new("Hangin with Minnie", "current")),
            ]
        );
        assert_eq!(hobbies_at(seed.records(), Some(7)), [None::<&HobbyRecord>, None]);
    }

    #[test]
    fn hobby_type_filter_flattens_in_order() {
        let seed = UserDirectory::seed();
        assert_eq!(
            hobby_names_of_type(seed.records(), "current"),
            ["Chilling", "Hangin with Minnie"]
        );
        assert_eq!(
            hobby_names_of_type(seed.records(), "past"),
            ["swimming", "Billiards"]
        );
        assert!(hobby_names_of_type(seed.records(), "nonexistent").is_empty());
    }

    #[test]
    fn hobby_type_filter_is_case_sensitive() {
        let seed = UserDirectory::seed();
        assert!(hobby_names_of_type(seed.records(), "Past").is_empty());
    }
}
