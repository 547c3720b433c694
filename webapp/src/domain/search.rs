//! Free-text filtering of the user list.

use super::User;

/// `true` when `term` occurs in the user's name or email, ignoring case.
///
/// A term that is blank after trimming matches every record.
///
/// # Examples
/// ```
/// use webapp::domain::{search::matches, User, UserId};
///
/// let user = User::new(UserId::Number(1), "Alice", "a@x.com");
/// assert!(matches(&user, ""));
/// assert!(matches(&user, "ALI"));
/// assert!(!matches(&user, "bob"));
/// ```
#[must_use]
pub fn matches(user: &User, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    user.name().to_lowercase().contains(&needle) || user.email().to_lowercase().contains(&needle)
}

/// Users matching `term`, in their original order.
pub fn filter_users<'a>(users: &'a [User], term: &'a str) -> impl Iterator<Item = &'a User> {
    users.iter().filter(move |user| matches(user, term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use rstest::{fixture, rstest};

    #[fixture]
    fn users() -> Vec<User> {
        vec![
            User::new(UserId::Number(1), "Alice Liddell", "alice@wonder.land"),
            User::new(UserId::Number(2), "Bob Stone", "bob@quarry.io"),
            User::new(UserId::Text("c3".to_owned()), "Carol", "carol@ALICE.dev"),
        ]
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_term_matches_everyone(users: Vec<User>, #[case] term: &str) {
        assert!(users.iter().all(|user| matches(user, term)));
    }

    #[rstest]
    fn full_name_and_full_email_match_their_owner(users: Vec<User>) {
        for user in &users {
            assert!(matches(user, user.name()));
            assert!(matches(user, user.email()));
        }
    }

    #[rstest]
    fn filter_keeps_collection_order(users: Vec<User>) {
        let ids: Vec<_> = filter_users(&users, "alice")
            .map(|user| user.id().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "c3"]);
    }

    #[rstest]
    fn unmatched_term_filters_everything(users: Vec<User>) {
        assert_eq!(filter_users(&users, "zed").count(), 0);
    }
}
