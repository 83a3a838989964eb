//! Client-side search, sort and pagination over a fetched user list.
//!
//! Everything here is a pure function of the collection and a [`UserQuery`];
//! the views memoize the result and keep no other copy.

use std::cmp::Ordering;

use dioxus_logger::tracing;
use icu_collator::{Collator, CollatorOptions};

use crate::user::User;

/// Number of users shown on one page.
pub const PAGE_SIZE: usize = 5;

/// Direction of the by-name sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Short label for the sort button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "A-Z",
            Self::Descending => "Z-A",
        }
    }
}

/// The visitor's current search text, sort direction and page (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    search: String,
    sort_order: SortOrder,
    page: usize,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_order: SortOrder::default(),
            page: 1,
        }
    }
}

impl UserQuery {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replaces the search text and goes back to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggled();
    }

    /// Moves to `page`. No clamping: the pagination controls disable
    /// out-of-range targets.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }
}

/// Position of the current page within the filtered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageInfo {
    pub current: usize,
    pub total_pages: usize,
}

impl PageInfo {
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }
}

/// The users visible on the current page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserPage {
    pub users: Vec<User>,
    pub info: PageInfo,
}

/// Orders names by Unicode collation (root locale, tertiary strength) with the
/// exact string as tie-breaker, so that distinct names never compare equal.
///
/// Accents are secondary differences and case is tertiary: "Émile" sorts
/// between "Adam" and "Zoe", and "bob" sorts before "Bob".
pub struct NameCollation {
    collator: Option<Collator>,
}

impl NameCollation {
    pub fn new() -> Self {
        let collator = Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|e| {
                tracing::warn!("root collation unavailable, ordering names by code point: {}", e)
            })
            .ok();
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let primary = match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        };
        primary.then_with(|| a.cmp(b))
    }
}

impl Default for NameCollation {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off comparison of two names. Sorting code should hold a
/// [`NameCollation`] instead of calling this per pair.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameCollation::new().compare(a, b)
}

/// Filters by name and sorts. This is the full result before pagination.
pub fn filter_and_sort<'a>(users: &'a [User], search: &str, order: SortOrder) -> Vec<&'a User> {
    let needle = search.to_lowercase();
    let mut matching: Vec<&User> = users
        .iter()
        .filter(|user| user.name.to_lowercase().contains(&needle))
        .collect();

    let collation = NameCollation::new();
    matching.sort_by(|a, b| {
        let ordering = collation.compare(&a.name, &b.name);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    matching
}

pub fn total_pages(matching: usize) -> usize {
    matching.div_ceil(PAGE_SIZE)
}

/// Runs the filter, sort and paginate pipeline for `query`.
///
/// A page past the end yields no users; `info` still reports the page asked for.
pub fn derive_page(users: &[User], query: &UserQuery) -> UserPage {
    let matching = filter_and_sort(users, &query.search, query.sort_order);
    let info = PageInfo {
        current: query.page,
        total_pages: total_pages(matching.len()),
    };

    let start = query.page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    let users = matching
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    UserPage { users, info }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::tests::user;
    use proptest::prelude::*;

    fn alphabet_users() -> Vec<User> {
        // ids follow alphabetical order; stored shuffled to exercise sorting
        let names = ["G", "B", "L", "A", "K", "C", "J", "E", "D", "I", "F", "H"];
        names
            .iter()
            .map(|name| {
                let id = (name.as_bytes()[0] - b'A' + 1) as u64;
                user(id, name)
            })
            .collect()
    }

    fn names(page: &UserPage) -> Vec<&str> {
        page.users.iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn twelve_users_first_page() {
        let page = derive_page(&alphabet_users(), &UserQuery::default());

        assert_eq!(names(&page), ["A", "B", "C", "D", "E"]);
        assert_eq!(
            page.users.iter().map(|u| u.id).collect::<Vec<_>>(),
            [1, 2, 3, 4, 5]
        );
        assert_eq!(page.info.total_pages, 3);
        assert!(!page.info.has_previous());
        assert!(page.info.has_next());
    }

    #[test]
    fn twelve_users_last_page() {
        let mut query = UserQuery::default();
        query.go_to_page(3);
        let page = derive_page(&alphabet_users(), &query);

        assert_eq!(names(&page), ["K", "L"]);
        assert!(page.info.has_previous());
        assert!(!page.info.has_next());
    }

    #[test]
    fn search_without_match_is_empty() {
        let mut query = UserQuery::default();
        query.set_search("zz");
        let page = derive_page(&alphabet_users(), &query);

        assert!(page.users.is_empty());
        assert_eq!(page.info.total_pages, 0);
        assert!(!page.info.has_previous());
        assert!(!page.info.has_next());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let users = vec![
            user(1, "Leanne Graham"),
            user(2, "Ervin Howell"),
            user(3, "Clementine Bauch"),
        ];
        let mut query = UserQuery::default();
        query.set_search("GRAH");
        let page = derive_page(&users, &query);

        assert_eq!(names(&page), ["Leanne Graham"]);
    }

    #[test]
    fn descending_reverses_order() {
        let mut query = UserQuery::default();
        query.toggle_sort();
        let page = derive_page(&alphabet_users(), &query);

        assert_eq!(query.sort_order().label(), "Z-A");
        assert_eq!(names(&page), ["L", "K", "J", "I", "H"]);
    }

    #[test]
    fn setting_search_resets_page() {
        let mut query = UserQuery::default();
        query.go_to_page(3);
        query.set_search("a");
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn toggling_sort_keeps_page() {
        let mut query = UserQuery::default();
        query.go_to_page(2);
        query.toggle_sort();
        assert_eq!(query.page(), 2);
    }

    #[test]
    fn go_to_page_does_not_clamp() {
        let mut query = UserQuery::default();
        query.go_to_page(9);
        let page = derive_page(&alphabet_users(), &query);

        assert!(page.users.is_empty());
        assert_eq!(page.info.current, 9);
        assert_eq!(page.info.total_pages, 3);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let users = vec![user(1, "Zoe"), user(2, "Émile"), user(3, "Adam")];
        let page = derive_page(&users, &UserQuery::default());

        assert_eq!(names(&page), ["Adam", "Émile", "Zoe"]);
    }

    #[test]
    fn lowercase_sorts_before_uppercase_on_case_ties() {
        let users = vec![user(1, "Bob"), user(2, "alice"), user(3, "bob")];
        let page = derive_page(&users, &UserQuery::default());

        assert_eq!(names(&page), ["alice", "bob", "Bob"]);
    }

    #[test]
    fn name_comparison_is_total() {
        assert_eq!(compare_names("alice", "Bob"), Ordering::Less);
        assert_eq!(compare_names("bob", "Bob"), Ordering::Less);
        assert_eq!(compare_names("Ångström", "Zed"), Ordering::Less);
        assert_eq!(compare_names("bob", "bob"), Ordering::Equal);
    }

    fn arb_users() -> impl Strategy<Value = Vec<User>> {
        prop::collection::vec("[A-Za-z ]{1,8}", 0..40).prop_map(|names| {
            names
                .iter()
                .enumerate()
                .map(|(i, name)| user(i as u64, name))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn pages_concatenate_to_filtered_sequence(users in arb_users(), search in "[a-z]{0,2}") {
            let mut query = UserQuery::default();
            query.set_search(search.clone());
            let expected: Vec<u64> = filter_and_sort(&users, &search, SortOrder::Ascending)
                .iter()
                .map(|u| u.id)
                .collect();

            let total = derive_page(&users, &query).info.total_pages;
            prop_assert_eq!(total, expected.len().div_ceil(PAGE_SIZE));

            let mut seen = Vec::new();
            for page in 1..=total {
                query.go_to_page(page);
                let result = derive_page(&users, &query);
                prop_assert!(!result.users.is_empty());
                prop_assert!(result.users.len() <= PAGE_SIZE);
                seen.extend(result.users.iter().map(|u| u.id));
            }
            prop_assert_eq!(seen, expected);
        }

        #[test]
        fn toggling_sort_reverses_visible_order(users in arb_users(), search in "[a-z]?") {
            let ascending: Vec<u64> = filter_and_sort(&users, &search, SortOrder::Ascending)
                .iter()
                .map(|u| u.id)
                .collect();
            let mut descending: Vec<u64> = filter_and_sort(&users, &search, SortOrder::Descending)
                .iter()
                .map(|u| u.id)
                .collect();
            descending.reverse();

            // equal names keep their relative order under a stable sort,
            // so compare by name rather than id
            let name_of = |id: &u64| users.iter().find(|u| u.id == *id).map(|u| u.name.clone());
            prop_assert_eq!(
                ascending.iter().map(name_of).collect::<Vec<_>>(),
                descending.iter().map(name_of).collect::<Vec<_>>()
            );
        }

        #[test]
        fn known_name_substring_is_found(users in arb_users(), start in 0usize..8, len in 1usize..4) {
            prop_assume!(!users.is_empty());
            let target = &users[0];
            let chars: Vec<char> = target.name.chars().collect();
            prop_assume!(start < chars.len());
            let end = (start + len).min(chars.len());
            let needle: String = chars[start..end].iter().collect::<String>().to_uppercase();

            let matching = filter_and_sort(&users, &needle, SortOrder::Ascending);
            prop_assert!(matching.iter().any(|u| u.id == target.id));
        }
    }
}
