//! # Filter Stage
//!
//! Derives the visible feed from the content store and the selected category.

use crate::core::content::{ALL_CATEGORY, Article};

/// Articles visible under `category_id`, in store order.
///
/// `"all"` returns every article. An id no article uses gives an empty list;
/// that is ordinary filtering, not an error.
pub fn filter<'a>(articles: &'a [Article], category_id: &str) -> Vec<&'a Article> {
    if category_id == ALL_CATEGORY {
        return articles.iter().collect();
    }
    articles
        .iter()
        .filter(|article| article.category == category_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::ContentStore;
    use proptest::prelude::*;

    fn ids(articles: &[&Article]) -> Vec<u32> {
        articles.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_technology_keeps_relative_order() {
        let store = ContentStore::sample();
        assert_eq!(ids(&filter(store.articles(), "technology")), vec![2, 4, 5]);
    }

    #[test]
    fn test_all_returns_everything() {
        let store = ContentStore::sample();
        assert_eq!(ids(&filter(store.articles(), "all")), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_single_match_categories() {
        let store = ContentStore::sample();
        assert_eq!(ids(&filter(store.articles(), "environment")), vec![1]);
        assert_eq!(ids(&filter(store.articles(), "economics")), vec![3]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let store = ContentStore::sample();
        assert!(filter(store.articles(), "sports").is_empty());
        assert!(filter(store.articles(), "").is_empty());
    }

    fn article(id: u32, category: &str) -> Article {
        Article {
            id,
            title: format!("Article {id}"),
            short_summary: String::new(),
            full_text: String::new(),
            read_time: "1 min read".to_string(),
            category: category.to_string(),
            quiz: Vec::new(),
        }
    }

    fn category_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("technology".to_string()),
            Just("environment".to_string()),
            Just("economics".to_string()),
            Just("all".to_string()),
            Just("sports".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn prop_filter_is_ordered_exact_subsequence(
            categories in prop::collection::vec(category_strategy(), 0..20),
            wanted in category_strategy(),
        ) {
            // "all" is never an article category in a valid store
            let articles: Vec<Article> = categories
                .iter()
                .enumerate()
                .filter(|(_, c)| c.as_str() != ALL_CATEGORY)
                .map(|(i, c)| article(i as u32, c))
                .collect();

            let result = filter(&articles, &wanted);

            let expected: Vec<u32> = articles
                .iter()
                .filter(|a| wanted == ALL_CATEGORY || a.category == wanted)
                .map(|a| a.id)
                .collect();
            prop_assert_eq!(ids(&result), expected);
        }

        #[test]
        fn prop_filter_is_idempotent(
            categories in prop::collection::vec(category_strategy(), 0..20),
            wanted in category_strategy(),
        ) {
            let articles: Vec<Article> = categories
                .iter()
                .enumerate()
                .map(|(i, c)| article(i as u32, c))
                .collect();

            let first = filter(&articles, &wanted);
            let second = filter(&articles, &wanted);
            prop_assert_eq!(first, second);
        }
    }
}
