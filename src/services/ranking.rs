use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::TitleSummary;

/// Keeps titles in `genre` with a valid rating, dropping repeated canonical keys
///
/// First occurrence wins and input order is preserved; nothing is sorted.
pub fn filter_and_dedup(items: Vec<TitleSummary>, genre: &str) -> Vec<TitleSummary> {
    let mut seen = HashSet::new();

    items
        .into_iter()
        .filter(|item| item.has_genre(genre) && item.rating_value().is_some())
        .filter(|item| seen.insert(item.canonical_key()))
        .collect()
}

/// Ranks titles by rating descending, dedups by canonical key and keeps at most `limit`
pub fn dedup_and_bound(items: Vec<TitleSummary>, limit: usize) -> Vec<TitleSummary> {
    let mut rated: Vec<(f64, TitleSummary)> = items
        .into_iter()
        .filter_map(|item| item.rating_value().map(|rating| (rating, item)))
        .collect();

    sort_by_rating(&mut rated);

    let mut seen = HashSet::new();
    rated
        .into_iter()
        .map(|(_, item)| item)
        .filter(|item| seen.insert(item.canonical_key()))
        .take(limit)
        .collect()
}

// Stable, so equal ratings keep discovery order.
fn sort_by_rating(rated: &mut [(f64, TitleSummary)]) {
    rated.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, year: &str, rating: &str, genre: &str) -> TitleSummary {
        TitleSummary {
            title: title.to_string(),
            year: year.to_string(),
            rating: rating.to_string(),
            genres: genre.to_string(),
            director: "Someone".to_string(),
            synopsis: String::new(),
        }
    }

    fn titles(items: &[TitleSummary]) -> Vec<&str> {
        items.iter().map(|item| item.title.as_str()).collect()
    }

    fn assert_ranked(items: &[TitleSummary]) {
        for pair in items.windows(2) {
            assert!(pair[0].rating_value() >= pair[1].rating_value());
        }
        let keys: HashSet<String> = items.iter().map(TitleSummary::canonical_key).collect();
        assert_eq!(keys.len(), items.len());
    }

    #[test]
    fn test_filter_and_dedup_keeps_first_occurrence_in_order() {
        let items = vec![
            movie("Superbad", "2007", "7.6", "Comedy"),
            movie("Heat", "1995", "8.3", "Crime, Drama"),
            movie("Airplane!", "1980", "7.7", "Comedy"),
            movie("SUPERBAD", "2007", "9.9", "Comedy"),
            movie("Step Brothers", "2008", "N/A", "Comedy"),
        ];

        let result = filter_and_dedup(items, "comedy");
        assert_eq!(titles(&result), vec!["Superbad", "Airplane!"]);
        assert_eq!(result[0].rating, "7.6");
    }

    #[test]
    fn test_filter_and_dedup_same_title_different_year_is_distinct() {
        let items = vec![
            movie("Dune", "1984", "6.3", "Sci-Fi"),
            movie("Dune", "2021", "8.0", "Sci-Fi"),
        ];
        assert_eq!(filter_and_dedup(items, "Sci-Fi").len(), 2);
    }

    #[test]
    fn test_dedup_and_bound_sorts_descending() {
        let items = vec![
            movie("B", "2000", "6.1", "Drama"),
            movie("A", "2000", "8.9", "Drama"),
            movie("C", "2000", "7.5", "Drama"),
        ];

        let result = dedup_and_bound(items, 10);
        assert_eq!(titles(&result), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_dedup_and_bound_keeps_highest_rated_duplicate() {
        let items = vec![
            movie("Alien", "1979", "7.0", "Horror"),
            movie("alien", "1979", "8.5", "Horror"),
        ];

        let result = dedup_and_bound(items, 10);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].rating, "8.5");
    }

    #[test]
    fn test_dedup_and_bound_ties_keep_discovery_order() {
        let items = vec![
            movie("First", "2001", "7.0", "Drama"),
            movie("Second", "2002", "7.0", "Drama"),
            movie("Third", "2003", "7.0", "Drama"),
        ];

        let result = dedup_and_bound(items, 10);
        assert_eq!(titles(&result), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_dedup_and_bound_respects_limit() {
        let items: Vec<TitleSummary> = (0..30)
            .map(|i| movie(&format!("Movie {}", i), "2010", &format!("{}.0", i % 9 + 1), "Drama"))
            .collect();

        assert_eq!(dedup_and_bound(items.clone(), 20).len(), 20);
        assert_eq!(dedup_and_bound(items.clone(), 30).len(), 30);
        assert!(dedup_and_bound(items.clone(), 0).is_empty());
        assert!(dedup_and_bound(vec![], 5).is_empty());
        assert_ranked(&dedup_and_bound(items, 20));
    }

    #[test]
    fn test_invalid_ratings_never_ranked() {
        let items = vec![
            movie("Empty", "2000", "", "Drama"),
            movie("Missing", "2000", "N/A", "Drama"),
            movie("Words", "2000", "excellent", "Drama"),
            movie("Zero", "2000", "0.0", "Drama"),
            movie("Valid", "2000", "5.5", "Drama"),
        ];

        assert_eq!(titles(&dedup_and_bound(items.clone(), 10)), vec!["Valid"]);
        assert_eq!(titles(&filter_and_dedup(items, "Drama")), vec!["Valid"]);
    }

    #[test]
    fn test_dedup_and_bound_is_idempotent() {
        let items = vec![
            movie("Up", "2009", "8.3", "Animation"),
            movie("Coco", "2017", "8.4", "Animation"),
            movie("up", "2009", "8.3", "Animation"),
            movie("Cars", "2006", "7.2", "Animation"),
            movie("Bolt", "2008", "N/A", "Animation"),
        ];

        let once = dedup_and_bound(items, 3);
        let twice = dedup_and_bound(once.clone(), 3);
        assert_eq!(once, twice);
        assert_ranked(&once);

        let filtered = filter_and_dedup(once.clone(), "Animation");
        assert_eq!(filter_and_dedup(filtered.clone(), "Animation"), filtered);
    }
}
