//! FuzzySet properties: idempotent insertion, self-match, threshold monotonicity.

use super::common::assert_ranked;
use gramset::{normalize, FuzzySet};
use proptest::prelude::*;

/// Generate random word-like strings.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{1,8}( [a-z]{1,6})?").unwrap()
}

/// Generate a corpus of entries.
fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Adding everything twice changes nothing observable.
    #[test]
    fn prop_insertion_idempotent(corpus in corpus_strategy(), query in word_strategy()) {
        let once = FuzzySet::new(corpus.iter(), true, 2, 3);
        let twice = FuzzySet::new(corpus.iter().chain(corpus.iter()), true, 2, 3);

        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.stats(), twice.stats());
        prop_assert_eq!(once.get(&query), twice.get(&query));
    }

    /// len() counts distinct normalized forms.
    #[test]
    fn prop_len_counts_distinct_keys(corpus in corpus_strategy()) {
        let set = FuzzySet::new(corpus.iter(), true, 2, 3);
        let mut keys: Vec<String> = corpus.iter().map(|s| normalize(s)).collect();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(set.len(), keys.len());
        prop_assert_eq!(set.is_empty(), keys.is_empty());
        for stats in set.stats().gram_sizes {
            prop_assert!(stats.distinct_grams <= stats.postings);
        }
    }

    /// Every inserted string finds itself with a score of 1.
    #[test]
    fn prop_self_match(corpus in prop::collection::vec(word_strategy(), 1..12), use_lev in any::<bool>()) {
        let set = FuzzySet::new(corpus.iter(), use_lev, 2, 3);
        for entry in set.iter() {
            let matches = set.get(&entry.original).unwrap();
            let hit = matches.iter().find(|m| m.value == entry.original);
            prop_assert!(hit.is_some(), "{:?} not found for itself", entry.original);
            prop_assert!((hit.unwrap().score - 1.0).abs() < 1e-9);
        }
    }

    /// Raising the threshold never adds results.
    #[test]
    fn prop_threshold_monotonic(
        corpus in corpus_strategy(),
        query in word_strategy(),
        lo in 0.0f64..1.0,
        delta in 0.0f64..1.0,
    ) {
        let set = FuzzySet::new(corpus.iter(), true, 2, 3);
        let low = set.get_with_threshold(&query, lo).map_or(0, |m| m.len());
        let high = set.get_with_threshold(&query, lo + delta).map_or(0, |m| m.len());
        prop_assert!(high <= low);
    }

    /// Results are ranked and above threshold.
    #[test]
    fn prop_results_ranked(corpus in corpus_strategy(), query in word_strategy(), use_lev in any::<bool>()) {
        let set = FuzzySet::new(corpus.iter(), use_lev, 2, 3);
        if let Some(matches) = set.get(&query) {
            assert_ranked(&matches);
            prop_assert!(matches.iter().all(|m| m.score >= 0.33));
        }
    }

    /// Levenshtein refinement never returns more than the refine limit.
    #[test]
    fn prop_refinement_bounded(corpus in prop::collection::vec(word_strategy(), 0..80), query in word_strategy()) {
        let set = FuzzySet::new(corpus.iter(), true, 2, 3);
        if let Some(matches) = set.get_with_threshold(&query, f64::MIN) {
            prop_assert!(matches.len() <= 50);
        }
    }

    /// An empty set never matches.
    #[test]
    fn prop_empty_set_no_match(query in word_strategy()) {
        let set = FuzzySet::default();
        prop_assert!(set.get(&query).is_none());
    }
}
