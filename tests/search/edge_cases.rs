//! Empty strings, empty sets, and inputs with nothing alphanumeric.

use gramset::{FuzzySet, Match};

#[test]
fn empty_set() {
    let set = FuzzySet::default();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert_eq!(set.values().count(), 0);
    assert!(set.get("anything").is_none());
    let fallback = vec![Match::new(0.0, "default")];
    assert_eq!(set.get_or("anything", fallback.clone(), 0.33), fallback);
}

#[test]
fn empty_string_is_a_valid_entry() {
    let mut set = FuzzySet::default();
    set.add("");
    set.add("!!!");
    assert_eq!(set.len(), 1);

    let matches = set.get("").unwrap();
    assert_eq!(matches[0].value, "");
    assert_eq!(matches[0].score, 1.0);
}

#[test]
fn punctuation_only_query_matches_empty_entry() {
    let set = FuzzySet::new(["", "abc"], true, 2, 3);
    let matches = set.get("???").unwrap();
    assert_eq!(matches[0].value, "");
}

#[test]
fn refine_limit_smaller_than_candidates() {
    let set = FuzzySet::new(["ab"], true, 2, 3);
    // One candidate, well under the default top-50.
    assert_eq!(set.get("ab").unwrap().len(), 1);
}

#[test]
fn very_long_strings() {
    let long = "lorem ipsum dolor ".repeat(50);
    let set = FuzzySet::new([long.as_str(), "short"], true, 2, 3);
    let matches = set.get(&long).unwrap();
    assert_eq!(matches[0].value, long);
}

#[test]
fn single_gram_size_range() {
    let set = FuzzySet::new(["kitten", "sitting"], true, 2, 2);
    assert_eq!(set.stats().gram_sizes.len(), 1);
    assert!(set.get("kitten").is_some());
}

#[test]
fn default_with_explicit_threshold() {
    let set = FuzzySet::new(["abcdefghij"], true, 2, 3);
    let fallback = vec![Match::new(0.0, "default")];

    // "a" overlaps at bigram size; its edit score is 1 - 9/10.
    let loose = set.get_or("a", fallback.clone(), 0.05);
    assert_eq!(loose.len(), 1);
    assert_eq!(loose[0].value, "abcdefghij");

    // Same candidate, stricter threshold: filtered to empty, default not used.
    assert!(set.get_or("a", fallback.clone(), 0.5).is_empty());

    // No overlap at any size: the default comes back whatever the threshold.
    assert_eq!(set.get_or("xyz", fallback.clone(), 0.05), fallback);
}

#[test]
fn refinement_keeps_top_fifty_of_many_candidates() {
    let words: Vec<String> = (0..80).map(|i| format!("prefix{:03}", i)).collect();

    let set = FuzzySet::new(words.iter(), true, 2, 3);
    let refined = set.get_with_threshold("prefix", f64::MIN).unwrap();
    assert_eq!(refined.len(), 50);

    // Without refinement every candidate survives.
    let cosine = FuzzySet::new(words.iter(), false, 2, 3);
    assert_eq!(cosine.get_with_threshold("prefix", f64::MIN).unwrap().len(), 80);
}
