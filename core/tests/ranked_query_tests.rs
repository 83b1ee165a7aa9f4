use autocomplete_core::{Autocompleter, Candidate, Config, TrieError, WeightedTrie};
use std::collections::HashMap;

/// Ranked query tests against a brute-force oracle.
///
/// These tests exercise the end-to-end flow:
///  - bulk construction from term/weight slices
///  - best-first top-k retrieval for every prefix/k combination
///  - the `Autocompleter` convenience layer and its TOML-backed config
///
/// The vocabulary uses pairwise-distinct weights so the oracle's expected
/// ordering is unique and the comparison can be exact.
const VOCAB: &[(&str, f64)] = &[
    ("apple", 50.0),
    ("app", 12.0),
    ("application", 75.0),
    ("apply", 3.0),
    ("ape", 31.0),
    ("apex", 64.0),
    ("banana", 20.0),
    ("band", 88.0),
    ("bandit", 7.0),
    ("bang", 41.0),
    ("bell", 4.0),
    ("bells", 90.0),
    ("belly", 26.0),
    ("cat", 15.0),
    ("cart", 99.0),
    ("carton", 1.0),
    ("car", 55.0),
    ("care", 68.0),
    ("z", 33.0),
];

fn build(vocab: &[(&str, f64)]) -> WeightedTrie {
    let terms: Vec<&str> = vocab.iter().map(|(t, _)| *t).collect();
    let weights: Vec<f64> = vocab.iter().map(|(_, w)| *w).collect();
    WeightedTrie::new(&terms, &weights).unwrap()
}

/// Full-scan reference: dedupe last-write-wins, filter by prefix, sort by
/// weight descending, truncate to k.
fn oracle(vocab: &[(&str, f64)], prefix: &str, k: usize) -> Vec<String> {
    let mut dedup: HashMap<&str, f64> = HashMap::new();
    for (term, weight) in vocab {
        dedup.insert(*term, *weight);
    }
    let mut matching: Vec<(&str, f64)> = dedup
        .into_iter()
        .filter(|(term, _)| term.starts_with(prefix))
        .collect();
    matching.sort_by(|a, b| b.1.total_cmp(&a.1));
    matching.truncate(k);
    matching.into_iter().map(|(t, _)| t.to_string()).collect()
}

#[test]
fn top_matches_agrees_with_oracle_for_all_prefixes_and_k() {
    let trie = build(VOCAB);

    // Every prefix of every stored term, plus probes that match nothing or
    // stop mid-path, for every k from 0 past the vocabulary size.
    let mut prefixes: Vec<String> = vec![String::new(), "q".into(), "apz".into(), "bellsz".into()];
    for (term, _) in VOCAB {
        for end in 1..=term.len() {
            prefixes.push(term[..end].to_string());
        }
    }

    for prefix in &prefixes {
        for k in 0..=VOCAB.len() + 2 {
            let got = trie.top_matches(prefix, k);
            let expected = oracle(VOCAB, prefix, k);
            assert_eq!(
                got, expected,
                "mismatch for prefix {prefix:?} with k = {k}"
            );
        }
    }
}

#[test]
fn top_match_agrees_with_oracle_best() {
    let trie = build(VOCAB);
    for (term, _) in VOCAB {
        for end in 0..=term.len() {
            let prefix = &term[..end];
            let expected = oracle(VOCAB, prefix, 1);
            assert_eq!(trie.top_match(prefix), expected[0], "prefix {prefix:?}");
        }
    }
    assert_eq!(trie.top_match("nope"), "");
}

#[test]
fn candidates_are_non_increasing_and_prefix_correct() {
    let trie = build(VOCAB);
    for prefix in ["", "a", "ap", "b", "ban", "c", "car"] {
        let cands = trie.top_candidates(prefix, VOCAB.len());
        for cand in &cands {
            assert!(
                cand.term.starts_with(prefix),
                "{:?} does not extend {prefix:?}",
                cand.term
            );
            assert_eq!(cand.weight, trie.weight_of(&cand.term));
        }
        for pair in cands.windows(2) {
            assert!(
                pair[0].weight >= pair[1].weight,
                "weights increased: {pair:?}"
            );
        }
    }
}

#[test]
fn insertion_order_does_not_change_results() {
    let mut reversed: Vec<(&str, f64)> = VOCAB.to_vec();
    reversed.reverse();

    let forward = build(VOCAB);
    let backward = build(&reversed);

    for prefix in ["", "a", "ap", "app", "b", "bell", "c", "car", "z"] {
        assert_eq!(
            forward.top_matches(prefix, 6),
            backward.top_matches(prefix, 6),
            "order-dependent results for prefix {prefix:?}"
        );
    }
    assert!(forward.validate());
    assert!(backward.validate());
}

#[test]
fn rebuilding_with_duplicates_matches_single_build() {
    let mut doubled: Vec<(&str, f64)> = VOCAB.to_vec();
    doubled.extend_from_slice(VOCAB);

    let single = build(VOCAB);
    let double = build(&doubled);

    assert_eq!(single.len(), double.len());
    for prefix in ["", "a", "b", "c"] {
        assert_eq!(
            single.top_matches(prefix, VOCAB.len()),
            double.top_matches(prefix, VOCAB.len())
        );
    }
}

#[test]
fn autocompleter_applies_configured_limit() {
    let terms: Vec<&str> = VOCAB.iter().map(|(t, _)| *t).collect();
    let weights: Vec<f64> = VOCAB.iter().map(|(_, w)| *w).collect();

    let config = Config {
        suggestion_limit: 3,
    };
    let ac = Autocompleter::from_pairs(&terms, &weights, config).unwrap();

    let suggestions = ac.suggest("a");
    assert_eq!(suggestions.len(), 3);
    assert_eq!(
        suggestions,
        vec![
            Candidate::new("application", 75.0),
            Candidate::new("apex", 64.0),
            Candidate::new("apple", 50.0),
        ]
    );

    // Explicit cap overrides the configured default.
    assert_eq!(ac.suggest_n("a", 1).len(), 1);
    assert_eq!(ac.suggest_n("a", 100).len(), 6);

    // Direct trie access answers the plain-string queries.
    assert_eq!(ac.trie().top_match("ban"), "band");
}

#[test]
fn autocompleter_propagates_construction_errors() {
    let err = Autocompleter::from_pairs(&["a"], &[1.0, 2.0], Config::default()).unwrap_err();
    assert_eq!(
        err,
        TrieError::LengthMismatch {
            terms: 1,
            weights: 2
        }
    );

    let err = Autocompleter::from_pairs(&["a"], &[-3.0], Config::default()).unwrap_err();
    assert!(matches!(err, TrieError::NegativeWeight { .. }));
}

#[test]
fn config_toml_round_trip() {
    let config = Config {
        suggestion_limit: 7,
    };
    let text = config.to_toml_string().unwrap();
    let parsed = Config::from_toml_str(&text).unwrap();
    assert_eq!(parsed.suggestion_limit, 7);

    let defaults = Config::from_toml_str("suggestion_limit = 25\n").unwrap();
    assert_eq!(defaults.suggestion_limit, 25);
}
