// Copyright (c) 2025 Wordtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Property-based tests for the word trie.

use proptest::prelude::*;
use std::collections::BTreeSet;

use crate::data_structures::word_trie::{normalize, WordTrie};

// Strategy for raw words: letters of both cases mixed with noise characters
fn raw_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eA-E0-9 ,.!-]{0,8}").unwrap()
}

// Strategy for short lowercase prefixes over the same small alphabet
fn prefix_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,3}").unwrap()
}

fn build(words: &[String]) -> (WordTrie, BTreeSet<String>) {
    let trie: WordTrie = words.iter().collect();
    let model = words
        .iter()
        .map(|word| normalize(word).into_owned())
        .filter(|word| !word.is_empty())
        .collect();
    (trie, model)
}

proptest! {
    // Property: every inserted word is found under any spelling that normalizes to it
    #[test]
    fn prop_inserted_words_are_found(words in prop::collection::vec(raw_word_strategy(), 0..40)) {
        let (trie, model) = build(&words);

        for word in &words {
            prop_assert_eq!(trie.search(word), !normalize(word).is_empty());
            prop_assert_eq!(trie.search(word.to_uppercase()), !normalize(word).is_empty());
        }
        prop_assert_eq!(trie.len(), model.len());
    }

    // Property: search agrees with a set of normalized words
    #[test]
    fn prop_search_matches_model(
        words in prop::collection::vec(raw_word_strategy(), 0..40),
        probe in raw_word_strategy(),
    ) {
        let (trie, model) = build(&words);
        let normalized = normalize(&probe);
        prop_assert_eq!(trie.search(&probe), model.contains(&*normalized));
    }

    // Property: inserting the same words again changes nothing observable
    #[test]
    fn prop_insert_is_idempotent(
        words in prop::collection::vec(raw_word_strategy(), 0..30),
        prefix in prefix_strategy(),
    ) {
        let (once, _) = build(&words);
        let (mut twice, _) = build(&words);
        twice.extend(&words);

        prop_assert_eq!(once.len(), twice.len());
        prop_assert_eq!(once.node_count(), twice.node_count());
        prop_assert_eq!(once.suggest(&prefix, 0), twice.suggest(&prefix, 0));
        prop_assert_eq!(once.count_prefix(&prefix), twice.count_prefix(&prefix));
    }

    // Property: unlimited suggestions are the sorted model words with that prefix
    #[test]
    fn prop_suggest_unlimited_matches_model(
        words in prop::collection::vec(raw_word_strategy(), 0..40),
        prefix in prefix_strategy(),
    ) {
        let (trie, model) = build(&words);
        let expected: Vec<String> = model
            .iter()
            .filter(|word| word.starts_with(prefix.as_str()))
            .cloned()
            .collect();

        prop_assert_eq!(trie.suggest(&prefix, 0), expected.clone());
        prop_assert_eq!(trie.count_prefix(&prefix), expected.len());
    }

    // Property: a capped result is a prefix of the unlimited result
    #[test]
    fn prop_suggest_limit_is_prefix(
        words in prop::collection::vec(raw_word_strategy(), 0..40),
        prefix in prefix_strategy(),
        limit in 1usize..10,
    ) {
        let (trie, _) = build(&words);
        let all = trie.suggest(&prefix, 0);
        let capped = trie.suggest(&prefix, limit);

        prop_assert_eq!(capped.len(), all.len().min(limit));
        prop_assert_eq!(&all[..capped.len()], &capped[..]);
    }

    // Property: node count is one plus the number of distinct non-empty prefixes
    #[test]
    fn prop_node_count_matches_prefixes(words in prop::collection::vec(raw_word_strategy(), 0..40)) {
        let (trie, model) = build(&words);
        let prefixes: BTreeSet<&str> = model
            .iter()
            .flat_map(|word| (1..=word.len()).map(move |end| &word[..end]))
            .collect();

        prop_assert_eq!(trie.node_count(), prefixes.len() + 1);

        let mut out = Vec::new();
        trie.write_dot(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        prop_assert_eq!(text.matches("->").count(), prefixes.len());
    }
}
