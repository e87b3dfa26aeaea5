use lexitrie::trie::{Trie, TrieString};
use lexitrie::TrieError;
use tracing::Level;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn mixed_case_words_are_distinct() {
    init_tracing();
    let mut trie: TrieString = Trie::new();
    trie.insert("Cat".chars());
    trie.insert("cat".chars());

    assert!(trie.lookup("Cat".chars()));
    assert!(trie.lookup("cat".chars()));
    assert!(!trie.lookup("ca".chars()));
    assert!(!trie.lookup("c".chars()));
    assert!(trie.starts_with("ca".chars()));
    assert!(trie.starts_with("C".chars()));
}

#[test]
fn deleting_a_word_keeps_its_siblings() {
    init_tracing();
    let mut trie: TrieString = Trie::new();
    trie.insert("cat".chars());
    trie.insert("call".chars());
    trie.delete("cat".chars());
    assert!(!trie.lookup("cat".chars()));
    assert!(trie.lookup("call".chars()));

    trie.insert("back".chars());
    trie.insert("backly".chars());
    trie.insert("backl".chars());
    trie.delete("backl".chars());
    assert!(!trie.lookup("backl".chars()));
    assert!(trie.lookup("backly".chars()));
    assert!(trie.lookup("back".chars()));
    assert!(trie.lookup("call".chars()));
}

#[test]
fn empty_word_round_trip() {
    init_tracing();
    let mut trie: TrieString = Trie::new();
    assert!(!trie.lookup("".chars()));
    trie.insert("".chars());
    assert!(trie.lookup("".chars()));
    trie.delete("".chars());
    assert!(!trie.lookup("".chars()));
    assert_eq!(trie.node_count(), 0);
}

#[test]
fn missing_keys_are_rejected_without_mutation() {
    init_tracing();
    let mut trie: TrieString = Trie::new();
    trie.insert("cat".chars());
    let err = trie.try_delete(None::<std::str::Chars<'_>>).unwrap_err();
    assert_eq!(err, TrieError::MissingKey { operation: "delete" });
    assert!(trie.lookup("cat".chars()));
    assert_eq!(trie.count(), 1);
}

#[test]
fn clearing_releases_every_node() {
    init_tracing();
    let mut trie: TrieString<usize> = ["a", "ab", "abc", "b"].iter().map(|w| w.chars()).collect();
    assert_eq!(trie.node_count(), 4);
    trie.clear();
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 0);
    assert!(!trie.starts_with("a".chars()));
}
