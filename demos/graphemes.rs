use lexitrie::trie::Trie;
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    // Create our trie
    let mut trie = Trie::new();

    // Insert two words sharing their first graphemes
    let s = "a̐éö̲\r\n";
    let input = s.graphemes(true);
    let count = input.clone().count();
    trie.insert_with_value(input.clone(), Some(count));
    trie.insert_with_value("a̐é".graphemes(true), Some(2));
    assert!(trie.lookup(input.clone()));
    assert!(trie.starts_with("a̐".graphemes(true)));
    assert_eq!(trie.get(input.clone()), Some(&count));

    // Deleting the long word leaves the short one in place
    assert_eq!(trie.remove(input.clone()), Some(count));
    assert!(!trie.lookup(input));
    assert_eq!(trie.get("a̐é".graphemes(true)), Some(&2));
    println!("nodes left: {}", trie.node_count());
}
