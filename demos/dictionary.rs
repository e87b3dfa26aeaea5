use rand::{distributions::Alphanumeric, thread_rng, Rng};
use lexitrie::trie::TrieString;

fn main() {
    static POPULATION_SIZE: usize = 10;
    static SIZE: usize = 10;

    // Create our trie and a collection of words
    let mut trie: TrieString<usize> = TrieString::new();
    let mut words = vec![];

    // Store 10 random words composed of between 1 and 10
    // characters in our word collection and our trie.
    for _i in 0..POPULATION_SIZE {
        let entry: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(thread_rng().gen_range(1..=SIZE))
            .map(char::from)
            .collect();
        trie.insert_with_value(entry.chars(), Some(entry.len()));
        words.push(entry);
    }

    println!("sorted");
    for pair in trie.iter_sorted() {
        println!(
            "word: {}, length: {:?}",
            String::from_iter(&pair.key),
            pair.value
        );
    }

    // Delete every other word and show what survives.
    for w in words.iter().step_by(2) {
        trie.delete(w.chars());
    }
    for w in &words {
        println!("{}: {}", w, trie.lookup(w.chars()));
    }
    println!("words: {}, nodes: {}", trie.count(), trie.node_count());
}
