//! Provides Trie iterators.
//!
//! Words are yielded in pre-order: a word comes before every longer word
//! it is a prefix of, and siblings come in the order they were first
//! inserted. Use [`crate::trie::Trie::iter_sorted`] for lexicographic order.
//!
//! ```
//! use lexitrie::trie::TrieString;
//!
//! let trie: TrieString = ["car", "cart", "cat"].iter().map(|w| w.chars()).collect();
//! let words: Vec<String> = trie
//!     .iter_prefix("car".chars())
//!     .map(|kv| kv.key.into_iter().collect())
//!     .collect();
//! assert_eq!(words, vec!["car", "cart"]);
//! ```
use crate::trie::{release, Node, Trie, TrieAtom};

/// Iterator Item
#[derive(Clone, Debug, PartialEq)]
pub struct KeyValue<A, V> {
    pub key: Vec<A>,
    pub value: Option<V>,
}

/// Iterator Item
#[derive(Clone, Debug, PartialEq)]
pub struct KeyValueRef<'a, A, V> {
    pub key: Vec<A>,
    pub value: Option<&'a V>,
}

/// Consuming iterator over a Trie.
#[derive(Debug)]
pub struct TrieIntoIterator<A, V> {
    key: Vec<A>,
    pending: Option<KeyValue<A, V>>,
    // Each node is paired with the key length of its parent.
    stack: Vec<(Node<A, V>, usize)>,
}

impl<A: TrieAtom, V> TrieIntoIterator<A, V> {
    fn new(mut head: Node<A, V>) -> Self {
        let pending = head.terminal.then(|| KeyValue {
            key: vec![],
            value: head.value.take(),
        });
        let stack = std::mem::take(&mut head.children)
            .into_iter()
            .rev()
            .map(|child| (child, 0))
            .collect();
        Self {
            key: vec![],
            pending,
            stack,
        }
    }
}

impl<A: TrieAtom, V> IntoIterator for Trie<A, V> {
    type Item = KeyValue<A, V>;
    type IntoIter = TrieIntoIterator<A, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let head = std::mem::replace(&mut self.head, Node::new(A::default()));
        TrieIntoIterator::new(head)
    }
}

impl<A: TrieAtom, V> Iterator for TrieIntoIterator<A, V> {
    type Item = KeyValue<A, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.pending.take() {
            return Some(item);
        }
        while let Some((mut node, depth)) = self.stack.pop() {
            self.key.truncate(depth);
            self.key.push(node.atom);
            let children = std::mem::take(&mut node.children);
            self.stack
                .extend(children.into_iter().rev().map(|child| (child, depth + 1)));
            if node.terminal {
                return Some(KeyValue {
                    key: self.key.clone(),
                    value: node.value.take(),
                });
            }
        }
        None
    }
}

impl<A, V> Drop for TrieIntoIterator<A, V> {
    fn drop(&mut self) {
        release(self.stack.drain(..).map(|(node, _)| node).collect());
    }
}

/// Iterator over a Trie.
#[derive(Debug)]
pub struct TrieRefIntoIterator<'a, A, V> {
    key: Vec<A>,
    pending: Option<KeyValueRef<'a, A, V>>,
    stack: Vec<(&'a Node<A, V>, usize)>,
}

impl<'a, A: TrieAtom, V> TrieRefIntoIterator<'a, A, V> {
    /// Iterate the words below start, each prefixed with key.
    pub(crate) fn new(start: Option<&'a Node<A, V>>, key: Vec<A>) -> Self {
        let mut pending = None;
        let mut stack = vec![];
        if let Some(node) = start {
            if node.terminal {
                pending = Some(KeyValueRef {
                    key: key.clone(),
                    value: node.value.as_ref(),
                });
            }
            let depth = key.len();
            stack.extend(node.children.iter().rev().map(|child| (child, depth)));
        }
        Self {
            key,
            pending,
            stack,
        }
    }
}

impl<'a, A: TrieAtom, V> Iterator for TrieRefIntoIterator<'a, A, V> {
    type Item = KeyValueRef<'a, A, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.pending.take() {
            return Some(item);
        }
        while let Some((node, depth)) = self.stack.pop() {
            self.key.truncate(depth);
            self.key.push(node.atom);
            self.stack
                .extend(node.children.iter().rev().map(|child| (child, depth + 1)));
            if node.terminal {
                return Some(KeyValueRef {
                    key: self.key.clone(),
                    value: node.value.as_ref(),
                });
            }
        }
        None
    }
}

// Iterator
impl<'a, A: TrieAtom, V> IntoIterator for &'a Trie<A, V> {
    type Item = KeyValueRef<'a, A, V>;
    type IntoIter = TrieRefIntoIterator<'a, A, V>;

    fn into_iter(self) -> Self::IntoIter {
        TrieRefIntoIterator::new(Some(&self.head), vec![])
    }
}
