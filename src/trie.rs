//! Provides a prefix Trie for storing words composed of sequences of
//! atoms. A word may have an associated (optional) value.
//!
//! Atoms must support the TrieAtom trait. The interface relies on
//! iterators to insert, look up and delete words, so it is up to the user
//! to decide which atom granularity makes sense for their keys: chars,
//! grapheme clusters, whitespace separated words, numbers...
//!
//! Deleting a word prunes every node which no longer supports a stored
//! word, so words sharing a prefix with the deleted one are never
//! disturbed.
//!
//! Example 1
//! ```
//! use lexitrie::trie::TrieString;
//!
//! let mut trie: TrieString = TrieString::new();
//! trie.insert("back".chars());
//! trie.insert("backly".chars());
//! trie.insert("backl".chars());
//!
//! assert!(trie.delete("backl".chars()));
//! assert!(!trie.lookup("backl".chars()));
//! assert!(trie.lookup("backly".chars()));
//! assert!(trie.lookup("back".chars()));
//! assert!(trie.starts_with("backl".chars()));
//! ```
//!
//! Example 2
//! ```
//! use lexitrie::trie::Trie;
//! use unicode_segmentation::UnicodeSegmentation;
//!
//! let mut trie: Trie<&str, usize> = Trie::new();
//! let s = "a̐éö̲\r\n";
//! let input = s.graphemes(true);
//! trie.insert_with_value(input.clone(), Some(4));
//! assert!(trie.lookup(input.clone()));
//! assert_eq!(trie.remove(input.clone()), Some(4));
//! assert!(!trie.lookup(input));
//! assert_eq!(trie.node_count(), 0);
//! ```
//!
//! Example 3
//! ```
//! use lexitrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! let input = "the quick brown fox".split_whitespace();
//! trie.insert_with_value(input.clone(), Some(4));
//! assert!(trie.starts_with("the quick brown".split_whitespace()));
//! assert_eq!(trie.get(input.clone()), Some(&4));
//! ```

use crate::error::{required, Result, TrieError};
use crate::iterator::{KeyValueRef, TrieRefIntoIterator};
use std::fmt;
use tracing::{debug, trace};

/// Atoms which we wish to store in a Trie must implement
/// TrieAtom.
pub trait TrieAtom: Copy + Default + Ord {}

// Blanket implementation which satisfies the compiler
impl<A> TrieAtom for A where A: Copy + Default + Ord {}

/// A Trie of words made of chars. Comparison is exact, so "Cat" and "cat"
/// are distinct words.
pub type TrieString<V = ()> = Trie<char, V>;

pub(crate) struct Node<A, V> {
    pub(crate) atom: A,
    pub(crate) value: Option<V>,
    pub(crate) terminal: bool,
    pub(crate) children: Vec<Node<A, V>>,
}

impl<A: TrieAtom, V> Node<A, V> {
    pub(crate) fn new(atom: A) -> Self {
        Self {
            atom,
            value: None,
            terminal: false,
            children: vec![],
        }
    }

    fn child(&self, atom: A) -> Option<&Node<A, V>> {
        self.children.iter().find(|n| n.atom == atom)
    }

    fn child_mut(&mut self, atom: A) -> Option<&mut Node<A, V>> {
        self.children.iter_mut().find(|n| n.atom == atom)
    }

    fn child_index(&self, atom: A) -> Option<usize> {
        self.children.iter().position(|n| n.atom == atom)
    }
}

impl<A: Clone, V: Clone> Node<A, V> {
    fn with_children(&self, children: Vec<Node<A, V>>) -> Self {
        Self {
            atom: self.atom.clone(),
            value: self.value.clone(),
            terminal: self.terminal,
            children,
        }
    }
}

// Copies bottom-up with an explicit stack of (source, copied children)
// frames.
impl<A: Clone, V: Clone> Clone for Node<A, V> {
    fn clone(&self) -> Self {
        let mut top = Vec::with_capacity(self.children.len());
        let mut frames: Vec<(&Node<A, V>, Vec<Node<A, V>>)> = vec![];
        loop {
            let (src, built) = match frames.last_mut() {
                Some(&mut (src, ref mut built)) => (src, built),
                None => (self, &mut top),
            };
            if let Some(child) = src.children.get(built.len()) {
                frames.push((child, Vec::with_capacity(child.children.len())));
                continue;
            }
            match frames.pop() {
                Some((src, children)) => {
                    let node = src.with_children(children);
                    match frames.last_mut() {
                        Some((_, built)) => built.push(node),
                        None => top.push(node),
                    }
                }
                None => return self.with_children(top),
            }
        }
    }
}

// Shallow: shows how many children there are, not the children.
impl<A: fmt::Debug, V: fmt::Debug> fmt::Debug for Node<A, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("atom", &self.atom)
            .field("value", &self.value)
            .field("terminal", &self.terminal)
            .field("children", &self.children.len())
            .finish()
    }
}

/// Drop a collection of subtrees one node at a time, so that long chains
/// don't recurse through `Drop`.
pub(crate) fn release<A, V>(mut pending: Vec<Node<A, V>>) {
    while let Some(mut node) = pending.pop() {
        pending.append(&mut node.children);
    }
}

/// Stores words of atoms as chains of nodes hanging off a root.
///
/// The root carries no atom. It is only marked as a word end when the
/// empty word is inserted, and it is never pruned.
pub struct Trie<A, V = ()> {
    pub(crate) head: Node<A, V>,
    count: usize,
}

impl<A: TrieAtom, V> Default for Trie<A, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone, V: Clone> Clone for Trie<A, V> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            count: self.count,
        }
    }
}

impl<A: TrieAtom + fmt::Debug, V: fmt::Debug> fmt::Debug for Trie<A, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|kv| (kv.key, kv.value)))
            .finish()
    }
}

impl<A, V> Drop for Trie<A, V> {
    fn drop(&mut self) {
        release(std::mem::take(&mut self.head.children));
    }
}

impl<A: TrieAtom, V> Trie<A, V> {
    /// Create a new Trie.
    pub fn new() -> Self {
        Self {
            head: Node::new(A::default()),
            count: 0,
        }
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        let words = self.count;
        release(std::mem::take(&mut self.head.children));
        self.head.terminal = false;
        self.head.value = None;
        self.count = 0;
        debug!(words, "cleared trie");
    }

    /// How many words does the Trie contain?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Is the Trie empty?
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// How many nodes, not counting the root, does the Trie hold?
    pub fn node_count(&self) -> usize {
        let mut stack = vec![&self.head];
        let mut count = 0;
        while let Some(node) = stack.pop() {
            count += node.children.len();
            stack.extend(node.children.iter());
        }
        count
    }

    /// Insert the word into the Trie. Returns true if the word was not
    /// already present. Inserting a present word changes nothing, including
    /// any value associated with it.
    pub fn insert<K: IntoIterator<Item = A>>(&mut self, key: K) -> bool {
        let node = self.make_path(key);
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.count += 1;
        true
    }

    /// Insert the word and value into the Trie. If the word is already
    /// present the value is updated to the new value. Returns the previously
    /// associated value.
    pub fn insert_with_value<K: IntoIterator<Item = A>>(
        &mut self,
        key: K,
        value: Option<V>,
    ) -> Option<V> {
        let node = self.make_path(key);
        let added = !node.terminal;
        node.terminal = true;
        let previous = std::mem::replace(&mut node.value, value);
        if added {
            self.count += 1;
        }
        previous
    }

    /// Was the word inserted (and not since deleted)?
    pub fn lookup<K: IntoIterator<Item = A>>(&self, key: K) -> bool {
        self.find(key).map_or(false, |n| n.terminal)
    }

    /// Does any stored word begin with the supplied prefix? A word is a
    /// prefix of itself.
    ///
    /// Reaching the prefix's node is not enough on its own: the root is
    /// always there, so the empty prefix only matches when the Trie stores
    /// at least one word.
    pub fn starts_with<P: IntoIterator<Item = A>>(&self, prefix: P) -> bool {
        match self.find(prefix) {
            Some(n) => n.terminal || !n.children.is_empty(),
            None => false,
        }
    }

    /// Get a reference to a word's associated value.
    pub fn get<K: IntoIterator<Item = A>>(&self, key: K) -> Option<&V> {
        self.find(key)
            .filter(|n| n.terminal)
            .and_then(|n| n.value.as_ref())
    }

    /// Get a mutable reference to a word's associated value.
    pub fn get_mut<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<&mut V> {
        self.find_mut(key)
            .filter(|n| n.terminal)
            .and_then(|n| n.value.as_mut())
    }

    /// Delete the word from the Trie. Returns true if the word was present.
    /// Deleting an absent word, or one which only exists as a prefix of
    /// longer words, does nothing.
    pub fn delete<K: IntoIterator<Item = A>>(&mut self, key: K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Remove the word from the Trie. If the word has an associated value,
    /// this is returned. If the word is not present or has an associated
    /// value of None, None is returned.
    pub fn remove<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<V> {
        self.remove_entry(key).flatten()
    }

    /// Create an iterator over the Trie.
    pub fn iter(&self) -> TrieRefIntoIterator<'_, A, V> {
        self.into_iter()
    }

    /// Create a sorted iterator over the Trie.
    pub fn iter_sorted(&self) -> impl Iterator<Item = KeyValueRef<'_, A, V>> {
        let mut v = self.iter().collect::<Vec<KeyValueRef<'_, A, V>>>();
        v.sort_by(|a, b| a.key.cmp(&b.key));
        v.into_iter()
    }

    /// Create an iterator over every stored word which begins with the
    /// supplied prefix.
    pub fn iter_prefix<P: IntoIterator<Item = A>>(
        &self,
        prefix: P,
    ) -> TrieRefIntoIterator<'_, A, V> {
        let prefix: Vec<A> = prefix.into_iter().collect();
        let start = self.find(prefix.iter().copied());
        TrieRefIntoIterator::new(start, prefix)
    }

    /// [`Trie::insert`], rejecting a missing key.
    pub fn try_insert<K: IntoIterator<Item = A>>(&mut self, key: Option<K>) -> Result<bool> {
        let key = required(key, "insert")?;
        Ok(self.insert(key))
    }

    /// [`Trie::lookup`], rejecting a missing key.
    pub fn try_lookup<K: IntoIterator<Item = A>>(&self, key: Option<K>) -> Result<bool> {
        let key = required(key, "lookup")?;
        Ok(self.lookup(key))
    }

    /// [`Trie::starts_with`], rejecting a missing prefix.
    pub fn try_starts_with<P: IntoIterator<Item = A>>(&self, prefix: Option<P>) -> Result<bool> {
        let prefix = required(prefix, "starts_with")?;
        Ok(self.starts_with(prefix))
    }

    /// [`Trie::delete`], rejecting a missing key.
    pub fn try_delete<K: IntoIterator<Item = A>>(&mut self, key: Option<K>) -> Result<bool> {
        let key = required(key, "delete")?;
        Ok(self.delete(key))
    }

    // Walk to the node for key, creating any missing nodes on the way.
    fn make_path<K: IntoIterator<Item = A>>(&mut self, key: K) -> &mut Node<A, V> {
        let mut node = &mut self.head;
        let mut created = 0usize;
        for atom in key {
            let index = match node.child_index(atom) {
                Some(i) => i,
                None => {
                    node.children.push(Node::new(atom));
                    created += 1;
                    node.children.len() - 1
                }
            };
            node = &mut node.children[index];
        }
        if created > 0 {
            trace!(created, "created trie nodes");
        }
        node
    }

    fn find<K: IntoIterator<Item = A>>(&self, key: K) -> Option<&Node<A, V>> {
        key.into_iter()
            .try_fold(&self.head, |node, atom| node.child(atom))
    }

    fn find_mut<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<&mut Node<A, V>> {
        key.into_iter()
            .try_fold(&mut self.head, |node, atom| node.child_mut(atom))
    }

    // Child indices leading from the root to the node for key.
    fn path<K: IntoIterator<Item = A>>(&self, key: K) -> Option<Vec<usize>> {
        let mut node = &self.head;
        let mut path = vec![];
        for atom in key {
            let index = node.child_index(atom)?;
            path.push(index);
            node = &node.children[index];
        }
        Some(path)
    }

    fn node_at_mut(&mut self, path: &[usize]) -> &mut Node<A, V> {
        path.iter()
            .fold(&mut self.head, |node, &index| &mut node.children[index])
    }

    // Outer None: the word wasn't stored. Inner: its value.
    fn remove_entry<K: IntoIterator<Item = A>>(&mut self, key: K) -> Option<Option<V>> {
        let path = self.path(key)?;

        // Find the shallowest depth from which every node down to the
        // target is used by this word alone. Once the target's end mark is
        // cleared, that whole chain is in the (no children, not an end)
        // state and goes. A word end or a fork resets the search.
        let mut node = &self.head;
        let mut cut = None;
        for (depth, &index) in path.iter().enumerate() {
            node = &node.children[index];
            let dead = if depth + 1 == path.len() {
                node.children.is_empty()
            } else {
                !node.terminal && node.children.len() == 1
            };
            cut = if dead { cut.or(Some(depth)) } else { None };
        }
        if !node.terminal {
            return None;
        }

        let target = self.node_at_mut(&path);
        target.terminal = false;
        let value = target.value.take();
        self.count -= 1;

        if let Some(depth) = cut {
            let parent = self.node_at_mut(&path[..depth]);
            let chain = parent.children.remove(path[depth]);
            release(vec![chain]);
            trace!(pruned = path.len() - depth, "pruned trie nodes");
        }
        Some(value)
    }
}

impl<A: TrieAtom, V: PartialEq> PartialEq for Trie<A, V> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter_sorted().eq(other.iter_sorted())
    }
}

impl<A: TrieAtom, V: Eq> Eq for Trie<A, V> {}

impl<A: TrieAtom, V, K: IntoIterator<Item = A>> Extend<K> for Trie<A, V> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// Build a Trie from `(key, value)` entries, rejecting a key which appears
/// more than once.
impl<A: TrieAtom, V> TryFrom<Vec<(Vec<A>, Option<V>)>> for Trie<A, V> {
    type Error = TrieError;

    fn try_from(entries: Vec<(Vec<A>, Option<V>)>) -> Result<Self> {
        let mut trie = Trie::new();
        for (index, (key, value)) in entries.into_iter().enumerate() {
            if trie.lookup(key.iter().copied()) {
                return Err(TrieError::DuplicateKey { index });
            }
            trie.insert_with_value(key, value);
        }
        Ok(trie)
    }
}

impl<A: TrieAtom, V, K: IntoIterator<Item = A>> FromIterator<K> for Trie<A, V> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
