//! Serde support for [`crate::trie::Trie`], behind the `serde` feature.
//!
//! A Trie is represented as a sequence of `(key, value)` entries in
//! pre-order, never as its node tree. Deserializing rebuilds the tree by
//! insertion, so the word count and the pruned shape always follow from the
//! entries, and a repeated key is rejected.

use crate::trie::{Trie, TrieAtom};
use serde_crate::de::Error;
use serde_crate::{Deserialize, Deserializer, Serialize, Serializer};

impl<A: TrieAtom + Serialize, V: Serialize> Serialize for Trie<A, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|kv| (kv.key, kv.value)))
    }
}

impl<'de, A, V> Deserialize<'de> for Trie<A, V>
where
    A: TrieAtom + Deserialize<'de>,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries: Vec<(Vec<A>, Option<V>)> = Vec::deserialize(deserializer)?;
        Trie::try_from(entries).map_err(D::Error::custom)
    }
}
