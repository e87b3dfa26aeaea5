//! Provides a prefix Trie for storing words composed of sequences of
//! atoms, with insertion, exact lookup, prefix lookup and deletion.
//!
//! Deletion prunes nodes bottom-up, but only those which no longer lead
//! to any stored word, so deleting one word never disturbs another word
//! which shares a prefix with it.
//!
//! Atoms must support the [`crate::trie::TrieAtom`] trait. Since the most
//! common use of a trie is to store the chars of a String, a convenience
//! type, [`crate::trie::TrieString`] is provided. Chars are compared
//! exactly, so "Cat" and "cat" are different words. The empty word is a
//! valid word: it is stored on the root.
//!
//! ```
//! use lexitrie::trie::TrieString;
//!
//! let mut trie: TrieString = TrieString::new();
//! trie.insert("cat".chars());
//! trie.insert("call".chars());
//! trie.delete("cat".chars());
//! assert!(!trie.lookup("cat".chars()));
//! assert!(trie.lookup("call".chars()));
//! assert!(trie.starts_with("ca".chars()));
//! ```
//!
//! Operations taking an `Option` key (`try_insert` and friends) reject a
//! missing key with [`crate::error::TrieError`] instead of treating it as
//! not found.
//!
//! Modules:
//! * trie : [`crate::trie`]
//! * iterator : [`crate::iterator`]
//! * error : [`crate::error`]

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod error;

pub mod iterator;

#[cfg(feature = "serde")]
mod serialize;

pub mod trie;

pub use error::{Result, TrieError};
pub use trie::{Trie, TrieString};
