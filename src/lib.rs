//! # word-trie
//!
//! A prefix tree over words: exact lookup, prefix queries, deletion that
//! prunes branches no other word needs, traversal and a printable tree view.
//!
//! ## Example
//!
//! ```rust
//! use word_trie::Trie;
//!
//! let mut trie = Trie::new();
//! assert!(trie.insert("hola"));
//! assert!(trie.insert("holaquetal"));
//! assert!(!trie.insert("hola"));
//!
//! assert!(trie.search("hola"));
//! assert!(!trie.search("hol"));
//! assert!(trie.starts_with("hol"));
//!
//! assert!(trie.delete("hola"));
//! assert!(trie.search("holaquetal"));
//! assert_eq!(trie.len(), 1);
//!
//! assert!(trie.render().contains("[T] l"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod index;
mod iter;
mod node;
mod render;

pub use error::ParseRenderStyleError;
pub use index::WordIndex;
pub use iter::Words;
pub use render::{Render, RenderStyle, ROOT_LABEL, TERMINAL_MARKER};

use std::fmt;

use node::Node;
use smallvec::SmallVec;
use tracing::{debug, trace};

/// Target of every `tracing` event emitted by this crate.
pub const TRIE_LOG_TARGET: &str = "word_trie";

// Words up to this many symbols are deleted without a heap allocation.
const INLINE_PATH_LEN: usize = 32;

// =============================================================================
// Trie
// =============================================================================

/// A set of words stored as a prefix tree.
///
/// The root stands for the empty word; it is only a stored word if `""` was
/// inserted. Nodes are created on insertion and dropped as soon as a deletion
/// leaves them childless and non-terminal.
#[derive(Clone)]
pub struct Trie {
    root: Node,
    /// Number of terminal nodes, maintained on insert/delete.
    count: usize,
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            count: 0,
        }
    }

    /// Number of stored words.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no word is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Removes every word, dropping all nodes but the root.
    pub fn clear(&mut self) {
        self.root = Node::default();
        self.count = 0;
    }

    /// Stores `word`, creating a node for each symbol not already on its path.
    ///
    /// Returns `false` and leaves the trie untouched if `word` was already
    /// stored. The empty word marks the root.
    pub fn insert(&mut self, word: &str) -> bool {
        let node = self.root.descend_or_insert(word);
        if node.terminal {
            trace!(target: TRIE_LOG_TARGET, word, "Word already present");
            return false;
        }
        node.terminal = true;
        self.count += 1;
        trace!(target: TRIE_LOG_TARGET, word, len = self.count, "Inserted word");
        true
    }

    /// Whether `word` itself is stored. A path that only exists as the prefix
    /// of a longer word does not count.
    pub fn search(&self, word: &str) -> bool {
        matches!(self.root.descend(word), Some(node) if node.terminal)
    }

    /// Same as [`Trie::search`].
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.search(word)
    }

    /// Whether some stored word starts with `prefix`. Always `true` for `""`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.root.descend(prefix).is_some()
    }

    /// Removes `word` and prunes every node left without purpose.
    ///
    /// Returns `false` if `word` is not stored, in which case nothing changes.
    /// Nodes still on the path of another word, or ending another word, are
    /// kept.
    pub fn delete(&mut self, word: &str) -> bool {
        // Edge taken out of each ancestor of the end node, and whether that
        // ancestor has to outlive the deletion. The root always does.
        let mut path: SmallVec<[(char, bool); INLINE_PATH_LEN]> = SmallVec::new();
        let mut node = &self.root;
        for ch in word.chars() {
            let keep = path.is_empty() || node.terminal || node.children.len() > 1;
            match node.children.get(&ch) {
                Some(child) => {
                    path.push((ch, keep));
                    node = child;
                }
                None => {
                    trace!(target: TRIE_LOG_TARGET, word, "Delete of unknown word");
                    return false;
                }
            }
        }
        if !node.terminal {
            trace!(target: TRIE_LOG_TARGET, word, "Delete of unstored prefix");
            return false;
        }

        if !node.is_leaf() || path.is_empty() {
            // Still on the path of longer words: only the flag goes.
            if let Some(end) = self.root.descend_mut(word) {
                end.terminal = false;
            }
        } else {
            // Unwind towards the root until an ancestor that must stay, then
            // detach the single-child chain hanging below it.
            let cut = path.iter().rposition(|&(_, keep)| keep).unwrap_or(0);
            let (edge, _) = path[cut];
            let anchor = path[..cut]
                .iter()
                .try_fold(&mut self.root, |node, &(ch, _)| node.children.get_mut(&ch));
            if let Some(anchor) = anchor {
                anchor.children.remove(&edge);
            }
            debug!(
                target: TRIE_LOG_TARGET,
                word,
                pruned = path.len() - cut,
                anchor_depth = cut,
                "Pruned branch"
            );
        }

        self.count -= 1;
        trace!(target: TRIE_LOG_TARGET, word, len = self.count, "Deleted word");
        true
    }

    /// Every stored word, depth first, in ascending symbol order.
    ///
    /// Each call starts a fresh traversal of the current contents.
    pub fn iter(&self) -> Words<'_> {
        Words::new(&self.root, String::new(), self.count, true)
    }

    /// Every stored word beginning with `prefix`, in the order of [`Trie::iter`].
    pub fn words_with_prefix(&self, prefix: &str) -> Words<'_> {
        match self.root.descend(prefix) {
            // Never more than every stored word.
            Some(node) => Words::new(node, prefix.to_owned(), self.count, false),
            None => Words::empty(),
        }
    }

    /// Tree view drawn with the default [`RenderStyle`].
    ///
    /// The first line is [`ROOT_LABEL`]; each further line is one edge,
    /// indented by depth, with [`TERMINAL_MARKER`] before the symbol of every
    /// node that ends a stored word.
    pub fn render(&self) -> String {
        self.render_with(RenderStyle::default()).to_string()
    }

    /// Tree view drawn with `style`, formatted lazily.
    pub fn render_with(&self, style: RenderStyle) -> Render<'_> {
        Render::new(&self.root, style)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render_with(RenderStyle::default()), f)
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl WordIndex for Trie {
    type Words<'a> = Words<'a>;

    fn insert(&mut self, word: &str) -> bool {
        Trie::insert(self, word)
    }

    fn search(&self, word: &str) -> bool {
        Trie::search(self, word)
    }

    fn starts_with(&self, prefix: &str) -> bool {
        Trie::starts_with(self, prefix)
    }

    fn delete(&mut self, word: &str) -> bool {
        Trie::delete(self, word)
    }

    fn len(&self) -> usize {
        self.count
    }

    fn iter(&self) -> Words<'_> {
        Trie::iter(self)
    }

    fn render_with_style(&self, style: RenderStyle) -> String {
        self.render_with(style).to_string()
    }
}


#[cfg(test)]
mod proptests;
