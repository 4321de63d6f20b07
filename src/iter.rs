//! Depth-first traversal over stored words.

use std::collections::btree_map;
use std::iter::FusedIterator;

use crate::node::Node;

/// Lazy iterator over stored words, produced by [`Trie::iter`](crate::Trie::iter)
/// and [`Trie::words_with_prefix`](crate::Trie::words_with_prefix).
///
/// Words come out in ascending symbol order: a word is yielded before every
/// longer word it prefixes, and siblings are visited in `char` order.
#[derive(Clone, Debug)]
pub struct Words<'a> {
    /// Symbols from the root to the node on top of `stack`.
    path: String,
    /// One pending-children cursor per level below the start node.
    stack: Vec<btree_map::Iter<'a, char, Node>>,
    /// Start node, taken on the first call to `next`.
    start: Option<&'a Node>,
    /// Words left to yield; an upper bound unless `exact`.
    remaining: usize,
    /// Set when walking the whole trie, where `remaining` is the exact count.
    exact: bool,
}

impl<'a> Words<'a> {
    pub(crate) fn new(start: &'a Node, path: String, remaining: usize, exact: bool) -> Self {
        Self {
            path,
            stack: Vec::new(),
            start: Some(start),
            remaining,
            exact,
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            path: String::new(),
            stack: Vec::new(),
            start: None,
            remaining: 0,
            exact: true,
        }
    }

    fn emit(&mut self) -> String {
        self.remaining = self.remaining.saturating_sub(1);
        self.path.clone()
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            self.stack.push(start.children.iter());
            if start.terminal {
                return Some(self.emit());
            }
        }

        loop {
            let children = self.stack.last_mut()?;
            match children.next() {
                Some((&ch, child)) => {
                    self.path.push(ch);
                    self.stack.push(child.children.iter());
                    if child.terminal {
                        return Some(self.emit());
                    }
                }
                None => {
                    self.stack.pop();
                    // The start node's own prefix is never unwound.
                    if !self.stack.is_empty() {
                        self.path.pop();
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower = if self.exact { self.remaining } else { 0 };
        (lower, Some(self.remaining))
    }
}

impl FusedIterator for Words<'_> {}
