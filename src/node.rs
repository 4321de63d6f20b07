//! Node model: one node per distinct prefix, children owned by their parent.
//!
//! Words may be arbitrarily long, so nothing here recurses per level:
//! dropping and cloning walk explicit stacks.

use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::mem;

/// A single trie node.
///
/// Edges are keyed by symbol and ordered, which fixes the order used by
/// traversal and rendering.
#[derive(Default)]
pub(crate) struct Node {
    pub(crate) children: BTreeMap<char, Node>,
    /// The path from the root to this node spells a stored word.
    pub(crate) terminal: bool,
}

impl Node {
    fn with_terminal(terminal: bool) -> Self {
        Self {
            children: BTreeMap::new(),
            terminal,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Follows `word` symbol by symbol; `None` as soon as an edge is missing.
    pub(crate) fn descend(&self, word: &str) -> Option<&Node> {
        word.chars().try_fold(self, |node, ch| node.children.get(&ch))
    }

    pub(crate) fn descend_mut(&mut self, word: &str) -> Option<&mut Node> {
        word.chars().try_fold(self, |node, ch| node.children.get_mut(&ch))
    }

    /// Like [`Node::descend_mut`], creating missing nodes along the way.
    pub(crate) fn descend_or_insert(&mut self, word: &str) -> &mut Node {
        word.chars()
            .fold(self, |node, ch| node.children.entry(ch).or_default())
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach every descendant before it is freed, so each drop below
        // sees an empty map.
        let mut pending: Vec<Node> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(mem::take(&mut node.children).into_values());
        }
    }
}

/// A source node whose children are being copied.
struct CloneFrame<'a> {
    edge: char,
    pending: btree_map::Iter<'a, char, Node>,
    copy: Node,
}

impl<'a> CloneFrame<'a> {
    fn new(edge: char, source: &'a Node) -> Self {
        Self {
            edge,
            pending: source.children.iter(),
            copy: Node::with_terminal(source.terminal),
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        // The root's edge is never read.
        let mut root = CloneFrame::new('\0', self);
        let mut stack: Vec<CloneFrame<'_>> = Vec::new();
        loop {
            let top = stack.last_mut().unwrap_or(&mut root);
            if let Some((&edge, child)) = top.pending.next() {
                stack.push(CloneFrame::new(edge, child));
                continue;
            }
            let Some(done) = stack.pop() else { break };
            let parent = stack.last_mut().unwrap_or(&mut root);
            parent.copy.children.insert(done.edge, done.copy);
        }
        root.copy
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shallow on purpose: a derived impl would recurse down every branch.
        f.debug_struct("Node")
            .field("terminal", &self.terminal)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}
