//! Diagnostic tree view.
//!
//! ```text
//! (root)
//! ├── h
//! │   └── [T] i
//! └── [T] s
//! ```

use std::collections::btree_map;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::error::ParseRenderStyleError;
use crate::node::Node;

/// Label of the first line of every rendering.
pub const ROOT_LABEL: &str = "(root)";
/// Precedes the symbol of every node that ends a stored word.
pub const TERMINAL_MARKER: &str = "[T]";

/// Glyph set used to draw branches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderStyle {
    /// Box-drawing characters.
    #[default]
    Unicode,
    /// Plain ASCII, for terminals and logs that mangle box drawing.
    Ascii,
}

struct Glyphs {
    branch: &'static str,
    last_branch: &'static str,
    continuation: &'static str,
    blank: &'static str,
}

impl RenderStyle {
    const fn glyphs(self) -> Glyphs {
        match self {
            RenderStyle::Unicode => Glyphs {
                branch: "├── ",
                last_branch: "└── ",
                continuation: "│   ",
                blank: "    ",
            },
            RenderStyle::Ascii => Glyphs {
                branch: "|-- ",
                last_branch: "`-- ",
                continuation: "|   ",
                blank: "    ",
            },
        }
    }

    fn name(self) -> &'static str {
        match self {
            RenderStyle::Unicode => "unicode",
            RenderStyle::Ascii => "ascii",
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderStyle {
    type Err = ParseRenderStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("unicode") {
            Ok(RenderStyle::Unicode)
        } else if name.eq_ignore_ascii_case("ascii") {
            Ok(RenderStyle::Ascii)
        } else {
            Err(ParseRenderStyleError::Unknown(name.to_owned()))
        }
    }
}

/// Formats a trie as a tree when displayed. See [`Trie::render_with`](crate::Trie::render_with).
#[derive(Clone, Copy)]
pub struct Render<'a> {
    root: &'a Node,
    style: RenderStyle,
}

impl<'a> Render<'a> {
    pub(crate) fn new(root: &'a Node, style: RenderStyle) -> Self {
        Self { root, style }
    }
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROOT_LABEL)?;
        if self.root.terminal {
            write!(f, " {TERMINAL_MARKER}")?;
        }

        let glyphs = self.style.glyphs();
        // Indentation shared by every line; each frame remembers how much of it
        // belongs to its own level.
        let mut indent = String::new();
        let mut stack: Vec<(btree_map::Iter<'_, char, Node>, usize)> =
            vec![(self.root.children.iter(), 0)];
        while let Some((children, level_indent)) = stack.last_mut() {
            let Some((&ch, child)) = children.next() else {
                stack.pop();
                continue;
            };
            let is_last = children.len() == 0;
            indent.truncate(*level_indent);

            let branch = if is_last { glyphs.last_branch } else { glyphs.branch };
            write!(f, "\n{indent}{branch}")?;
            if child.terminal {
                write!(f, "{TERMINAL_MARKER} ")?;
            }
            f.write_char(ch)?;

            indent.push_str(if is_last { glyphs.blank } else { glyphs.continuation });
            stack.push((child.children.iter(), indent.len()));
        }
        Ok(())
    }
}
