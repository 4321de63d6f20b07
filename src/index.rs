use crate::render::RenderStyle;

/// The operations a container binding needs from a word index.
///
/// [`Trie`](crate::Trie) is the engine; the trait lets a binding layer (or a
/// test double) depend on the capability set rather than the concrete type.
pub trait WordIndex {
    /// Iterator over stored words.
    type Words<'a>: Iterator<Item = String>
    where
        Self: 'a;

    /// Stores `word`. Returns `false` if it was already stored.
    fn insert(&mut self, word: &str) -> bool;

    /// Whether `word` itself is stored.
    fn search(&self, word: &str) -> bool;

    /// Whether any stored word begins with `prefix`.
    fn starts_with(&self, prefix: &str) -> bool;

    /// Removes `word`. Returns `false`, changing nothing, if it was not stored.
    fn delete(&mut self, word: &str) -> bool;

    /// Membership test; the same question as [`WordIndex::search`].
    fn contains(&self, word: &str) -> bool {
        self.search(word)
    }

    /// Number of stored words.
    fn len(&self) -> usize;

    /// Whether no word is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every stored word, once each.
    fn iter(&self) -> Self::Words<'_>;

    /// Multi-line tree view of the index.
    fn render(&self) -> String {
        self.render_with_style(RenderStyle::default())
    }

    /// Like [`WordIndex::render`] with an explicit glyph set.
    fn render_with_style(&self, style: RenderStyle) -> String;
}
