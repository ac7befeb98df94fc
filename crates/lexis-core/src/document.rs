//! Minimal read-only view over a parsed markup tree.
//!
//! Extractors are written against these traits so they never depend on a
//! particular parsing library. Patterns are CSS selectors; an invalid
//! pattern matches nothing.

/// A parsed document
pub trait DocumentTree {
    type Node<'a>: DocumentNode
    where
        Self: 'a;

    /// All nodes matching `pattern`, in document order
    fn select_all(&self, pattern: &str) -> Vec<Self::Node<'_>>;

    fn select_first(&self, pattern: &str) -> Option<Self::Node<'_>> {
        self.select_all(pattern).into_iter().next()
    }
}

/// An element inside a [`DocumentTree`]
pub trait DocumentNode: Sized {
    /// Descendants matching `pattern`, in document order
    fn select_all(&self, pattern: &str) -> Vec<Self>;

    fn select_first(&self, pattern: &str) -> Option<Self> {
        self.select_all(pattern).into_iter().next()
    }

    /// Nearest enclosing ancestor matching `pattern` (the node itself excluded)
    fn closest(&self, pattern: &str) -> Option<Self>;

    /// Concatenated text of the node and all its descendants
    fn text(&self) -> String;

    fn attr(&self, name: &str) -> Option<String>;

    /// Text of each direct child (elements and non-blank text runs)
    fn contents(&self) -> Vec<String>;
}
