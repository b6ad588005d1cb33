//! Logical paths through the grammar tree.
//!
//! A `TreePath` is the sequence of child names taken from the root to
//! the current dispatch position. It is a thin wrapper around the `im`
//! crate's persistent vector: cloning is O(1) and `push` returns a new
//! path sharing structure with the original, so every recursion step
//! of the dispatcher can carry its own path without copying.

use std::fmt;

/// A persistent sequence of child names addressing a grammar node.
#[derive(Clone, Default)]
pub struct TreePath(im::Vector<String>);

impl TreePath {
    /// Creates an empty path (the root).
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of names in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if this is the root path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a new path with the name appended.
    #[must_use]
    pub fn push(&self, name: impl Into<String>) -> Self {
        let mut new = self.0.clone();
        new.push_back(name.into());
        Self(new)
    }

    /// Returns the last name in the path.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.0.back().map(String::as_str)
    }

    /// Returns an iterator over the names from root to leaf.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TreePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl PartialEq for TreePath {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for TreePath {}

impl fmt::Debug for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for TreePath {
    /// Renders the path space-joined, the way it reads in a command.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for name in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{name}")?;
            first = false;
        }
        Ok(())
    }
}
