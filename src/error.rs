//! Explicit result states reported by tree queries.

use thiserror::Error;

/// The recoverable ways a tree query can come up empty.
///
/// These are ordinary results for the caller to match on, not faults. The
/// other "nothing there" outcome in the crate, [`NodeRef::successor`]
/// returning `None` for the maximum key, is deliberately an [`Option`] and not
/// a variant here: a maximum having no successor is correct structure, while
/// the states below describe a query that could not produce a handle at all.
///
/// [`NodeRef::successor`]: crate::NodeRef::successor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// [`Tree::search`] descended to an empty slot without meeting the key.
    ///
    /// [`Tree::search`]: crate::Tree::search
    #[error("key not found")]
    NotFound,
    /// [`Tree::minimum`] or [`Tree::maximum`] was asked for a node while the
    /// tree holds none.
    ///
    /// [`Tree::minimum`]: crate::Tree::minimum
    /// [`Tree::maximum`]: crate::Tree::maximum
    #[error("tree is empty")]
    EmptyTree,
}
