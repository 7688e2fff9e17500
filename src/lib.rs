//! An ordered [Binary Search Tree (BST)](https://en.wikipedia.org/wiki/Binary_search_tree)
//! with parent links, supporting insertion, lookup, extremal queries, in-order
//! successor walks, and all three classic traversal orders.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores every key in a `Node` with up to two child
//! `Node`s and maintains one ordering rule everywhere in the structure:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree hold keys that
//!    compare strictly less than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree hold keys that
//!    compare greater than *or equal to* its own key.
//!
//! > Note the "or equal to": inserting a key that is already present is
//! > allowed and always descends to the right, so this tree is a multiset.
//!
//! These invariants make lookups `O(height)` (where `height` is the longest
//! path from the root to a leaf) and make sorted iteration free: visiting the
//! left subtree, then the `Node`, then the right subtree yields the keys in
//! ascending order. This tree never rebalances itself, so adversarial
//! insertion orders (e.g. already-sorted keys) degrade `height` to the number
//! of nodes. Every operation in the crate is iterative for exactly that
//! reason: a degenerate tree must not be able to exhaust the call stack.
//!
//! Each `Node` also carries a non-owning link to its parent. That link is
//! what lets [`NodeRef::successor`] find the next key in ascending order
//! without ever comparing keys, purely by walking the structure.
//!
//! Keys can be any type with a strict total order. By default that order is
//! the type's [`Ord`] (via [`compare::Natural`]); [`Tree::with_cmp`] accepts
//! any [`compare::Compare`] implementation instead, including plain closures.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//! for key in [20, 8, 22, 4] {
//!     tree.insert(key);
//! }
//!
//! // Sorted iteration falls out of the ordering invariant.
//! let sorted: Vec<i32> = tree.iter_inorder().copied().collect();
//! assert_eq!(sorted, vec![4, 8, 20, 22]);
//!
//! // Handles are read-only views of stored keys.
//! let eight = tree.search(&8)?;
//! assert_eq!(*eight.key(), 8);
//!
//! // The successor walk is structural: no comparisons involved.
//! assert_eq!(eight.successor().map(|n| *n.key()), Some(20));
//! # Ok::<(), bstree::TreeError>(())
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod iter;
mod tree;

pub use crate::error::TreeError;
pub use crate::iter::{Inorder, Postorder, Preorder};
pub use crate::tree::{NodeRef, Tree};
