//! The tree container, its nodes, and the read-only node handle.
//!
//! Nodes are heap allocations wired together with raw pointers: `left` and
//! `right` own the subtrees they point at while `parent` is a plain
//! back-reference that only ever gets read, never freed through. The unsafe
//! code in the crate lives here behind two rules: every pointer a `Link`
//! holds was produced by `Box::leak` in `Tree::insert`, and only
//! `Tree::clear` turns pointers back into `Box`es, children strictly before
//! their parent.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use compare::{natural, Compare, Natural};

use crate::error::TreeError;
use crate::iter::{Inorder, Phase, Postorder, Preorder};

/// An ordered binary search tree with parent links.
///
/// Keys are kept in BST order by the comparator `C`: the keys' natural order
/// unless [`Tree::with_cmp`] supplies something else. The tree never
/// rebalances itself, so every operation is `O(height)`: logarithmic for
/// friendly insertion orders, linear once the tree degenerates into a spine.
/// Duplicate keys are kept, each to the right of its equals.
///
/// # Examples
///
/// ```
/// use bstree::Tree;
///
/// let mut tree = Tree::new();
/// tree.insert(2);
/// tree.insert(1);
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.minimum().map(|n| *n.key()), Ok(1));
/// ```
pub struct Tree<T, C = Natural<T>>
where
    C: Compare<T>,
{
    // A `Link` rather than an `Option<Box<Node>>`: nodes carry raw parent
    // pointers, so they must never move once inserted, and the tree itself
    // must stay movable without touching them.
    root: Link<T>,
    len: usize,
    cmp: C,
    // The raw links hide the nodes (and their keys) from the compiler; this
    // marker tells the drop checker the tree owns them anyway.
    marker: PhantomData<Box<Node<T>>>,
}

// SAFETY: the tree is the sole owner of every node behind its raw links, so
// sending or sharing the tree sends or shares the whole node graph and
// nothing else can reach it.
unsafe impl<T, C> Send for Tree<T, C>
where
    T: Send,
    C: Compare<T> + Send,
{
}
unsafe impl<T, C> Sync for Tree<T, C>
where
    T: Sync,
    C: Compare<T> + Sync,
{
}

impl<T, C> Default for Tree<T, C>
where
    C: Compare<T> + Default,
{
    fn default() -> Self {
        Self::with_cmp(C::default())
    }
}

impl<T, C> Drop for Tree<T, C>
where
    C: Compare<T>,
{
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
    C: Compare<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter_inorder()).finish()
    }
}

impl<T: Ord> Tree<T> {
    /// Generate a new, empty `Tree` ordered by the keys' natural order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::<i32>::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Tree<T> {
        Tree::with_cmp(natural())
    }

    /// Generate a `Tree` seeded with a single key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::with_key(7);
    ///
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.minimum().map(|n| *n.key()), Ok(7));
    /// ```
    pub fn with_key(key: T) -> Tree<T> {
        let mut tree = Tree::new();
        tree.insert(key);
        tree
    }
}

impl<T, C> Tree<T, C>
where
    C: Compare<T>,
{
    /// Generate a new, empty `Tree` ordered by the given comparator.
    ///
    /// The comparator must impose a strict total order on `T` and answer
    /// consistently across calls. The tree never verifies this: a comparator
    /// that doesn't hold up its end leaves keys misplaced and lookups
    /// unreliable, though memory safety is unaffected.
    ///
    /// Any `Fn(&T, &T) -> Ordering` closure works as a comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// // Keys ordered descending instead of by their natural order.
    /// let mut tree = Tree::with_cmp(|a: &i32, b: &i32| b.cmp(a));
    /// for key in [2, 3, 1] {
    ///     tree.insert(key);
    /// }
    ///
    /// let keys: Vec<i32> = tree.iter_inorder().copied().collect();
    /// assert_eq!(keys, vec![3, 2, 1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Tree<T, C> {
        Tree {
            root: Link(None),
            len: 0,
            cmp,
            marker: PhantomData,
        }
    }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of keys stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the tree holds no keys at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `key` into the tree as a new leaf.
    ///
    /// The descent goes left while `key` compares less than the node under
    /// consideration and right otherwise, so a key equal to one already
    /// stored ends up in the existing key's right subtree: duplicates are
    /// kept, never overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: T) {
        let mut parent = Link(None);
        let mut went_left = false;
        let mut current = self.root;

        while let Some(ptr) = current.get() {
            // SAFETY: `current` is the root or a child link of a live node,
            // and we hold `&mut self`, so nothing else borrows the node graph
            // while we read our way down it.
            let node = unsafe { ptr.as_ref() };
            went_left = self.cmp.compare(&key, &node.key) == Ordering::Less;
            parent = current;
            current = if went_left { node.left } else { node.right };
        }

        let leaf = Link(Some(NonNull::from(Box::leak(Node::new_boxed(key, parent)))));
        match parent.get() {
            None => self.root = leaf,
            Some(mut ptr) => {
                // SAFETY: `parent` was the last live node on the descent and
                // its chosen child slot was observed empty; `leaf` is a fresh
                // allocation, so writing the slot aliases nothing.
                let node = unsafe { ptr.as_mut() };
                if went_left {
                    node.left = leaf;
                } else {
                    node.right = leaf;
                }
            }
        }
        self.len += 1;

        if cfg!(debug_assertions) {
            if let Some(parent) = parent.node() {
                if let Some(left) = parent.left.node() {
                    assert_eq!(self.cmp.compare(&left.key, &parent.key), Ordering::Less);
                }
                if let Some(right) = parent.right.node() {
                    assert_ne!(self.cmp.compare(&right.key, &parent.key), Ordering::Less);
                }
            }
        }
    }

    /// Looks `key` up, yielding a handle to the node holding it.
    ///
    /// With duplicates present, this finds the match closest to the root. A
    /// key the tree does not hold reports [`TreeError::NotFound`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1).map(|n| *n.key()), Ok(1));
    /// assert_eq!(tree.search(&42).map(|n| *n.key()), Err(TreeError::NotFound));
    /// ```
    pub fn search(&self, key: &T) -> Result<NodeRef<'_, T>, TreeError> {
        let mut current = self.root.node();
        while let Some(node) = current {
            current = match self.cmp.compare(key, &node.key) {
                Ordering::Equal => return Ok(NodeRef { node }),
                Ordering::Less => node.left.node(),
                Ordering::Greater => node.right.node(),
            };
        }
        Err(TreeError::NotFound)
    }

    /// Checks whether `key` is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree = Tree::with_key(3);
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&4));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        self.search(key).is_ok()
    }

    /// Yields a handle to the node holding the least key: the leftmost node.
    ///
    /// An empty tree reports [`TreeError::EmptyTree`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.minimum().map(|n| *n.key()), Err(TreeError::EmptyTree));
    ///
    /// tree.insert(5);
    /// tree.insert(3);
    /// assert_eq!(tree.minimum().map(|n| *n.key()), Ok(3));
    /// ```
    pub fn minimum(&self) -> Result<NodeRef<'_, T>, TreeError> {
        match self.root.node() {
            Some(root) => Ok(NodeRef {
                node: leftmost(root),
            }),
            None => Err(TreeError::EmptyTree),
        }
    }

    /// Yields a handle to the node holding the greatest key: the rightmost
    /// node.
    ///
    /// An empty tree reports [`TreeError::EmptyTree`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.maximum().map(|n| *n.key()), Err(TreeError::EmptyTree));
    ///
    /// tree.insert(5);
    /// tree.insert(8);
    /// assert_eq!(tree.maximum().map(|n| *n.key()), Ok(8));
    /// ```
    pub fn maximum(&self) -> Result<NodeRef<'_, T>, TreeError> {
        match self.root.node() {
            Some(root) => Ok(NodeRef {
                node: rightmost(root),
            }),
            None => Err(TreeError::EmptyTree),
        }
    }

    /// Visits every key in ascending order: left subtree, node, right
    /// subtree.
    ///
    /// The iterator is lazy and borrows the tree; ask again for a fresh pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// let keys: Vec<i32> = tree.iter_inorder().copied().collect();
    /// assert_eq!(keys, vec![1, 2, 3]);
    /// ```
    pub fn iter_inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root.node(), self.len)
    }

    /// Visits every key root-first: node, left subtree, right subtree.
    ///
    /// This is the order in which the nodes were wired under one another, so
    /// replaying an insert of the yielded keys into an empty tree rebuilds
    /// the exact same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// let keys: Vec<i32> = tree.iter_preorder().copied().collect();
    /// assert_eq!(keys, vec![2, 1, 3]);
    /// ```
    pub fn iter_preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root.node(), self.len)
    }

    /// Visits every key children-first: left subtree, right subtree, node.
    ///
    /// Every key appears only after all the keys stored below it, which is
    /// the one order a node graph can be torn down in safely; [`Tree::clear`]
    /// releases nodes in exactly this sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// let keys: Vec<i32> = tree.iter_postorder().copied().collect();
    /// assert_eq!(keys, vec![1, 3, 2]);
    /// ```
    pub fn iter_postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self.root.node(), self.len)
    }

    /// Releases every node and leaves the tree empty and reusable.
    ///
    /// Nodes are freed strictly children-before-parent (the postorder
    /// sequence), driven by an explicit stack so a degenerate tree cannot
    /// exhaust the call stack. Dropping the tree does the same thing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::with_key(1);
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert!(tree.search(&1).is_err());
    /// ```
    pub fn clear(&mut self) {
        // Unhook everything before freeing anything: if a key's destructor
        // panics mid-teardown the remaining nodes leak, but the tree is left
        // empty and safe rather than holding dangling links.
        let root = self.root.take();
        self.len = 0;

        let mut stack = Vec::new();
        if let Some(ptr) = root.get() {
            stack.push((ptr, Phase::Left));
        }
        while let Some((ptr, phase)) = stack.pop() {
            match phase {
                Phase::Left => {
                    stack.push((ptr, Phase::Right));
                    // SAFETY: every pointer on the stack was leaked from a
                    // `Box` by `insert` and is freed exactly once, in its own
                    // `Visit` step; until then reading through it is fine.
                    if let Some(left) = unsafe { ptr.as_ref() }.left.get() {
                        stack.push((left, Phase::Left));
                    }
                }
                Phase::Right => {
                    stack.push((ptr, Phase::Visit));
                    // SAFETY: as above; this node is not freed until `Visit`.
                    if let Some(right) = unsafe { ptr.as_ref() }.right.get() {
                        stack.push((right, Phase::Left));
                    }
                }
                Phase::Visit => {
                    // Both children already resurfaced through their own
                    // `Visit` steps, so only this node is left to release.
                    //
                    // SAFETY: the pointer came from `Box::leak` in `insert`
                    // and this is its single `Visit` entry, so the `Box` is
                    // rebuilt and freed exactly once.
                    drop(unsafe { Box::from_raw(ptr.as_ptr()) });
                }
            }
        }
    }

    /// Walks the whole tree and panics if any structural invariant is broken.
    ///
    /// Checks the ordering rule against every bound a node inherits from its
    /// ancestors. Also checks that each parent link points back at exactly
    /// one child slot of its target, that only the root lacks a parent, and
    /// that the number of reachable nodes matches [`Tree::len`]. Intended for
    /// tests and debugging; it costs `O(n)` time and a heap-allocated work
    /// stack.
    pub fn assert_invariants(&self) {
        let mut reachable = 0;
        let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = Vec::new();
        if let Some(root) = self.root.node() {
            stack.push((root, None, None));
        }

        while let Some((node, lower, upper)) = stack.pop() {
            reachable += 1;

            match node.parent.node() {
                Some(parent) => assert!(
                    parent.left.is(node) ^ parent.right.is(node),
                    "node must be exactly one child of its parent"
                ),
                None => assert!(self.root.is(node), "only the root may lack a parent"),
            }

            if let Some(lower) = lower {
                assert_ne!(
                    self.cmp.compare(&node.key, lower),
                    Ordering::Less,
                    "key sorts before an ancestor it is right of"
                );
            }
            if let Some(upper) = upper {
                assert_eq!(
                    self.cmp.compare(&node.key, upper),
                    Ordering::Less,
                    "key does not sort before an ancestor it is left of"
                );
            }

            if let Some(left) = node.left.node() {
                stack.push((left, lower, Some(&node.key)));
            }
            if let Some(right) = node.right.node() {
                stack.push((right, Some(&node.key), upper));
            }
        }

        assert_eq!(
            reachable, self.len,
            "number of reachable nodes disagrees with the stored length"
        );
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T, C> FromIterator<T> for Tree<T, C>
where
    C: Compare<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Tree<T, C> {
        let mut tree = Tree::with_cmp(C::default());
        tree.extend(iter);
        tree
    }
}

/// A pointer to a node, or nothing. Links are stored instead of
/// `Option<Box<Node>>`s because parent links must alias child links; only
/// `Tree::clear` turns a link's pointer back into a `Box`.
pub(crate) struct Link<T>(Option<NonNull<Node<T>>>);

// Implemented by hand so copying a link never asks for `T: Clone`.
impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}
impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    /// Shared view of the pointed-at node, if any.
    pub(crate) fn node(&self) -> Option<&Node<T>> {
        // SAFETY: links only ever hold pointers produced by `Box::leak` in
        // `Tree::insert`, and the only code that frees nodes, `Tree::clear`,
        // takes the tree by `&mut` and unhooks the root before touching them.
        // A `&self` reached through the tree therefore points into a live
        // node graph, and the borrow it returns keeps that graph borrowed.
        self.0.map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    fn get(&self) -> Option<NonNull<Node<T>>> {
        self.0
    }

    fn take(&mut self) -> Self {
        Self(self.0.take())
    }

    /// Whether this link points at exactly `node`, by address.
    fn is(&self, node: &Node<T>) -> bool {
        self.0.map_or(false, |ptr| std::ptr::eq(ptr.as_ptr(), node))
    }
}

pub(crate) struct Node<T> {
    pub(crate) key: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) parent: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(key: T, parent: Link<T>) -> Box<Self> {
        Box::new(Node {
            key,
            left: Link(None),
            right: Link(None),
            parent,
        })
    }
}

/// Descends `left` links to the node holding the least key of a subtree.
fn leftmost<T>(mut node: &Node<T>) -> &Node<T> {
    while let Some(left) = node.left.node() {
        node = left;
    }
    node
}

/// Descends `right` links to the node holding the greatest key of a subtree.
fn rightmost<T>(mut node: &Node<T>) -> &Node<T> {
    while let Some(right) = node.right.node() {
        node = right;
    }
    node
}

/// A non-owning, read-only view of one node in a [`Tree`].
///
/// Handles come out of [`Tree::search`], [`Tree::minimum`], and
/// [`Tree::maximum`], and expose nothing but the stored key and the
/// [`successor`](NodeRef::successor) walk. A handle borrows its tree, so the
/// borrow checker rules out using one after the tree is cleared or dropped.
pub struct NodeRef<'a, T> {
    node: &'a Node<T>,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for NodeRef<'_, T> {}

/// Handle equality is node identity: two handles are equal when they view
/// the very same node, not when their keys compare equal.
impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.node, other.node)
    }
}
impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.node.key).finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    /// The key this handle views.
    ///
    /// The reference lives as long as the borrow of the tree, not the
    /// handle, so keys can outlive the handle they were read through.
    pub fn key(&self) -> &'a T {
        &self.node.key
    }

    /// The node holding the next key in ascending order, or `None` if this
    /// node holds the maximum.
    ///
    /// The walk is purely structural and never compares keys. If the node
    /// has a right subtree, the successor is that subtree's leftmost node.
    /// Otherwise it is the nearest ancestor whose left subtree this node
    /// sits in, found by climbing parent links; running out of parents
    /// first means nothing in the tree sorts after this node.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.insert(key);
    /// }
    ///
    /// let two = tree.search(&2)?;
    /// assert_eq!(two.successor().map(|n| *n.key()), Some(3));
    ///
    /// let three = tree.search(&3)?;
    /// assert_eq!(three.successor().map(|n| *n.key()), None);
    /// # Ok::<(), bstree::TreeError>(())
    /// ```
    pub fn successor(self) -> Option<NodeRef<'a, T>> {
        if let Some(right) = self.node.right.node() {
            return Some(NodeRef {
                node: leftmost(right),
            });
        }

        // No right subtree, so the successor sits above: climb while we are
        // our parent's right child and stop at the first ancestor entered
        // from its left side.
        let mut node = self.node;
        while let Some(parent) = node.parent.node() {
            if parent.left.is(node) {
                return Some(NodeRef { node: parent });
            }
            node = parent;
        }
        None
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    /// Applies operations to a tree and to a sorted reference list, checking
    /// every query's answer against the reference as it goes.
    fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, sorted: &mut Vec<i8>) -> bool {
        for op in ops {
            match *op {
                Op::Insert(key) => {
                    tree.insert(key);
                    let at = sorted.partition_point(|k| *k <= key);
                    sorted.insert(at, key);
                }
                Op::Search(key) => {
                    if tree.search(&key).is_ok() != sorted.binary_search(&key).is_ok() {
                        return false;
                    }
                }
                Op::Minimum => {
                    if tree.minimum().ok().map(|n| *n.key()) != sorted.first().copied() {
                        return false;
                    }
                }
                Op::Maximum => {
                    if tree.maximum().ok().map(|n| *n.key()) != sorted.last().copied() {
                        return false;
                    }
                }
                Op::Walk => {
                    if !tree.iter_inorder().copied().eq(sorted.iter().copied()) {
                        return false;
                    }
                }
            }
        }
        true
    }

    quickcheck::quickcheck! {
        fn fuzz_mixed_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut sorted = Vec::new();

            let answers_matched = do_ops(&ops, &mut tree, &mut sorted);
            tree.assert_invariants();

            answers_matched && tree.len() == sorted.len()
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_successor_chain_equals_sorted_i8(keys: Vec<i8>) -> bool {
            let mut sorted = keys.clone();
            sorted.sort_unstable();

            let mut tree = Tree::new();
            for key in keys {
                tree.insert(key);
            }

            let mut walked = Vec::with_capacity(sorted.len());
            let mut current = tree.minimum().ok();
            while let Some(node) = current {
                walked.push(*node.key());
                current = node.successor();
            }

            walked == sorted
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_traversals_visit_the_same_keys_u8(keys: Vec<u8>) -> bool {
            let mut tree = Tree::new();
            for key in &keys {
                tree.insert(*key);
            }

            let sort = |mut keys: Vec<u8>| {
                keys.sort_unstable();
                keys
            };
            let inorder: Vec<u8> = tree.iter_inorder().copied().collect();
            let preorder = sort(tree.iter_preorder().copied().collect());
            let postorder = sort(tree.iter_postorder().copied().collect());

            let mut expected = keys;
            expected.sort_unstable();

            inorder == expected && preorder == expected && postorder == expected
        }
    }
}
