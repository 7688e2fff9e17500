//! Lazy traversals over a tree's keys.
//!
//! All three orders drive an explicit `Vec` work stack instead of recursing,
//! so no tree shape can overflow the call stack, however lopsided. Each
//! iterator borrows its tree immutably; a finished pass is restarted by
//! asking the tree for a fresh iterator.

use std::iter::FusedIterator;

use crate::tree::Node;

/// Which part of a node's subtree a work-stack entry still has to handle.
///
/// `Tree::clear` drives the same three-step machine over raw pointers when
/// it frees the tree, which is what keeps node releases in
/// children-before-parent order.
pub(crate) enum Phase {
    /// The left subtree has not been walked yet.
    Left,
    /// The left subtree is done; the right subtree has not been walked.
    Right,
    /// Both subtrees are done; the node itself is next.
    Visit,
}

/// An iterator over a tree's keys in ascending order: left subtree, node,
/// right subtree.
///
/// Created by [`Tree::iter_inorder`](crate::Tree::iter_inorder).
pub struct Inorder<'a, T> {
    // The path of nodes whose own key is still pending, deepest on top.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Inorder {
            stack: Vec::new(),
            remaining: len,
        };
        iter.descend_left(root);
        iter
    }

    /// Pushes `node` and the whole chain of left children below it.
    fn descend_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.node();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.node());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Inorder<'_, T> {}
impl<T> FusedIterator for Inorder<'_, T> {}

/// An iterator over a tree's keys in root-first order: node, left subtree,
/// right subtree.
///
/// Created by [`Tree::iter_preorder`](crate::Tree::iter_preorder).
pub struct Preorder<'a, T> {
    // Roots of subtrees that are entirely pending.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Preorder {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        // Right first so the left subtree pops, and therefore yields, first.
        if let Some(right) = node.right.node() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.node() {
            self.stack.push(left);
        }
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Preorder<'_, T> {}
impl<T> FusedIterator for Preorder<'_, T> {}

/// An iterator over a tree's keys in children-first order: left subtree,
/// right subtree, node. Every key appears only after all the keys stored
/// below it, which is also the order teardown releases nodes in.
///
/// Created by [`Tree::iter_postorder`](crate::Tree::iter_postorder).
pub struct Postorder<'a, T> {
    stack: Vec<(&'a Node<T>, Phase)>,
    remaining: usize,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Postorder {
            stack: root.map(|node| (node, Phase::Left)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some((node, phase)) = self.stack.pop() {
            match phase {
                Phase::Left => {
                    self.stack.push((node, Phase::Right));
                    if let Some(left) = node.left.node() {
                        self.stack.push((left, Phase::Left));
                    }
                }
                Phase::Right => {
                    self.stack.push((node, Phase::Visit));
                    if let Some(right) = node.right.node() {
                        self.stack.push((right, Phase::Left));
                    }
                }
                Phase::Visit => {
                    self.remaining -= 1;
                    return Some(&node.key);
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Postorder<'_, T> {}
impl<T> FusedIterator for Postorder<'_, T> {}
