//! # Traversal
//!
//! Pre-order, in-order and post-order walks over a tree, driven through one
//! external iterator. The walk state is an explicit stack of node
//! references, so a [`Traversal`] can be paused at any point, cloned, and
//! compared against another traversal.

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use super::node::Node;

/// The traversal algorithms a [`Traversal`] can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree. Yields keys ascending.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

impl Order {
    /// Seeds an empty stack so that its top is the first node of the walk.
    pub(crate) fn init<'a, K>(self, root: Option<&'a Node<K>>, stack: &mut Vec<&'a Node<K>>) {
        let Some(root) = root else {
            return;
        };
        match self {
            Order::PreOrder => stack.push(root),
            Order::InOrder => push_leftmost(Some(root), stack),
            Order::PostOrder => push_first_leaf_path(root, stack),
        }
    }

    /// Pops the current node and exposes its successor, if any, at the top.
    pub(crate) fn next<'a, K>(self, stack: &mut Vec<&'a Node<K>>) {
        let Some(current) = stack.pop() else {
            return;
        };
        match self {
            Order::PreOrder => {
                // right first so that left is popped next
                if let Some(right) = current.right.as_deref() {
                    stack.push(right);
                }
                if let Some(left) = current.left.as_deref() {
                    stack.push(left);
                }
            }
            Order::InOrder => push_leftmost(current.right.as_deref(), stack),
            Order::PostOrder => {
                // The parent sits directly below the node just collected.
                // Coming up from its left child means the right subtree is
                // still uncollected.
                if let Some(&parent) = stack.last() {
                    if let (Some(left), Some(right)) =
                        (parent.left.as_deref(), parent.right.as_deref())
                    {
                        if ptr::eq(left, current) {
                            push_first_leaf_path(right, stack);
                        }
                    }
                }
            }
        }
    }

    pub(crate) fn current<'a, K>(self, stack: &[&'a Node<K>]) -> Option<&'a Node<K>> {
        stack.last().copied()
    }

    pub(crate) fn is_done<K>(self, stack: &[&Node<K>]) -> bool {
        stack.is_empty()
    }
}

fn push_leftmost<'a, K>(mut node: Option<&'a Node<K>>, stack: &mut Vec<&'a Node<K>>) {
    while let Some(n) = node {
        stack.push(n);
        node = n.left.as_deref();
    }
}

/// Pushes `node` and the chain of children leading to the first node it
/// collects in post-order: left child when present, right child otherwise.
fn push_first_leaf_path<'a, K>(node: &'a Node<K>, stack: &mut Vec<&'a Node<K>>) {
    let mut node = node;
    loop {
        stack.push(node);
        node = match (node.left.as_deref(), node.right.as_deref()) {
            (Some(left), _) => left,
            (None, Some(right)) => right,
            (None, None) => break,
        };
    }
}

/// External iterator over the keys of an `AvlTree`.
///
/// A begin traversal and an end traversal differ only in their end flag and
/// stack contents; two traversals at the same position compare equal.
/// The borrow of the tree rules out inserting while a traversal is alive.
pub struct Traversal<'a, K> {
    order: Order,
    stack: Vec<&'a Node<K>>,
    done: bool,
}

impl<'a, K> Traversal<'a, K> {
    pub(crate) fn begin(root: Option<&'a Node<K>>, order: Order) -> Self {
        let mut stack = Vec::new();
        let done = root.is_none();
        if !done {
            order.init(root, &mut stack);
        }
        Traversal { order, stack, done }
    }

    /// The past-the-end position for `order`.
    pub fn end(order: Order) -> Self {
        Traversal {
            order,
            stack: Vec::new(),
            done: true,
        }
    }

    /// Moves to the next key. Does nothing once the traversal is done.
    pub fn advance(&mut self) {
        if self.done {
            return;
        }
        self.order.next(&mut self.stack);
        if self.order.is_done(&self.stack) {
            self.done = true;
        }
    }

    /// The key at the current position, or `None` when done.
    pub fn current(&self) -> Option<&'a K> {
        if self.done {
            return None;
        }
        self.order.current(&self.stack).map(|node| &node.key)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn order(&self) -> Order {
        self.order
    }
}

impl<'a, K> Clone for Traversal<'a, K> {
    fn clone(&self) -> Self {
        Traversal {
            order: self.order,
            stack: self.stack.clone(),
            done: self.done,
        }
    }
}

impl<'a, K> PartialEq for Traversal<'a, K> {
    fn eq(&self, other: &Self) -> bool {
        self.done == other.done
            && self.stack.len() == other.stack.len()
            && self
                .stack
                .iter()
                .zip(&other.stack)
                .all(|(a, b)| ptr::eq(*a, *b))
    }
}

impl<'a, K> Eq for Traversal<'a, K> {}

impl<'a, K> Iterator for Traversal<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.current()?;
        self.advance();
        Some(key)
    }
}

impl<'a, K> FusedIterator for Traversal<'a, K> {}

impl<'a, K: fmt::Debug> fmt::Debug for Traversal<'a, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("order", &self.order)
            .field("current", &self.current())
            .field("depth", &self.stack.len())
            .field("done", &self.done)
            .finish()
    }
}
