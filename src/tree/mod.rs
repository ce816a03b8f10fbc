//! Binary tree representation
//!
//! A [`Tree`] owns an optional root [`Node`]; each node owns its children.
//! All walks use explicit stacks. Drop, comparison, hashing, cloning,
//! formatting, `len`, `height` and the traversals never recurse, so
//! left-only or right-only chains of any length are fine.

mod arena;
mod node;
mod traversal;

pub(crate) use arena::{NodeArena, NodeId, Side};
pub use node::Node;
pub use traversal::{Inorder, Preorder};

use std::fmt;

use crate::codec::StructuralPreorder;

/// Owned binary tree (possibly empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Tree<T> {
    /// Tree with no nodes
    pub fn empty() -> Self {
        Self { root: None }
    }

    pub(crate) fn from_boxed(root: Option<Box<Node<T>>>) -> Self {
        Self { root }
    }

    /// Borrow the root, if any
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Give up ownership of the root
    pub fn into_root(self) -> Option<Box<Node<T>>> {
        self.root
    }

    /// Check if the tree has no nodes
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.preorder().count()
    }

    /// Number of levels: 0 for the empty tree, 1 for a lone root
    pub fn height(&self) -> usize {
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|r| (r, 1)).into_iter().collect();
        let mut height = 0;

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Values in pre-order
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self.root())
    }

    /// Values in in-order
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self.root())
    }

    /// `(branch_id, value)` pairs in pre-order, see [`crate::codec::structural_preorder`]
    pub fn structural_preorder(&self) -> StructuralPreorder<'_, T> {
        StructuralPreorder::new(self.root())
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Node<T>> for Tree<T> {
    fn from(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write!(f, "{}", root),
            None => f.write_str("-"),
        }
    }
}
