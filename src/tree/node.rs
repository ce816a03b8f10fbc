//! Owned binary tree node
//!
//! Each node is owned exactly once: by its parent's `left`/`right` slot,
//! or by the enclosing [`Tree`](super::Tree) when it is the root.
//!
//! `Clone`, `PartialEq`, `Hash`, `Debug`, `Display` and `Drop` walk the
//! subtree with explicit stacks, so depth is bounded only by memory.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{NodeArena, Side};

/// Binary tree vertex with an arbitrary payload
pub struct Node<T> {
    /// Payload carried by this vertex
    pub value: T,

    /// Left subtree (absent = empty slot)
    pub left: Option<Box<Node<T>>>,

    /// Right subtree (absent = empty slot)
    pub right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Create a leaf
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Attach `child` in the left slot, replacing whatever was there
    pub fn with_left(mut self, child: Node<T>) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Attach `child` in the right slot, replacing whatever was there
    pub fn with_right(mut self, child: Node<T>) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // Unlink children before each box is freed so dropping never recurses
        let mut pending: Vec<Box<Node<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            left: clone_subtree(self.left.as_deref()),
            right: clone_subtree(self.right.as_deref()),
        }
    }
}

/// Copy through an arena: parents are allocated before children
fn clone_subtree<T: Clone>(root: Option<&Node<T>>) -> Option<Box<Node<T>>> {
    let root = root?;
    let mut arena = NodeArena::new();
    let mut pending = vec![(root, arena.alloc(root.value.clone()))];

    while let Some((source, id)) = pending.pop() {
        for (side, child) in [(Side::Left, &source.left), (Side::Right, &source.right)] {
            if let Some(child) = child.as_deref() {
                let copy = arena.alloc(child.value.clone());
                arena.attach(id, side, copy);
                pending.push((child, copy));
            }
        }
    }

    arena.into_tree().into_root()
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.value != b.value {
                return false;
            }
            for (x, y) in [(&a.left, &b.left), (&a.right, &b.right)] {
                match (x.as_deref(), y.as_deref()) {
                    (Some(x), Some(y)) => pending.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T: Eq> Eq for Node<T> {}

/// Pre-order values, each followed by a byte marking which slots are filled
impl<T: Hash> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            node.value.hash(state);
            let slots = u8::from(node.left.is_some()) | u8::from(node.right.is_some()) << 1;
            state.write_u8(slots);
            pending.extend(node.right.as_deref());
            pending.extend(node.left.as_deref());
        }
    }
}

enum Piece<'a, T> {
    Node(&'a Node<T>),
    Text(&'static str),
}

impl<'a, T> Piece<'a, T> {
    fn slot(child: &'a Option<Box<Node<T>>>) -> Self {
        child.as_deref().map_or(Piece::Text("-"), Piece::Node)
    }
}

/// Shape notation with each value written by `write_value`
fn write_shape<T>(
    f: &mut fmt::Formatter<'_>,
    root: &Node<T>,
    write_value: impl Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    let mut pending = vec![Piece::Node(root)];
    while let Some(piece) = pending.pop() {
        let node = match piece {
            Piece::Text(text) => {
                f.write_str(text)?;
                continue;
            }
            Piece::Node(node) => node,
        };

        write_value(&node.value, f)?;
        if node.is_leaf() {
            continue;
        }
        f.write_str("(")?;
        pending.push(Piece::Text(")"));
        pending.push(Piece::slot(&node.right));
        pending.push(Piece::Text(", "));
        pending.push(Piece::slot(&node.left));
    }
    Ok(())
}

/// Compact shape notation: `v(left, right)`, `-` for an empty slot, bare `v` for a leaf
impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_shape(f, self, <T as fmt::Display>::fmt)
    }
}

/// Same notation as `Display`, with `Debug` values
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Node(")?;
        write_shape(f, self, <T as fmt::Debug>::fmt)?;
        f.write_str(")")
    }
}
