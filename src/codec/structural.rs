//! Structural pre-order: `(branch_id, value)` pairs

use crate::tree::{Node, Tree};

/// Lazy `(branch_id, &value)` pre-order walk
///
/// Single pass; call [`structural_preorder`] again for a fresh walk.
#[derive(Debug)]
pub struct StructuralPreorder<'a, T> {
    /// Pending subtrees with the branch id their root receives
    stack: Vec<(&'a Node<T>, usize)>,
}

impl<'a, T> StructuralPreorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|node| (node, 0)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for StructuralPreorder<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (node, branch_id) = self.stack.pop()?;

        if let Some(right) = node.right.as_deref() {
            self.stack.push((right, branch_id));
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push((left, branch_id + 1));
        }

        Some((branch_id, &node.value))
    }
}

/// Pre-order walk tagging each node with the id of the locus it fills
///
/// Root is `0`; a left child gets its parent's id plus one, a right child
/// inherits its parent's id. Empty tree yields nothing.
pub fn structural_preorder<T>(tree: &Tree<T>) -> StructuralPreorder<'_, T> {
    tree.structural_preorder()
}
