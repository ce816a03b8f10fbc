//! Explicit-stack depth-first traversals
//!
//! Stack depth: O(height), no recursion, so degenerate chains are safe.

use super::Node;

/// Pre-order (node, left, right) value iterator
#[derive(Debug)]
pub struct Preorder<'a, T> {
    /// Subtrees still to visit; top is visited next
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // Right first so that left is popped first
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }

        Some(&node.value)
    }
}

/// In-order (left, node, right) value iterator
#[derive(Debug)]
pub struct Inorder<'a, T> {
    /// Ancestors whose left subtree is being walked
    stack: Vec<&'a Node<T>>,

    /// Next subtree to descend into
    cursor: Option<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            cursor: root,
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.cursor {
            self.stack.push(node);
            self.cursor = node.left.as_deref();
        }

        let node = self.stack.pop()?;
        self.cursor = node.right.as_deref();
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node<u32> {
        //        4
        //      /   \
        //     2     5
        //    / \     \
        //   1   3     7
        Node::new(4)
            .with_left(Node::new(2).with_left(Node::new(1)).with_right(Node::new(3)))
            .with_right(Node::new(5).with_right(Node::new(7)))
    }

    #[test]
    fn test_preorder_visits_node_before_children() {
        let root = sample();
        let values: Vec<u32> = Preorder::new(Some(&root)).copied().collect();
        assert_eq!(values, vec![4, 2, 1, 3, 5, 7]);
    }

    #[test]
    fn test_inorder_is_sorted_for_search_tree() {
        let root = sample();
        let values: Vec<u32> = Inorder::new(Some(&root)).copied().collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 7]);
    }

    #[test]
    fn test_empty_traversals() {
        assert_eq!(Preorder::<u8>::new(None).count(), 0);
        assert_eq!(Inorder::<u8>::new(None).count(), 0);
    }
}
