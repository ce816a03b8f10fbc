//! Generic reconstruction from pre-order + in-order sequences

use std::collections::HashSet;
use std::hash::Hash;

use tracing::debug;

use super::AmbiguityFault;
use crate::tree::{NodeArena, NodeId, Side, Tree};
use crate::TreeError;

/// Rebuild any binary tree from its pre-order and in-order traversals
///
/// Requires distinct values; no ordering is assumed. The pre-order values
/// move into the returned tree, the in-order values are only compared.
///
/// # Errors
/// [`TreeError::AmbiguousReconstruction`] when the lengths differ, a value
/// repeats, the value sets differ, or no tree has both traversals.
pub fn construct_from_preorder_inorder<T, P, I>(
    pre_order: P,
    in_order: I,
) -> Result<Tree<T>, TreeError>
where
    T: Eq + Hash,
    P: IntoIterator<Item = T>,
    I: IntoIterator<Item = T>,
{
    let pre_order: Vec<T> = pre_order.into_iter().collect();
    let in_order: Vec<T> = in_order.into_iter().collect();
    validate(&pre_order, &in_order)?;

    let mut pre_order = pre_order.into_iter();
    let Some(root) = pre_order.next() else {
        return Ok(Tree::empty());
    };

    let mut arena = NodeArena::new();
    let mut current = arena.alloc(root);
    let mut spine: Vec<NodeId> = vec![current];
    let mut attaching_right = false;
    let mut peak_stack = 1;

    for (position, target) in in_order.iter().enumerate() {
        loop {
            if let Some(&top) = spine.last() {
                if arena.value(top) == target {
                    // Left subtree of `top` is complete; what follows is its right subtree
                    spine.pop();
                    current = top;
                    attaching_right = true;
                    break;
                }
            }

            let Some(value) = pre_order.next() else {
                return Err(ambiguous(AmbiguityFault::InconsistentSequences { position }));
            };
            let side = if attaching_right { Side::Right } else { Side::Left };
            let child = arena.alloc(value);
            arena.attach(current, side, child);
            attaching_right = false;
            spine.push(child);
            peak_stack = peak_stack.max(spine.len());
            current = child;
        }
    }

    if pre_order.next().is_some() {
        return Err(ambiguous(AmbiguityFault::InconsistentSequences {
            position: in_order.len(),
        }));
    }

    debug!(
        nodes = arena.len(),
        peak_stack, "reconstructed tree from pre-order and in-order"
    );
    Ok(arena.into_tree())
}

fn validate<T: Eq + Hash>(pre_order: &[T], in_order: &[T]) -> Result<(), TreeError> {
    if pre_order.len() != in_order.len() {
        return Err(ambiguous(AmbiguityFault::LengthMismatch {
            pre_order: pre_order.len(),
            in_order: in_order.len(),
        }));
    }

    let mut seen = HashSet::with_capacity(pre_order.len());
    for (position, value) in pre_order.iter().enumerate() {
        if !seen.insert(value) {
            return Err(ambiguous(AmbiguityFault::DuplicateValue { position }));
        }
    }

    for (position, value) in in_order.iter().enumerate() {
        if !seen.contains(value) {
            return Err(ambiguous(AmbiguityFault::UnmatchedValue { position }));
        }
    }

    Ok(())
}

fn ambiguous(fault: AmbiguityFault) -> TreeError {
    debug!(%fault, "rejecting pre-order/in-order pair");
    TreeError::AmbiguousReconstruction(fault)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;

    #[test]
    fn test_rebuilds_unordered_tree() {
        let tree = Tree::from(
            Node::new('G')
                .with_left(Node::new('O').with_left(Node::new('R')).with_right(Node::new('Y')))
                .with_right(Node::new('B').with_right(Node::new('V'))),
        );
        let pre: Vec<char> = tree.preorder().copied().collect();
        let ino: Vec<char> = tree.inorder().copied().collect();

        let rebuilt = construct_from_preorder_inorder(pre, ino).unwrap();
        assert_eq!(rebuilt, tree);
    }

    #[test]
    fn test_right_subtree_under_left_child() {
        // 3(1(-, 2), -)
        let rebuilt = construct_from_preorder_inorder([3, 1, 2], [1, 2, 3]).unwrap();
        assert_eq!(rebuilt.to_string(), "3(1(-, 2), -)");
    }

    #[test]
    fn test_validation_faults() {
        assert_eq!(
            construct_from_preorder_inorder([1, 2], [1]).unwrap_err(),
            TreeError::AmbiguousReconstruction(AmbiguityFault::LengthMismatch {
                pre_order: 2,
                in_order: 1
            })
        );
        assert_eq!(
            construct_from_preorder_inorder(['L', 'L'], ['L', 'L']).unwrap_err(),
            TreeError::AmbiguousReconstruction(AmbiguityFault::DuplicateValue { position: 1 })
        );
        assert_eq!(
            construct_from_preorder_inorder([1, 2], [1, 3]).unwrap_err(),
            TreeError::AmbiguousReconstruction(AmbiguityFault::UnmatchedValue { position: 1 })
        );
    }

    #[test]
    fn test_inconsistent_sequences() {
        let err = construct_from_preorder_inorder([1, 2, 3], [3, 1, 2]).unwrap_err();
        assert_eq!(
            err,
            TreeError::AmbiguousReconstruction(AmbiguityFault::InconsistentSequences {
                position: 1
            })
        );
    }

    #[test]
    fn test_empty_pair() {
        let tree = construct_from_preorder_inorder(Vec::<u8>::new(), Vec::new()).unwrap();
        assert!(tree.is_empty());
    }
}
