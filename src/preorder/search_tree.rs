//! Search-tree reconstruction from a single pre-order sequence

use std::cmp::Ordering;

use tracing::debug;

use crate::tree::{NodeArena, NodeId, Side, Tree};
use crate::TreeError;

/// Rebuild a binary search tree from its pre-order values
///
/// A value smaller than the current node becomes its left child. Otherwise
/// the stack of nodes still awaiting a right subtree is popped while its top
/// is `<=` the value, and the value becomes the right child of the last node
/// popped. Equal values therefore land in the right subtree.
///
/// # Errors
/// - [`TreeError::IncomparableValue`] if two values have no order (e.g. NaN)
/// - [`TreeError::InvalidSearchOrder`] if the sequence is not the pre-order
///   of any search tree
pub fn construct_from_preorder<T, I>(values: I) -> Result<Tree<T>, TreeError>
where
    T: PartialOrd,
    I: IntoIterator<Item = T>,
{
    let mut values = values.into_iter().enumerate();
    let Some((_, root)) = values.next() else {
        return Ok(Tree::empty());
    };

    let mut arena = NodeArena::new();
    let mut current = arena.alloc(root);
    let mut pending: Vec<NodeId> = vec![current];
    let mut peak_stack = 1;

    // Every later value must be >= the last node that received a right child
    let mut lower_bound: Option<NodeId> = None;

    for (position, value) in values {
        if let Some(bound) = lower_bound {
            if compare(&value, arena.value(bound), position)? == Ordering::Less {
                debug!(position, "value falls below its search-tree lower bound");
                return Err(TreeError::InvalidSearchOrder { position });
            }
        }

        let (parent, side) = if compare(&value, arena.value(current), position)? == Ordering::Less
        {
            (current, Side::Left)
        } else {
            let mut parent = current;
            while let Some(&top) = pending.last() {
                if compare(arena.value(top), &value, position)? == Ordering::Greater {
                    break;
                }
                parent = top;
                pending.pop();
            }
            lower_bound = Some(parent);
            (parent, Side::Right)
        };

        let child = arena.alloc(value);
        arena.attach(parent, side, child);
        pending.push(child);
        peak_stack = peak_stack.max(pending.len());
        current = child;
    }

    debug!(
        nodes = arena.len(),
        peak_stack, "reconstructed search tree from pre-order"
    );
    Ok(arena.into_tree())
}

fn compare<T: PartialOrd>(a: &T, b: &T, position: usize) -> Result<Ordering, TreeError> {
    a.partial_cmp(b).ok_or_else(|| {
        debug!(position, "incomparable value in search-tree pre-order");
        TreeError::IncomparableValue { position }
    })
}
