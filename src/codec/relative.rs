//! Relative branch-delta encoder and decoder

use tracing::debug;

use super::{EncodingFault, RelativeEncoding, StructuralPreorder, Token};
use crate::tree::{NodeArena, NodeId, Side, Tree};
use crate::TreeError;

/// Lazy relative encoding over borrowed values
#[derive(Debug)]
pub struct RelativeTokens<'a, T> {
    pairs: StructuralPreorder<'a, T>,

    /// Branch id of the previously emitted node (`None` before the root)
    last: Option<usize>,

    /// Value waiting to follow the delta just emitted
    pending: Option<&'a T>,
}

impl<'a, T> Iterator for RelativeTokens<'a, T> {
    type Item = Token<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.pending.take() {
            return Some(Token::Value(value));
        }

        let (branch_id, value) = self.pairs.next()?;
        match self.last.replace(branch_id) {
            // The root has a single forced placement, its id carries nothing
            None => Some(Token::Value(value)),
            Some(last) => {
                self.pending = Some(value);
                Some(Token::Delta(last + 1 - branch_id))
            }
        }
    }
}

/// Stream the relative encoding of `tree` without cloning values
pub fn relative_tokens<T>(tree: &Tree<T>) -> RelativeTokens<'_, T> {
    RelativeTokens {
        pairs: tree.structural_preorder(),
        last: None,
        pending: None,
    }
}

/// Encode `tree` as `[root, delta, value, delta, value, ...]`
///
/// Length is `2 * len - 1` for a non-empty tree and `0` otherwise.
pub fn relative_encode<T: Clone>(tree: &Tree<T>) -> RelativeEncoding<T> {
    relative_tokens(tree).map(Token::cloned).collect()
}

/// Rebuild a tree from a relative encoding
///
/// Consumes every token once. Auxiliary stack is bounded by the number of
/// open left-turn ancestors, i.e. by the tree height. Empty input gives the
/// empty tree.
pub fn reconstruct<T, I>(tokens: I) -> Result<Tree<T>, TreeError>
where
    I: IntoIterator<Item = Token<T>>,
{
    let mut tokens = tokens.into_iter().enumerate();

    let root_value = match tokens.next() {
        None => return Ok(Tree::empty()),
        Some((_, Token::Value(value))) => value,
        Some((position, Token::Delta(_))) => {
            return Err(malformed(position, EncodingFault::ExpectedValue))
        }
    };

    let mut arena = NodeArena::new();
    let mut current = arena.alloc(root_value);
    let mut open: Vec<NodeId> = Vec::new();
    let mut peak_stack = 0;

    while let Some((position, token)) = tokens.next() {
        let delta = match token {
            Token::Delta(delta) => delta,
            Token::Value(_) => return Err(malformed(position, EncodingFault::ExpectedDelta)),
        };
        let value = match tokens.next() {
            Some((_, Token::Value(value))) => value,
            Some((position, Token::Delta(_))) => {
                return Err(malformed(position, EncodingFault::ExpectedValue))
            }
            None => return Err(malformed(position, EncodingFault::DanglingDelta)),
        };

        let (parent, side) = match delta {
            0 => {
                open.push(current);
                peak_stack = peak_stack.max(open.len());
                (current, Side::Left)
            }
            1 => (current, Side::Right),
            delta => {
                let backtrack = delta - 1;
                if backtrack > open.len() {
                    return Err(malformed(
                        position,
                        EncodingFault::BacktrackOverflow {
                            delta,
                            depth: open.len(),
                        },
                    ));
                }
                // The last ancestor popped receives the right child
                let keep = open.len() - backtrack;
                let target = open[keep];
                open.truncate(keep);
                (target, Side::Right)
            }
        };

        let child = arena.alloc(value);
        arena.attach(parent, side, child);
        current = child;
    }

    debug!(
        nodes = arena.len(),
        peak_stack, "reconstructed tree from relative encoding"
    );
    Ok(arena.into_tree())
}

fn malformed(position: usize, reason: EncodingFault) -> TreeError {
    debug!(position, %reason, "rejecting relative encoding");
    TreeError::MalformedEncoding { position, reason }
}
