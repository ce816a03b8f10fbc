//! Exhaustive enumeration of tree shapes sharing one pre-order sequence
//!
//! A pre-order sequence alone does not fix the shape: with `n` values there
//! are Catalan(n) trees whose pre-order traversal matches. The enumerator
//! walks them with an explicit worklist instead of recursive generators:
//!
//! 1. All `n` nodes live in one index arena, node `i` holding value `i`
//! 2. Node `i` may fill any open attachment locus, i.e. any delta in
//!    `0 ..= open + 1` where `open` counts the open left-turn ancestors
//! 3. Each placement pushes an undo entry; backtracking detaches the node
//!    and restores the ancestors it closed
//!
//! [`TreeEnumerator::advance`] lends a [`ShapeView`] of the arena as it
//! stands. The borrow ends before the next step mutates the arena, so a view
//! can never be observed in a later configuration. The [`Iterator`] impl deep
//! copies every shape into an independent [`Tree`]: `O(n)` per tree,
//! `O(n · Catalan(n))` overall.

mod config;

pub use config::EnumerationConfig;

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::codec::{RelativeEncoding, Token};
use crate::tree::{NodeArena, NodeId, Side, Tree};
use crate::TreeError;

/// Catalan number `C(n)`, or `None` once it no longer fits in a `u64`
///
/// `C(0) = C(1) = 1`: one empty tree, one single-node tree.
pub fn catalan(n: usize) -> Option<u64> {
    let mut value: u64 = 1;
    for k in 0..n as u128 {
        // C(k+1) = C(k) * 2(2k+1) / (k+2), exact at every step
        let next = u128::from(value) * (2 * (2 * k + 1)) / (k + 2);
        value = u64::try_from(next).ok()?;
    }
    Some(value)
}

/// Enumerate every tree whose pre-order traversal is `values`
///
/// Yields exactly Catalan(n) independent trees (one empty tree for `n = 0`).
pub fn enumerate_trees<T, I>(values: I) -> TreeEnumerator<T>
where
    I: IntoIterator<Item = T>,
{
    TreeEnumerator::new(values.into_iter().collect())
}

/// [`enumerate_trees`] with an input size guard
///
/// # Errors
/// [`TreeError::EnumerationTooLarge`] if there are more than
/// `config.max_values` values.
pub fn enumerate_trees_with<T, I>(
    values: I,
    config: &EnumerationConfig,
) -> Result<TreeEnumerator<T>, TreeError>
where
    I: IntoIterator<Item = T>,
{
    let values: Vec<T> = values.into_iter().collect();
    if values.len() > config.max_values {
        debug!(
            len = values.len(),
            limit = config.max_values,
            "refusing oversized enumeration"
        );
        return Err(TreeError::EnumerationTooLarge {
            len: values.len(),
            limit: config.max_values,
        });
    }
    Ok(TreeEnumerator::new(values))
}

/// Undo record for one placed (non-root) node
#[derive(Debug, Clone, Copy)]
struct Placement {
    parent: NodeId,
    side: Side,
    /// Relative delta that chose this locus
    delta: usize,
    /// Open ancestors closed by this placement, parked in `spilled`
    closed: usize,
}

/// Lazy enumerator over all shapes for a fixed pre-order sequence
#[derive(Debug)]
pub struct TreeEnumerator<T> {
    arena: NodeArena<T>,

    /// Open left-turn ancestors of `current`, root side first
    open: Vec<NodeId>,

    /// Ancestors closed by right placements, restored on backtrack
    spilled: Vec<NodeId>,

    /// One entry per placed node `1..`
    placements: Vec<Placement>,

    /// Most recently placed node
    current: NodeId,

    /// Next delta to try for the next unplaced node
    next_delta: usize,

    /// The arena currently holds a shape that was already handed out
    yielded: bool,

    finished: bool,
    produced: u64,
}

impl<T> TreeEnumerator<T> {
    fn new(values: Vec<T>) -> Self {
        debug!(
            values = values.len(),
            expected = ?catalan(values.len()),
            "starting tree enumeration"
        );
        Self {
            arena: NodeArena::from_values(values),
            open: Vec::new(),
            spilled: Vec::new(),
            placements: Vec::new(),
            current: 0,
            next_delta: 0,
            yielded: false,
            finished: false,
            produced: 0,
        }
    }

    /// Total number of shapes this enumerator yields, if it fits in a `u64`
    pub fn expected_count(&self) -> Option<u64> {
        catalan(self.arena.len())
    }

    /// Shapes handed out so far
    pub fn produced(&self) -> u64 {
        self.produced
    }

    /// Step to the next shape and lend a view of it
    ///
    /// The view borrows the enumerator, so it cannot outlive the next step.
    /// Use [`ShapeView::to_tree`] to keep a shape.
    pub fn advance(&mut self) -> Option<ShapeView<'_, T>> {
        if self.finished {
            return None;
        }

        let len = self.arena.len();
        if len == 0 {
            self.finished = true;
            self.produced = 1;
            return Some(self.view());
        }

        if self.yielded && !self.backtrack() {
            return self.finish();
        }

        loop {
            if self.placements.len() + 1 == len {
                self.yielded = true;
                self.produced += 1;
                trace!(shape = self.produced, "enumerated tree shape");
                return Some(self.view());
            }

            if self.next_delta > self.open.len() + 1 {
                if !self.backtrack() {
                    return self.finish();
                }
                continue;
            }

            let delta = self.next_delta;
            self.place(delta);
            self.next_delta = 0;
        }
    }

    fn view(&self) -> ShapeView<'_, T> {
        ShapeView {
            arena: &self.arena,
            placements: &self.placements,
        }
    }

    fn finish(&mut self) -> Option<ShapeView<'_, T>> {
        self.finished = true;
        debug!(produced = self.produced, "tree enumeration exhausted");
        None
    }

    /// Attach the next node at the locus selected by `delta`
    fn place(&mut self, delta: usize) {
        let child = self.placements.len() + 1;

        let (parent, side, closed) = match delta {
            0 => {
                self.open.push(self.current);
                (self.current, Side::Left, 0)
            }
            1 => (self.current, Side::Right, 0),
            delta => {
                let closed = delta - 1;
                let keep = self.open.len() - closed;
                let target = self.open[keep];
                self.spilled.extend(self.open.drain(keep..));
                (target, Side::Right, closed)
            }
        };

        self.arena.attach(parent, side, child);
        self.placements.push(Placement {
            parent,
            side,
            delta,
            closed,
        });
        self.current = child;
    }

    /// Undo the latest placement; `false` once only the root remains
    fn backtrack(&mut self) -> bool {
        let Some(placement) = self.placements.pop() else {
            return false;
        };

        self.arena.detach(placement.parent, placement.side);
        match placement.delta {
            0 => {
                self.open.pop();
            }
            1 => {}
            _ => {
                let from = self.spilled.len() - placement.closed;
                self.open.extend(self.spilled.drain(from..));
            }
        }

        self.current = self.placements.len();
        self.next_delta = placement.delta + 1;
        true
    }
}

impl<T: Clone> Iterator for TreeEnumerator<T> {
    type Item = Tree<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|view| view.to_tree())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        let remaining = self
            .expected_count()
            .and_then(|total| usize::try_from(total - self.produced).ok());
        match remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Clone> FusedIterator for TreeEnumerator<T> {}

/// Borrowed view of the shape currently assembled by a [`TreeEnumerator`]
#[derive(Debug, Clone, Copy)]
pub struct ShapeView<'a, T> {
    arena: &'a NodeArena<T>,
    placements: &'a [Placement],
}

impl<'a, T> ShapeView<'a, T> {
    /// Number of nodes
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Check if this is the empty shape
    pub fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Relative deltas of the non-root nodes, in pre-order
    pub fn deltas(&self) -> impl Iterator<Item = usize> + 'a {
        self.placements.iter().map(|placement| placement.delta)
    }

    /// Relative encoding of this shape, read off the placement log
    pub fn relative_encoding(&self) -> RelativeEncoding<T>
    where
        T: Clone,
    {
        let mut values = self.arena.values().iter();
        let mut tokens = Vec::with_capacity((2 * self.len()).saturating_sub(1));
        tokens.extend(values.next().cloned().map(Token::Value));
        for (placement, value) in self.placements.iter().zip(values) {
            tokens.push(Token::Delta(placement.delta));
            tokens.push(Token::Value(value.clone()));
        }
        RelativeEncoding::from_tokens(tokens)
    }

    /// Independent deep copy of this shape
    pub fn to_tree(&self) -> Tree<T>
    where
        T: Clone,
    {
        self.arena.snapshot()
    }
}
