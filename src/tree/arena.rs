//! Index arena used while a tree is under construction
//!
//! Builders keep stacks of `NodeId`s instead of `&mut` links into boxed
//! nodes. Nodes are allocated in pre-order, so every child id is larger
//! than its parent id; materialization is a single reverse sweep.

use super::{Node, Tree};

/// Index of a node inside a [`NodeArena`]
pub(crate) type NodeId = usize;

/// Which child slot of a parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Arena of values plus parallel left/right link vectors
#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    values: Vec<T>,
    left: Vec<Option<NodeId>>,
    right: Vec<Option<NodeId>>,
}

impl<T> NodeArena<T> {
    pub(crate) fn new() -> Self {
        Self {
            values: Vec::new(),
            left: Vec::new(),
            right: Vec::new(),
        }
    }

    /// Arena with every value preallocated and no links (id = input position)
    pub(crate) fn from_values(values: Vec<T>) -> Self {
        let len = values.len();
        Self {
            values,
            left: vec![None; len],
            right: vec![None; len],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn alloc(&mut self, value: T) -> NodeId {
        self.values.push(value);
        self.left.push(None);
        self.right.push(None);
        self.values.len() - 1
    }

    pub(crate) fn value(&self, id: NodeId) -> &T {
        &self.values[id]
    }

    pub(crate) fn values(&self) -> &[T] {
        &self.values
    }

    pub(crate) fn attach(&mut self, parent: NodeId, side: Side, child: NodeId) {
        debug_assert!(child > parent, "children must be allocated after parents");
        let slot = match side {
            Side::Left => &mut self.left[parent],
            Side::Right => &mut self.right[parent],
        };
        debug_assert!(slot.is_none(), "slot {:?} of {} already filled", side, parent);
        *slot = Some(child);
    }

    pub(crate) fn detach(&mut self, parent: NodeId, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left[parent].take(),
            Side::Right => self.right[parent].take(),
        }
    }

    /// Move the values out into an owned tree rooted at id 0
    pub(crate) fn into_tree(self) -> Tree<T> {
        let NodeArena {
            values,
            left,
            right,
        } = self;
        assemble(values.into_iter(), &left, &right)
    }

    /// Deep copy of the current configuration rooted at id 0
    pub(crate) fn snapshot(&self) -> Tree<T>
    where
        T: Clone,
    {
        assemble(self.values.iter().cloned(), &self.left, &self.right)
    }
}

/// Build boxed nodes from the highest id down, so children exist before parents
fn assemble<T, I>(values: I, left: &[Option<NodeId>], right: &[Option<NodeId>]) -> Tree<T>
where
    I: DoubleEndedIterator<Item = T> + ExactSizeIterator,
{
    let mut built: Vec<Option<Box<Node<T>>>> = Vec::with_capacity(values.len());
    built.resize_with(values.len(), || None);

    for (id, value) in values.enumerate().rev() {
        let node = Node {
            value,
            left: left[id].and_then(|child| built[child].take()),
            right: right[id].and_then(|child| built[child].take()),
        };
        built[id] = Some(Box::new(node));
    }

    Tree::from_boxed(built.into_iter().next().flatten())
}
