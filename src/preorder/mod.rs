//! Tree reconstruction from pre-order sequences
//!
//! Two decoders that need no branch ids:
//! - [`construct_from_preorder`]: a single pre-order of a search tree, using
//!   the value order to place each node
//! - [`construct_from_preorder_inorder`]: any tree with distinct values,
//!   disambiguated by its in-order sequence
//!
//! Both build in pre-order with an explicit stack; time is linear.

mod paired;
mod search_tree;

pub use paired::construct_from_preorder_inorder;
pub use search_tree::construct_from_preorder;

use thiserror::Error;

/// Why a pre-order/in-order pair cannot describe exactly one tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmbiguityFault {
    /// Sequences differ in length
    #[error("pre-order has {pre_order} values, in-order has {in_order}")]
    LengthMismatch {
        /// Pre-order length
        pre_order: usize,
        /// In-order length
        in_order: usize,
    },

    /// A value repeats in the pre-order sequence
    #[error("duplicate value at pre-order position {position}")]
    DuplicateValue {
        /// Position of the second occurrence
        position: usize,
    },

    /// An in-order value never occurs in the pre-order sequence
    #[error("in-order value at position {position} is missing from the pre-order")]
    UnmatchedValue {
        /// In-order position
        position: usize,
    },

    /// Same values, but no binary tree has both traversals
    #[error("no tree matches both sequences (in-order position {position})")]
    InconsistentSequences {
        /// In-order position where construction got stuck
        position: usize,
    },
}
