//! # Binary trees from depth-first sequences
//!
//! Reconstructs binary trees from sequence encodings and enumerates every
//! tree that shares a given pre-order sequence.
//!
//! ## Encodings
//!
//! 1. **Structural pre-order**: `(branch_id, value)` pairs; descending left
//!    opens a new attachment locus (`id + 1`), descending right does not
//! 2. **Relative delta encoding**: `[root, delta, value, delta, value, ...]`,
//!    one small integer per non-root node, duplicate values allowed
//! 3. **Pre-order (+ in-order)**: search trees need only the pre-order; any
//!    other tree needs both traversals and distinct values
//!
//! ## Usage Example
//!
//! ```
//! use treeseq::{reconstruct, relative_encode, Node, Tree};
//!
//! let tree = Tree::from(
//!     Node::new("P")
//!         .with_left(Node::new("L").with_left(Node::new("L")))
//!         .with_right(Node::new("R").with_right(Node::new("R"))),
//! );
//! let encoding = relative_encode(&tree);
//! assert_eq!(encoding.len(), 2 * tree.len() - 1);
//! assert_eq!(reconstruct(encoding)?, tree);
//! # Ok::<(), treeseq::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod codec;       // Structural pre-order and relative delta encoding
pub mod enumerate;   // All shapes for one pre-order sequence
pub mod preorder;    // Pre-order and pre-order + in-order decoders
pub mod tree;        // Node and tree representation

// Re-exports for convenience
pub use codec::{
    reconstruct, relative_encode, structural_preorder, EncodingFault, RelativeEncoding, Token,
};
pub use enumerate::{
    catalan, enumerate_trees, enumerate_trees_with, EnumerationConfig, ShapeView, TreeEnumerator,
};
pub use preorder::{construct_from_preorder, construct_from_preorder_inorder, AmbiguityFault};
pub use tree::{Node, Tree};

use thiserror::Error;

/// Errors reported by the decoders and the enumerator
///
/// Empty input is never an error: it decodes to the empty tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Relative delta sequence cannot be decoded
    #[error("malformed relative encoding at position {position}: {reason}")]
    MalformedEncoding {
        /// Token index where decoding failed
        position: usize,
        /// What was wrong there
        reason: EncodingFault,
    },

    /// Pre-order/in-order pair does not determine exactly one tree
    #[error("ambiguous reconstruction: {0}")]
    AmbiguousReconstruction(AmbiguityFault),

    /// Search-tree decoding met a value with no order relative to another
    #[error("value at position {position} is not comparable")]
    IncomparableValue {
        /// Index of the value being placed
        position: usize,
    },

    /// Sequence is not the pre-order of any search tree
    #[error("value at position {position} violates search-tree order")]
    InvalidSearchOrder {
        /// Index of the offending value
        position: usize,
    },

    /// Enumeration input exceeds the configured limit
    #[error("refusing to enumerate {len} values (limit {limit})")]
    EnumerationTooLarge {
        /// Number of input values
        len: usize,
        /// Configured maximum
        limit: usize,
    },
}
