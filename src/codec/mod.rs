//! Depth-first sequence encodings of binary trees
//!
//! Branch ids number the open attachment loci during a pre-order walk:
//! descending left opens a new locus (`id + 1`), descending right does not
//! (`id` unchanged). The relative encoding stores, for every non-root node,
//! `delta = 1 + previous_id - id` followed by the value:
//!
//! ```text
//! [root, delta_1, value_1, delta_2, value_2, ...]
//! ```
//!
//! | delta | placement of the next node                          |
//! |-------|-----------------------------------------------------|
//! | 0     | left child of the previous node                     |
//! | 1     | right child of the previous node                    |
//! | d ≥ 2 | right child of the `(d-1)`-th open left-turn ancestor |
//!
//! Unlike a pre-order + in-order pair, the encoding costs one small integer
//! per non-root node and tolerates duplicate values.

mod relative;
mod structural;
#[cfg(feature = "wire")]
mod wire;

pub use relative::{reconstruct, relative_encode, relative_tokens, RelativeTokens};
pub use structural::{structural_preorder, StructuralPreorder};

use std::fmt;

use thiserror::Error;

/// One entry of a flat relative encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<T> {
    /// Node payload
    Value(T),

    /// Branch delta placing the value that follows
    Delta(usize),
}

impl<T> Token<T> {
    /// Payload if this is a value token
    pub fn as_value(&self) -> Option<&T> {
        match self {
            Token::Value(value) => Some(value),
            Token::Delta(_) => None,
        }
    }

    /// Delta if this is a delta token
    pub fn as_delta(&self) -> Option<usize> {
        match self {
            Token::Value(_) => None,
            Token::Delta(delta) => Some(*delta),
        }
    }
}

impl<T: Clone> Token<&T> {
    /// Clone the borrowed payload
    pub fn cloned(self) -> Token<T> {
        match self {
            Token::Value(value) => Token::Value(value.clone()),
            Token::Delta(delta) => Token::Delta(delta),
        }
    }
}

/// Why a relative encoding was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingFault {
    /// A delta sits where a value belongs
    #[error("expected a value, found a delta")]
    ExpectedValue,

    /// A value sits where a delta belongs
    #[error("expected a delta, found a value")]
    ExpectedDelta,

    /// The sequence ends right after a delta
    #[error("trailing delta has no value")]
    DanglingDelta,

    /// The delta backtracks further than there are open loci
    #[error("delta {delta} backtracks past {depth} open loci")]
    BacktrackOverflow {
        /// Offending delta
        delta: usize,
        /// Open left-turn ancestors available at that point
        depth: usize,
    },
}

/// Owned flat relative encoding
///
/// Built by [`relative_encode`]; consumed by [`reconstruct`]. Not validated
/// on construction: [`reconstruct`] reports malformed sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativeEncoding<T> {
    tokens: Vec<Token<T>>,
}

impl<T> RelativeEncoding<T> {
    /// Wrap a token vector as-is
    pub fn from_tokens(tokens: Vec<Token<T>>) -> Self {
        Self { tokens }
    }

    /// Number of tokens (values and deltas)
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if there are no tokens (the empty tree)
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Borrow the tokens
    pub fn tokens(&self) -> &[Token<T>] {
        &self.tokens
    }

    /// Unwrap into the token vector
    pub fn into_tokens(self) -> Vec<Token<T>> {
        self.tokens
    }

    /// Just the deltas, in order
    pub fn deltas(&self) -> impl Iterator<Item = usize> + '_ {
        self.tokens.iter().filter_map(Token::as_delta)
    }
}

impl<T> FromIterator<Token<T>> for RelativeEncoding<T> {
    fn from_iter<I: IntoIterator<Item = Token<T>>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for RelativeEncoding<T> {
    type Item = Token<T>;
    type IntoIter = std::vec::IntoIter<Token<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for RelativeEncoding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            match token {
                Token::Value(value) => write!(f, "{}", value)?,
                Token::Delta(delta) => write!(f, "{}", delta)?,
            }
        }
        f.write_str("]")
    }
}
