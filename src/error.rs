use std::error;
use std::fmt;
use std::result;

/// A red black tree invariant that `validate` found broken.
///
/// None of these can be produced through the public API of a correct tree; they exist so that
/// tests and debugging sessions get a precise report instead of a boolean.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The root of a non-empty tree is red.
    RedRoot,
    /// A red node at `depth` has a red child.
    ConsecutiveReds { depth: usize },
    /// Two subtrees of the node at `depth` have different black-heights.
    BlackHeightMismatch {
        depth: usize,
        left: usize,
        right: usize,
    },
    /// A key at `depth` is not strictly between the keys bounding its subtree.
    OutOfOrder { depth: usize },
    /// A node at `depth` does not point back at its parent.
    BrokenParentLink { depth: usize },
    /// The number of reachable nodes differs from the recorded length.
    LengthMismatch { expected: usize, actual: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RedRoot => write!(f, "root is red"),
            Error::ConsecutiveReds { depth } => {
                write!(f, "red node at depth {} has a red child", depth)
            },
            Error::BlackHeightMismatch { depth, left, right } => write!(
                f,
                "unbalanced blacks at depth {}: left {} right {}",
                depth, left, right,
            ),
            Error::OutOfOrder { depth } => write!(f, "key at depth {} is out of order", depth),
            Error::BrokenParentLink { depth } => {
                write!(f, "node at depth {} has a stale parent link", depth)
            },
            Error::LengthMismatch { expected, actual } => write!(
                f,
                "tree records {} nodes but {} are reachable",
                expected, actual,
            ),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
