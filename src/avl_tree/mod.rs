//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod node;
mod set;
mod tree;

pub use self::set::{AvlSet, AvlSetIntoIter, AvlSetIter};

use std::error;
use std::fmt;
use std::result;

/// The errors reported by `AvlSet` operations. A failed operation leaves the set unmodified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The key to remove does not exist in the set.
    KeyNotFound,
    /// The set has no keys to query.
    EmptyTree,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::KeyNotFound => write!(f, "key not found in the tree"),
            Error::EmptyTree => write!(f, "tree is empty"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
