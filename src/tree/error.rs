// src/tree/error.rs
use std::fmt;
use thiserror::Error;

/// Which child slot of a node an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Internal-invariant violations.
///
/// None of these occur under correct use of the tree. They exist so that
/// the engine can refuse an impossible restructuring instead of corrupting
/// itself, and so that `check_invariants` can say what went wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("internal error: encountered null node in {side} child slot")]
    MissingChild { side: Side },

    #[error("node at depth {depth} has balance factor {balance}")]
    Unbalanced { depth: usize, balance: i32 },

    #[error("key order violated at depth {depth}")]
    OrderViolation { depth: usize },

    #[error("cached height {cached} differs from computed height {actual} at depth {depth}")]
    HeightMismatch {
        depth: usize,
        cached: i32,
        actual: i32,
    },

    #[error("cached size {cached} differs from computed size {actual} at depth {depth}")]
    SizeMismatch {
        depth: usize,
        cached: usize,
        actual: usize,
    },
}

pub type TreeResult<T> = Result<T, TreeError>;
