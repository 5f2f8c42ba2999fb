//! Fuzz entry point: replays an arbitrary byte buffer as tree operations.
//!
//! The buffer is a sequence of records. Each record starts with a one-byte
//! opcode; an even opcode is followed by one little-endian `i32` to insert,
//! an odd opcode by two `i32`s bounding a range query. A record cut short by
//! the end of the buffer ends the run.

use std::collections::BTreeSet;

use tracing::error;

use crate::tree::avltree::AvlTree;
use crate::tree::error::{TreeError, TreeResult};

struct ByteReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        ByteReader { data, offset: 0 }
    }

    fn read_u8(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.offset)?;
        self.offset += 1;
        Some(byte)
    }

    fn read_i32(&mut self) -> Option<i32> {
        let bytes = self.data.get(self.offset..self.offset + 4)?;
        self.offset += 4;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(bytes);
        Some(i32::from_le_bytes(buf))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FuzzSummary {
    pub inserts: usize,
    pub queries: usize,
    pub distinct_keys: usize,
}

/// Replays `data` against a fresh tree, then verifies the tree.
pub fn run(data: &[u8]) -> TreeResult<FuzzSummary> {
    let mut reader = ByteReader::new(data);
    let mut tree = AvlTree::new();
    let mut keys = BTreeSet::new();
    let mut summary = FuzzSummary::default();

    while let Some(opcode) = reader.read_u8() {
        if opcode % 2 == 0 {
            let Some(key) = reader.read_i32() else {
                break;
            };
            tree.insert(key);
            keys.insert(key);
            summary.inserts += 1;
        } else {
            let (Some(a), Some(b)) = (reader.read_i32(), reader.read_i32()) else {
                break;
            };
            tree.range_query(&a.min(b), &a.max(b));
            summary.queries += 1;
        }
    }

    tree.check_invariants().map_err(|e| {
        error!(error = %e, "tree invariant broken after fuzz input");
        e
    })?;
    if tree.len() != keys.len() {
        return Err(TreeError::SizeMismatch {
            depth: 0,
            cached: tree.len(),
            actual: keys.len(),
        });
    }

    summary.distinct_keys = keys.len();
    Ok(summary)
}
