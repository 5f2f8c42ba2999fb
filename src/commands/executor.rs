//! # Command Executor Module
//!
//! Applies parsed commands to the integer tree owned by the executor.

use crate::tree::avltree::AvlTree;

use super::parser::Command;

/// Outcome of a single command.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Reply {
    /// `true` when the key was not present before.
    Inserted(bool),
    /// Number of keys in the queried range.
    Count(usize),
}

/// Owns the tree the interpreter and the fuzz entry drive.
#[derive(Debug, Default)]
pub struct CommandExecutor {
    tree: AvlTree<i32>,
}

impl CommandExecutor {
    pub fn new() -> Self {
        CommandExecutor {
            tree: AvlTree::new(),
        }
    }

    /// Executes a single command against the tree
    ///
    /// # Command Results
    ///
    /// * Insert - `Reply::Inserted(false)` for a duplicate key, which changes nothing
    /// * Query - `Reply::Count` with the inclusive count, 0 when `min > max`
    pub fn execute_command(&mut self, command: Command) -> Reply {
        match command {
            Command::Insert(key) => Reply::Inserted(self.tree.insert(key)),
            Command::Query(min, max) => Reply::Count(self.tree.range_query(&min, &max)),
        }
    }

    pub fn tree(&self) -> &AvlTree<i32> {
        &self.tree
    }
}
