//! # avl_range_tree
//!
//! An in-memory ordered set backed by a height-balanced (AVL) binary search
//! tree. Every node caches its subtree height and subtree size, which keeps
//! insertion logarithmic and lets [`AvlTree::range_query`] count the keys in
//! an inclusive range without visiting them one by one.
//!
//! ```
//! use avl_range_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.range_query(&30, &60), 4);
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![20, 30, 40, 50, 60, 70, 80]);
//! ```
//!
//! The `commands` module holds the text command interpreter and the byte-stream
//! fuzz entry that drive the tree from the outside.

pub mod commands;
pub mod config;
pub mod logging;
pub mod tree;

pub use tree::avltree::AvlTree;
pub use tree::error::{TreeError, TreeResult};
pub use tree::order::{KeyOrder, NaturalOrder};
pub use tree::traversal::{Order, Traversal};
