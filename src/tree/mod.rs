pub mod avltree;
pub mod error;
pub mod node;
pub mod order;
pub mod traversal;
