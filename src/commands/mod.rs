pub mod error;
pub mod executor;
pub mod fuzz;
pub mod interpreter;
pub mod parser;
