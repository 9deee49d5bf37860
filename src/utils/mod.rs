//! Utility modules

pub mod memory_numbering;
pub mod validation;

pub use memory_numbering::*;
pub use validation::*;
