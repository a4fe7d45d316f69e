//! Application module
//!
//! Command-line operation dispatch and result formatting.

mod operation;

pub use operation::Operation;
