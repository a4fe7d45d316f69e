//! Colour transformation module
//!
//! Contains the Blade transformer and its fixed tones.

mod transformer;

pub use transformer::*;
