//! # Utility Functions and Constants

pub mod constant;

mod env;

pub use env::*;
