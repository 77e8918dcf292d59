//! # Data Models
//!
//! Payload types serialized to and from JSON by the handlers.

mod status;

pub use status::*;
