//! Request handlers for key generation.

mod keys;

pub use keys::*;
