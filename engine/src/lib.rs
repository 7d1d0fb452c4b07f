//! # Lexorder Engine
//!
//! Fractional-indexing order keys for manually ordered collections.
//!
//! Given zero, one, or two existing sort keys, the engine produces new keys
//! that sort strictly between them under plain byte-wise string comparison.
//! Moving an item means writing one new key for that item; the rest of the
//! collection is never renumbered.
//!
//! ## Design Principles
//!
//! - **No IO**: Engine has no knowledge of files, network, or storage
//! - **Deterministic**: Same inputs always produce same outputs
//! - **Exact**: Digit arrays with carried remainders, never floating point
//! - **Short keys**: Generated keys are trimmed to the fewest digits that keep order
//!
//! ## Core Concepts
//!
//! ### Symbol Tables
//!
//! A [`SymbolTable`] turns an alphabet of unique symbols into a radix. Keys
//! are fractions written in that radix, so `"8"` in [`DECIMAL`] is `0.8`.
//! Production keys use [`BASE62`], whose ASCII order matches its digit order.
//!
//! ### Arithmetic
//!
//! The [`fraction`] module implements long division, addition and
//! subtraction over digit arrays. A [`Fraction`] carries the part that does
//! not fit in the digits as an integer remainder over a known denominator.
//!
//! ### Interpolation and Trimming
//!
//! [`linspace`] places evenly spaced points between two keys and [`chop`]
//! cuts each point down to the shortest prefix that still sorts after its
//! predecessor.
//!
//! ## Quick Start
//!
//! ```rust
//! use lexorder_engine::{between, end, initial, start, SymbolTable};
//!
//! // First item of an empty list
//! let first = initial().unwrap();
//! assert_eq!(first, "00Npd");
//!
//! // Append and prepend
//! let last = end(&first).unwrap();
//! let head = start(&first).unwrap();
//! assert!(head < first && first < last);
//!
//! // Move an item between two neighbours
//! let moved = between(&first, &last).unwrap();
//! assert!(first < moved && moved < last);
//!
//! // Several keys at once, in any alphabet
//! let keys = SymbolTable::decimal().between("2", "3", 3, 0, 0).unwrap();
//! assert_eq!(keys, vec!["23", "25", "28"]);
//! ```
//!
//! ## Concurrency
//!
//! Every function is pure and safe to call from any thread. Two callers that
//! derive a key from the same pair of neighbours get the same key, so the
//! storage layer must read the neighbours and write the new key in one
//! transaction.
//!
//! ## FFI
//!
//! The [`ffi`] module provides C-compatible functions for use from other languages.
//! All data is exchanged as JSON strings.

pub mod between;
pub mod chop;
pub mod error;
pub mod ffi;
pub mod fraction;
pub mod linspace;
pub mod symbols;

// Re-export main types at crate root
pub use between::{
    between, end, initial, start, KeyRequest, DEFAULT_DIVISIONS, DEFAULT_PLACES_TO_KEEP,
    END_PADDING,
};
pub use error::Error;
pub use fraction::Fraction;
pub use linspace::MAX_COUNT;
pub use symbols::{SymbolTable, BASE62, DECIMAL, HEX};

/// Type aliases for clarity
pub type Digit = usize;
pub type Remainder = u128;
