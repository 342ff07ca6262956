//! Shared functionality
//!
//! Types and errors used by all the rasterfont crates.
//!

pub mod types;
