//! Domain model for reservable festival content.
//!
//! These are immutable value types produced by the gateway layer. A new
//! snapshot replaces the previous one on every successful load; nothing in
//! here is cached or mutated in place.

mod types;

pub use types::*;
