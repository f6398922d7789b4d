//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

/// System instruction seeded into every new trip-planning session
pub const WANDERWISE: &str = include_str!("../prompts/wanderwise.pmt");
