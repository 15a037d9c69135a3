//! Duration strings <-> seconds.
//!
//! This module handles:
//! - Parsing cells such as `3 weeks`, `4.2k years` or `Instantly`
//! - Formatting seconds back into the same compact text form

pub mod codec;
pub mod units;

// Re-export main types
pub use codec::{format_duration, parse_duration, DurationFormat};
pub use units::{TimeUnit, LADDER, PREFIXES};
