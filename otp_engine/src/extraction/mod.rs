//! Tiered OTP extraction module.
//!
//! Pattern tables are applied tier by tier with strict early exit: the
//! first tier that produces a surviving candidate decides the result.

pub mod candidates;
pub mod engine;
pub mod patterns;
