#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod clean;
mod context;
mod dedup;
pub mod extraction;
mod filter;
mod message;

pub use clean::clean_candidate;
pub use context::{KeywordSet, default_keywords};
pub use dedup::{DEFAULT_RECENT_CAPACITY, RecentMessages, content_key};
pub use extraction::candidates::{Candidate, Tier};
pub use extraction::engine::{EngineConfig, OtpExtractor};
pub use extraction::patterns::{BuildError, CompiledPattern, PatternDef, default_patterns};
pub use filter::{IgnoreConfig, IgnoreRules};
pub use message::MessageText;
