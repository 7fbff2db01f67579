#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/kaidoki-rs/kaidoki/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core trait definitions for the kaidoki buy-signal checker.
//!
//! This crate provides the foundational abstractions shared by the indicator,
//! scoring, fetch and pipeline crates.

/// The version of the kaidoki-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod score;
pub mod scorer;
pub mod types;

// Re-exports
pub use error::{KaidokiError, Result};
pub use score::{clamp_score, round_to};
pub use scorer::Scorer;
pub use types::{Date, PriceHistory, Symbol};
