//! # Videostore Billing
//!
//! Configured pricing and statement rendering for the video store.
//!
//! ## Configuration
//!
//! ```text
//! videostore.toml            (optional, working directory)
//! VIDEOSTORE__LOYALTY__NEW_RELEASE_BONUS=2
//! VIDEOSTORE__OUTPUT__FORMAT=json
//! ```
//!
//! Environment variables override the file. A category's rate table
//! (`[pricing.regular]`, ...) must be given whole; any table left out falls
//! back to the standard rate card, the standard loyalty policy or text output.

pub mod config;
pub mod service;

pub use crate::config::{BillingConfig, OutputFormat, OutputSettings};
pub use crate::service::BillingService;

/// Configuration file name, without extension
pub const CONFIG_FILE: &str = "videostore";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "VIDEOSTORE";

/// Separator between nested keys in environment overrides
pub const ENV_SEPARATOR: &str = "__";
