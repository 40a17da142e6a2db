//! # Videostore Common
//!
//! Shared types, errors, and the statement engine for the video store.
//!
//! ## Core Types
//!
//! - [`Movie`]/[`MovieCategory`]: a title and the pricing category it rents under
//! - [`Rental`]: a movie rented for a number of whole days
//! - [`Customer`]: an ordered list of rentals that can produce a statement
//! - [`PricingPolicy`]: (category, days) -> charge
//! - [`LoyaltyPolicy`]: (category, days) -> frequent renter points
//!
//! ## Statements
//!
//! - [`statement::Statement`]: structured totals and per-rental lines
//! - [`statement::PlainText`]: the classic "Rental Record for ..." text
//! - [`statement::Json`]: the same statement as pretty-printed JSON
//!
//! ```text
//! Rental Record for John Doe
//! 	Rembo	2.0
//! 	Lord of the Rings	12.0
//! 	Harry Potter	4.5
//! Amount owed is 18.5
//! You earned 4 frequent renter points
//! ```

use rust_decimal::Decimal;

pub mod error;
pub mod statement;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ConfigError, RentalError, Result, VideoStoreError};
pub use statement::{Json, PlainText, Statement, StatementFormatter, StatementLine};
pub use types::{
    customer::Customer,
    loyalty::LoyaltyPolicy,
    movie::{Movie, MovieCategory},
    pricing::{CategoryRate, PricingPolicy},
    rental::Rental,
};

/// Videostore version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of fractional digits charges are rounded to and rendered with
pub const CURRENCY_SCALE: u32 = 1;

/// Largest charge a validated rate card can produce for one rental.
///
/// Far enough below `Decimal::MAX` that summing any list of rentals that
/// fits in memory cannot overflow.
pub const MAX_RENTAL_CHARGE: Decimal = Decimal::from_parts(0xA4C6_8000, 0x38D7E, 0, false, 0);

/// Shortest rental accepted at construction
pub const MIN_RENTAL_DAYS: u32 = 1;
