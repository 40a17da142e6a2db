//! A movie rented for a number of whole days

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::warn;

use super::loyalty::LoyaltyPolicy;
use super::movie::Movie;
use super::pricing::PricingPolicy;
use crate::error::RentalError;
use crate::MIN_RENTAL_DAYS;

/// Immutable pairing of a shared movie and a rental duration
///
/// Charge and points are derived on demand from the movie's category, never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rental {
    movie: Arc<Movie>,
    days_rented: u32,
}

impl Rental {
    /// Create a rental, rejecting durations shorter than [`MIN_RENTAL_DAYS`]
    pub fn new(movie: Arc<Movie>, days_rented: u32) -> Result<Self, RentalError> {
        if days_rented < MIN_RENTAL_DAYS {
            warn!(title = movie.title(), days_rented, "rejected rental duration");
            return Err(RentalError::ZeroDays {
                title: movie.title().to_string(),
                minimum: MIN_RENTAL_DAYS,
            });
        }
        Ok(Self { movie, days_rented })
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    pub fn days_rented(&self) -> u32 {
        self.days_rented
    }

    /// Charge under the standard rate card
    pub fn charge(&self) -> Decimal {
        self.charge_with(&PricingPolicy::standard())
    }

    /// Frequent renter points under the standard loyalty policy
    pub fn points(&self) -> u32 {
        self.points_with(&LoyaltyPolicy::standard())
    }

    pub fn charge_with(&self, pricing: &PricingPolicy) -> Decimal {
        pricing.charge(self.movie.category(), self.days_rented)
    }

    pub fn points_with(&self, loyalty: &LoyaltyPolicy) -> u32 {
        loyalty.points(self.movie.category(), self.days_rented)
    }
}
