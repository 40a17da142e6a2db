//! Customers and their rental statements

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::loyalty::LoyaltyPolicy;
use super::pricing::PricingPolicy;
use super::rental::Rental;
use crate::statement::{Statement, StatementLine};

/// A customer and the rentals they hold, in the order they were made
///
/// Immutable after construction. Producing a statement only reads the
/// rentals, so a shared `&Customer` can be summarized from any thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    rentals: Vec<Rental>,
}

impl Customer {
    /// Create a customer. The name is kept as given, including empty names.
    pub fn new(name: impl Into<String>, rentals: impl IntoIterator<Item = Rental>) -> Self {
        Self {
            name: name.into(),
            rentals: rentals.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    /// Price every rental in one pass and collect the totals
    #[instrument(skip_all, fields(customer = %self.name, rentals = self.rentals.len()))]
    pub fn summarize(&self, pricing: &PricingPolicy, loyalty: &LoyaltyPolicy) -> Statement {
        let mut lines = Vec::with_capacity(self.rentals.len());
        let mut total_charge = Decimal::ZERO;
        let mut total_points: u32 = 0;

        for rental in &self.rentals {
            let charge = rental.charge_with(pricing);
            let points = rental.points_with(loyalty);
            debug!(
                title = rental.movie().title(),
                days_rented = rental.days_rented(),
                %charge,
                points,
                "priced rental"
            );

            total_charge += charge;
            total_points = total_points.saturating_add(points);
            lines.push(StatementLine {
                title: rental.movie().title().to_string(),
                category: rental.movie().category(),
                days_rented: rental.days_rented(),
                charge,
                points,
            });
        }

        Statement {
            customer_name: self.name.clone(),
            lines,
            total_charge,
            total_points,
        }
    }

    /// Plain-text statement under the standard rate card and loyalty policy
    pub fn statement(&self) -> String {
        self.statement_with(&PricingPolicy::standard(), &LoyaltyPolicy::standard())
    }

    /// Plain-text statement under custom policies
    pub fn statement_with(&self, pricing: &PricingPolicy, loyalty: &LoyaltyPolicy) -> String {
        self.summarize(pricing, loyalty).render_text()
    }
}
