//! Billing service
//!
//! Prices customers with the configured policies and renders their
//! statements in the configured format.

use tracing::{debug, instrument};
use videostore_common::{Customer, Result, Statement};

use crate::config::{BillingConfig, OutputFormat};

/// Statement service bound to one billing configuration
#[derive(Debug, Clone, Default)]
pub struct BillingService {
    config: BillingConfig,
}

impl BillingService {
    pub fn new(config: BillingConfig) -> Self {
        Self { config }
    }

    /// Service using the standard rate card, loyalty policy and text output
    pub fn standard() -> Self {
        Self::new(BillingConfig::default())
    }

    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    /// Price a customer's rentals under the configured policies
    pub fn summarize(&self, customer: &Customer) -> Statement {
        customer.summarize(&self.config.pricing, &self.config.loyalty)
    }

    /// Render a customer's statement in the configured format
    pub fn render(&self, customer: &Customer) -> Result<String> {
        self.render_as(customer, self.config.output.format)
    }

    #[instrument(skip(self, customer), fields(customer = customer.name()))]
    pub fn render_as(&self, customer: &Customer, format: OutputFormat) -> Result<String> {
        let statement = self.summarize(customer);
        debug!(
            total_charge = %statement.total_charge,
            total_points = statement.total_points,
            "rendering statement"
        );
        format.formatter().format(&statement)
    }
}
