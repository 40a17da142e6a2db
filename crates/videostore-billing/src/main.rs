//! Billing demo binary
//!
//! Prints the statement for a sample customer using the loaded configuration.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use videostore_billing::{BillingConfig, BillingService};
use videostore_common::{Customer, Movie, MovieCategory, Rental, VERSION};

fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so stdout carries only the statement
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting videostore billing v{}", VERSION);

    let service = BillingService::new(BillingConfig::load()?);
    let customer = sample_customer()?;
    println!("{}", service.render(&customer)?);

    Ok(())
}

fn sample_customer() -> Result<Customer> {
    let rembo = Arc::new(Movie::new("Rembo", MovieCategory::Regular)?);
    let lotr = Arc::new(Movie::new("Lord of the Rings", MovieCategory::NewRelease)?);
    let harry_potter = Arc::new(Movie::new("Harry Potter", MovieCategory::Childrens)?);

    Ok(Customer::new(
        "John Doe",
        vec![
            Rental::new(rembo, 1)?,
            Rental::new(lotr, 4)?,
            Rental::new(harry_potter, 5)?,
        ],
    ))
}
