//! Billing configuration

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, Source};
use serde::{Deserialize, Serialize};
use tracing::info;
use videostore_common::{
    ConfigError, Json, LoyaltyPolicy, PlainText, PricingPolicy, Result, StatementFormatter,
};

/// How statements are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated "Rental Record for ..." text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    pub fn formatter(&self) -> &'static dyn StatementFormatter {
        match self {
            OutputFormat::Text => &PlainText,
            OutputFormat::Json => &Json,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// Billing service configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// Rate card per movie category
    pub pricing: PricingPolicy,
    /// Frequent renter points policy
    pub loyalty: LoyaltyPolicy,
    /// Statement output
    pub output: OutputSettings,
}

impl BillingConfig {
    /// Load configuration from `.env`, `videostore.toml` and the environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        Self::layered(
            File::with_name(crate::CONFIG_FILE).required(false),
            Self::environment(),
        )
    }

    /// `VIDEOSTORE__SECTION__KEY` overrides
    fn environment() -> Environment {
        Environment::with_prefix(crate::ENV_PREFIX).separator(crate::ENV_SEPARATOR)
    }

    /// File settings first, environment overrides on top
    fn layered<F>(file: F, environment: Environment) -> Result<Self>
    where
        F: Source + Send + Sync + 'static,
    {
        Self::from_builder(Config::builder().add_source(file).add_source(environment))
    }

    /// Load configuration from TOML text only
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Self::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: Self = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| ConfigError::Source(e.to_string()))?;
        config.validate()?;

        info!(
            output = ?config.output.format,
            new_release_bonus = config.loyalty.new_release_bonus,
            "loaded billing configuration"
        );
        Ok(config)
    }

    /// Reject rate cards that could produce negative charges
    pub fn validate(&self) -> Result<()> {
        self.pricing.validate()?;
        Ok(())
    }
}
