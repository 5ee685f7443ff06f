//! Configuration loading from environment.

use std::env;

use payment_provider::Behavior;
use premium_types::{Currency, Money, PremiumPlan};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PRICE_CENTS: i64 = 999;

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub plan: PremiumPlan,
    pub provider_mode: Behavior,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT {:?}: {}", raw, e))?,
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let cents: i64 = match lookup("PREMIUM_PRICE_CENTS") {
            Some(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PREMIUM_PRICE_CENTS {:?}: {}", raw, e))?,
            None => DEFAULT_PRICE_CENTS,
        };

        let currency = match lookup("PREMIUM_CURRENCY") {
            Some(raw) => raw.parse::<Currency>()?,
            None => Currency::USD,
        };

        let provider_mode = match lookup("PAYMENT_PROVIDER_MODE") {
            Some(raw) => raw.parse::<Behavior>()?,
            None => Behavior::Approve,
        };

        let price = Money::new(cents, currency)?;

        Ok(Self {
            port,
            database_url,
            plan: PremiumPlan::new(price),
            provider_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use payment_provider::DeclineCode;
    use premium_types::NegativeAmount;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DATABASE_URL", "sqlite::memory:")]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.plan, PremiumPlan::default());
        assert_eq!(config.provider_mode, Behavior::Approve);
    }

    #[test]
    fn test_database_url_is_required() {
        let err = load(&[("PORT", "8080")]).unwrap_err();

        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/premium"),
            ("PORT", "8080"),
            ("PREMIUM_PRICE_CENTS", "1500"),
            ("PREMIUM_CURRENCY", "eur"),
            ("PAYMENT_PROVIDER_MODE", "expired-card"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.plan.price, Money::from_unsigned(1500, Currency::EUR));
        assert_eq!(
            config.provider_mode,
            Behavior::Decline(DeclineCode::CardExpired)
        );
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let err = load(&[("DATABASE_URL", "x"), ("PREMIUM_PRICE_CENTS", "-5")]).unwrap_err();

        assert!(err.downcast_ref::<NegativeAmount>().is_some());
    }

    #[test]
    fn test_free_plan_is_allowed() {
        let config = load(&[("DATABASE_URL", "x"), ("PREMIUM_PRICE_CENTS", "0")]).unwrap();

        assert_eq!(config.plan.price.amount(), 0);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(load(&[("DATABASE_URL", "x"), ("PORT", "http")]).is_err());
        assert!(load(&[("DATABASE_URL", "x"), ("PREMIUM_PRICE_CENTS", "9.99")]).is_err());
        assert!(load(&[("DATABASE_URL", "x"), ("PREMIUM_CURRENCY", "XYZ")]).is_err());
        assert!(load(&[("DATABASE_URL", "x"), ("PAYMENT_PROVIDER_MODE", "refund")]).is_err());
    }
}
