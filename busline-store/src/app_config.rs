use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Flat fee added once per booking
    pub service_fee: i64,
    #[serde(default = "default_window_surcharge")]
    pub window_surcharge: i64,
    /// Share of seats seeded as already booked on sample seat maps
    #[serde(default = "default_booked_ratio")]
    pub booked_ratio: f64,
    /// Fixed seed for seat map seeding; random when unset
    pub seat_map_seed: Option<u64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Open baskets are discarded this long after creation
    #[serde(default = "default_basket_ttl_seconds")]
    pub basket_ttl_seconds: u64,
    /// How often the expiry sweep runs
    #[serde(default = "default_basket_sweep_seconds")]
    pub basket_sweep_seconds: u64,
}

fn default_window_surcharge() -> i64 { busline_catalog::layout::DEFAULT_WINDOW_SURCHARGE }
fn default_booked_ratio() -> f64 { busline_catalog::seating::DEFAULT_BOOKED_RATIO }
fn default_currency() -> String { "INR".to_string() }
fn default_basket_ttl_seconds() -> u64 { 1800 }
fn default_basket_sweep_seconds() -> u64 { 60 }

impl BusinessRules {
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.service_fee < 0 {
            return Err(config::ConfigError::Message(format!(
                "business_rules.service_fee must be non-negative, got {}",
                self.service_fee
            )));
        }
        if self.window_surcharge < 0 {
            return Err(config::ConfigError::Message(format!(
                "business_rules.window_surcharge must be non-negative, got {}",
                self.window_surcharge
            )));
        }
        if self.basket_ttl_seconds == 0 || self.basket_sweep_seconds == 0 {
            return Err(config::ConfigError::Message(
                "business_rules.basket_ttl_seconds and basket_sweep_seconds must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.booked_ratio) {
            return Err(config::ConfigError::Message(format!(
                "business_rules.booked_ratio must be within [0, 1], got {}",
                self.booked_ratio
            )));
        }
        Ok(())
    }
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            service_fee: 25,
            window_surcharge: default_window_surcharge(),
            booked_ratio: default_booked_ratio(),
            seat_map_seed: None,
            currency: default_currency(),
            basket_ttl_seconds: default_basket_ttl_seconds(),
            basket_sweep_seconds: default_basket_sweep_seconds(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `BUSLINE__BUSINESS_RULES__SERVICE_FEE=30`
            .add_source(config::Environment::with_prefix("BUSLINE").separator("__"))
            .build()?;

        Self::from_settings(s)
    }

    fn from_settings(settings: config::Config) -> Result<Self, config::ConfigError> {
        let config: Self = settings.try_deserialize()?;
        config.business_rules.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn parse(toml: &str) -> Result<Config, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Config::from_settings(settings)
    }

    #[test]
    fn test_defaults_fill_optional_rules() {
        let config = parse(
            r#"
            [server]
            port = 8080

            [business_rules]
            service_fee = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.business_rules.service_fee, 25);
        assert_eq!(config.business_rules.window_surcharge, 50);
        assert!((config.business_rules.booked_ratio - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.business_rules.seat_map_seed, None);
        assert_eq!(config.business_rules.currency, "INR");
        assert_eq!(config.business_rules.basket_ttl_seconds, 1800);
        assert_eq!(config.business_rules.basket_sweep_seconds, 60);
    }

    #[test]
    fn test_negative_service_fee_rejected() {
        let result = parse(
            r#"
            [server]
            port = 8080

            [business_rules]
            service_fee = -5
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_booked_ratio_out_of_range_rejected() {
        let rules = BusinessRules {
            booked_ratio: 1.2,
            ..BusinessRules::default()
        };
        assert!(rules.validate().is_err());
        assert!(BusinessRules::default().validate().is_ok());

        let no_ttl = BusinessRules {
            basket_ttl_seconds: 0,
            ..BusinessRules::default()
        };
        assert!(no_ttl.validate().is_err());
    }
}
