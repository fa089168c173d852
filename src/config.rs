use std::env;

/// Account creation policy for `record_purchase`.
///
/// The bot's revisions disagreed on whether a wallet must be verified
/// before purchases count, so the choice is explicit configuration
/// rather than an accident of code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationPolicy {
    /// Purchases require a previously verified account (default)
    RequireVerification,
    /// A first purchase creates the account on the spot, unverified
    CreateOnPurchase,
}

impl CreationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequireVerification => "require_verification",
            Self::CreateOnPurchase => "create_on_purchase",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "require_verification" => Some(Self::RequireVerification),
            "create_on_purchase" => Some(Self::CreateOnPurchase),
            _ => None,
        }
    }
}

/// Ledger configuration
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub creation_policy: CreationPolicy,
    pub leaderboard_size: usize,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ledger: LedgerConfig,
    pub log_level: String,
    pub environment: String,
}

impl LedgerConfig {
    /// Create ledger config from environment variables
    pub fn from_env() -> Result<Self, String> {
        let creation_policy = match env::var("CREATION_POLICY") {
            Ok(value) => CreationPolicy::from_str(&value.to_lowercase()).ok_or_else(|| {
                format!(
                    "Invalid CREATION_POLICY: {}. Must be require_verification or create_on_purchase",
                    value
                )
            })?,
            Err(_) => CreationPolicy::RequireVerification,
        };

        let leaderboard_size = env::var("LEADERBOARD_SIZE")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(10);

        if leaderboard_size == 0 {
            return Err("LEADERBOARD_SIZE must be greater than 0".to_string());
        }

        Ok(Self {
            creation_policy,
            leaderboard_size,
        })
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            creation_policy: CreationPolicy::RequireVerification,
            leaderboard_size: 10,
        }
    }
}

impl AppConfig {
    /// Create application config from environment variables
    pub fn from_env() -> Result<Self, String> {
        let ledger = LedgerConfig::from_env()?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid LOG_LEVEL: {}. Must be one of: {:?}",
                log_level, valid_log_levels
            ));
        }

        // Validate environment
        let valid_environments = ["development", "staging", "production"];
        if !valid_environments.contains(&environment.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid ENVIRONMENT: {}. Must be one of: {:?}",
                environment, valid_environments
            ));
        }

        Ok(Self {
            ledger,
            log_level: log_level.to_lowercase(),
            environment: environment.to_lowercase(),
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Check if running in development
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            log_level: "info".to_string(),
            environment: "development".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_config_default() {
        let config = LedgerConfig::default();
        assert_eq!(config.creation_policy, CreationPolicy::RequireVerification);
        assert_eq!(config.leaderboard_size, 10);
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.log_level, "info");
        assert!(config.is_development());
        assert!(!config.is_production());
    }

    #[test]
    fn test_creation_policy_round_trip() {
        for policy in [
            CreationPolicy::RequireVerification,
            CreationPolicy::CreateOnPurchase,
        ] {
            assert_eq!(CreationPolicy::from_str(policy.as_str()), Some(policy));
        }
        assert_eq!(CreationPolicy::from_str("anything_else"), None);
    }
}
