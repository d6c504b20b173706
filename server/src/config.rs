//! Runtime configuration read from environment variables.
//!
//! `HOST`, `PORT` and `APP_ENV` are looked up once at startup. The binary loads
//! a `.env` file first, so real environment variables still take precedence.

use std::fmt;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Deployment environment, from `APP_ENV`. Unset means production.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
    Testing,
    Custom(String),
}

impl Environment {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("development") => Self::Development,
            Some("production") | None => Self::Production,
            Some("testing") => Self::Testing,
            Some(other) => Self::Custom(other.to_string()),
        }
    }

    /// Only development exposes internal error detail to clients.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
            Self::Custom(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            environment: Environment::parse(lookup("APP_ENV").as_deref()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.environment, Environment::Production);
        assert!(!config.environment.is_development());
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[("HOST", "0.0.0.0"), ("PORT", "8080"), ("APP_ENV", "development")]);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert!(config.environment.is_development());
    }

    #[test]
    fn bad_port_falls_back() {
        assert_eq!(config(&[("PORT", "http")]).port, DEFAULT_PORT);
    }

    #[test]
    fn custom_environment_hides_detail() {
        let env = Environment::parse(Some("staging"));
        assert_eq!(env, Environment::Custom("staging".to_string()));
        assert_eq!(env.to_string(), "staging");
        assert!(!env.is_development());
        assert!(!Environment::Testing.is_development());
    }
}
