use thiserror::Error;

const DEFAULT_POOL_SIZE: u32 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub pool_size: u32,
}

impl Config {
    /// Reads `DATABASE_URL` and `DATABASE_POOL_SIZE` from the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let pool_size = match lookup("DATABASE_POOL_SIZE") {
            None => DEFAULT_POOL_SIZE,
            Some(value) => match value.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "DATABASE_POOL_SIZE",
                        value,
                    })
                }
            },
        };

        Ok(Config {
            database_url,
            pool_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn database_url_is_required() {
        assert_eq!(
            Config::from_lookup(lookup(&[])),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("DATABASE_URL", "")])),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
    }

    #[test]
    fn pool_size_defaults_to_ten() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/petstore")]))
            .unwrap();
        assert_eq!(config.pool_size, 10);
        assert_eq!(config.database_url, "postgres://localhost/petstore");
    }

    #[test]
    fn pool_size_must_be_a_positive_number() {
        for bad in ["0", "-3", "lots"] {
            let err = Config::from_lookup(lookup(&[
                ("DATABASE_URL", "postgres://localhost/petstore"),
                ("DATABASE_POOL_SIZE", bad),
            ]))
            .unwrap_err();
            assert_eq!(
                err,
                ConfigError::Invalid {
                    key: "DATABASE_POOL_SIZE",
                    value: bad.to_string()
                }
            );
        }
    }

    #[test]
    fn pool_size_is_read_when_present() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/petstore"),
            ("DATABASE_POOL_SIZE", "32"),
        ]))
        .unwrap();
        assert_eq!(config.pool_size, 32);
    }
}
