use std::env;

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set when DATABASE_URL is not")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Process settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub auto_migrate: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    ///
    /// `DATABASE_URL` wins when present; otherwise the URL is assembled from
    /// the `POSTGRES_*` parts.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => Self::assemble_database_url(&lookup)?,
        };

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => 8080,
        };

        let auto_migrate = match lookup("AUTO_MIGRATE") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid {
                key: "AUTO_MIGRATE",
                value: raw,
            })?,
            None => true,
        };

        Ok(Settings {
            database_url,
            host,
            port,
            auto_migrate,
        })
    }
}

impl Settings {
    /// Builds the connection URL from the `POSTGRES_*` parts. User, password
    /// and database name are percent-encoded.
    fn assemble_database_url<F>(lookup: &F) -> Result<String, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));
        let user = required("POSTGRES_USER")?;
        let password = required("POSTGRES_PASSWORD")?;
        let database = required("POSTGRES_DB")?;
        let host = lookup("POSTGRES_ADDR").unwrap_or_else(|| "localhost".to_string());
        let port = match lookup("POSTGRES_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "POSTGRES_PORT",
                value: raw,
            })?,
            None => 5432,
        };

        let mut url = Url::parse(&format!("postgres://{}:{}", host, port)).map_err(|_| {
            ConfigError::Invalid {
                key: "POSTGRES_ADDR",
                value: host.clone(),
            }
        })?;
        url.set_path(&database);
        url.set_username(&user).map_err(|_| ConfigError::Invalid {
            key: "POSTGRES_USER",
            value: user.clone(),
        })?;
        url.set_password(Some(&password))
            .map_err(|_| ConfigError::Invalid {
                key: "POSTGRES_PASSWORD",
                value: "<redacted>".to_string(),
            })?;

        Ok(url.into())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn database_url_takes_precedence() {
        let s = settings(&[
            ("DATABASE_URL", "postgres://u:p@db:5432/orders"),
            ("POSTGRES_USER", "ignored"),
        ])
        .unwrap();

        assert_eq!(s.database_url, "postgres://u:p@db:5432/orders");
        assert_eq!(s.host, "0.0.0.0");
        assert_eq!(s.port, 8080);
        assert!(s.auto_migrate);
    }

    #[test]
    fn url_is_assembled_from_parts() {
        let s = settings(&[
            ("POSTGRES_ADDR", "db"),
            ("POSTGRES_PORT", "6543"),
            ("POSTGRES_DB", "orders"),
            ("POSTGRES_USER", "app"),
            ("POSTGRES_PASSWORD", "secret"),
        ])
        .unwrap();

        assert_eq!(s.database_url, "postgres://app:secret@db:6543/orders");
    }

    #[test]
    fn credentials_are_percent_encoded() {
        let s = settings(&[
            ("POSTGRES_ADDR", "db"),
            ("POSTGRES_DB", "orders"),
            ("POSTGRES_USER", "app"),
            ("POSTGRES_PASSWORD", "p@ss:w/rd"),
        ])
        .unwrap();

        assert_eq!(
            s.database_url,
            "postgres://app:p%40ss%3Aw%2Frd@db:5432/orders"
        );
    }

    #[test]
    fn invalid_postgres_port_is_rejected() {
        let err = settings(&[
            ("POSTGRES_PORT", "abc"),
            ("POSTGRES_DB", "orders"),
            ("POSTGRES_USER", "app"),
            ("POSTGRES_PASSWORD", "x"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "POSTGRES_PORT", .. }));
    }

    #[test]
    fn missing_part_is_reported() {
        let err = settings(&[("POSTGRES_USER", "app"), ("POSTGRES_PASSWORD", "x")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("POSTGRES_DB"));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = settings(&[("DATABASE_URL", "postgres://x"), ("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
    }

    #[test]
    fn auto_migrate_can_be_disabled() {
        let s = settings(&[
            ("DATABASE_URL", "postgres://x"),
            ("AUTO_MIGRATE", "false"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
        ])
        .unwrap();

        assert!(!s.auto_migrate);
        assert_eq!(s.host, "127.0.0.1");
        assert_eq!(s.port, 9000);
    }
}
