//! Database settings from `DB_*` environment variables.

use sqlx::postgres::PgConnectOptions;
use std::fmt;
use std::time::Duration;

pub const DB_HOST: &str = "DB_HOST";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_PORT: &str = "DB_PORT";

/// Connection parameters. Unset values fall back to the `PG*` variables and
/// then to the driver defaults, so a missing setting only shows up once a
/// query tries to connect.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DbConfig {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub port: Option<u16>,
}

impl DbConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let port = get(DB_PORT).and_then(|raw| match raw.trim().parse::<u16>() {
            Ok(p) => Some(p),
            Err(_) => {
                tracing::warn!(value = %raw, "ignoring unparseable {}", DB_PORT);
                None
            }
        });
        DbConfig {
            host: get(DB_HOST),
            user: get(DB_USER),
            password: get(DB_PASSWORD),
            database: get(DB_NAME),
            port,
        }
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        let mut opts = PgConnectOptions::new();
        if let Some(host) = &self.host {
            opts = opts.host(host);
        }
        if let Some(port) = self.port {
            opts = opts.port(port);
        }
        if let Some(user) = &self.user {
            opts = opts.username(user);
        }
        if let Some(password) = &self.password {
            opts = opts.password(password);
        }
        if let Some(database) = &self.database {
            opts = opts.database(database);
        }
        opts
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .field("port", &self.port)
            .finish()
    }
}

/// Pool sizing and timeouts.
#[derive(Clone, Debug)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub idle_timeout: Duration,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        PoolSettings {
            max_connections: 10,
            idle_timeout: Duration::from_secs(10),
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_variables() {
        let config = DbConfig::from_lookup(lookup(&[
            ("DB_HOST", "db.internal"),
            ("DB_USER", "school"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "courses"),
            ("DB_PORT", "6543"),
        ]));
        assert_eq!(config.host.as_deref(), Some("db.internal"));
        assert_eq!(config.user.as_deref(), Some("school"));
        assert_eq!(config.password.as_deref(), Some("secret"));
        assert_eq!(config.database.as_deref(), Some("courses"));
        assert_eq!(config.port, Some(6543));

        let opts = config.connect_options();
        assert_eq!(opts.get_host(), "db.internal");
        assert_eq!(opts.get_port(), 6543);
        assert_eq!(opts.get_username(), "school");
        assert_eq!(opts.get_database(), Some("courses"));
    }

    #[test]
    fn missing_and_empty_values_are_unset() {
        let config = DbConfig::from_lookup(lookup(&[("DB_HOST", ""), ("DB_NAME", "courses")]));
        assert_eq!(config.host, None);
        assert_eq!(config.user, None);
        assert_eq!(config.database.as_deref(), Some("courses"));
    }

    #[test]
    fn bad_port_is_ignored() {
        let config = DbConfig::from_lookup(lookup(&[("DB_PORT", "five")]));
        assert_eq!(config.port, None);
        let config = DbConfig::from_lookup(lookup(&[("DB_PORT", " 5433 ")]));
        assert_eq!(config.port, Some(5433));
    }

    #[test]
    fn debug_hides_password() {
        let config = DbConfig {
            password: Some("hunter2".into()),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }
}
