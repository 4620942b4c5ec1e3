//! Service settings loaded via OrthoConfig.
//!
//! Values layer CLI arguments over `NEWSWIRE_*` environment variables over
//! configuration files, as the crate provides.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Runtime settings for the Newswire server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NEWSWIRE")]
pub struct ServerSettings {
    /// Socket address the HTTP listener binds; defaults to `0.0.0.0:8080`.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. When absent the server runs against the
    /// in-memory fixture store.
    pub database_url: Option<String>,
    /// Maximum connections held by the pool; defaults to 10.
    pub pool_max_size: Option<u32>,
    /// Insert the development topics and users at startup.
    #[ortho_config(default = false)]
    pub seed_example_data: bool,
}

impl ServerSettings {
    /// Parse the configured bind address, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns the parse failure for a malformed address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Return the configured pool size, falling back to the default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("backend")]).expect("settings should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("NEWSWIRE_BIND_ADDR", None::<String>),
            ("NEWSWIRE_DATABASE_URL", None::<String>),
            ("NEWSWIRE_POOL_MAX_SIZE", None::<String>),
            ("NEWSWIRE_SEED_EXAMPLE_DATA", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            "0.0.0.0:8080".parse().expect("literal address"),
        );
        assert!(settings.database_url.is_none());
        assert_eq!(settings.pool_max_size(), 10);
        assert!(!settings.seed_example_data);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("NEWSWIRE_BIND_ADDR", Some("127.0.0.1:9099".to_owned())),
            (
                "NEWSWIRE_DATABASE_URL",
                Some("postgres://localhost/newswire".to_owned()),
            ),
            ("NEWSWIRE_POOL_MAX_SIZE", Some("4".to_owned())),
            ("NEWSWIRE_SEED_EXAMPLE_DATA", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr.as_deref(), Some("127.0.0.1:9099"));
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://localhost/newswire")
        );
        assert_eq!(settings.pool_max_size(), 4);
        assert!(settings.seed_example_data);
    }

    #[rstest]
    fn malformed_bind_addresses_fail_to_parse() {
        let _guard = lock_env([("NEWSWIRE_BIND_ADDR", Some("not-an-address".to_owned()))]);
        let settings = load_from_empty_args();
        assert!(settings.bind_addr().is_err());
    }
}
