use anyhow::{Context, Result};
use dcfm_service::config::{load_dotenv, process_env, LoggingConfig, StoreConfig};
use std::net::SocketAddr;
use time::Duration;

#[derive(Clone)]
pub struct ServerConfig {
    pub store: StoreConfig,
    pub logging: LoggingConfig,
    pub bind_addr: SocketAddr,
    pub nonce_secret: String,
    pub nonce_lifetime: Duration,
    pub api_token: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        load_dotenv(); // Load .env if present
        Self::from_vars(process_env)
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = var("DCFM_BIND")
            .unwrap_or_else(|| "127.0.0.1:3000".to_string())
            .parse::<SocketAddr>()
            .context("DCFM_BIND must be a socket address such as 127.0.0.1:3000")?;

        let nonce_lifetime = match var("DCFM_NONCE_LIFETIME_SECS") {
            Some(secs) => Duration::seconds(
                secs.parse()
                    .context("DCFM_NONCE_LIFETIME_SECS must be a whole number of seconds")?,
            ),
            None => Duration::DAY,
        };

        Ok(ServerConfig {
            store: StoreConfig::from_vars(&var),
            logging: LoggingConfig::from_vars(&var),
            bind_addr,
            nonce_secret: var("DCFM_NONCE_SECRET").context("DCFM_NONCE_SECRET must be set")?,
            nonce_lifetime,
            api_token: var("DCFM_API_TOKEN"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
    }

    #[test]
    fn test_defaults_with_secret() {
        let config = ServerConfig::from_vars(lookup(&[("DCFM_NONCE_SECRET", "k")])).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.nonce_lifetime, Duration::DAY);
        assert!(config.api_token.is_none());
        assert_eq!(config.store.table_prefix, "wp_");
    }

    #[test]
    fn test_secret_is_required() {
        let err = ServerConfig::from_vars(lookup(&[])).err().unwrap();
        assert!(err.to_string().contains("DCFM_NONCE_SECRET"));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_vars(lookup(&[
            ("DCFM_NONCE_SECRET", "k"),
            ("DCFM_BIND", "0.0.0.0:8080"),
            ("DCFM_NONCE_LIFETIME_SECS", "3600"),
            ("DCFM_API_TOKEN", "t0ken"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.nonce_lifetime, Duration::hours(1));
        assert_eq!(config.api_token.as_deref(), Some("t0ken"));
    }

    #[test]
    fn test_bad_bind_address() {
        assert!(ServerConfig::from_vars(lookup(&[
            ("DCFM_NONCE_SECRET", "k"),
            ("DCFM_BIND", "localhost"),
        ]))
        .is_err());
    }
}
