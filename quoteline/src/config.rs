use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use axum::http::HeaderValue;
use clap::Parser;

use crate::ServerError;

/// Server settings, read from command-line flags or `QUOTELINE_*` environment variables.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Stock chart price service")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "QUOTELINE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "QUOTELINE_PORT", default_value_t = 8000)]
    pub port: u16,

    /// The single origin allowed by CORS (e.g. the chart front end).
    #[arg(long, env = "QUOTELINE_CORS_ORIGIN", default_value = "http://localhost:3000")]
    pub cors_origin: String,

    /// Serve deterministic fixture data instead of calling Yahoo Finance.
    #[arg(long = "mock", env = "QUOTELINE_USE_MOCK")]
    pub use_mock: bool,

    /// Per-request timeout for upstream provider calls, in seconds.
    #[arg(long, env = "QUOTELINE_UPSTREAM_TIMEOUT_SECS", default_value_t = 10)]
    pub upstream_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            cors_origin: "http://localhost:3000".to_string(),
            use_mock: false,
            upstream_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    /// Parsed bind address.
    ///
    /// # Errors
    /// Returns `InvalidAddress` if `host` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ServerError::InvalidAddress(format!("{}:{}", self.host, self.port)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Upstream request timeout.
    #[must_use]
    pub const fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// CORS origin as a header value.
    ///
    /// # Errors
    /// Returns `InvalidOrigin` if the origin contains characters not allowed in a header.
    pub fn cors_origin_header(&self) -> Result<HeaderValue, ServerError> {
        HeaderValue::from_str(&self.cors_origin)
            .map_err(|_| ServerError::InvalidOrigin(self.cors_origin.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_flags() {
        let parsed = ServerConfig::try_parse_from(["quoteline"]).unwrap();
        let d = ServerConfig::default();
        assert_eq!(parsed.port, d.port);
        assert_eq!(parsed.cors_origin, d.cors_origin);
        assert_eq!(parsed.upstream_timeout_secs, d.upstream_timeout_secs);
        assert_eq!(parsed.socket_addr().unwrap().to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn flags_override() {
        let c = ServerConfig::try_parse_from([
            "quoteline",
            "--host",
            "0.0.0.0",
            "--port",
            "9001",
            "--mock",
        ])
        .unwrap();
        assert!(c.use_mock);
        assert_eq!(c.socket_addr().unwrap().port(), 9001);

        let c = ServerConfig::try_parse_from(["quoteline", "--upstream-timeout-secs", "3"]).unwrap();
        assert_eq!(c.upstream_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn bad_host_is_rejected() {
        let c = ServerConfig {
            host: "not a host".into(),
            ..ServerConfig::default()
        };
        assert!(matches!(c.socket_addr(), Err(ServerError::InvalidAddress(_))));
    }

    #[test]
    fn bad_origin_is_rejected() {
        let c = ServerConfig {
            cors_origin: "http://bad\norigin".into(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            c.cors_origin_header(),
            Err(ServerError::InvalidOrigin(_))
        ));
    }
}
