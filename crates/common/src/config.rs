//! Scan configuration
//!
//! One immutable value handed to the transport and the orchestrator. The
//! defaults reproduce the fixed constants of a plain Tor setup: local SOCKS
//! port, 25 second timeout, ten well-known API paths.

use std::time::Duration;

use crate::error::{ReconError, ReconResult};

pub const DEFAULT_PROXY: &str = "socks5h://127.0.0.1:9050";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(25);
pub const DEFAULT_USER_AGENT: &str = "torrecon/1.0 (Tor OSINT Recon)";
pub const DEFAULT_ACCEPT: &str = "*/*";

/// Upper bound on parallel probes sharing one proxy circuit.
pub const MAX_CONCURRENCY: usize = 5;

pub const DEFAULT_ENDPOINT_PATHS: [&str; 10] = [
    "/api",
    "/api/v1",
    "/api/v2",
    "/v1",
    "/v2",
    "/graphql",
    "/rest",
    "/swagger",
    "/openapi.json",
    "/api/status",
];

/// Statuses that make an endpoint probe worth reporting.
pub const INFORMATIVE_STATUSES: [u16; 3] = [200, 401, 403];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconConfig {
    /// Forward proxy URL; `None` connects directly.
    pub proxy: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
    pub accept: String,
    pub endpoint_paths: Vec<String>,
    pub informative_statuses: Vec<u16>,
    pub concurrency: usize,
    /// Requests per second for the endpoint sweep.
    pub rate_limit: Option<u32>,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            proxy: Some(DEFAULT_PROXY.to_string()),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            endpoint_paths: DEFAULT_ENDPOINT_PATHS.iter().map(|p| p.to_string()).collect(),
            informative_statuses: INFORMATIVE_STATUSES.to_vec(),
            concurrency: 4,
            rate_limit: None,
        }
    }
}

impl ReconConfig {
    /// One probe at a time, in path order.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            concurrency: 1,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_proxy<S: Into<String>>(mut self, proxy: Option<S>) -> Self {
        self.proxy = proxy.map(Into::into);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Clamped to `1..=MAX_CONCURRENCY`.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.clamp(1, MAX_CONCURRENCY);
        self
    }

    #[must_use]
    pub fn with_rate_limit(mut self, rate_limit: Option<u32>) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    #[must_use]
    pub fn with_endpoint_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.endpoint_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    #[must_use]
    pub fn is_informative(&self, status: u16) -> bool {
        self.informative_statuses.contains(&status)
    }

    pub fn validate(&self) -> ReconResult<()> {
        if self.timeout.is_zero() {
            return Err(ReconError::Config("timeout must be non-zero".into()));
        }
        if self.concurrency == 0 || self.concurrency > MAX_CONCURRENCY {
            return Err(ReconError::Config(format!(
                "concurrency must be between 1 and {}, got {}",
                MAX_CONCURRENCY, self.concurrency
            )));
        }
        if self.rate_limit == Some(0) {
            return Err(ReconError::Config("rate limit must be positive".into()));
        }
        if let Some(proxy) = &self.proxy {
            if !proxy.contains("://") {
                return Err(ReconError::Config(format!(
                    "proxy '{}' is missing a scheme (e.g. socks5h://)",
                    proxy
                )));
            }
        }
        if let Some(bad) = self.endpoint_paths.iter().find(|p| !p.starts_with('/')) {
            return Err(ReconError::Config(format!(
                "endpoint path '{}' must start with '/'",
                bad
            )));
        }
        Ok(())
    }
}
