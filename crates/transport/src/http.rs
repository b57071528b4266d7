//! HTTP transport over a SOCKS proxy

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Proxy};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

use torrecon_common::{Headers, ProbeResult, ReconConfig, ReconError, ReconResult, Transport};

/// reqwest-backed transport. Every request goes through the configured
/// proxy with the same headers and timeout; redirects follow reqwest's
/// default policy.
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
    proxy: Option<String>,
}

impl HttpTransport {
    /// Build the client from the scan configuration.
    pub fn new(config: &ReconConfig) -> ReconResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value(&config.user_agent)?);
        headers.insert(ACCEPT, header_value(&config.accept)?);

        let mut builder = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout);

        builder = match &config.proxy {
            Some(url) => {
                let proxy = Proxy::all(url.as_str())
                    .map_err(|e| ReconError::Config(format!("invalid proxy '{}': {}", url, e)))?;
                builder.proxy(proxy)
            }
            // ignore HTTP(S)_PROXY from the environment as well
            None => builder.no_proxy(),
        };

        let client = builder
            .build()
            .map_err(|e| ReconError::Config(format!("failed to build http client: {}", e)))?;

        Ok(Self {
            client,
            timeout: config.timeout,
            proxy: config.proxy.clone(),
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self))]
    async fn get(&self, url: &str) -> ReconResult<ProbeResult> {
        let start = Instant::now();

        let response = self.client.get(url).send().await.map_err(|e| {
            debug!("request failed after {:?}: {}", start.elapsed(), e);
            map_error(&e)
        })?;

        let status = response.status().as_u16();
        let headers: Headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                ReconError::Timeout(error_chain(&e))
            } else {
                ReconError::Body(error_chain(&e))
            }
        })?;

        debug!(
            "HTTP {} ({} headers, {} bytes) in {:?}",
            status,
            headers.len(),
            body.len(),
            start.elapsed()
        );

        Ok(ProbeResult {
            status,
            headers,
            body,
        })
    }

    fn name(&self) -> &str {
        "HTTP via proxy"
    }
}

fn header_value(value: &str) -> ReconResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ReconError::Config(format!("invalid header value '{}': {}", value, e)))
}

fn map_error(e: &reqwest::Error) -> ReconError {
    if e.is_timeout() {
        ReconError::Timeout(error_chain(e))
    } else {
        ReconError::Transport(error_chain(e))
    }
}

/// Join the error and its sources; reqwest's top-level message alone rarely
/// says what went wrong at the proxy.
fn error_chain(e: &(dyn std::error::Error + 'static)) -> String {
    let mut message = e.to_string();
    let mut current = e.source();
    while let Some(err) = current {
        let text = err.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        current = err.source();
    }
    message
}
