//! Seams between the engine and its collaborators

use crate::error::ReconResult;
use crate::types::ProbeResult;
use async_trait::async_trait;

/// A single HTTP GET through whatever path the implementation was built
/// with (proxy, timeout, header set).
///
/// Implementations never retry. Any failure is returned as an error value;
/// deciding what a failure means is the caller's job.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> ReconResult<ProbeResult>;

    /// Transport name/identifier
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReconError;

    struct StaticTransport;

    #[async_trait]
    impl Transport for StaticTransport {
        async fn get(&self, url: &str) -> ReconResult<ProbeResult> {
            if url.ends_with("/down") {
                return Err(ReconError::Transport("connection refused".into()));
            }
            Ok(ProbeResult::new(200).with_body("ok"))
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    #[tokio::test]
    async fn transport_trait_object() {
        let transport: Box<dyn Transport> = Box::new(StaticTransport);
        let ok = transport.get("http://example.onion/").await.unwrap();
        assert_eq!(ok.body, "ok");
        assert!(transport.get("http://example.onion/down").await.is_err());
        assert_eq!(transport.name(), "static");
    }
}
