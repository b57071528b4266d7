//! torrecon common - shared types, configuration and traits
//!
//! This crate provides the data model and the transport seam used across
//! the torrecon workspace.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::ReconConfig;
pub use error::{ReconError, ReconResult};
pub use traits::Transport;
pub use types::{
    AddressClass, EndpointHit, Finding, Fingerprint, Headers, ProbeResult, Reachability,
    ScanOutcome, ScanReport, ServerBanner, ServiceReport,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
