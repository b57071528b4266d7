//! Fingerprint Engine - framework, backend and protection detection
//!
//! This crate provides the response classifiers:
//! - framework signatures over headers and body
//! - backend language signatures over header values
//! - anti-automation protection signals
//! - `Server` header product/version extraction

mod detector;
mod server;
pub mod signatures;

pub use detector::{
    detect_backends,
    detect_backends_with,
    detect_frameworks,
    detect_frameworks_with,
    detect_protections,
};
pub use server::server_banner;
pub use signatures::SignatureRule;

use signatures::{BACKEND_SIGNATURES, FRAMEWORK_SIGNATURES};
use torrecon_common::{Fingerprint, ProbeResult};

/// Runs every classifier over one response.
#[derive(Debug, Clone, Copy)]
pub struct FingerprintEngine {
    framework_rules: &'static [SignatureRule],
    backend_rules: &'static [SignatureRule],
}

impl FingerprintEngine {
    /// Create an engine with the built-in signature tables
    pub fn new() -> Self {
        Self {
            framework_rules: FRAMEWORK_SIGNATURES,
            backend_rules: BACKEND_SIGNATURES,
        }
    }

    pub fn with_framework_rules(mut self, rules: &'static [SignatureRule]) -> Self {
        self.framework_rules = rules;
        self
    }

    pub fn with_backend_rules(mut self, rules: &'static [SignatureRule]) -> Self {
        self.backend_rules = rules;
        self
    }

    pub fn analyze(&self, response: &ProbeResult) -> Fingerprint {
        Fingerprint {
            frameworks: detect_frameworks_with(self.framework_rules, response),
            backends: detect_backends_with(self.backend_rules, response),
            protections: detect_protections(response),
            server: server_banner(&response.headers),
        }
    }
}

impl Default for FingerprintEngine {
    fn default() -> Self {
        Self::new()
    }
}
