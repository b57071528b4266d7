//! Per-stage scan callbacks

use torrecon_common::{AddressClass, EndpointHit, Fingerprint, ProbeResult};

/// Receives each stage of a scan as soon as it finishes, in report order.
/// Every method defaults to doing nothing.
pub trait ScanObserver: Send + Sync {
    /// Before any network call.
    fn address(&self, _class: AddressClass) {}

    /// The reachability check failed; no further stages follow.
    fn offline(&self, _reason: &str) {}

    fn online(&self, _response: &ProbeResult) {}

    fn fingerprint(&self, _fingerprint: &Fingerprint) {}

    fn endpoints(&self, _hits: &[EndpointHit]) {}

    fn discovery(&self, _robots_txt: Option<&str>, _sitemap_xml: Option<&str>) {}
}

/// Observer for callers that only want the final report.
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}
