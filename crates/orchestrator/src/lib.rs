//! Orchestrator - probe scheduling and result assembly

mod discovery;
mod observer;
mod orchestrator;
mod progress;
mod rate_limiter;

pub use discovery::{endpoint_url, resolve_resource};
pub use observer::{NoopObserver, ScanObserver};
pub use orchestrator::{Orchestrator, ROBOTS_TXT, SITEMAP_XML};
pub use progress::{ProgressTracker, SweepStats};
pub use rate_limiter::RateLimiter;
