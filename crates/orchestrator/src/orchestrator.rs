// crates/orchestrator/src/orchestrator.rs
//! Orchestrator - reachability gate, fingerprinting, endpoint sweep and
//! discovery file retrieval for one target

use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use torrecon_common::{
    EndpointHit, Fingerprint, ProbeResult, Reachability, ReconConfig, ScanOutcome, ScanReport,
    ServiceReport, Transport,
};
use torrecon_fingerprint::FingerprintEngine;
use torrecon_onion::classify_target;

use crate::discovery::{endpoint_url, resolve_resource};
use crate::observer::{NoopObserver, ScanObserver};
use crate::progress::ProgressTracker;
use crate::rate_limiter::RateLimiter;

pub const ROBOTS_TXT: &str = "/robots.txt";
pub const SITEMAP_XML: &str = "/sitemap.xml";

/// Runs every probe of a scan through one transport.
pub struct Orchestrator {
    transport: Arc<dyn Transport>,
    engine: FingerprintEngine,
    config: Arc<ReconConfig>,
    rate_limiter: Option<Arc<RateLimiter>>,
    progress: Arc<ProgressTracker>,
}

impl Orchestrator {
    pub fn new(transport: Arc<dyn Transport>, config: ReconConfig) -> Self {
        let rate_limiter = config.rate_limit.map(|rps| Arc::new(RateLimiter::new(rps)));
        Self {
            transport,
            engine: FingerprintEngine::new(),
            config: Arc::new(config),
            rate_limiter,
            progress: Arc::new(ProgressTracker::new()),
        }
    }

    /// Replace the default signature tables.
    pub fn with_engine(mut self, engine: FingerprintEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn config(&self) -> &ReconConfig {
        &self.config
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    /// Single GET of the target. Every failure, whatever its cause, is Offline.
    #[instrument(skip(self))]
    pub async fn check_reachability(&self, target: &str) -> Reachability {
        match self.transport.get(target).await {
            Ok(response) => {
                info!("{} online (HTTP {})", target, response.status);
                Reachability::Online(response)
            }
            Err(e) => {
                info!("{} offline: {}", target, e);
                Reachability::Offline(e.to_string())
            }
        }
    }

    pub fn fingerprint(&self, response: &ProbeResult) -> Fingerprint {
        self.engine.analyze(response)
    }

    /// Probe every configured path and keep the informative answers, in
    /// path-list order. Failed or uninteresting paths are dropped.
    #[instrument(skip(self))]
    pub async fn probe_endpoints(&self, target: &str) -> Vec<EndpointHit> {
        let paths = &self.config.endpoint_paths;
        self.progress.reset(paths.len());

        let queue: Arc<Mutex<VecDeque<(usize, String)>>> = Arc::new(Mutex::new(
            paths.iter().cloned().enumerate().collect(),
        ));
        let results: Arc<Mutex<Vec<(usize, EndpointHit)>>> = Arc::new(Mutex::new(Vec::new()));
        let base = Arc::new(target.to_string());

        let worker_count = self.config.concurrency.clamp(1, paths.len().max(1));
        debug!("Sweeping {} paths with {} workers", paths.len(), worker_count);

        let mut workers = Vec::with_capacity(worker_count);
        for _ in 0..worker_count {
            let queue = queue.clone();
            let results = results.clone();
            let base = base.clone();
            let transport = self.transport.clone();
            let config = self.config.clone();
            let rate_limiter = self.rate_limiter.clone();
            let progress = self.progress.clone();

            let worker = tokio::spawn(async move {
                loop {
                    let next = queue.lock().await.pop_front();
                    let (index, path) = match next {
                        Some(item) => item,
                        None => break,
                    };

                    if let Some(limiter) = &rate_limiter {
                        limiter.acquire().await;
                    }

                    let url = endpoint_url(&base, &path);
                    match transport.get(&url).await {
                        Ok(response) if config.is_informative(response.status) => {
                            debug!("{} -> HTTP {}", path, response.status);
                            progress.record_informative();
                            results
                                .lock()
                                .await
                                .push((index, EndpointHit::new(path, response.status)));
                        }
                        Ok(response) => {
                            debug!("{} -> HTTP {} (discarded)", path, response.status);
                            progress.record_discarded();
                        }
                        Err(e) => {
                            debug!("{} failed: {}", path, e);
                            progress.record_failed();
                        }
                    }
                }
            });
            workers.push(worker);
        }

        for w in workers {
            if let Err(e) = w.await {
                warn!("endpoint worker aborted: {}", e);
            }
        }

        let mut hits = std::mem::take(&mut *results.lock().await);
        hits.sort_by_key(|(index, _)| *index);
        hits.into_iter().map(|(_, hit)| hit).collect()
    }

    /// Body of `name` resolved against the target, only on HTTP 200.
    #[instrument(skip(self))]
    pub async fn fetch_discovery_file(&self, target: &str, name: &str) -> Option<String> {
        let url = match resolve_resource(target, name) {
            Ok(url) => url,
            Err(e) => {
                debug!("skipping {}: {}", name, e);
                return None;
            }
        };

        match self.transport.get(&url).await {
            Ok(response) if response.status == 200 => Some(response.body),
            Ok(response) => {
                debug!("{} -> HTTP {}", url, response.status);
                None
            }
            Err(e) => {
                debug!("{} failed: {}", url, e);
                None
            }
        }
    }

    /// Full scan. Classifiers and follow-up probes only run when the
    /// initial fetch succeeds.
    pub async fn run(&self, target: &str) -> ScanReport {
        self.run_with(target, &NoopObserver).await
    }

    /// Full scan that hands every finished stage to `observer` before
    /// starting the next one.
    #[instrument(skip(self, observer))]
    pub async fn run_with(&self, target: &str, observer: &dyn ScanObserver) -> ScanReport {
        let address = classify_target(target);
        info!("Target {} classified as {:?}", target, address);
        observer.address(address);

        let response = match self.check_reachability(target).await {
            Reachability::Online(response) => response,
            Reachability::Offline(reason) => {
                observer.offline(&reason);
                return ScanReport {
                    target: target.to_string(),
                    address,
                    outcome: ScanOutcome::Offline { reason },
                };
            }
        };
        observer.online(&response);

        let fingerprint = self.fingerprint(&response);
        observer.fingerprint(&fingerprint);

        let endpoints = self.probe_endpoints(target).await;
        self.progress.log_summary();
        observer.endpoints(&endpoints);

        let (robots_txt, sitemap_xml) = tokio::join!(
            self.fetch_discovery_file(target, ROBOTS_TXT),
            self.fetch_discovery_file(target, SITEMAP_XML),
        );
        observer.discovery(robots_txt.as_deref(), sitemap_xml.as_deref());

        let ProbeResult {
            status, headers, ..
        } = response;

        ScanReport {
            target: target.to_string(),
            address,
            outcome: ScanOutcome::Online(Box::new(ServiceReport {
                status,
                headers,
                fingerprint,
                endpoints,
                robots_txt,
                sitemap_xml,
            })),
        }
    }
}
