// runner.rs
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use torrecon_common::{AddressClass, EndpointHit, Fingerprint, ProbeResult, ReconConfig, ScanOutcome};
use torrecon_orchestrator::{Orchestrator, ScanObserver};
use torrecon_transport::HttpTransport;

use crate::args::Cli;
use crate::output::{
    write_address, write_banner, write_completed, write_discovery, write_endpoints,
    write_fingerprint, write_offline, write_online, write_target,
};

/// Scan one target, printing each report section as its stage finishes. An
/// unreachable target is a normal outcome and returns `Ok`.
pub async fn run_recon(cli: &Cli) -> Result<()> {
    let config = cli.to_config();
    config.validate().context("Invalid scan configuration")?;
    log_config(&config);

    let transport = HttpTransport::new(&config).context("Failed to set up the proxy transport")?;
    let orchestrator = Orchestrator::new(Arc::new(transport), config);

    emit(|out| {
        write_banner(out)?;
        write_target(out, &cli.target)
    })
    .context("Failed to write to stdout")?;

    let scan_start = Instant::now();
    let report = orchestrator.run_with(&cli.target, &StdoutReport).await;
    info!("Scan finished in {:?}", scan_start.elapsed());

    match &report.outcome {
        ScanOutcome::Offline { reason } => info!("Target unreachable: {}", reason),
        ScanOutcome::Online(_) => emit(write_completed).context("Failed to write to stdout")?,
    }
    Ok(())
}

/// Write one block under a single stdout lock and flush it.
fn emit(write: impl FnOnce(&mut io::StdoutLock<'static>) -> io::Result<()>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write(&mut out)?;
    out.flush()
}

/// Prints sections as the orchestrator finishes them.
struct StdoutReport;

impl StdoutReport {
    fn section(&self, write: impl FnOnce(&mut io::StdoutLock<'static>) -> io::Result<()>) {
        if let Err(e) = emit(write) {
            warn!("Failed to write report section: {}", e);
        }
    }
}

impl ScanObserver for StdoutReport {
    fn address(&self, class: AddressClass) {
        self.section(|out| write_address(out, class));
    }

    fn offline(&self, reason: &str) {
        self.section(|out| write_offline(out, reason));
    }

    fn online(&self, response: &ProbeResult) {
        self.section(|out| write_online(out, response.status, &response.headers));
    }

    fn fingerprint(&self, fingerprint: &Fingerprint) {
        self.section(|out| write_fingerprint(out, fingerprint));
    }

    fn endpoints(&self, hits: &[EndpointHit]) {
        self.section(|out| write_endpoints(out, hits));
    }

    fn discovery(&self, robots_txt: Option<&str>, sitemap_xml: Option<&str>) {
        self.section(|out| write_discovery(out, robots_txt, sitemap_xml));
    }
}

fn log_config(config: &ReconConfig) {
    info!("Proxy: {}", config.proxy.as_deref().unwrap_or("none"));
    info!("Timeout: {:?}", config.timeout);
    info!("Endpoint paths: {}", config.endpoint_paths.len());
    info!("Concurrency: {}", config.concurrency);
    match config.rate_limit {
        Some(rps) => info!("Rate limit: {}/s", rps),
        None => info!("Rate limit: none"),
    }
}
