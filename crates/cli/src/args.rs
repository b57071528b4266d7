use clap::error::ErrorKind;
use clap::Parser;
use std::time::Duration;
use torrecon_common::config::{DEFAULT_PROXY, MAX_CONCURRENCY};
use torrecon_common::ReconConfig;

#[derive(Parser, Debug)]
#[command(name = "torrecon")]
#[command(version = "0.1.0")]
#[command(about = "Tor onion service reconnaissance", long_about = None)]
pub struct Cli {
    /// Base URL of the onion service. Example: http://example.onion
    pub target: String,

    /// SOCKS proxy the requests are routed through
    #[arg(long, default_value = DEFAULT_PROXY)]
    pub proxy: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "25")]
    pub timeout: u64,

    /// Parallel endpoint probes (1 = strictly sequential)
    #[arg(short, long, default_value = "4", value_parser = clap::value_parser!(u64).range(1..=MAX_CONCURRENCY as u64))]
    pub concurrency: u64,

    /// Rate limit for endpoint probes (requests per second)
    #[arg(short = 'r', long)]
    pub rate_limit: Option<u32>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn to_config(&self) -> ReconConfig {
        ReconConfig::default()
            .with_proxy(Some(self.proxy.clone()))
            .with_timeout(Duration::from_secs(self.timeout))
            .with_concurrency(self.concurrency as usize)
            .with_rate_limit(self.rate_limit)
    }
}

/// Parse the command line. Anything other than exactly one target prints the
/// usage and exits with status 1; `--help` and `--version` exit normally.
pub fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_target_with_defaults() {
        let cli = Cli::try_parse_from(["torrecon", "http://example.onion"]).unwrap();
        assert_eq!(cli.target, "http://example.onion");

        let config = cli.to_config();
        assert_eq!(config.proxy.as_deref(), Some("socks5h://127.0.0.1:9050"));
        assert_eq!(config.timeout, Duration::from_secs(25));
        assert_eq!(config.concurrency, 4);
        assert!(config.rate_limit.is_none());
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert!(Cli::try_parse_from(["torrecon"]).is_err());
        assert!(Cli::try_parse_from(["torrecon", "http://a.onion", "http://b.onion"]).is_err());
    }

    #[test]
    fn overrides_map_onto_config() {
        let cli = Cli::try_parse_from([
            "torrecon",
            "--proxy",
            "socks5h://10.0.0.2:9150",
            "--timeout",
            "60",
            "-c",
            "1",
            "-r",
            "3",
            "-vv",
            "http://example.onion",
        ])
        .unwrap();
        let config = cli.to_config();
        assert_eq!(config.proxy.as_deref(), Some("socks5h://10.0.0.2:9150"));
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.rate_limit, Some(3));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn concurrency_above_limit_is_rejected() {
        assert!(Cli::try_parse_from(["torrecon", "-c", "50", "http://example.onion"]).is_err());
        assert!(Cli::try_parse_from(["torrecon", "-c", "0", "http://example.onion"]).is_err());
    }
}
