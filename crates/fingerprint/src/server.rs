//! Server header parsing

use once_cell::sync::Lazy;
use regex::Regex;
use torrecon_common::{Headers, ServerBanner};

/// Product and version from the `Server` header, e.g.
/// "Werkzeug/2.0 Python/3.9" -> ("Werkzeug", "2.0").
pub fn server_banner(headers: &Headers) -> Option<ServerBanner> {
    let value = headers.get("server")?.trim();
    if value.is_empty() {
        return None;
    }

    let first = value.split_whitespace().next().unwrap_or(value);
    match first.split_once('/') {
        Some((product, rest)) if !product.is_empty() => Some(ServerBanner {
            product: product.to_string(),
            version: extract_version_number(rest),
        }),
        _ => Some(ServerBanner {
            product: first.to_string(),
            version: None,
        }),
    }
}

/// First dotted version number in `text` ("1.2", "v2.0.1").
fn extract_version_number(text: &str) -> Option<String> {
    static VERSION_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"v?(\d+(?:\.\d+){0,3})").expect("version regex is valid")
    });

    VERSION_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
