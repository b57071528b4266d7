//! Probe URL construction

use torrecon_common::{ReconError, ReconResult};
use url::Url;

/// Endpoint probes append the path to the base with trailing slashes removed,
/// so a base path is kept: `http://x.onion/app/` + `/api` -> `http://x.onion/app/api`.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Discovery files use reference resolution, so an absolute `name` lands at
/// the site root.
pub fn resolve_resource(base: &str, name: &str) -> ReconResult<String> {
    let base_url = Url::parse(base)
        .map_err(|e| ReconError::InvalidTarget(format!("'{}': {}", base, e)))?;
    base_url
        .join(name)
        .map(String::from)
        .map_err(|e| ReconError::InvalidTarget(format!("'{}' against '{}': {}", name, base, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_strips_trailing_slashes() {
        assert_eq!(endpoint_url("http://x.onion", "/api"), "http://x.onion/api");
        assert_eq!(endpoint_url("http://x.onion///", "/api/v1"), "http://x.onion/api/v1");
        assert_eq!(endpoint_url("http://x.onion/app/", "/api"), "http://x.onion/app/api");
    }

    #[test]
    fn resource_resolves_against_site_root() {
        assert_eq!(
            resolve_resource("http://x.onion", "/robots.txt").as_deref(),
            Ok("http://x.onion/robots.txt")
        );
        assert_eq!(
            resolve_resource("http://x.onion/app/index.php", "/sitemap.xml").as_deref(),
            Ok("http://x.onion/sitemap.xml")
        );
        assert_eq!(
            resolve_resource("https://x.onion:8443/", "/robots.txt").as_deref(),
            Ok("https://x.onion:8443/robots.txt")
        );
    }

    #[test]
    fn unparseable_base_is_invalid_target() {
        assert!(matches!(
            resolve_resource("x.onion", "/robots.txt"),
            Err(ReconError::InvalidTarget(_))
        ));
        assert!(matches!(
            resolve_resource("", "/robots.txt"),
            Err(ReconError::InvalidTarget(_))
        ));
    }
}
