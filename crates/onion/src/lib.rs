//! Onion address classification
//!
//! Takes the target URL as given on the command line and decides whether
//! its host looks like a current (v3) onion identifier. Supported input
//! forms:
//! - bare host: "xyz.onion"
//! - URL: "http://xyz.onion/some/path"
//! - URL with port: "https://xyz.onion:8443/"
//!
//! A port stays part of the host, so the suffix check fails and such targets
//! classify as legacy. Only the shape is checked: suffix and first-label length. Charset and
//! checksum are never validated, so `LegacyOnion` means "not a well-formed
//! v3 address", not "a valid v2 address".

use torrecon_common::AddressClass;

pub const ONION_SUFFIX: &str = ".onion";

/// Length of the base32 label of a v3 onion address.
pub const V3_LABEL_LEN: usize = 56;

/// Host part of a target URL: scheme and path removed. Any `:port` is kept.
pub fn extract_host(target: &str) -> &str {
    let rest = target
        .strip_prefix("http://")
        .or_else(|| target.strip_prefix("https://"))
        .unwrap_or(target);
    rest.split('/').next().unwrap_or(rest)
}

/// Classify a bare hostname.
pub fn classify_host(host: &str) -> AddressClass {
    let label = host.split('.').next().unwrap_or(host);
    if host.ends_with(ONION_SUFFIX) && label.chars().count() == V3_LABEL_LEN {
        AddressClass::ModernOnion
    } else {
        AddressClass::LegacyOnion
    }
}

/// Classify the host of a target URL.
pub fn classify_target(target: &str) -> AddressClass {
    classify_host(extract_host(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    const V3: &str = "abcdefghijklmnopqrstuvwxyz234567abcdefghijklmnopqrstuvwx.onion";

    #[test]
    fn v3_label_is_modern() {
        assert_eq!(V3.split('.').next().unwrap().len(), 56);
        assert_eq!(classify_host(V3), AddressClass::ModernOnion);
    }

    #[test]
    fn short_label_is_legacy() {
        assert_eq!(classify_host("shortname.onion"), AddressClass::LegacyOnion);
        // 16-char v2 identifier
        assert_eq!(classify_host("expyuzz4wqqyqhjn.onion"), AddressClass::LegacyOnion);
    }

    #[test]
    fn label_length_must_be_exact() {
        let long = format!("a{}", V3);
        assert_eq!(classify_host(&long), AddressClass::LegacyOnion);
        let short = &V3[1..];
        assert_eq!(classify_host(short), AddressClass::LegacyOnion);
    }

    #[test]
    fn clearnet_host_is_legacy() {
        let host = format!("{}.com", &V3[..56]);
        assert_eq!(classify_host(&host), AddressClass::LegacyOnion);
        assert_eq!(classify_host(""), AddressClass::LegacyOnion);
    }

    #[test]
    fn subdomain_shifts_the_leading_label() {
        let host = format!("www.{}", V3);
        assert_eq!(classify_host(&host), AddressClass::LegacyOnion);
    }

    #[test]
    fn extract_host_strips_scheme_and_path() {
        assert_eq!(extract_host("http://abc.onion/login"), "abc.onion");
        assert_eq!(extract_host("https://abc.onion:8443/"), "abc.onion:8443");
        assert_eq!(extract_host("abc.onion"), "abc.onion");
        assert_eq!(extract_host("http://abc.onion"), "abc.onion");
        assert_eq!(extract_host("http://abc.onion:/x"), "abc.onion:");
    }

    #[test]
    fn classify_target_uses_the_host() {
        let url = format!("http://{}/index.php", V3);
        assert_eq!(classify_target(&url), AddressClass::ModernOnion);
        assert_eq!(classify_target("http://shortname.onion/"), AddressClass::LegacyOnion);
    }

    #[test]
    fn port_in_target_breaks_the_suffix() {
        let url = format!("http://{}:80", V3);
        assert_eq!(classify_target(&url), AddressClass::LegacyOnion);
        let url = format!("http://{}:8080/", V3);
        assert_eq!(classify_target(&url), AddressClass::LegacyOnion);
    }
}
