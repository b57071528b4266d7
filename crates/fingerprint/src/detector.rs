//! Response classifiers
//!
//! Each classifier is independent: it borrows one response and returns a
//! label set. Evaluation order across rules does not matter and every
//! matching rule is reported, not just the first.

use torrecon_common::{Finding, ProbeResult};

use crate::signatures::{
    SignatureRule, ACCESS_CONTROL_LABEL, ACCESS_CONTROL_TOKEN, BACKEND_SIGNATURES, CAPTCHA_LABEL,
    CAPTCHA_TOKEN, CLOUDFLARE_HEADER, CLOUDFLARE_LABEL, FRAMEWORK_SIGNATURES, JS_CHALLENGE_LABEL,
    JS_CHALLENGE_TOKEN,
};

/// Framework detection with the built-in table.
pub fn detect_frameworks(response: &ProbeResult) -> Finding {
    detect_frameworks_with(FRAMEWORK_SIGNATURES, response)
}

/// Match `rules` against lowercase(flattened headers ++ body).
pub fn detect_frameworks_with(rules: &[SignatureRule], response: &ProbeResult) -> Finding {
    let mut haystack = response.headers.flatten();
    haystack.push_str(&response.body);
    let haystack = haystack.to_lowercase();

    rules
        .iter()
        .filter(|rule| rule.matches(&haystack))
        .map(|rule| rule.label)
        .collect()
}

/// Backend language detection with the built-in table.
pub fn detect_backends(response: &ProbeResult) -> Finding {
    detect_backends_with(BACKEND_SIGNATURES, response)
}

/// Match `rules` against each header value separately. Names and body are
/// not looked at; one value can produce several labels.
pub fn detect_backends_with(rules: &[SignatureRule], response: &ProbeResult) -> Finding {
    let mut found = Finding::new();
    for value in response.headers.values() {
        let value = value.to_lowercase();
        for rule in rules.iter().filter(|rule| rule.matches(&value)) {
            found.insert(rule.label);
        }
    }
    found
}

/// Anti-automation signals: four separate checks, union of labels.
pub fn detect_protections(response: &ProbeResult) -> Finding {
    let body_lower = response.body.to_lowercase();
    let mut found = Finding::new();

    if body_lower.contains(CAPTCHA_TOKEN) {
        found.insert(CAPTCHA_LABEL);
    }
    if body_lower.contains(JS_CHALLENGE_TOKEN) {
        found.insert(JS_CHALLENGE_LABEL);
    }
    // literal text in the body; the response status is not consulted
    if response.body.contains(ACCESS_CONTROL_TOKEN) {
        found.insert(ACCESS_CONTROL_LABEL);
    }
    if response.headers.contains_key(CLOUDFLARE_HEADER) {
        found.insert(CLOUDFLARE_LABEL);
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flask_response() -> ProbeResult {
        ProbeResult::new(200)
            .with_header("Server", "Werkzeug/2.0 Python/3.9")
            .with_body("<html>Flask app</html>")
    }

    #[test]
    fn flask_behind_werkzeug() {
        let r = flask_response();
        let frameworks = detect_frameworks(&r);
        assert_eq!(frameworks.iter().collect::<Vec<_>>(), vec!["Flask"]);
        let backends = detect_backends(&r);
        assert_eq!(backends.iter().collect::<Vec<_>>(), vec!["Python"]);
    }

    #[test]
    fn cloudflare_and_js_challenge() {
        let r = ProbeResult::new(200)
            .with_header("CF-RAY", "abcd")
            .with_body("please enable javascript");
        let protections = detect_protections(&r);
        assert_eq!(protections.len(), 2);
        assert!(protections.contains("Cloudflare detected"));
        assert!(protections.contains("JavaScript challenge"));
    }

    #[test]
    fn empty_response_yields_nothing() {
        let r = ProbeResult::new(200);
        assert!(detect_frameworks(&r).is_empty());
        assert!(detect_backends(&r).is_empty());
        assert!(detect_protections(&r).is_empty());
    }

    #[test]
    fn repeated_evidence_does_not_change_result() {
        let base = detect_frameworks(&flask_response());
        let more = detect_frameworks(&flask_response().with_header("X-App", "flask"));
        assert_eq!(base, more);
    }

    #[test]
    fn new_evidence_grows_result() {
        let r = flask_response().with_header("Set-Cookie", "csrftoken=xyz");
        let frameworks = detect_frameworks(&r);
        assert_eq!(frameworks.len(), 2);
        assert!(frameworks.contains("Flask"));
        assert!(frameworks.contains("Django"));
    }

    #[test]
    fn header_names_count_for_frameworks() {
        // a bare X-Powered-By name is Express evidence, and its value adds PHP
        let r = ProbeResult::new(200).with_header("X-Powered-By", "PHP/8.1");
        let frameworks = detect_frameworks(&r);
        assert!(frameworks.contains("Express.js"));
        assert!(frameworks.contains("PHP"));
        assert_eq!(frameworks.len(), 2);
    }

    #[test]
    fn framework_match_is_case_insensitive() {
        let r = ProbeResult::new(200).with_body("Built with LARAVEL and ASP.NET");
        let frameworks = detect_frameworks(&r);
        assert!(frameworks.contains("Laravel"));
        assert!(frameworks.contains("ASP.NET"));
    }

    #[test]
    fn backend_ignores_names_and_body() {
        let r = ProbeResult::new(200)
            .with_header("X-Python", "yes")
            .with_body("ruby php java node python");
        assert!(detect_backends(&r).is_empty());
    }

    #[test]
    fn one_value_can_name_several_backends() {
        let r = ProbeResult::new(200).with_header("X-Stack", "Node/18 PHP/8 Ruby/3");
        let backends = detect_backends(&r);
        assert_eq!(backends.len(), 3);
        assert!(backends.contains("Node.js"));
        assert!(backends.contains("PHP"));
        assert!(backends.contains("Ruby"));
    }

    #[test]
    fn backend_dedups_across_headers() {
        let r = ProbeResult::new(200)
            .with_header("Server", "Apache PHP/7.4")
            .with_header("X-Powered-By", "PHP/7.4");
        assert_eq!(detect_backends(&r).iter().collect::<Vec<_>>(), vec!["PHP"]);
    }

    #[test]
    fn javascript_content_type_reads_as_java() {
        let r = ProbeResult::new(200).with_header("Content-Type", "application/javascript");
        assert!(detect_backends(&r).contains("Java"));
    }

    #[test]
    fn captcha_is_case_insensitive() {
        let r = ProbeResult::new(200).with_body("Solve the CAPTCHA to continue");
        assert!(detect_protections(&r).contains("CAPTCHA"));
    }

    #[test]
    fn access_control_reads_body_not_status() {
        let r = ProbeResult::new(403).with_body("forbidden");
        assert!(!detect_protections(&r).contains("Tor rate-limit / access control"));

        let r = ProbeResult::new(200).with_body("Error 403: slow down");
        assert!(detect_protections(&r).contains("Tor rate-limit / access control"));
    }

    #[test]
    fn cloudflare_header_lookup_ignores_case() {
        let r = ProbeResult::new(200).with_header("cf-ray", "7a1b");
        assert!(detect_protections(&r).contains("Cloudflare detected"));

        let r = ProbeResult::new(200).with_header("X-Info", "cf-ray");
        assert!(!detect_protections(&r).contains("Cloudflare detected"));
    }

    #[test]
    fn custom_rules_are_honoured() {
        static RULES: &[SignatureRule] = &[SignatureRule::new("Phoenix", &["phoenix"])];
        let r = ProbeResult::new(200).with_body("Phoenix LiveView");
        let found = detect_frameworks_with(RULES, &r);
        assert_eq!(found.iter().collect::<Vec<_>>(), vec!["Phoenix"]);
    }
}
