//! Signature tables
//!
//! Plain data: each rule maps a label to lowercase substrings. A rule fires
//! when any one of its tokens is present in the text a classifier scans.

/// Label plus the lowercase tokens that identify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureRule {
    pub label: &'static str,
    pub tokens: &'static [&'static str],
}

impl SignatureRule {
    pub const fn new(label: &'static str, tokens: &'static [&'static str]) -> Self {
        Self { label, tokens }
    }

    /// `haystack` must already be lowercase.
    #[inline]
    pub fn matches(&self, haystack: &str) -> bool {
        self.tokens.iter().any(|t| haystack.contains(t))
    }
}

/// Scanned against flattened headers (names and values) plus body.
pub static FRAMEWORK_SIGNATURES: &[SignatureRule] = &[
    SignatureRule::new("Flask", &["werkzeug", "flask"]),
    SignatureRule::new("Django", &["django", "csrftoken"]),
    SignatureRule::new("Express.js", &["express", "x-powered-by"]),
    SignatureRule::new("PHP", &["php", "phpsessid"]),
    SignatureRule::new("Laravel", &["laravel"]),
    SignatureRule::new("Ruby on Rails", &["rails", "_rails_session"]),
    SignatureRule::new("ASP.NET", &["asp.net"]),
];

/// Scanned against each header value on its own.
pub static BACKEND_SIGNATURES: &[SignatureRule] = &[
    SignatureRule::new("PHP", &["php"]),
    SignatureRule::new("Python", &["python"]),
    SignatureRule::new("Node.js", &["node"]),
    SignatureRule::new("Ruby", &["ruby"]),
    SignatureRule::new("Java", &["java"]),
];

// Protection signals each look at a different part of the response.
pub const CAPTCHA_TOKEN: &str = "captcha";
pub const CAPTCHA_LABEL: &str = "CAPTCHA";
pub const JS_CHALLENGE_TOKEN: &str = "javascript";
pub const JS_CHALLENGE_LABEL: &str = "JavaScript challenge";
/// Matched case-sensitively against the raw body, not the status line.
pub const ACCESS_CONTROL_TOKEN: &str = "403";
pub const ACCESS_CONTROL_LABEL: &str = "Tor rate-limit / access control";
pub const CLOUDFLARE_HEADER: &str = "cf-ray";
pub const CLOUDFLARE_LABEL: &str = "Cloudflare detected";
