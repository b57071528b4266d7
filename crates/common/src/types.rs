//! Core data types for torrecon
//!
//! Responses produced by a transport are read-only once built; the
//! classifiers only ever borrow them. Findings are label sets, so a label
//! can never be reported twice.

use std::collections::BTreeSet;
use std::fmt;

/// Ordered HTTP header list with case-insensitive name lookup.
///
/// Insertion order is kept for display. Repeated names (e.g. several
/// `Set-Cookie` lines) are stored as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header, keeping any existing entry with the same name.
    pub fn append<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value stored under `name`, compared case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render every header as a `name: value` line, names included.
    #[must_use]
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        for (k, v) in &self.entries {
            out.push_str(k);
            out.push_str(": ");
            out.push_str(v);
            out.push('\n');
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One HTTP response as returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub status: u16,
    pub headers: Headers,
    pub body: String,
}

impl ProbeResult {
    #[inline]
    #[must_use]
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: String::new(),
        }
    }

    /// Builder: append a header.
    #[must_use]
    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Builder: replace the header list.
    #[must_use]
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Builder: attach the body text.
    #[must_use]
    pub fn with_body<S: Into<String>>(mut self, body: S) -> Self {
        self.body = body.into();
        self
    }

    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Deduplicated set of labels produced by one classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Finding {
    labels: BTreeSet<&'static str>,
}

impl Finding {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the label was already present.
    pub fn insert(&mut self, label: &'static str) -> bool {
        self.labels.insert(label)
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.labels.iter().copied()
    }

    /// Merge another finding into this one.
    pub fn extend(&mut self, other: Finding) {
        self.labels.extend(other.labels);
    }
}

impl FromIterator<&'static str> for Finding {
    fn from_iter<I: IntoIterator<Item = &'static str>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for label in &self.labels {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(label)?;
            first = false;
        }
        Ok(())
    }
}

/// Endpoint probe that answered with an informative status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointHit {
    pub path: String,
    pub status: u16,
}

impl EndpointHit {
    #[inline]
    #[must_use]
    pub fn new<S: Into<String>>(path: S, status: u16) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

impl fmt::Display for EndpointHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → HTTP {}", self.path, self.status)
    }
}

/// Onion address generation inferred from the hostname shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressClass {
    ModernOnion,
    /// Deprecated or non-standard identifier; not validated any further.
    LegacyOnion,
}

impl AddressClass {
    #[inline]
    #[must_use]
    pub const fn is_modern(&self) -> bool {
        matches!(self, AddressClass::ModernOnion)
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AddressClass::ModernOnion => "v3 onion service",
            AddressClass::LegacyOnion => "v2 onion (DEPRECATED)",
        };
        f.write_str(s)
    }
}

/// Outcome of the initial fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reachability {
    Online(ProbeResult),
    Offline(String),
}

impl Reachability {
    #[inline]
    #[must_use]
    pub const fn is_online(&self) -> bool {
        matches!(self, Reachability::Online(_))
    }
}

/// Product/version pair read from the `Server` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerBanner {
    pub product: String,
    pub version: Option<String>,
}

impl fmt::Display for ServerBanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{} {}", self.product, v),
            None => f.write_str(&self.product),
        }
    }
}

/// Classifier output for a single response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fingerprint {
    pub frameworks: Finding,
    pub backends: Finding,
    pub protections: Finding,
    pub server: Option<ServerBanner>,
}

/// Everything learned from a reachable service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReport {
    pub status: u16,
    pub headers: Headers,
    pub fingerprint: Fingerprint,
    pub endpoints: Vec<EndpointHit>,
    pub robots_txt: Option<String>,
    pub sitemap_xml: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Offline { reason: String },
    Online(Box<ServiceReport>),
}

/// Full result of one reconnaissance run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub target: String,
    pub address: AddressClass,
    pub outcome: ScanOutcome,
}

impl ScanReport {
    #[must_use]
    pub fn service(&self) -> Option<&ServiceReport> {
        match &self.outcome {
            ScanOutcome::Online(report) => Some(&**report),
            ScanOutcome::Offline { .. } => None,
        }
    }
}
