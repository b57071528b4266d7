//! Transport - HTTP GET through the configured forward proxy

mod http;

pub use http::HttpTransport;
