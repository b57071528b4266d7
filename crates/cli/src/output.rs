//! Human-readable report rendering

use std::io::{self, Write};
use torrecon_common::{AddressClass, EndpointHit, Finding, Fingerprint, Headers};

const INDENT: &str = "    ";

pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "               TORRECON-- ")?;
    writeln!(out)?;
    writeln!(out, "        TOR ONION RECONNAISSANCE TOOL")?;
    writeln!(out)
}

pub fn write_target<W: Write>(out: &mut W, target: &str) -> io::Result<()> {
    writeln!(out, "[+] Target: {}", target)
}

pub fn write_address<W: Write>(out: &mut W, address: AddressClass) -> io::Result<()> {
    writeln!(out, "\n[*] Onion Version:")?;
    if address.is_modern() {
        writeln!(out, "{}✔ {}", INDENT, address)
    } else {
        writeln!(out, "{}⚠ {}", INDENT, address)
    }
}

pub fn write_offline<W: Write>(out: &mut W, reason: &str) -> io::Result<()> {
    writeln!(out, "\n[*] Service Status:")?;
    writeln!(out, "{}✖ Offline: {}", INDENT, reason)
}

/// Status line and every header of the initial response.
pub fn write_online<W: Write>(out: &mut W, status: u16, headers: &Headers) -> io::Result<()> {
    writeln!(out, "\n[*] Service Status:")?;
    writeln!(out, "{}✔ Online (HTTP {})", INDENT, status)?;

    writeln!(out, "\n[*] HTTP Headers:")?;
    for (name, value) in headers.iter() {
        writeln!(out, "{}{}: {}", INDENT, name, value)?;
    }
    Ok(())
}

pub fn write_fingerprint<W: Write>(out: &mut W, fp: &Fingerprint) -> io::Result<()> {
    if let Some(server) = &fp.server {
        writeln!(out, "\n[*] Server:")?;
        writeln!(out, "{}{}", INDENT, server)?;
    }

    writeln!(out, "\n[*] Frameworks:")?;
    writeln!(out, "{}{}", INDENT, labels_or(&fp.frameworks, "Unknown"))?;

    writeln!(out, "\n[*] Backend Language:")?;
    writeln!(out, "{}{}", INDENT, labels_or(&fp.backends, "Unknown"))?;

    writeln!(out, "\n[*] Tor-aware Protections:")?;
    writeln!(out, "{}{}", INDENT, labels_or(&fp.protections, "None detected"))
}

pub fn write_endpoints<W: Write>(out: &mut W, hits: &[EndpointHit]) -> io::Result<()> {
    writeln!(out, "\n[*] API Endpoints:")?;
    if hits.is_empty() {
        writeln!(out, "{}None found", INDENT)?;
    }
    for hit in hits {
        writeln!(out, "{}{}", INDENT, hit)?;
    }
    Ok(())
}

pub fn write_discovery<W: Write>(
    out: &mut W,
    robots_txt: Option<&str>,
    sitemap_xml: Option<&str>,
) -> io::Result<()> {
    writeln!(out, "\n[*] robots.txt:")?;
    write_discovery_file(out, robots_txt)?;

    writeln!(out, "\n[*] sitemap.xml:")?;
    write_discovery_file(out, sitemap_xml)
}

pub fn write_completed<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n[✓] TORRECON scan completed\n")
}

fn labels_or(finding: &Finding, empty: &str) -> String {
    if finding.is_empty() {
        empty.to_string()
    } else {
        finding.to_string()
    }
}

/// Bodies are printed verbatim; an empty body reads as missing.
fn write_discovery_file<W: Write>(out: &mut W, content: Option<&str>) -> io::Result<()> {
    match content {
        Some(body) if !body.is_empty() => writeln!(out, "{}", body),
        _ => writeln!(out, "{}Not found", INDENT),
    }
}
