//! Allowed host parsing and matching

use super::defaults::DEFAULT_ALLOWED_HOSTS;
use serde::{Deserialize, Serialize};

/// Hostnames the web server accepts requests for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedHosts(Vec<String>);

impl Default for AllowedHosts {
    fn default() -> Self {
        Self(super::defaults::to_owned_list(DEFAULT_ALLOWED_HOSTS))
    }
}

impl AllowedHosts {
    pub fn new(hosts: Vec<String>) -> Self {
        Self(hosts)
    }

    /// Parse a comma-separated list, falling back to the defaults when the
    /// value is unset or yields no entries
    pub fn parse(raw: Option<&str>) -> Self {
        let hosts = parse_allowed_hosts(raw);
        Self(hosts)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check a request host (as sent in the `Host` header) against the list.
    ///
    /// `*` allows everything, `.example.com` allows `example.com` and any
    /// subdomain, anything else must match exactly (case-insensitive).
    pub fn is_allowed(&self, host: &str) -> bool {
        let Some(domain) = request_domain(host) else {
            return false;
        };

        self.0.iter().any(|pattern| matches_pattern(&domain, pattern))
    }
}

/// Split a comma-separated host list, trimming entries and dropping empty ones
pub fn parse_allowed_hosts(raw: Option<&str>) -> Vec<String> {
    let hosts: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .collect();

    if hosts.is_empty() {
        super::defaults::to_owned_list(DEFAULT_ALLOWED_HOSTS)
    } else {
        hosts
    }
}

/// Lowercased domain part of a `Host` header value, without port or
/// trailing dot
fn request_domain(host: &str) -> Option<String> {
    let host = host.trim().to_ascii_lowercase();
    if host.is_empty() {
        return None;
    }

    let domain = if host.starts_with('[') {
        // [v6]:port
        let end = host.find(']')?;
        let (literal, rest) = host.split_at(end + 1);
        if let Some(port) = rest.strip_prefix(':') {
            if !is_port(port) {
                return None;
            }
        } else if !rest.is_empty() {
            return None;
        }
        literal.to_string()
    } else {
        match host.rsplit_once(':') {
            Some((domain, _)) if domain.contains(':') => return None,
            Some((_, port)) if !is_port(port) => return None,
            Some((domain, _)) => domain.to_string(),
            None => host,
        }
    };

    let domain = domain.strip_suffix('.').unwrap_or(&domain).to_string();
    if domain.is_empty() { None } else { Some(domain) }
}

fn is_port(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

fn matches_pattern(domain: &str, pattern: &str) -> bool {
    let pattern = pattern.to_ascii_lowercase();
    if pattern == "*" {
        return true;
    }

    match pattern.strip_prefix('.') {
        Some(bare) => domain == bare || domain.ends_with(&pattern),
        None => domain == pattern,
    }
}
