//! Base-domain resolution for challenge record names.
//!
//! A challenge record name like `_acme-challenge.sub.example.com` must be
//! split into the sub-domain label DNSPod expects (`_acme-challenge.sub`)
//! and the base domain actually registered on the account (`example.com`).
//! Which suffix is the registered one cannot be derived from the name alone
//! (`example.co.uk`-style zones), so candidates are checked against the
//! account's enabled-domain list, longest first.

use crate::error::{Error, Result};

/// Outcome of resolving a record name against the account's domain list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDomain {
    /// Record name relative to the base domain; `@` when the record name
    /// is the base domain itself.
    pub sub_domain: String,
    /// The matched base domain.
    pub domain: String,
}

/// Candidate base domains for `record`: every dot-separated suffix,
/// longest first, starting with the record name itself.
///
/// `_acme-challenge.foo.example.com` yields itself, `foo.example.com`,
/// `example.com`, `com`.
pub fn base_domain_guesses(record: &str) -> Vec<String> {
    let mut guesses = Vec::new();
    let mut rest = record;
    loop {
        guesses.push(rest.to_string());
        match rest.split_once('.') {
            Some((_, tail)) if !tail.is_empty() => rest = tail,
            _ => break,
        }
    }
    guesses
}

/// Resolve `record` against `enabled_domains`. The first guess (longest
/// first) that exactly equals an enabled domain wins.
///
/// Fails with [`Error::Resolution`] naming every attempted guess when no
/// suffix of the record name is an enabled domain — including the case of
/// a single-label record, which has no usable dot structure.
pub fn resolve_base_domain(record: &str, enabled_domains: &[String]) -> Result<ResolvedDomain> {
    let guesses = base_domain_guesses(record);

    for guess in &guesses {
        if !enabled_domains.iter().any(|d| d == guess) {
            continue;
        }
        let prefix = &record[..record.len() - guess.len()];
        let prefix = prefix.strip_suffix('.').unwrap_or(prefix);
        let sub_domain = if prefix.is_empty() {
            "@".to_string()
        } else {
            prefix.to_string()
        };
        log::debug!("{record} => {sub_domain} + {guess}");
        return Ok(ResolvedDomain {
            sub_domain,
            domain: guess.clone(),
        });
    }

    Err(Error::Resolution {
        record: record.to_string(),
        guesses,
    })
}
