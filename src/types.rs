//! Legacy DNSPod API type definitions.

use serde::{Deserialize, Serialize};

// ============ Credentials ============

/// Authentication identity for the legacy DNSPod API.
///
/// The `email` identifies the caller in the outbound `User-Agent` header
/// (the API requires a valid contact address); the `token` is the
/// `ID,Token` pair from the DNSPod console, sent as the `login_token`
/// form field on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Email address associated with the DNSPod account.
    pub email: String,
    /// API token (`ID,Token` format).
    pub token: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: token.into(),
        }
    }

    /// Load credentials from `DNSPOD_EMAIL` and `DNSPOD_API_TOKEN`.
    ///
    /// Returns `None` when either variable is unset.
    pub fn from_env() -> Option<Self> {
        let email = std::env::var("DNSPOD_EMAIL").ok()?;
        let token = std::env::var("DNSPOD_API_TOKEN").ok()?;
        Some(Self { email, token })
    }
}

// ============ Response envelope ============

/// Status envelope carried by every legacy API response.
///
/// Success is `code == "1"` — a string comparison, the API never returns
/// a numeric code.
#[derive(Debug, Deserialize)]
pub struct ApiStatus {
    pub code: String,
    /// Human-readable message; absent on some success responses.
    #[serde(default)]
    pub message: String,
}

/// Minimal view of a response used to check the status envelope before
/// the payload is extracted.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    pub status: ApiStatus,
}

// ============ Domain structures ============

/// Response payload for `Domain.List`.
#[derive(Debug, Deserialize)]
pub(crate) struct DomainListResponse {
    pub domains: Option<Vec<DnspodDomain>>,
}

/// Domain item returned by `Domain.List`.
#[derive(Debug, Deserialize)]
pub(crate) struct DnspodDomain {
    pub name: String,
    pub status: Option<String>,
}

impl DnspodDomain {
    /// Whether the domain is enabled for resolution on the account.
    ///
    /// Paused or spam-flagged domains cannot host the challenge record.
    /// A missing status field counts as enabled.
    pub fn is_enabled(&self) -> bool {
        self.status
            .as_deref()
            .is_none_or(|s| s.eq_ignore_ascii_case("enable"))
    }
}

// ============ Record structures ============

/// Response payload for `Record.List`.
#[derive(Debug, Deserialize)]
pub(crate) struct RecordListResponse {
    pub records: Option<Vec<DnspodRecord>>,
}

/// DNS record item returned by `Record.List`.
#[derive(Debug, Deserialize)]
pub(crate) struct DnspodRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
}

/// Response payload for `Record.Create`. The created record's fields are
/// not consulted.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateRecordResponse {}

/// Response payload for `Record.Remove`.
#[derive(Debug, Deserialize)]
pub(crate) struct RemoveRecordResponse {}
