//! Client for the legacy DNSPod API.

use reqwest::Client;

use crate::error::Result;
use crate::resolver::{ResolvedDomain, resolve_base_domain};
use crate::types::{
    CreateRecordResponse, Credentials, DnspodDomain, DomainListResponse, RecordListResponse,
    RemoveRecordResponse,
};

/// Well-known endpoint of the legacy API.
pub(crate) const DNSPOD_API_ENDPOINT: &str = "https://dnsapi.cn";
/// Default TTL for challenge TXT records, in seconds.
pub(crate) const DEFAULT_TTL: u32 = 600;

/// Client for the legacy DNSPod API (`dnsapi.cn`).
///
/// One instance holds one `reqwest` connection pool, reused across all
/// calls. Operations run one remote call at a time; nothing is cached
/// between calls, so every operation sees the account's current state.
pub struct DnspodClient {
    pub(crate) client: Client,
    pub(crate) credentials: Credentials,
    pub(crate) ttl: u32,
    pub(crate) endpoint: String,
}

/// Builder for [`DnspodClient`].
pub struct DnspodClientBuilder {
    credentials: Credentials,
    ttl: u32,
    endpoint: String,
}

impl DnspodClientBuilder {
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ttl: DEFAULT_TTL,
            endpoint: DNSPOD_API_ENDPOINT.to_string(),
        }
    }

    /// TTL for created TXT records (default 600).
    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Override the API endpoint. Intended for tests against a local
    /// mock server.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn build(self) -> DnspodClient {
        DnspodClient {
            client: Client::new(),
            credentials: self.credentials,
            ttl: self.ttl,
            endpoint: self.endpoint,
        }
    }
}

impl DnspodClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> DnspodClientBuilder {
        DnspodClientBuilder::new(credentials)
    }

    /// Update the outbound identification.
    ///
    /// Each argument independently replaces its field when non-empty,
    /// leaving the other unchanged, so a host can re-push one credential
    /// without knowing the other.
    pub fn set_credentials(&mut self, email: &str, token: &str) {
        if !email.is_empty() {
            self.credentials.email = email.to_string();
        }
        if !token.is_empty() {
            self.credentials.token = token.to_string();
        }
    }

    /// `User-Agent` for outbound requests; the API asks callers to
    /// identify themselves with a contact address.
    pub(crate) fn user_agent(&self) -> String {
        format!(
            "{}/{}({})",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            self.credentials.email
        )
    }

    /// Create a TXT record for a DNS-01 challenge.
    ///
    /// Resolves the base domain for `record` against the account's enabled
    /// domains, then issues `Record.Create`. Any failure propagates: a
    /// record that cannot be created must halt the challenge workflow.
    pub async fn add_txt_record(&self, record: &str, value: &str) -> Result<()> {
        let resolved = self.resolve(record).await?;
        let _: CreateRecordResponse = self
            .call(
                "Record.Create",
                &[
                    ("domain", resolved.domain.clone()),
                    ("sub_domain", resolved.sub_domain.clone()),
                    ("record_type", "TXT".to_string()),
                    ("record_line", "默认".to_string()),
                    ("value", value.to_string()),
                    ("ttl", self.ttl.to_string()),
                ],
            )
            .await?;
        Ok(())
    }

    /// Remove the TXT record previously created for a DNS-01 challenge.
    ///
    /// Matching is on exact record type and value, not just name, so
    /// concurrent invocations cleaning up their own challenges do not
    /// delete each other's records. Every failure on this path —
    /// resolution, listing, deletion — is logged and discarded: cleanup
    /// must never abort an otherwise-successful issuance.
    pub async fn remove_txt_record(&self, record: &str, value: &str) {
        if let Err(e) = self.try_remove_txt_record(record, value).await {
            log::debug!("ignoring error during removal of TXT record '{record}': {e}");
        }
    }

    async fn try_remove_txt_record(&self, record: &str, value: &str) -> Result<()> {
        let resolved = self.resolve(record).await?;
        let Some(record_id) = self.find_txt_record(&resolved, value).await? else {
            log::warn!("TXT record of '{record}' not found, nothing to remove");
            return Ok(());
        };
        let _: RemoveRecordResponse = self
            .call(
                "Record.Remove",
                &[
                    ("domain", resolved.domain.clone()),
                    ("record_id", record_id),
                ],
            )
            .await?;
        Ok(())
    }

    /// Find the id of the first TXT record under the resolved name whose
    /// value equals `value`, in the order the API returns them.
    async fn find_txt_record(
        &self,
        resolved: &ResolvedDomain,
        value: &str,
    ) -> Result<Option<String>> {
        let response: RecordListResponse = self
            .call(
                "Record.List",
                &[
                    ("domain", resolved.domain.clone()),
                    ("sub_domain", resolved.sub_domain.clone()),
                ],
            )
            .await?;
        Ok(response
            .records
            .unwrap_or_default()
            .into_iter()
            .find(|r| r.record_type == "TXT" && r.value == value)
            .map(|r| r.id))
    }

    /// Resolve `record` against the account's current enabled domains.
    /// Issues one `Domain.List` call; nothing is cached between operations.
    async fn resolve(&self, record: &str) -> Result<ResolvedDomain> {
        let domains = self.list_enabled_domains().await?;
        resolve_base_domain(record, &domains)
    }

    async fn list_enabled_domains(&self) -> Result<Vec<String>> {
        let response: DomainListResponse = self.call("Domain.List", &[]).await?;
        Ok(response
            .domains
            .unwrap_or_default()
            .into_iter()
            .filter(DnspodDomain::is_enabled)
            .map(|d| d.name)
            .collect())
    }
}
