//! Host-facing authenticator interface.
//!
//! Certificate-management frameworks drive DNS-01 fulfillment through three
//! calls: push credentials, publish the challenge record, clean it up. The
//! trait below is that surface with no framework attached, so an
//! implementation can be exercised directly in tests or wired into any host.

use async_trait::async_trait;

use crate::client::DnspodClient;
use crate::error::Result;
use crate::types::Credentials;

/// A DNS-01 challenge authenticator.
#[async_trait]
pub trait Dns01Authenticator: Send + Sync {
    /// Push credentials before the first `perform` call. May be called
    /// again to rotate them.
    fn configure(&mut self, credentials: Credentials);

    /// Publish the validation TXT record.
    ///
    /// `domain` is the certificate domain being validated;
    /// `validation_name` is the fully-qualified record name (typically
    /// `_acme-challenge.` + domain) and `validation` the token value.
    /// Errors propagate — a challenge that cannot be published must fail
    /// the issuance.
    async fn perform(&self, domain: &str, validation_name: &str, validation: &str) -> Result<()>;

    /// Remove the validation TXT record. Best-effort: never fails, only
    /// logs.
    async fn cleanup(&self, domain: &str, validation_name: &str, validation: &str);
}

/// [`Dns01Authenticator`] backed by a [`DnspodClient`].
pub struct DnspodAuthenticator {
    client: DnspodClient,
}

impl DnspodAuthenticator {
    pub fn new(client: DnspodClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Dns01Authenticator for DnspodAuthenticator {
    fn configure(&mut self, credentials: Credentials) {
        self.client
            .set_credentials(&credentials.email, &credentials.token);
    }

    // Record placement derives from the validation name alone; the
    // certificate domain is not consulted.
    async fn perform(&self, _domain: &str, validation_name: &str, validation: &str) -> Result<()> {
        self.client.add_txt_record(validation_name, validation).await
    }

    async fn cleanup(&self, _domain: &str, validation_name: &str, validation: &str) {
        self.client
            .remove_txt_record(validation_name, validation)
            .await;
    }
}
