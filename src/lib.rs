//! # dnspod-dns01
//!
//! DNS-01 challenge fulfillment library for the DNSPod legacy API
//! ([`dnsapi.cn`](https://docs.dnspod.cn/api/)).
//!
//! Given a fully-qualified challenge record name and a validation token
//! from a certificate-issuance workflow, the client publishes a TXT record
//! proving domain control and removes it afterward. Which registered zone
//! the record belongs to is discovered by probing progressively shorter
//! suffixes of the record name against the account's enabled-domain list,
//! so multi-level zones (`example.co.uk`-style) resolve correctly.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dnspod_dns01::{Credentials, DnspodClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DnspodClient::new(Credentials::new(
//!         "you@example.com",
//!         "13490,6b5976c68aba5b14a0558b77c17c3932",
//!     ));
//!
//!     // Publish the challenge record. Failures propagate.
//!     client
//!         .add_txt_record("_acme-challenge.www.example.com", "validation-token")
//!         .await?;
//!
//!     // ... wait for propagation, let the CA validate ...
//!
//!     // Best-effort cleanup: never fails, only logs.
//!     client
//!         .remove_txt_record("_acme-challenge.www.example.com", "validation-token")
//!         .await;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Host integration
//!
//! Certificate-management hosts integrate through the
//! [`Dns01Authenticator`] trait (`configure` / `perform` / `cleanup`),
//! implemented here by [`DnspodAuthenticator`]. The trait has no host
//! framework attached and is exercised directly by this crate's tests.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Error):
//!
//! - [`Error::Resolution`] — no enabled domain matches any suffix of the
//!   record name; the message names every guess attempted.
//! - [`Error::Network`] / [`Error::HttpStatus`] — transport-level failure.
//! - [`Error::Api`] — the API's status envelope reported a failure; carries
//!   the provider's own message.
//! - [`Error::Parse`] — unexpected response shape.
//!
//! Record creation propagates all of these. Record removal is deliberately
//! infallible: every error is caught at the top of the operation and
//! logged, because cleanup must never abort an otherwise-successful
//! certificate issuance.

mod authenticator;
mod client;
mod error;
mod http;
mod resolver;
mod types;

// Re-export error types
pub use error::{Error, Result};

// Re-export the client and its builder
pub use client::{DnspodClient, DnspodClientBuilder};

// Re-export the host-facing trait and its implementation
pub use authenticator::{Dns01Authenticator, DnspodAuthenticator};

// Re-export resolution primitives and credential types
pub use resolver::{ResolvedDomain, base_domain_guesses, resolve_base_domain};
pub use types::Credentials;
