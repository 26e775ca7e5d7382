//! Shared remote-call helper for the legacy DNSPod API.
//!
//! Every API method is a form-encoded POST to `{endpoint}/{method}`. The
//! method-specific parameters are merged with the common authentication
//! parameters, and every response carries the same status envelope, so all
//! operations funnel through a single `call` implementation.

use serde::de::DeserializeOwned;

use crate::client::DnspodClient;
use crate::error::{Error, Result};
use crate::types::Envelope;

/// Maximum number of bytes of a response body to include in debug logs.
const LOG_BODY_LIMIT: usize = 256;

/// Truncate a response body for logging; TXT values can carry long tokens.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        return s.to_string();
    }
    let cut = (0..=LOG_BODY_LIMIT)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

impl DnspodClient {
    /// Execute a legacy API request.
    ///
    /// Attaches the common parameters (`login_token`, `format=json`,
    /// `lang=en`, `error_on_empty=no`), checks the HTTP status and the
    /// response's status envelope, and deserializes the payload as `T`.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.endpoint, method);

        let mut form: Vec<(&str, String)> = params.to_vec();
        form.push(("login_token", self.credentials.token.clone()));
        form.push(("format", "json".to_string()));
        form.push(("lang", "en".to_string()));
        form.push(("error_on_empty", "no".to_string()));

        log::debug!("POST {url}");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::USER_AGENT, self.user_agent())
            .form(&form)
            .send()
            .await
            .map_err(|e| Error::Network {
                detail: e.to_string(),
            })?;

        let status = response.status();
        log::debug!("[{method}] response status: {status}");

        if !status.is_success() {
            log::error!("[{method}] http error status: {}", status.as_u16());
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(|e| Error::Network {
            detail: format!("failed to read response body: {e}"),
        })?;

        log::debug!("[{method}] response body: {}", truncate_for_log(&text));

        let envelope: Envelope = serde_json::from_str(&text).map_err(|e| {
            log::error!("[{method}] unexpected response: {}", truncate_for_log(&text));
            Error::Parse {
                detail: e.to_string(),
            }
        })?;

        if envelope.status.code != "1" {
            log::error!("[{method}] API error: {}", envelope.status.message);
            return Err(Error::Api {
                method: method.to_string(),
                message: envelope.status.message,
            });
        }

        serde_json::from_str(&text).map_err(|e| Error::Parse {
            detail: e.to_string(),
        })
    }
}
