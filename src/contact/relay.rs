use std::time::Duration;

use crate::{
    contact::payload::{ContactPayload, RelayResponse},
    foundation::error::{FolioError, FolioResult},
};

/// Settings for the third-party form relay.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// HTTPS endpoint accepting the JSON payload.
    pub endpoint: String,
    /// Relay account key. Left empty in checked-in configs and supplied at runtime.
    pub access_key: String,
    /// Request timeout.
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.web3forms.com/submit".to_owned(),
            access_key: String::new(),
            timeout_secs: 30,
        }
    }
}

impl RelayConfig {
    /// Check the endpoint looks like an HTTP(S) URL and the timeout is non-zero.
    pub fn validate(&self) -> FolioResult<()> {
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(FolioError::validation(format!(
                "relay.endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }
        if self.timeout_secs == 0 {
            return Err(FolioError::validation("relay.timeout_secs must be > 0"));
        }
        Ok(())
    }
}

/// Something that can deliver a contact payload.
pub trait ContactRelay {
    /// Deliver `payload`. Transport failures are errors; a delivered but rejected submission is
    /// an `Ok` response with `success == false`.
    fn submit(&self, payload: &ContactPayload) -> FolioResult<RelayResponse>;
}

/// Blocking HTTPS relay client.
#[derive(Clone, Debug)]
pub struct HttpRelay {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpRelay {
    /// Build a client for `cfg`.
    pub fn new(cfg: &RelayConfig) -> FolioResult<Self> {
        cfg.validate()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| FolioError::relay(format!("build http client: {e}")))?;
        Ok(Self {
            client,
            endpoint: cfg.endpoint.clone(),
        })
    }
}

impl ContactRelay for HttpRelay {
    #[tracing::instrument(skip(self, payload), fields(endpoint = %self.endpoint))]
    fn submit(&self, payload: &ContactPayload) -> FolioResult<RelayResponse> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .map_err(|e| FolioError::relay(format!("post to relay: {e}")))?;
        let status = resp.status();
        let body: RelayResponse = resp
            .json()
            .map_err(|e| FolioError::relay(format!("decode relay response (HTTP {status}): {e}")))?;
        tracing::debug!(%status, success = body.success, "relay replied");
        Ok(body)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contact/relay.rs"]
mod tests;
