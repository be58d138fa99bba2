// API HTTP client
//
// Wraps `reqwest::Client` with API URL construction and envelope
// unwrapping. Endpoint methods (sites, badges) are implemented as inherent
// methods via separate files to keep this module focused on request
// dispatch mechanics.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::ApiEnvelope;
use crate::transport::{DEFAULT_API_URL, TransportConfig};

/// Async request dispatcher for the Stack Exchange API.
///
/// Each call issues one logical request: one HTTP round trip through the
/// shared `reqwest::Client`, one envelope parse, and exactly one terminal
/// outcome — the returned future resolves to a single `Ok` or `Err`, never
/// both and never more than once. The dispatcher holds no state between
/// requests; concurrent calls are independent and unordered. No retries
/// are performed here, callers re-issue if they want to.
///
/// Results are delivered on whatever task awaits the future; the client
/// never spawns or re-dispatches.
pub struct StackClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
}

impl StackClient {
    /// Create a client against the public API root.
    pub fn new(transport: &TransportConfig) -> Result<Self, Error> {
        let base_url = Url::parse(DEFAULT_API_URL)?;
        Self::with_base_url(base_url, transport)
    }

    /// Create a client against a custom API root.
    ///
    /// `base_url` should end with a trailing slash (endpoint paths are
    /// joined onto it).
    pub fn with_base_url(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            api_key: transport.api_key.clone(),
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            api_key: None,
        }
    }

    /// The API root this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for an API path, attaching the application key if
    /// one is configured.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let mut url = self.base_url.join(path)?;
        if let Some(ref key) = self.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and unwrap the `items` envelope.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        self.parse_envelope(resp).await
    }

    /// Parse the `{ items, error_* }` envelope, returning `items` on
    /// success. An in-band error envelope or a non-success status becomes
    /// `Error::Api`; a body that doesn't decode becomes `Error::Decode`.
    async fn parse_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Vec<T>, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        match serde_json::from_str::<ApiEnvelope<T>>(&body) {
            Ok(envelope) => {
                if envelope.error_id.is_some()
                    || envelope.error_name.is_some()
                    || envelope.error_message.is_some()
                    || !status.is_success()
                {
                    let message = envelope
                        .error_message
                        .or_else(|| envelope.error_name.clone())
                        .unwrap_or_else(|| status_fallback(status));
                    return Err(Error::Api {
                        message,
                        error_id: envelope.error_id,
                        error_name: envelope.error_name,
                        status: status.as_u16(),
                    });
                }
                debug!(items = envelope.items.len(), "request completed");
                Ok(envelope.items)
            }
            // The API reports errors in-band with JSON bodies, but proxies
            // and gateways can still hand back bare non-JSON failures.
            Err(_) if !status.is_success() => Err(Error::Api {
                message: status_fallback(status),
                error_id: None,
                error_name: None,
                status: status.as_u16(),
            }),
            Err(e) => Err(Error::Decode {
                message: e.to_string(),
                body,
            }),
        }
    }
}

fn status_fallback(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_owned()
}
