//! HTTP client for the cluster's index catalog.
//!
//! Two operations against the remote index API: one read of the full alias
//! listing and one delete-by-name. Both go through the same optional SigV4
//! signer, and any non-success status aborts the run; there are no retries.

use http::StatusCode;

use crate::{
    aws::{RequestSigner, SigningError},
    config::RunConfig,
};

/// Errors from talking to the remote index API.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("failed to parse alias listing: {0}")]
    Parse(#[source] reqwest::Error),

    #[error(transparent)]
    Signing(#[from] SigningError),
}

/// Client for the listing and deletion endpoints.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    signer: Option<RequestSigner>,
}

impl CatalogClient {
    /// Builds a client for the configured endpoint, with a signer when
    /// credentials were resolved.
    pub fn new(config: &RunConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.endpoint.as_str().trim_end_matches('/').to_string(),
            signer: config.signing.as_ref().map(RequestSigner::new),
        }
    }

    /// Fetches the alias listing and returns every known index name.
    ///
    /// The listing is a JSON object keyed by index name; the values carry
    /// alias detail this sweeper has no use for, so any shape is accepted.
    pub async fn list_indices(&self) -> Result<Vec<String>, RemoteError> {
        let url = format!("{}/_aliases", self.base_url);
        tracing::debug!(url = %url, "Fetching alias listing");

        let request = self.signed(self.http.get(&url), "GET", &url)?;
        let response = request.send().await.map_err(|source| RemoteError::Request {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status { url, status, body });
        }

        let listing: serde_json::Map<String, serde_json::Value> =
            response.json().await.map_err(RemoteError::Parse)?;

        Ok(listing.into_iter().map(|(name, _)| name).collect())
    }

    /// Deletes a single index by name and returns the response status.
    pub async fn delete_index(&self, name: &str) -> Result<StatusCode, RemoteError> {
        let url = format!("{}/{}", self.base_url, name);
        tracing::debug!(index = %name, "Deleting index");

        let request = self.signed(self.http.delete(&url), "DELETE", &url)?;
        let response = request.send().await.map_err(|source| RemoteError::Request {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status { url, status, body });
        }

        Ok(status)
    }

    /// Applies SigV4 headers to the request when signing is enabled.
    fn signed(
        &self,
        request: reqwest::RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<reqwest::RequestBuilder, RemoteError> {
        let Some(signer) = &self.signer else {
            return Ok(request);
        };

        let headers: [(&str, &str); 0] = [];
        let signed_headers = signer.sign_request(method, url, &headers, &[])?;

        let mut request = request;
        for (name, value) in signed_headers {
            request = request.header(name, value);
        }

        Ok(request)
    }
}
