//! reqwest implementation of [`BulkTransport`].

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::body::NDJSON_CONTENT_TYPE;
use crate::config::BulkConfig;
use crate::error::{BulkError, Result};
use crate::{BulkResponse, BulkTransport};

/// Sends bulk bodies with one HTTP POST each, using basic auth from [`BulkConfig`].
///
/// No timeout and no retry: a request either returns a status or fails with
/// [`BulkError::Transport`].
#[derive(Debug, Clone)]
pub struct HttpBulkTransport {
    client: Client,
    endpoint: Url,
    username: String,
    password: String,
}

impl HttpBulkTransport {
    /// Builds the transport. Fails if the endpoint is not a URL or the client cannot be built.
    pub fn new(config: BulkConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| BulkError::Endpoint(format!("{} ({})", config.endpoint, e)))?;
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            endpoint,
            username: config.username,
            password: config.password,
        })
    }

    /// Returns the endpoint requests are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl BulkTransport for HttpBulkTransport {
    async fn send_bulk(&self, body: String) -> Result<BulkResponse> {
        info!(
            endpoint = %self.endpoint,
            body_bytes = body.len(),
            "sending bulk request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, NDJSON_CONTENT_TYPE)
            .basic_auth(&self.username, Some(&self.password))
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, response_bytes = body.len(), "bulk response received");
        Ok(BulkResponse { status, body })
    }
}
