use async_trait::async_trait;

use crate::error::ShareError;

/// Remote collaborator that exchanges an encoded payload for a
/// canonical short link path. The codec itself never does I/O; this
/// boundary is the only suspending part of sharing.
#[async_trait]
pub trait LinkShortener {
    async fn shorten(&self, payload: &str) -> Result<String, ShareError>;
}

/// POSTs the encoded payload to the shortening endpoint and returns
/// the short path from the response body.
pub struct HttpShortener {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpShortener {
    pub fn new(endpoint: impl Into<String>) -> Self {
        HttpShortener {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl LinkShortener for HttpShortener {
    async fn shorten(&self, payload: &str) -> Result<String, ShareError> {
        let response = self
            .client
            .post(&self.endpoint)
            .body(payload.to_string())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, endpoint = %self.endpoint, "shorten request rejected");
            return Err(ShareError::Endpoint(status));
        }

        Ok(response.text().await?)
    }
}
