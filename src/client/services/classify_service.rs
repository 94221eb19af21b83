use crate::client::config::ClientConfig;
use crate::common::error::ClientError;
use crate::common::models::{ClassificationResult, ClassifyResponse, SelectedImage};
use log::{debug, error, info};
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use url::Url;

const GENERIC_FAILURE: &str = "Classification failed";

/// HTTP client for the remote classification endpoint.
#[derive(Debug, Clone)]
pub struct ClassifyService {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl ClassifyService {
    pub fn new(endpoint: Url, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint, timeout })
    }

    pub fn from_config(config: &ClientConfig) -> anyhow::Result<Self> {
        Self::new(config.classify_endpoint.clone(), config.request_timeout)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends one image as the multipart field `image` and parses the verdict.
    pub async fn classify(&self, image: &SelectedImage) -> Result<ClassificationResult, ClientError> {
        let part = Part::bytes(image.bytes.to_vec())
            .file_name(image.file_name.clone())
            .mime_str(&image.media_type)
            .map_err(|e| ClientError::Transport(format!("invalid media type: {}", e)))?;
        let form = Form::new().part("image", part);

        info!("Submitting {} ({} bytes) to {}", image.file_name, image.size, self.endpoint);
        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        debug!("Classify response {}: {}", status, body);
        let parsed = serde_json::from_str::<ClassifyResponse>(&body);

        if !status.is_success() {
            let reason = parsed
                .ok()
                .and_then(|r| r.error)
                .unwrap_or_else(|| format!("HTTP {}", status));
            error!("Classification rejected with {}: {}", status, reason);
            return Err(ClientError::Server(reason));
        }

        let parsed = parsed?;
        if !parsed.success {
            let reason = parsed.error.unwrap_or_else(|| GENERIC_FAILURE.to_string());
            error!("Server reported failure: {}", reason);
            return Err(ClientError::Server(reason));
        }
        info!("Classification completed: {} ({}%)", parsed.result, parsed.confidence);
        Ok(parsed.into())
    }

    fn transport_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            error!("Classify request timed out after {:?}", self.timeout);
            ClientError::Transport(format!("request timed out after {:?}", self.timeout))
        } else {
            error!("Classify request failed: {}", err);
            ClientError::from(err)
        }
    }
}
