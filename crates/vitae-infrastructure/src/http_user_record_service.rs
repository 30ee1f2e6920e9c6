//! HttpUserRecordService - REST implementation of [`UserRecordService`].
//!
//! Talks to the backend's user record endpoint:
//! - `GET <record-endpoint>?id=<identity>` returns the record
//! - `PATCH <record-endpoint>?id=<identity>` applies a partial update
//!
//! No retries are attempted. A timeout is only applied when configured.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

use vitae_core::avatar::EncodedImage;
use vitae_core::config::ServiceConfig;
use vitae_core::error::{Result, VitaeError};
use vitae_core::user::{EditDraft, Identity, UserRecord, UserRecordService};

use crate::dto::{AvatarDto, EditDraftDto, ErrorBodyDto, UserRecordDto};

/// User record service backed by the HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpUserRecordService {
    client: Client,
    record_url: String,
    timeout: Option<Duration>,
}

impl HttpUserRecordService {
    /// Creates a service for an absolute record endpoint URL.
    pub fn new(record_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            record_url: record_url.into(),
            timeout: None,
        }
    }

    /// Creates a service from the `[service]` configuration section.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            client: Client::new(),
            record_url: config.record_url(),
            timeout: config.timeout(),
        }
    }

    pub fn record_url(&self) -> &str {
        &self.record_url
    }

    fn keyed(&self, request: RequestBuilder, identity: Identity) -> RequestBuilder {
        let request = request.query(&[("id", identity.0)]);
        match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, action: &str) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| VitaeError::transport(format!("Failed to {}: {}", action, e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = Self::error_message(response).await;
            tracing::debug!(
                "[HttpUserRecordService] {} failed with status {}: {:?}",
                action,
                status,
                message
            );
            return Err(VitaeError::http(status.as_u16(), message));
        }

        Ok(response)
    }

    /// Extracts the `error` field of a JSON error body, if present.
    async fn error_message(response: Response) -> Option<String> {
        let body = response.text().await.ok()?;
        serde_json::from_str::<ErrorBodyDto>(&body)
            .ok()
            .and_then(|parsed| parsed.error)
    }
}

#[async_trait]
impl UserRecordService for HttpUserRecordService {
    async fn fetch_record(&self, identity: Identity) -> Result<UserRecord> {
        let request = self.keyed(self.client.get(&self.record_url), identity);
        let response = self.send(request, "fetch user record").await?;

        let body = response
            .text()
            .await
            .map_err(|e| VitaeError::transport(format!("Failed to read user record: {}", e)))?;
        let dto: UserRecordDto = serde_json::from_str(&body)?;

        Ok(dto.into())
    }

    async fn update_record(&self, identity: Identity, draft: &EditDraft) -> Result<()> {
        let payload = EditDraftDto::from(draft);
        let request = self.keyed(self.client.patch(&self.record_url), identity).json(&payload);
        self.send(request, "update user record").await?;
        Ok(())
    }

    async fn upload_avatar(&self, identity: Identity, avatar: &EncodedImage) -> Result<()> {
        let payload = AvatarDto {
            foto_perfil: avatar.as_str().to_string(),
        };
        let request = self.keyed(self.client.patch(&self.record_url), identity).json(&payload);
        self.send(request, "upload avatar").await?;
        Ok(())
    }
}
