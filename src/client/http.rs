use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use tracing::warn;
use url::Url;

use super::RegisterClient;
use crate::Result;
use crate::config::RegisterConfig;
use crate::err_with_loc;
use crate::error::ClientError;
use crate::model::RegisterRequest;
use crate::model::RegisterResponse;
use crate::model::RegisterResult;

/// Posts registrations as JSON to a fixed endpoint. No authentication header is sent.
#[derive(Debug, Clone)]
pub struct HttpRegisterClient {
    http_client: Client,
    endpoint: Url,
}

impl HttpRegisterClient {
    pub fn new(config: &RegisterConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| err_with_loc!(ClientError::BuildError(e.to_string())))?;

        Ok(Self { http_client, endpoint })
    }
}

#[async_trait]
impl RegisterClient for HttpRegisterClient {
    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> RegisterResult {
        debug!("register_client::post::{}::{}", self.endpoint, request.email);

        let response = match self.http_client.post(self.endpoint.clone()).json(request).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("register_client::transport_failure::{}", e);
                return RegisterResult::TransportFailure { cause: ClientError::from(e) };
            },
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(bytes) => RegisterResponse::parse(&bytes),
            Err(e) => {
                warn!("register_client::read_body_failure::{}::{}", status, e);
                return RegisterResult::TransportFailure { cause: ClientError::ReadBodyError(e.to_string()) };
            },
        };
        debug!("register_client::response::{}::{:?}", status, body);

        if status.is_success() {
            RegisterResult::Success { body }
        } else {
            RegisterResult::ServerRejected { status: status.as_u16(), body }
        }
    }
}
