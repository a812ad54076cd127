//! HTTP transport backed by a single reqwest client

use super::transport::{Transport, TransportError};
use crate::config::TransportConfig;
use crate::config::Validate;
use crate::core::models::Signature;
use crate::utils::error::{GatewayError, Result};
use crate::utils::truncate_string;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use tracing::debug;
use url::Url;

/// Longest error body kept in a `TransportError::Status`
const MAX_ERROR_BODY: usize = 512;

/// POSTs encoded documents to the registration endpoint
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    content_type: HeaderValue,
    auth_header: HeaderName,
    auth_scheme: Option<String>,
}

impl HttpTransport {
    /// Build the client from configuration
    pub fn new(config: &TransportConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(format!("Transport config error: {}", e)))?;

        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| GatewayError::Config(format!("Invalid endpoint: {}", e)))?;
        let content_type = HeaderValue::from_str(&config.content_type)
            .map_err(|e| GatewayError::Config(format!("Invalid content type: {}", e)))?;
        let auth_header = HeaderName::from_bytes(config.auth_header.as_bytes())
            .map_err(|e| GatewayError::Config(format!("Invalid auth header: {}", e)))?;

        let client = ClientBuilder::new()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(&config.user_agent)
            .build()?;

        debug!(endpoint = %endpoint, "HTTP transport created");

        Ok(Self {
            client,
            endpoint,
            content_type,
            auth_header,
            auth_scheme: config.auth_scheme.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Header value carrying the credential
    fn credential_value(&self, signature: &Signature) -> std::result::Result<HeaderValue, TransportError> {
        let raw = match &self.auth_scheme {
            Some(scheme) => format!("{} {}", scheme, signature.expose()),
            None => signature.expose().to_string(),
        };

        let mut value = HeaderValue::from_str(&raw).map_err(|_| {
            TransportError::InvalidCredential(
                "signature contains characters not allowed in a header".to_string(),
            )
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        body: Bytes,
        signature: &Signature,
    ) -> std::result::Result<Bytes, TransportError> {
        let credential = self.credential_value(signature)?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, self.content_type.clone())
            .header(self.auth_header.clone(), credential)
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: truncate_string(&String::from_utf8_lossy(&bytes), MAX_ERROR_BODY),
            });
        }

        Ok(bytes)
    }

    fn name(&self) -> &str {
        "http"
    }
}

fn map_reqwest_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::timeout(error.to_string())
    } else {
        TransportError::network(error.to_string())
    }
}
