//! Webhook intake gateway
//!
//! Delivers a lead with a single `POST` of its JSON payload. Any 2xx status
//! is acceptance; every other status and every transport failure is an error.

use async_trait::async_trait;
use haul_application::{IntakeError, IntakeGateway};
use haul_domain::LeadPayload;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("haul-quote/", env!("CARGO_PKG_VERSION"));

/// HTTP adapter for the [`IntakeGateway`] port
pub struct WebhookIntakeGateway {
    client: reqwest::Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl WebhookIntakeGateway {
    /// Create a gateway for the given endpoint.
    ///
    /// The endpoint is only parsed when a lead is submitted, so a malformed
    /// URL surfaces as a submission failure.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            auth_token: None,
        }
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Abort requests that take longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, IntakeError> {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| IntakeError::InvalidConfig(e.to_string()))?;
        Ok(self)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl IntakeGateway for WebhookIntakeGateway {
    async fn submit_lead(&self, payload: &LeadPayload) -> Result<(), IntakeError> {
        let url = reqwest::Url::parse(&self.endpoint).map_err(|e| {
            IntakeError::InvalidConfig(format!("invalid endpoint '{}': {}", self.endpoint, e))
        })?;

        let body = serde_json::to_vec(payload)
            .map_err(|e| IntakeError::InvalidConfig(e.to_string()))?;

        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header("User-Agent", USER_AGENT)
            .body(body);
        if let Some(token) = &self.auth_token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        debug!("POST {}", self.endpoint);
        let response = request
            .send()
            .await
            .map_err(|e| IntakeError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IntakeError::Rejected(status.as_u16()));
        }

        info!("Intake endpoint answered {}", status.as_u16());
        Ok(())
    }
}
