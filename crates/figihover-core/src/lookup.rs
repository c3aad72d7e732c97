//! OpenFIGI lookup client.
//!
//! One classified identifier in, one [`SecurityProfile`] out, through a single
//! POST. There is no retry, cache or throttling here; every failure comes back
//! as a [`LookupError`] for the caller to render.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::LookupConfig;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::identifier::ClassifiedIdentifier;
use crate::mapping::{mapping_request, parse_mapping_response, SecurityProfile};

const TOO_MANY_REQUESTS: u16 = 429;

/// Lookup failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    /// HTTP 429 from the mapping endpoint.
    RateLimited,
    /// Transport failure or any other non-success status.
    Unavailable,
    /// Body could not be read as a mapping response.
    Malformed,
    /// Well-formed response without a match.
    NotFound,
}

/// Structured lookup error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupError {
    kind: LookupErrorKind,
    message: String,
}

impl LookupError {
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self {
            kind: LookupErrorKind::RateLimited,
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: LookupErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: LookupErrorKind::Malformed,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: LookupErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> LookupErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            LookupErrorKind::RateLimited => "lookup.rate_limited",
            LookupErrorKind::Unavailable => "lookup.unavailable",
            LookupErrorKind::Malformed => "lookup.malformed",
            LookupErrorKind::NotFound => "lookup.not_found",
        }
    }
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for LookupError {}

/// Client for the OpenFIGI mapping endpoint.
#[derive(Clone)]
pub struct OpenFigiClient {
    http_client: Arc<dyn HttpClient>,
    config: LookupConfig,
}

impl OpenFigiClient {
    pub fn new(config: LookupConfig) -> Self {
        Self::with_http_client(Arc::new(ReqwestHttpClient::default()), config)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: LookupConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    pub async fn lookup(
        &self,
        identifier: &ClassifiedIdentifier,
    ) -> Result<SecurityProfile, LookupError> {
        let request = mapping_request(identifier, &self.config)
            .map_err(|e| LookupError::malformed(format!("failed to encode mapping job: {e}")))?;

        debug!(
            kind = identifier.kind().as_str(),
            value = identifier.value(),
            endpoint = self.config.endpoint(),
            authenticated = self.config.api_key().is_some(),
            "sending openfigi mapping request"
        );

        let response = self.http_client.execute(request).await.map_err(|error| {
            warn!(error = error.message(), "openfigi transport error");
            LookupError::unavailable(format!("openfigi transport error: {}", error.message()))
        })?;

        if response.status == TOO_MANY_REQUESTS {
            warn!("openfigi rate limit exceeded");
            return Err(LookupError::rate_limited("openfigi rate limit exceeded"));
        }

        if !response.is_success() {
            warn!(status = response.status, "openfigi returned an error status");
            return Err(LookupError::unavailable(format!(
                "openfigi upstream returned status {}",
                response.status
            )));
        }

        let profile = parse_mapping_response(&response.body).inspect_err(|error| {
            warn!(code = error.code(), error = error.message(), "openfigi lookup failed");
        })?;

        debug!(
            ticker = profile.ticker.as_str(),
            matches = profile.match_count,
            "openfigi lookup succeeded"
        );
        Ok(profile)
    }
}
