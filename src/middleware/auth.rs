use axum::{
    extract::{Request, State},
    http::{header::InvalidHeaderName, HeaderMap, HeaderName},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::config::SecurityConfig;
use crate::error::ApiError;

/// Shared-secret check in front of the author and article routes
#[derive(Clone, Debug)]
pub struct ApiKeyGate {
    header: HeaderName,
    key: Option<Arc<str>>,
}

impl ApiKeyGate {
    pub fn new(header: &str, key: Option<String>) -> Result<Self, InvalidHeaderName> {
        Ok(Self {
            header: HeaderName::from_bytes(header.as_bytes())?,
            key: key.map(Arc::from),
        })
    }

    pub fn from_config(security: &SecurityConfig) -> Result<Self, InvalidHeaderName> {
        Self::new(&security.api_key_header, security.api_key.clone())
    }

    pub fn is_open(&self) -> bool {
        self.key.is_none()
    }

    fn check(&self, headers: &HeaderMap) -> Result<(), ApiError> {
        let Some(expected) = self.key.as_deref() else {
            return Ok(());
        };

        let presented = headers
            .get(&self.header)
            .ok_or_else(|| ApiError::unauthorized(format!("Missing {} header", self.header.as_str())))?;

        if bool::from(presented.as_bytes().ct_eq(expected.as_bytes())) {
            Ok(())
        } else {
            tracing::warn!("Rejected request with invalid {} header", self.header.as_str());
            Err(ApiError::forbidden("Invalid API key"))
        }
    }
}

/// Middleware that rejects requests without the configured API key
pub async fn api_key_middleware(
    State(gate): State<ApiKeyGate>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    gate.check(request.headers())?;
    Ok(next.run(request).await)
}
