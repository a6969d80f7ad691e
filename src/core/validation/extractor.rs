//! Axum extractor for validated contract payloads
//!
//! `ContractPayload` reads the raw body, parses it as JSON and runs the
//! authoritative validator before the handler sees anything. The body is
//! parsed regardless of its `Content-Type`, like a browser `fetch` with a
//! plain JSON string would expect.
//!
//! A body that does not parse, or parses to `null`, is a generation failure
//! (500), not a validation failure. Other non-object values read as an empty
//! form.

use crate::contract::validator::{ContractData, validate};
use crate::core::error::{RequestError, SiteError};
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::Value;

/// Validated and normalized contract data
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn generate(
///     ContractPayload(data): ContractPayload,
/// ) -> Result<GeneratedDocument, SiteError> {
///     // data is normalized and every rule passed
/// }
/// ```
#[derive(Debug)]
pub struct ContractPayload(pub ContractData);

impl ContractPayload {
    /// Get the inner data
    pub fn into_inner(self) -> ContractData {
        self.0
    }
}

impl std::ops::Deref for ContractPayload {
    type Target = ContractData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequest<S> for ContractPayload
where
    S: Send + Sync,
{
    type Rejection = SiteError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            SiteError::Request(RequestError::BodyRejected {
                status: e.status(),
                message: e.body_text(),
            })
        })?;

        let payload: Value = serde_json::from_slice(&body)?;
        if payload.is_null() {
            return Err(RequestError::MalformedBody {
                message: "body is JSON null, no fields can be read".to_string(),
            }
            .into());
        }

        let outcome = validate(&payload);
        if !outcome.is_valid() {
            tracing::debug!(
                errors = outcome.errors.len(),
                first = %outcome.errors[0],
                "contract payload rejected"
            );
        }

        outcome.into_result().map(ContractPayload)
    }
}
