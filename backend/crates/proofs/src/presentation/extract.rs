//! Create-proof body extraction
//!
//! Wraps the JSON extractor so a malformed body comes back through
//! [`ProofError`] and keeps the `{success:false, error}` response shape
//! instead of axum's plain-text rejection.

use axum::Json;
use axum::extract::{FromRequest, Request};

use crate::error::ProofError;
use crate::presentation::dto::CreateProofRequest;

pub struct ProofBody(pub CreateProofRequest);

impl<S> FromRequest<S> for ProofBody
where
    S: Send + Sync,
{
    type Rejection = ProofError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(fields): Json<CreateProofRequest> = Json::from_request(req, state)
            .await
            .map_err(|e| ProofError::InvalidBody(e.body_text()))?;
        Ok(Self(fields))
    }
}
