//! Issue-award payload extraction
//!
//! The issue endpoint accepts either a JSON body or a multipart form with
//! an optional file part named `image` or `file`. Both shapes normalize
//! into [`IssueAwardPayload`] before any business logic runs.

use axum::Json;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header;

use crate::application::issue_award::UploadedFile;
use crate::error::AwardError;
use crate::presentation::dto::IssueAwardRequest;

/// Normalized issue-award request: text fields plus optional file.
#[derive(Debug, Default)]
pub struct IssueAwardPayload {
    pub fields: IssueAwardRequest,
    pub file: Option<UploadedFile>,
}

impl<S> FromRequest<S> for IssueAwardPayload
where
    S: Send + Sync,
{
    type Rejection = AwardError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AwardError::InvalidBody(e.to_string()))?;
            from_multipart(multipart).await
        } else {
            let Json(fields): Json<IssueAwardRequest> = Json::from_request(req, state)
                .await
                .map_err(|e| AwardError::InvalidBody(e.body_text()))?;
            Ok(Self { fields, file: None })
        }
    }
}

async fn from_multipart(mut multipart: Multipart) -> Result<IssueAwardPayload, AwardError> {
    let mut payload = IssueAwardPayload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AwardError::InvalidBody(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "image" | "file" => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AwardError::InvalidBody(e.to_string()))?;
                payload.file = Some(UploadedFile {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AwardError::InvalidBody(e.to_string()))?;
                set_text_field(&mut payload.fields, &name, value);
            }
        }
    }

    Ok(payload)
}

fn set_text_field(fields: &mut IssueAwardRequest, name: &str, value: String) {
    let slot = match name {
        "walletAddress" => &mut fields.wallet_address,
        "title" => &mut fields.title,
        "signature" => &mut fields.signature,
        "message" => &mut fields.message,
        "recipient" => &mut fields.recipient,
        "recipient_name" | "recipientName" => &mut fields.recipient_name,
        "recipient_email" | "recipientEmail" => &mut fields.recipient_email,
        "category" => &mut fields.category,
        "year" => &mut fields.year,
        "summary" => &mut fields.summary,
        "transactionHash" => &mut fields.transaction_hash,
        // Unknown parts are ignored, same as unknown JSON keys
        _ => return,
    };
    *slot = Some(value);
}
