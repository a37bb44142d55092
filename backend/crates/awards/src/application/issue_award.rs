//! Issue Award Use Case
//!
//! Validates the request, runs the founder check, pushes the optional file
//! to object storage, then performs an idempotent insert keyed on the
//! payment transaction hash.

use std::sync::Arc;

use kernel::id::now_ms;
use platform::{address, upload};

use crate::application::config::AwardsConfig;
use crate::domain::entity::{Award, NewAward};
use crate::domain::repository::{AwardRepository, ObjectStorage};
use crate::error::{AwardError, AwardResult};

/// An uploaded file as received from the request body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Input for award issuance. Field semantics follow the request DTO;
/// `signature` is accepted as opaque data (no on-chain verification
/// happens server-side).
#[derive(Debug, Clone, Default)]
pub struct IssueAwardInput {
    pub wallet_address: String,
    pub title: String,
    pub signature: Option<String>,
    pub recipient: Option<String>,
    pub recipient_name: Option<String>,
    pub recipient_email: Option<String>,
    pub category: Option<String>,
    pub year: Option<String>,
    pub summary: Option<String>,
    pub transaction_hash: Option<String>,
    pub file: Option<UploadedFile>,
}

/// Result of award issuance.
#[derive(Debug, Clone)]
pub struct IssueAwardOutput {
    pub award: Award,
    pub already_exists: bool,
    pub filename: Option<String>,
    pub image_url: Option<String>,
}

pub struct IssueAwardUseCase<R, S> {
    repo: Arc<R>,
    storage: Arc<S>,
    config: Arc<AwardsConfig>,
}

impl<R, S> IssueAwardUseCase<R, S>
where
    R: AwardRepository + Send + Sync,
    S: ObjectStorage + Send + Sync,
{
    pub fn new(repo: Arc<R>, storage: Arc<S>, config: Arc<AwardsConfig>) -> Self {
        Self {
            repo,
            storage,
            config,
        }
    }

    pub async fn execute(&self, input: IssueAwardInput) -> AwardResult<IssueAwardOutput> {
        let wallet = address::normalize(&input.wallet_address);
        if wallet.is_empty() {
            return Err(AwardError::MissingField("walletAddress"));
        }
        if input.title.trim().is_empty() {
            return Err(AwardError::MissingField("title"));
        }

        if !self.config.founder_configured() {
            return Err(AwardError::Config("FOUNDER_ADDRESS not set".to_string()));
        }
        if wallet != self.config.founder_address {
            return Err(AwardError::FounderRequired {
                expected: self.config.founder_address.clone(),
                got: wallet,
            });
        }

        // Optional file: validate, then push to storage
        let mut filename = None;
        let mut image_url = None;
        if let Some(file) = &input.file {
            let content_type = upload::validate(
                &self.config.upload,
                file.content_type.as_deref(),
                file.filename.as_deref(),
                file.bytes.len() as u64,
            )?;

            let object_name = object_name(file.filename.as_deref());
            let url = self
                .storage
                .put(&object_name, file.bytes.clone(), &content_type)
                .await?;

            tracing::info!(object = %object_name, url = %url, "Award image uploaded");
            filename = file.filename.clone();
            image_url = Some(url);
        }

        // Idempotency fast path: an award for this transaction already exists
        let payment_hash = input
            .transaction_hash
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(str::to_string);

        if let Some(hash) = &payment_hash {
            if let Some(existing) = self.repo.find_by_payment_hash(hash).await? {
                tracing::info!(award_id = %existing.id, "Award already exists for payment hash");
                return Ok(IssueAwardOutput {
                    award: existing,
                    already_exists: true,
                    filename,
                    image_url,
                });
            }
        }

        let new_award = NewAward {
            issuer: self.config.founder_address.clone(),
            recipient: normalize_opt(input.recipient.as_deref()),
            recipient_name: non_empty(input.recipient_name),
            recipient_email: non_empty(input.recipient_email),
            title: input.title.trim().to_string(),
            category: non_empty(input.category),
            year: non_empty(input.year),
            summary: non_empty(input.summary),
            image_url: image_url.clone(),
            payment_hash: payment_hash.clone(),
            timestamp: None,
        };

        match self.repo.insert(&new_award).await {
            Ok(award) => {
                tracing::info!(
                    award_id = %award.id,
                    title = %award.title,
                    has_image = image_url.is_some(),
                    "Award created"
                );
                Ok(IssueAwardOutput {
                    award,
                    already_exists: false,
                    filename,
                    image_url,
                })
            }
            // Lost the race with a concurrent duplicate: the unique index
            // rejected the insert, so the original row must exist now
            Err(AwardError::DuplicateKey) => {
                let hash = payment_hash.ok_or(AwardError::DuplicateKey)?;
                let existing = self
                    .repo
                    .find_by_payment_hash(&hash)
                    .await?
                    .ok_or(AwardError::DuplicateKey)?;
                tracing::info!(award_id = %existing.id, "Recovered existing award after duplicate insert");
                Ok(IssueAwardOutput {
                    award: existing,
                    already_exists: true,
                    filename,
                    image_url,
                })
            }
            Err(other) => Err(other),
        }
    }
}

/// Storage object name: `<ms>_<original name with whitespace collapsed>`.
fn object_name(original: Option<&str>) -> String {
    let base = original.unwrap_or("upload");
    let safe: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("{}_{}", now_ms(), safe)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn normalize_opt(value: Option<&str>) -> Option<String> {
    value
        .map(address::normalize)
        .filter(|v| !v.is_empty())
}
