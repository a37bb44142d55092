pub mod config;
pub mod delete_award;
pub mod issue_award;
pub mod list_awards;

pub use delete_award::DeleteAwardUseCase;
pub use issue_award::{IssueAwardInput, IssueAwardOutput, IssueAwardUseCase, UploadedFile};
pub use list_awards::ListAwardsUseCase;
