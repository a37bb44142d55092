pub mod create_proof;

pub use create_proof::{CreateProofInput, CreateProofOutput, CreateProofUseCase};
