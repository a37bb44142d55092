//! Profiles Backend Module
//!
//! Wallet-keyed display profiles. A profile is upserted as a whole: posting
//! again with the same wallet replaces the display name and avatar. Absent
//! fields fall back to defaults (display name = wallet address, identicon
//! avatar derived from the wallet).

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{ProfileError, ProfileResult};
pub use infra::postgres::PgProfileRepository;
pub use presentation::router::{profiles_router, profiles_router_generic};
