//! Application Configuration
//!
//! Configuration for the awards application layer.

use platform::upload::UploadPolicy;

/// Awards application configuration
#[derive(Debug, Clone)]
pub struct AwardsConfig {
    /// Normalized (lowercase) founder wallet address; empty when the
    /// environment variable is unset, which fails validation at use time
    pub founder_address: String,
    /// Upload validation policy (byte ceiling)
    pub upload: UploadPolicy,
}

impl AwardsConfig {
    pub fn new(founder_address: impl Into<String>, upload: UploadPolicy) -> Self {
        Self {
            founder_address: platform::address::normalize(&founder_address.into()),
            upload,
        }
    }

    /// Whether the founder address is configured.
    pub fn founder_configured(&self) -> bool {
        !self.founder_address.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_founder_normalized() {
        let config = AwardsConfig::new("  0xABCDef01 ", UploadPolicy::default());
        assert_eq!(config.founder_address, "0xabcdef01");
        assert!(config.founder_configured());
    }

    #[test]
    fn test_unconfigured_founder() {
        let config = AwardsConfig::new("", UploadPolicy::default());
        assert!(!config.founder_configured());
    }
}
