//! Builder configuration
//!
//! Issuer identity and the verification locator base. Values come from
//! defaults, environment overrides, or caller-supplied flags; the record
//! embeds whatever was in effect at finalize time.

use serde::{Deserialize, Serialize};

/// Environment variable overriding the issuer name
pub const ENV_ISSUER: &str = "SNAPSEAL_ISSUER";
/// Environment variable overriding the verification locator base
pub const ENV_VERIFY_BASE_URL: &str = "SNAPSEAL_VERIFY_BASE_URL";

/// Configuration consumed by the proof event builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofConfig {
    /// Issuing party recorded (and digested) in every finalized event
    pub issuer: String,

    /// Base URL the verification locator is derived from
    pub verify_base_url: String,
}

impl Default for ProofConfig {
    fn default() -> Self {
        Self {
            issuer: "SnapSeal Labs".to_string(),
            verify_base_url: "https://snapseal.dev/verify".to_string(),
        }
    }
}

impl ProofConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(issuer) = std::env::var(ENV_ISSUER) {
            if !issuer.trim().is_empty() {
                config.issuer = issuer;
            }
        }
        if let Ok(base) = std::env::var(ENV_VERIFY_BASE_URL) {
            if !base.trim().is_empty() {
                config.verify_base_url = base;
            }
        }
        config
    }

    /// Build the verification locator for a final event hash
    pub fn verify_url(&self, final_event_hash: &str) -> String {
        format!("{}?hash={}", self.verify_base_url, final_event_hash)
    }
}
