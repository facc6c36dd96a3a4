//! Generation request parameters
//!
//! The parameters of one image-generation request, stored verbatim inside
//! the sealed snapshot. They participate in the event pre-image, so any
//! post-hoc edit to them is detectable at verification time.

use crate::errors::{ProofError, Result};
use serde::{Deserialize, Serialize};

/// The generation request: prompt, seed, model, and output dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Prompt text, exactly as submitted
    pub prompt: String,

    /// Random seed used by the generator
    pub seed: u64,

    /// Model identifier (e.g., "black-forest-labs/FLUX.1-schnell")
    pub model: String,

    /// Output width in pixels
    pub width: u32,

    /// Output height in pixels
    pub height: u32,

    /// Diffusion step count
    pub steps: u32,
}

impl GenerationParams {
    /// Validate that all required fields are populated
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the offending field when the prompt or
    /// model is empty, or a dimension/step count is zero.
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(ProofError::invalid_input(
                "prompt",
                "prompt cannot be empty or whitespace-only",
            ));
        }
        if self.model.trim().is_empty() {
            return Err(ProofError::invalid_input("model", "model cannot be empty"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ProofError::invalid_input(
                "dimensions",
                "width and height must be non-zero",
            ));
        }
        if self.steps == 0 {
            return Err(ProofError::invalid_input("steps", "steps must be non-zero"));
        }
        Ok(())
    }
}
