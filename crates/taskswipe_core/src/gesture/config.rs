//! Swipe threshold configuration.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Displacement beyond which releasing commits delete/complete.
pub const DEFAULT_COMMIT_THRESHOLD: f64 = 70.0;
/// Displacement beyond which the row shows a delete/complete tint.
pub const DEFAULT_HINT_THRESHOLD: f64 = 50.0;
/// Displacement below which the row is not visually moved.
pub const DEFAULT_NOISE_FLOOR: f64 = 5.0;
/// Displacement at which indicator opacity saturates at 1.
pub const DEFAULT_OPACITY_SPAN: f64 = 100.0;

/// Swipe thresholds in pointer coordinate units.
///
/// Touch-target sizing depends on device and DPI, so hosts may override
/// any value. Missing fields fall back to defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    pub commit_threshold: f64,
    pub hint_threshold: f64,
    pub noise_floor: f64,
    pub opacity_span: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            commit_threshold: DEFAULT_COMMIT_THRESHOLD,
            hint_threshold: DEFAULT_HINT_THRESHOLD,
            noise_floor: DEFAULT_NOISE_FLOOR,
            opacity_span: DEFAULT_OPACITY_SPAN,
        }
    }
}

/// Rejected threshold combinations.
#[derive(Debug, Clone, PartialEq)]
pub enum SwipeConfigError {
    NonPositive { field: &'static str, value: f64 },
    HintAboveCommit { hint: f64, commit: f64 },
}

impl Display for SwipeConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "swipe {field} must be a positive finite number, got {value}")
            }
            Self::HintAboveCommit { hint, commit } => write!(
                f,
                "swipe hint_threshold ({hint}) must not exceed commit_threshold ({commit})"
            ),
        }
    }
}

impl Error for SwipeConfigError {}

impl SwipeConfig {
    /// Overrides the commit threshold, keeping the other values.
    pub fn with_commit_threshold(mut self, commit_threshold: f64) -> Self {
        self.commit_threshold = commit_threshold;
        self
    }

    /// Checks that every threshold is positive and hinting precedes commit.
    pub fn validate(&self) -> Result<(), SwipeConfigError> {
        for (field, value) in [
            ("commit_threshold", self.commit_threshold),
            ("hint_threshold", self.hint_threshold),
            ("noise_floor", self.noise_floor),
            ("opacity_span", self.opacity_span),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SwipeConfigError::NonPositive { field, value });
            }
        }

        if self.hint_threshold > self.commit_threshold {
            return Err(SwipeConfigError::HintAboveCommit {
                hint: self.hint_threshold,
                commit: self.commit_threshold,
            });
        }

        Ok(())
    }
}
