//! Board configuration.

use crate::gesture::config::{SwipeConfig, SwipeConfigError};
use crate::model::progress::DEFAULT_XP_PER_COMPLETION;
use serde::{Deserialize, Serialize};

/// Tunables supplied by the host when opening a board.
///
/// Deserializes from partial JSON; absent fields take defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub swipe: SwipeConfig,
    pub xp_per_completion: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            swipe: SwipeConfig::default(),
            xp_per_completion: DEFAULT_XP_PER_COMPLETION,
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), SwipeConfigError> {
        self.swipe.validate()
    }
}
