//! Click classification
//!
//! A click within the threshold of the previous one is a double click and
//! replaces the single-click action; otherwise it is a single click. The
//! classifier only looks at timestamps, never at a UI event loop.

use crate::config::GestureConfig;
use serde::{Deserialize, Serialize};

/// Outcome of classifying one click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gesture {
    Single,
    Double,
}

/// Two-state click classifier
#[derive(Debug, Clone, Default)]
pub struct ClickClassifier {
    last_click_ms: Option<u64>,
    config: GestureConfig,
}

impl ClickClassifier {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            last_click_ms: None,
            config,
        }
    }

    /// Classify a click at `now_ms` and remember it as the latest click
    pub fn classify(&mut self, now_ms: u64) -> Gesture {
        let gesture = match self.last_click_ms {
            Some(last) if now_ms.saturating_sub(last) < self.config.double_click_ms => Gesture::Double,
            _ => Gesture::Single,
        };
        self.last_click_ms = Some(now_ms);
        gesture
    }

    pub fn last_click_ms(&self) -> Option<u64> {
        self.last_click_ms
    }

    /// Forget the previous click
    pub fn reset(&mut self) {
        self.last_click_ms = None;
    }
}
