//! Layout and engine settings

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Smallest canvas edge, in pixels
pub const MIN_CANVAS_EDGE: f64 = 3000.0;

/// Default double-click window, in milliseconds
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 300;

/// Slider bounds accepted by [`LayoutSettings::apply_sliders`]
pub const SLIDER_MIN: u32 = 1;
pub const SLIDER_MAX: u32 = 200;

/// Per-dataset layout tuning
///
/// The two slider values are what the user picks; the pixel spacings are
/// derived from them by [`LayoutSettings::apply_sliders`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettings {
    pub horizontal_spacing: f64,
    pub vertical_spacing: f64,
    pub elbow_length: f64,
    pub node_size: u32,
    pub horizontal_spacing_slider: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            horizontal_spacing: 300.0,
            vertical_spacing: 200.0,
            elbow_length: 80.0,
            node_size: 150,
            horizontal_spacing_slider: 100,
        }
    }
}

impl LayoutSettings {
    /// Set both sliders and re-derive the spacings from the spacing slider
    pub fn apply_sliders(&mut self, node_size: u32, spacing_slider: u32) {
        let slider = spacing_slider.clamp(SLIDER_MIN, SLIDER_MAX);
        self.node_size = node_size.clamp(SLIDER_MIN, SLIDER_MAX);
        self.horizontal_spacing_slider = slider;

        let s = f64::from(slider);
        self.horizontal_spacing = 150.0 + s * 2.5;
        self.vertical_spacing = 120.0 + s * 1.2;
        self.elbow_length = 60.0 + s * 0.8;
    }

    /// Edge length of a node box, in pixels
    pub fn node_box_size(&self) -> f64 {
        180.0 + f64::from(self.node_size) * 2.0
    }

    /// Canvas (width, height) for a tree of the given depth and breadth
    pub fn canvas_size(&self, depth: usize, breadth: usize) -> (f64, f64) {
        let width = (breadth as f64 * self.horizontal_spacing).max(MIN_CANVAS_EDGE);
        let height = (depth as f64 * self.vertical_spacing).max(MIN_CANVAS_EDGE);
        (width, height)
    }
}

/// Click classification settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Two clicks closer than this are a double click
    pub double_click_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Dataset store file (None = in-memory only)
    pub store_path: Option<PathBuf>,
    pub gesture: GestureConfig,
}

impl SessionConfig {
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    pub fn in_memory() -> Self {
        Self::default()
    }
}
