use serde::{Deserialize, Serialize};

/// Ring layout and transition tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CarouselOptions {
    /// Number of items placed on the ring.
    pub item_count: usize,
    /// Ring radius in world units.
    pub radius: f32,
    /// Extra uniform scale applied to the selected item (1.0 + boost).
    pub scale_boost: f32,
    /// Idle-spin speed of a settled selection, radians per frame.
    pub idle_spin_speed: f32,
    /// Progress added per frame during an index transition.
    pub transition_speed: f32,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            item_count: 10,
            radius: 10.0,
            scale_boost: 0.4,
            idle_spin_speed: 0.005,
            transition_speed: 0.0065,
        }
    }
}
