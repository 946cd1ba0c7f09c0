//! Input layer: logical key actions and the held-key snapshot the engine
//! samples once per frame.

/// Key actions, orbit directions, and the held-key set.
pub mod keyboard;

pub use keyboard::{CarouselAction, KeySet, OrbitKey};
