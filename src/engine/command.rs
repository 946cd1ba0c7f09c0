//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation (key press, programmatic call, or a held
//! orbit key sampled at frame start) is represented as a
//! `CarouselCommand` and passed to
//! [`CarouselEngine::execute`](super::CarouselEngine::execute). Commands
//! are gated: anything that would start or overlap a ring transition is
//! accepted only while the carousel is settled, and a command arriving
//! outside its window is dropped, never queued.

use crate::input::keyboard::CarouselAction;

/// A discrete or parameterized operation the engine can perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselCommand {
    /// Swing the ring one item in `direction` (+1 forward, -1 backward).
    /// Accepted only while settled and not inspecting.
    Select {
        /// Ring step, +1 or -1.
        direction: i32,
    },
    /// Enter inspect mode. Accepted only while settled and in orbit mode.
    EnterInspect,
    /// Leave inspect mode and reset the accumulated inspect rotation.
    ExitInspect,
    /// Enter or leave inspect mode depending on the current mode.
    ToggleInspect,
    /// One inspect-orbit rotation step: `axis` 0 = tilt (x), 1 = spin
    /// (y); `sign` picks the direction. Accepted only while inspecting.
    OrbitAdjust {
        /// Rotation axis (0 = x, 1 = y).
        axis: usize,
        /// Step direction, +1.0 or -1.0.
        sign: f32,
    },
}

impl From<CarouselAction> for CarouselCommand {
    fn from(action: CarouselAction) -> Self {
        match action {
            CarouselAction::SelectNext => Self::Select { direction: 1 },
            CarouselAction::SelectPrevious => Self::Select { direction: -1 },
            CarouselAction::ToggleInspect => Self::ToggleInspect,
        }
    }
}
