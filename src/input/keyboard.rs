//! Logical keyboard state: discrete actions and the held-key set.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Discrete engine actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.actions]
/// select_next = "KeyD"
/// toggle_inspect = "KeyQ"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselAction {
    /// Swing the ring one item forward.
    SelectNext,
    /// Swing the ring one item backward.
    SelectPrevious,
    /// Enter or leave inspect mode.
    ToggleInspect,
}

/// Held-key directions that drive the inspect-mode orbit, one fixed
/// angular step per frame while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitKey {
    /// Tilt the view upward (rotation about X, positive).
    TiltUp,
    /// Tilt the view downward.
    TiltDown,
    /// Spin the item leftward (rotation about Y, negative).
    SpinLeft,
    /// Spin the item rightward.
    SpinRight,
}

impl OrbitKey {
    /// The rotation axis (0 = x/tilt, 1 = y/spin) and step sign for this
    /// direction.
    #[must_use]
    pub fn axis_sign(self) -> (usize, f32) {
        match self {
            OrbitKey::TiltUp => (0, 1.0),
            OrbitKey::TiltDown => (0, -1.0),
            OrbitKey::SpinRight => (1, 1.0),
            OrbitKey::SpinLeft => (1, -1.0),
        }
    }
}

/// The set of orbit keys currently held down.
///
/// Key events mutate this set as they arrive; the engine samples it once
/// at the start of each frame's camera update, so simultaneous presses
/// compose and mid-frame changes never tear a frame.
#[derive(Debug, Default)]
pub struct KeySet {
    held: HashSet<OrbitKey>,
}

impl KeySet {
    /// Create an empty key set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press.
    pub fn press(&mut self, key: OrbitKey) {
        let _ = self.held.insert(key);
    }

    /// Record a key release.
    pub fn release(&mut self, key: OrbitKey) {
        let _ = self.held.remove(&key);
    }

    /// Drop every held key (e.g. on focus loss).
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Whether the given key is currently held.
    #[must_use]
    pub fn is_held(&self, key: OrbitKey) -> bool {
        self.held.contains(&key)
    }

    /// Iterate over the currently held keys.
    pub fn held(&self) -> impl Iterator<Item = OrbitKey> + '_ {
        self.held.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_release_roundtrip() {
        let mut keys = KeySet::new();
        keys.press(OrbitKey::TiltUp);
        keys.press(OrbitKey::SpinLeft);
        assert!(keys.is_held(OrbitKey::TiltUp));
        assert!(keys.is_held(OrbitKey::SpinLeft));

        keys.release(OrbitKey::TiltUp);
        assert!(!keys.is_held(OrbitKey::TiltUp));
        assert!(keys.is_held(OrbitKey::SpinLeft));
    }

    #[test]
    fn press_is_idempotent() {
        let mut keys = KeySet::new();
        keys.press(OrbitKey::SpinRight);
        keys.press(OrbitKey::SpinRight);
        assert_eq!(keys.held().count(), 1);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut keys = KeySet::new();
        keys.press(OrbitKey::TiltDown);
        keys.clear();
        assert_eq!(keys.held().count(), 0);
    }

    #[test]
    fn axis_signs_are_opposed() {
        assert_eq!(OrbitKey::TiltUp.axis_sign().0, OrbitKey::TiltDown.axis_sign().0);
        assert_eq!(
            OrbitKey::TiltUp.axis_sign().1,
            -OrbitKey::TiltDown.axis_sign().1
        );
        assert_eq!(
            OrbitKey::SpinLeft.axis_sign().1,
            -OrbitKey::SpinRight.axis_sign().1
        );
    }
}
