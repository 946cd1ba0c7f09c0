use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::keyboard::{CarouselAction, OrbitKey};

/// Configurable keyboard bindings.
///
/// Discrete actions fire once per key press; orbit keys are held-state
/// directions sampled every frame while inspecting. Key strings use the
/// `winit::keyboard::KeyCode` debug format (`"KeyA"`, `"KeyQ"`, ...).
/// A and D intentionally appear in both maps: outside inspect mode they
/// select, inside it they spin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Maps discrete action → key string.
    pub actions: HashMap<CarouselAction, String>,
    /// Maps inspect-orbit direction → key string.
    pub orbit: HashMap<OrbitKey, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, CarouselAction>,
    /// Reverse lookup cache (key string → orbit direction).
    #[serde(skip)]
    key_to_orbit: HashMap<String, OrbitKey>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let actions = HashMap::from([
            (CarouselAction::SelectPrevious, "KeyA".into()),
            (CarouselAction::SelectNext, "KeyD".into()),
            (CarouselAction::ToggleInspect, "KeyQ".into()),
        ]);
        let orbit = HashMap::from([
            (OrbitKey::TiltUp, "KeyW".into()),
            (OrbitKey::TiltDown, "KeyS".into()),
            (OrbitKey::SpinLeft, "KeyA".into()),
            (OrbitKey::SpinRight, "KeyD".into()),
        ]);

        let mut opts = Self {
            actions,
            orbit,
            key_to_action: HashMap::new(),
            key_to_orbit: HashMap::new(),
        };
        opts.rebuild_reverse_maps();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild both reverse lookup maps from the forward maps.
    pub fn rebuild_reverse_maps(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.actions {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
        self.key_to_orbit.clear();
        for (orbit, key) in &self.orbit {
            let _ = self.key_to_orbit.insert(key.clone(), *orbit);
        }
    }

    /// Look up the discrete action for a key string.
    #[must_use]
    pub fn action(&self, key: &str) -> Option<CarouselAction> {
        self.key_to_action.get(key).copied()
    }

    /// Look up the inspect-orbit direction for a key string.
    #[must_use]
    pub fn orbit_key(&self, key: &str) -> Option<OrbitKey> {
        self.key_to_orbit.get(key).copied()
    }
}
