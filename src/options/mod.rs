//! Centralized runtime configuration with TOML preset support.
//!
//! All tweakable settings (ring layout, camera, CRT knobs, keybindings)
//! are consolidated here. Options serialize to/from TOML so a preset file
//! can override any subset of fields.

mod camera;
mod carousel;
mod keybindings;
mod post_process;

use std::path::Path;

pub use camera::CameraOptions;
pub use carousel::CarouselOptions;
pub use keybindings::KeybindingOptions;
pub use post_process::PostProcessOptions;
use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[post_process]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Ring layout and transition tuning.
    pub carousel: CarouselOptions,
    /// Camera projection and view-mode parameters.
    pub camera: CameraOptions,
    /// CRT post-process knobs.
    pub post_process: PostProcessOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults; the
    /// keybinding reverse maps are rebuilt after parsing.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(VitrineError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_maps();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VitrineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VitrineError::Io)?;
        }
        std::fs::write(path, content).map_err(VitrineError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keyboard::{CarouselAction, OrbitKey};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let mut parsed: Options = toml::from_str(&toml_str).unwrap();
        parsed.keybindings.rebuild_reverse_maps();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[carousel]
item_count = 6

[post_process]
enabled = false
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.carousel.item_count, 6);
        assert!(!opts.post_process.enabled);
        // Everything else should be default
        assert_eq!(opts.carousel.radius, 10.0);
        assert_eq!(opts.camera.tilt, 12.5);
        assert_eq!(opts.post_process.scanline_intensity, 0.6);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.action("KeyD"),
            Some(CarouselAction::SelectNext)
        );
        assert_eq!(
            opts.keybindings.action("KeyQ"),
            Some(CarouselAction::ToggleInspect)
        );
        assert_eq!(opts.keybindings.action("KeyZ"), None);
        assert_eq!(opts.keybindings.orbit_key("KeyW"), Some(OrbitKey::TiltUp));
        assert_eq!(opts.keybindings.orbit_key("KeyD"), Some(OrbitKey::SpinRight));
    }

    #[test]
    fn reference_transition_constants() {
        let opts = CarouselOptions::default();
        assert_eq!(opts.item_count, 10);
        assert_eq!(opts.radius, 10.0);
        assert_eq!(opts.transition_speed, 0.0065);
        assert_eq!(opts.scale_boost, 0.4);
        assert_eq!(opts.idle_spin_speed, 0.005);
    }
}
