use serde::{Deserialize, Serialize};

/// CRT post-process knobs, forwarded verbatim to the screen pass uniform.
///
/// `enabled` is honored once at engine construction: when off, no
/// offscreen target is created and the scene renders straight to the
/// surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PostProcessOptions {
    /// Whether the CRT pass exists at all.
    pub enabled: bool,
    /// Barrel distortion amount (screen bulge).
    pub barrel_distortion: f32,
    /// Additional curvature adjustment on top of the barrel term.
    pub curvature: f32,
    /// RGB channel separation distance.
    pub chromatic_aberration: f32,
    /// Per-pixel static noise intensity.
    pub static_noise: f32,
    /// Horizontal line-tearing displacement.
    pub horizontal_tearing: f32,
    /// Phosphor glow spread.
    pub glow: f32,
    /// Vertical oscillation of the whole image.
    pub vertical_jitter: f32,
    /// Whether the moving retrace band is drawn.
    pub retrace_lines: bool,
    /// Scanline darkening intensity.
    pub scanline_intensity: f32,
    /// Whether the RGB dot-mask pattern is applied.
    pub dot_mask: bool,
    /// Output brightness multiplier.
    pub brightness: f32,
    /// Output contrast multiplier.
    pub contrast: f32,
    /// Color desaturation toward luma (0 = full color).
    pub desaturation: f32,
    /// Occasional whole-frame flicker amount.
    pub flicker: f32,
    /// VHS-style signal-loss band probability/strength.
    pub signal_loss: f32,
}

impl Default for PostProcessOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            barrel_distortion: 0.002,
            curvature: 0.002,
            chromatic_aberration: 0.0005,
            static_noise: 0.03,
            horizontal_tearing: 0.000_12,
            glow: 0.001,
            vertical_jitter: 0.001,
            retrace_lines: true,
            scanline_intensity: 0.6,
            dot_mask: false,
            brightness: 1.0,
            contrast: 1.0,
            desaturation: 0.1,
            flicker: 0.01,
            signal_loss: 0.05,
        }
    }
}
