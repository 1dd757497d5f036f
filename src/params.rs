//! The CRT parameter set.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Resolved, per-invocation CRT controls.
///
/// Field names accept the camelCase spelling as well, so shader-style
/// uniform names (`scanlineIntensity`, ...) load unchanged from config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrtParams {
    /// Scanline darkening depth.
    #[serde(alias = "scanlineIntensity")]
    pub scanline_intensity: f32,
    /// Scanline repeat frequency over the full height.
    #[serde(alias = "scanlineCount")]
    pub scanline_count: f32,
    /// Flicker phase driver, in seconds.
    pub time: f32,
    /// Vertical scroll phase of the scanline pattern.
    #[serde(alias = "yOffset")]
    pub y_offset: f32,
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    #[serde(alias = "bloomIntensity")]
    pub bloom_intensity: f32,
    /// Luminance cutoff for bloom.
    #[serde(alias = "bloomThreshold")]
    pub bloom_threshold: f32,
    /// Chromatic fringe magnitude.
    #[serde(alias = "rgbShift")]
    pub rgb_shift: f32,
    /// Positional scanline-depth variance.
    #[serde(alias = "adaptiveIntensity")]
    pub adaptive_intensity: f32,
    #[serde(alias = "vignetteStrength")]
    pub vignette_strength: f32,
    /// Barrel-distortion amount.
    pub curvature: f32,
    #[serde(alias = "flickerStrength")]
    pub flicker_strength: f32,
}

impl Default for CrtParams {
    fn default() -> Self {
        Self {
            scanline_intensity: 0.15,
            scanline_count: 400.0,
            time: 0.0,
            y_offset: 0.0,
            brightness: 1.1,
            contrast: 1.05,
            saturation: 1.1,
            bloom_intensity: 0.2,
            bloom_threshold: 0.5,
            rgb_shift: 0.0,
            adaptive_intensity: 0.5,
            vignette_strength: 0.3,
            curvature: 0.15,
            flicker_strength: 0.01,
        }
    }
}

impl CrtParams {
    /// Parameters under which the filter passes colours through unchanged.
    pub fn identity() -> Self {
        Self {
            scanline_intensity: 0.0,
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            bloom_intensity: 0.0,
            rgb_shift: 0.0,
            vignette_strength: 0.0,
            curvature: 0.0,
            flicker_strength: 0.0,
            ..Self::default()
        }
    }

    pub fn with_time(mut self, time: f32) -> Self {
        self.time = time;
        self
    }

    /// Clamps every non-negative control to `>= 0` and replaces non-finite
    /// values with the default for that field.
    ///
    /// The filter itself never clamps; hosts call this once per pass.
    pub fn sanitized(&self) -> Self {
        let d = Self::default();
        Self {
            scanline_intensity: sanitize("scanline_intensity", self.scanline_intensity, d.scanline_intensity, true),
            scanline_count: sanitize("scanline_count", self.scanline_count, d.scanline_count, true),
            time: sanitize("time", self.time, d.time, false),
            y_offset: sanitize("y_offset", self.y_offset, d.y_offset, false),
            brightness: sanitize("brightness", self.brightness, d.brightness, false),
            contrast: sanitize("contrast", self.contrast, d.contrast, false),
            saturation: sanitize("saturation", self.saturation, d.saturation, true),
            bloom_intensity: sanitize("bloom_intensity", self.bloom_intensity, d.bloom_intensity, true),
            bloom_threshold: sanitize("bloom_threshold", self.bloom_threshold, d.bloom_threshold, false),
            rgb_shift: sanitize("rgb_shift", self.rgb_shift, d.rgb_shift, true),
            adaptive_intensity: sanitize("adaptive_intensity", self.adaptive_intensity, d.adaptive_intensity, true),
            vignette_strength: sanitize("vignette_strength", self.vignette_strength, d.vignette_strength, true),
            curvature: sanitize("curvature", self.curvature, d.curvature, true),
            flicker_strength: sanitize("flicker_strength", self.flicker_strength, d.flicker_strength, true),
        }
    }
}

fn sanitize(name: &str, value: f32, default: f32, non_negative: bool) -> f32 {
    if !value.is_finite() {
        warn!(parameter = name, value, default, "non-finite parameter replaced with default");
        return default;
    }
    if non_negative && value < 0.0 {
        warn!(parameter = name, value, "negative parameter clamped to 0");
        return 0.0;
    }
    value
}
