use std::f32::consts::PI;

use crate::params::CrtParams;

/// Adaptive factors below this are treated as off.
pub const ADAPTIVE_DEAD_ZONE: f32 = 0.001;
/// Frequency of the slow positional wave that varies scanline depth.
pub const ADAPTIVE_FREQUENCY: f32 = 30.0;
/// Flicker angular frequency, radians per second.
pub const FLICKER_FREQUENCY: f32 = 110.0;

/// Raw scanline ramp `|sin((v + y_offset) · count · π)|`, 0 between lines
/// and 1 at their darkest point.
#[inline(always)]
pub fn scanline_pattern(v: f32, y_offset: f32, scanline_count: f32) -> f32 {
    let scanline_y = (v + y_offset) * scanline_count;
    (scanline_y * PI).sin().abs()
}

/// Depth modulation from position only, despite the name; pixel
/// brightness is not consulted.
#[inline(always)]
pub fn adaptive_factor(v: f32, adaptive_intensity: f32) -> f32 {
    if adaptive_intensity <= ADAPTIVE_DEAD_ZONE {
        return 1.0;
    }

    let y_pattern = (v * ADAPTIVE_FREQUENCY).sin() * 0.5 + 0.5;
    1.0 - y_pattern * adaptive_intensity * 0.2
}

/// Brightness multiplier for the row at `v`; 1 when scanlines are off.
pub fn scanline_multiplier(v: f32, params: &CrtParams) -> f32 {
    if params.scanline_intensity <= 0.0 {
        return 1.0;
    }

    let pattern = scanline_pattern(v, params.y_offset, params.scanline_count);
    1.0 - pattern * params.scanline_intensity * adaptive_factor(v, params.adaptive_intensity)
}

/// Frame-global flicker, identical for every pixel at a given `time`.
#[inline(always)]
pub fn flicker(time: f32, flicker_strength: f32) -> f32 {
    1.0 + (time * FLICKER_FREQUENCY).sin() * flicker_strength
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_scanlines_are_neutral() {
        let params = CrtParams { scanline_intensity: 0.0, ..CrtParams::default() };
        for v in [0.0, 0.13, 0.5, 0.77, 1.0] {
            assert_eq!(scanline_multiplier(v, &params), 1.0);
        }
    }

    #[test]
    fn y_offset_shifts_the_pattern() {
        let a = scanline_pattern(0.3, 0.1, 10.0);
        let b = scanline_pattern(0.4, 0.0, 10.0);
        assert!((a - b).abs() < 1e-5);
    }

    #[test]
    fn zero_count_is_flat() {
        assert_eq!(scanline_pattern(0.42, 0.0, 0.0), 0.0);
    }

    #[test]
    fn adaptive_factor_stays_within_bounds() {
        for i in 0..=100 {
            let v = i as f32 / 100.0;
            let f = adaptive_factor(v, 0.5);
            assert!((0.9 - 1e-6..=1.0 + 1e-6).contains(&f), "v={v} factor={f}");
        }
        assert_eq!(adaptive_factor(0.3, ADAPTIVE_DEAD_ZONE), 1.0);
    }

    #[test]
    fn flicker_without_strength_is_one() {
        assert_eq!(flicker(123.4, 0.0), 1.0);
        assert_eq!(flicker(0.0, 0.5), 1.0);
    }

    #[test]
    fn flicker_amplitude_matches_strength() {
        let peak = flicker(PI / (2.0 * FLICKER_FREQUENCY), 0.25);
        assert!((peak - 1.25).abs() < 1e-5, "got {peak}");
    }
}
