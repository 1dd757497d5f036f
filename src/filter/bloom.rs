use nalgebra::{Vector2, Vector3, Vector4};

use crate::filter::{luminance, with_rgb};
use crate::params::CrtParams;
use crate::texture2d::Sampler;

/// Tap offset of the bloom kernel, in UV.
pub const BLOOM_RADIUS: f32 = 0.005;

/// Cheap bloom: centre tap at 0.4 plus right, left and up taps at 0.2.
pub fn sample_bloom<S: Sampler + ?Sized>(image: &S, uv: Vector2<f32>, radius: f32) -> Vector4<f32> {
    let mut bloom = image.sample(uv) * 0.4;
    bloom += image.sample(uv + Vector2::new(radius, 0.0)) * 0.2;
    bloom += image.sample(uv + Vector2::new(-radius, 0.0)) * 0.2;
    bloom += image.sample(uv + Vector2::new(0.0, radius)) * 0.2;
    bloom
}

/// Adds the bloom contribution to `pixel`. Dark pixels (luminance at or
/// below half the threshold) skip the extra taps entirely.
pub fn apply_bloom<S: Sampler + ?Sized>(
    image: &S,
    uv: Vector2<f32>,
    pixel: Vector4<f32>,
    params: &CrtParams,
) -> Vector4<f32> {
    if params.bloom_intensity <= 0.0 {
        return pixel;
    }

    let rgb: Vector3<f32> = pixel.xyz();
    if luminance(&rgb) <= params.bloom_threshold * 0.5 {
        return pixel;
    }

    let bloom = sample_bloom(image, uv, BLOOM_RADIUS).xyz() * params.brightness;
    let bloom_factor = params.bloom_intensity * ((luminance(&bloom) - params.bloom_threshold) * 1.5).max(0.0);
    with_rgb(rgb + bloom * bloom_factor, pixel.w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture2d::{SampleFilter, Texture2D};

    const EPSILON: f32 = 1e-6;

    fn grey(level: f32) -> Texture2D {
        Texture2D::uniform(8, 8, Vector4::new(level, level, level, 1.0)).with_filter(SampleFilter::Nearest)
    }

    #[test]
    fn kernel_weights_sum_to_one() {
        let bloom = sample_bloom(&grey(1.0), Vector2::new(0.5, 0.5), BLOOM_RADIUS);
        for c in 0..4 {
            assert!((bloom[c] - 1.0).abs() < EPSILON, "channel {c}: {}", bloom[c]);
        }
    }

    #[test]
    fn dark_pixels_get_no_bloom() {
        let image = grey(0.2);
        let pixel = image.sample(Vector2::new(0.5, 0.5));
        let out = apply_bloom(&image, Vector2::new(0.5, 0.5), pixel, &CrtParams::default());
        assert_eq!(out, pixel);
    }

    #[test]
    fn bright_pixels_glow() {
        let image = grey(0.9);
        let pixel = image.sample(Vector2::new(0.5, 0.5));
        let out = apply_bloom(&image, Vector2::new(0.5, 0.5), pixel, &CrtParams::default());
        // 0.9 * 1.1 = 0.99 luminance, factor 0.2 * 0.49 * 1.5
        let expected = 0.9 + 0.99 * 0.147;
        assert!((out.x - expected).abs() < 1e-5, "got {}", out.x);
        assert_eq!(out.w, 1.0);
    }

    #[test]
    fn gate_passed_but_below_threshold_adds_nothing() {
        // luminance 0.3 clears the 0.25 gate but the boosted sample stays under 0.5
        let image = grey(0.3);
        let params = CrtParams { brightness: 1.0, ..CrtParams::default() };
        let pixel = image.sample(Vector2::new(0.5, 0.5));
        let out = apply_bloom(&image, Vector2::new(0.5, 0.5), pixel, &params);
        assert!((out - pixel).norm() < EPSILON);
    }
}
