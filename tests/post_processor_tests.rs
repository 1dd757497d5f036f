//! Full-frame passes through the public API.

use crt_filter::{crt_pixel, CrtConfig, CrtParams, PostProcessor, SampleFilter, Sampler, Texture2D};
use nalgebra::{Vector2, Vector4};

/// Procedural source: colour depends only on UV.
struct Gradient;

impl Sampler for Gradient {
    fn sample(&self, uv: Vector2<f32>) -> Vector4<f32> {
        let uv = uv.map(|c| c.clamp(0.0, 1.0));
        Vector4::new(uv.x, uv.y, 1.0 - uv.x, 1.0)
    }
}

#[test]
fn full_pass_matches_per_pixel_function() {
    let (width, height) = (37, 23);
    let params = CrtParams::default().with_time(0.75);
    let mut post_processor = PostProcessor::new(width, height, params);
    post_processor.process(&Gradient);

    for y in 0..height {
        for x in 0..width {
            let uv = Vector2::new(
                (x as f32 + 0.5) / width as f32,
                1.0 - (y as f32 + 0.5) / height as f32,
            );
            let expected = crt_pixel(&Gradient, uv, &params, 0.75);
            assert_eq!(post_processor.pixels()[y * width + x], expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn default_look_clips_corners_and_keeps_centre() {
    let source = Texture2D::uniform(64, 48, Vector4::new(0.6, 0.6, 0.6, 1.0)).with_filter(SampleFilter::Nearest);
    let mut post_processor = PostProcessor::new(64, 48, CrtParams::default());
    post_processor.process(&source);

    let pixels = post_processor.pixels();
    assert_eq!(pixels[0], Vector4::zeros());
    assert_eq!(pixels[64 * 48 - 1], Vector4::zeros());

    let centre = pixels[24 * 64 + 32];
    assert_eq!(centre.w, 1.0);
    assert!(centre.x > 0.5, "centre went dark: {centre:?}");
}

#[test]
fn repeated_passes_are_identical() {
    let source = Texture2D::from_fn(20, 20, |x, y| Vector4::new(x as f32 / 19.0, 0.3, y as f32 / 19.0, 1.0));
    let params = CrtParams { rgb_shift: 2.0, ..CrtParams::default() };

    let mut a = PostProcessor::new(20, 20, params);
    let mut b = PostProcessor::new(20, 20, params);
    a.process(&source);
    b.process(&source);
    assert_eq!(a.pixels(), b.pixels());
    assert_eq!(a.to_argb_buffer(), b.to_argb_buffer());
}

#[test]
fn time_changes_only_brightness_scale() {
    let source = Texture2D::uniform(8, 8, Vector4::new(0.5, 0.5, 0.5, 1.0)).with_filter(SampleFilter::Nearest);
    let params = CrtParams { flicker_strength: 0.5, ..CrtParams::identity() };

    let mut post_processor = PostProcessor::new(8, 8, params);
    post_processor.process(&source);
    let still = post_processor.pixels()[0];

    post_processor.set_time(0.01);
    post_processor.process(&source);
    let flickered = post_processor.pixels()[0];

    let expected = 0.5 * (1.0 + (0.01_f32 * 110.0).sin() * 0.5);
    assert!((still.x - 0.5).abs() < 1e-5);
    assert!((flickered.x - expected).abs() < 1e-5, "got {}", flickered.x);
}

#[test]
fn negative_config_values_are_sanitised() {
    let config = CrtConfig::from_toml_str("[crt]\ncurvature = -1.0\nvignetteStrength = -2.0\n").unwrap();
    let post_processor = PostProcessor::new(1, 1, config.crt);
    assert_eq!(post_processor.params().curvature, 0.0);
    assert_eq!(post_processor.params().vignette_strength, 0.0);
}
