//! The per-pixel CRT filter.
//!
//! `crt_pixel` is a pure function of the source image, the output UV, the
//! parameters and the frame time. Stage order is fixed: curvature, base
//! sample, bloom, RGB shift, grade, scanlines, flicker, vignette.

use nalgebra::{Vector2, Vector3, Vector4};

use crate::params::CrtParams;
use crate::texture2d::Sampler;

pub mod bloom;
pub mod curvature;
pub mod grade;
pub mod scanline;
pub mod vignette;

pub use bloom::{apply_bloom, sample_bloom, BLOOM_RADIUS};
pub use curvature::{curve_remap_uv, is_off_screen};
pub use grade::{apply_rgb_shift, grade};
pub use scanline::{flicker, scanline_multiplier};
pub use vignette::{vignette, vignette_approx};

/// Rec. 601 luma weights.
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

#[inline(always)]
pub fn luminance(rgb: &Vector3<f32>) -> f32 {
    rgb.x * LUMA_WEIGHTS[0] + rgb.y * LUMA_WEIGHTS[1] + rgb.z * LUMA_WEIGHTS[2]
}

#[inline(always)]
pub(crate) fn with_rgb(rgb: Vector3<f32>, alpha: f32) -> Vector4<f32> {
    Vector4::new(rgb.x, rgb.y, rgb.z, alpha)
}

/// Filters one output pixel.
///
/// Returns transparent black when curvature pushes `uv` off the tube.
/// Intermediate values are not clamped, so bright inputs may exceed 1.
pub fn crt_pixel<S: Sampler + ?Sized>(
    image: &S,
    uv: Vector2<f32>,
    params: &CrtParams,
    time: f32,
) -> Vector4<f32> {
    let mut uv = uv;
    if params.curvature > 0.0 {
        uv = curve_remap_uv(uv, params.curvature);
        if is_off_screen(uv) {
            return Vector4::zeros();
        }
    }

    let pixel = image.sample(uv);
    let pixel = apply_bloom(image, uv, pixel, params);
    let pixel = apply_rgb_shift(image, uv, pixel, params.rgb_shift);
    let rgb = grade(pixel.xyz(), params);

    let scanline = scanline_multiplier(uv.y, params);
    let flicker = flicker(time, params.flicker_strength);
    let vignette = vignette(uv, params.vignette_strength);

    with_rgb(rgb * (scanline * flicker * vignette), pixel.w)
}
