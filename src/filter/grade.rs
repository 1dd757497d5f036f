use nalgebra::{Vector2, Vector3, Vector4};

use crate::filter::luminance;
use crate::params::CrtParams;
use crate::texture2d::Sampler;

/// Shifts below this are skipped; the fringe they add is negligible.
pub const RGB_SHIFT_DEAD_ZONE: f32 = 0.001;

/// Layers a chromatic fringe on top of the true channels: red picked up
/// from the right, blue from the left. Green is untouched.
pub fn apply_rgb_shift<S: Sampler + ?Sized>(
    image: &S,
    uv: Vector2<f32>,
    mut pixel: Vector4<f32>,
    rgb_shift: f32,
) -> Vector4<f32> {
    if rgb_shift <= RGB_SHIFT_DEAD_ZONE {
        return pixel;
    }

    let shift = rgb_shift * 0.005;
    pixel.x += image.sample(Vector2::new(uv.x + shift, uv.y)).x * 0.08;
    pixel.z += image.sample(Vector2::new(uv.x - shift, uv.y)).z * 0.08;
    pixel
}

/// Brightness, then contrast around mid-grey, then saturation. Always in
/// that order; `saturation > 1` extrapolates away from grey.
pub fn grade(rgb: Vector3<f32>, params: &CrtParams) -> Vector3<f32> {
    let rgb = rgb * params.brightness;
    let rgb = rgb.map(|c| (c - 0.5) * params.contrast + 0.5);

    let luma = luminance(&rgb);
    rgb.map(|c| luma * (1.0 - params.saturation) + c * params.saturation)
}
