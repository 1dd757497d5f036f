use nalgebra::Vector2;

/// `1 − d² · strength` with `d` the Chebyshev distance from centre in
/// [-1,1] space, so the falloff is square rather than round.
#[inline(always)]
pub fn vignette_approx(uv: Vector2<f32>, strength: f32) -> f32 {
    let coord = uv.map(|c| c * 2.0 - 1.0);
    let dist = coord.x.abs().max(coord.y.abs());
    1.0 - dist * dist * strength
}

/// Vignette multiplier; 1 when disabled.
pub fn vignette(uv: Vector2<f32>, strength: f32) -> f32 {
    if strength > 0.0 {
        vignette_approx(uv, strength)
    } else {
        1.0
    }
}
