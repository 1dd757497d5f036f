use nalgebra::Vector2;

/// Barrel-distorts `uv` without trig or `pow`: recentre to [-1,1], scale by
/// `1 + r² · k/4`, map back.
pub fn curve_remap_uv(uv: Vector2<f32>, curvature: f32) -> Vector2<f32> {
    let coords = uv.map(|c| c * 2.0 - 1.0);
    let curve_amount = curvature * 0.25;
    let dist = coords.dot(&coords);
    let coords = coords * (1.0 + dist * curve_amount);
    coords.map(|c| c * 0.5 + 0.5)
}

/// True when a remapped UV lies outside the visible tube area.
#[inline(always)]
pub fn is_off_screen(uv: Vector2<f32>) -> bool {
    uv.x < 0.0 || uv.x > 1.0 || uv.y < 0.0 || uv.y > 1.0
}
