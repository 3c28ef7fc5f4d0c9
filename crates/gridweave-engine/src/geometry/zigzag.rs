use crate::coords::Vec2;

/// Radius ratio of the `i`-th zigzag vertex: even indices sit on the outer
/// circle, odd indices are pulled in by `depth_percent`.
#[inline]
pub fn zigzag_radius_ratio(i: u32, depth_percent: f32) -> f32 {
    if i % 2 == 0 { 1.0 } else { 1.0 - depth_percent / 100.0 }
}

/// Star-like outline inscribed in a `size × size` box.
///
/// Sweeps `i` over `0..=vertices`, so the result has `vertices + 1` points and
/// the sweep ends on the starting angle. Alternation is by index parity: with
/// an even vertex count the last point coincides with the first, with an odd
/// count it lands on the indented radius at 0°.
pub fn zigzag_vertices(size: f32, vertices: u32, depth_percent: f32) -> Vec<Vec2> {
    let center = Vec2::new(size / 2.0, size / 2.0);
    let n = vertices.max(1);

    (0..=n)
        .map(|i| {
            // map(i, 0, n, 0°, 360°), folded so 360° evaluates exactly like 0°.
            let degrees = (360.0 * i as f32 / n as f32) % 360.0;
            let radius = zigzag_radius_ratio(i, depth_percent) / 2.0 * size;
            Vec2::polar_deg(center, radius, degrees)
        })
        .collect()
}
