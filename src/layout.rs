use crate::constants::{DOT_BOTTOM_MARGIN, DOT_RADIUS, DOT_SPACING};

/// Centers of `count` indicator dots, in a centered row near the bottom edge.
pub fn dot_centers(count: usize, width: f32, height: f32) -> Vec<(f32, f32)> {
    if count == 0 {
        return Vec::new();
    }

    let row_width = DOT_SPACING * (count - 1) as f32;
    let first_x = width * 0.5 - row_width * 0.5;
    let y = height - DOT_BOTTOM_MARGIN;

    (0..count)
        .map(|i| (first_x + DOT_SPACING * i as f32, y))
        .collect()
}

/// Index of the dot under `point`, if any.
pub fn hit_test(point: (f32, f32), centers: &[(f32, f32)]) -> Option<usize> {
    centers.iter().position(|&(cx, cy)| {
        let dx = point.0 - cx;
        let dy = point.1 - cy;
        dx * dx + dy * dy <= DOT_RADIUS * DOT_RADIUS
    })
}
