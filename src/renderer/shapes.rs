//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;

/// Evaluate a cubic Bezier at `t`
#[inline]
fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

/// Sample the outline of a heart centred on `center`
///
/// Two mirrored cubic lobes run from the bottom point (`+0.3 * size`, y down)
/// up to the notch (`-0.3 * size`) and back. Returns `2 * segments` points,
/// starting at the bottom point and going round the left lobe first.
pub fn heart_outline(center: Vec2, size: f32, segments: u32) -> Vec<Vec2> {
    let segments = segments.max(2);
    let bottom = Vec2::new(0.0, 0.3) * size;
    let notch = Vec2::new(0.0, -0.3) * size;
    let left = [
        bottom,
        Vec2::new(-0.5, -0.3) * size,
        Vec2::new(-0.5, -0.6) * size,
        notch,
    ];
    let right = [
        notch,
        Vec2::new(0.5, -0.6) * size,
        Vec2::new(0.5, -0.3) * size,
        bottom,
    ];

    let mut points = Vec::with_capacity((segments * 2) as usize);
    for [p0, p1, p2, p3] in [left, right] {
        for i in 0..segments {
            let t = i as f32 / segments as f32;
            points.push(center + cubic_bezier(p0, p1, p2, p3, t));
        }
    }
    points
}

/// Generate vertices for a filled heart (triangle fan from the centre)
pub fn heart(center: Vec2, size: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let outline = heart_outline(center, size, segments);
    let mut vertices = Vec::with_capacity(outline.len() * 3);

    for (i, a) in outline.iter().enumerate() {
        let b = outline[(i + 1) % outline.len()];
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

/// Corners of a square sprite rotated about its centre
///
/// Order: top-left, top-right, bottom-right, bottom-left (before rotation).
pub fn sprite_quad(center: Vec2, size: f32, rotation: f32) -> [Vec2; 4] {
    let half = size / 2.0;
    let rot = Vec2::from_angle(rotation);
    [
        Vec2::new(-half, -half),
        Vec2::new(half, -half),
        Vec2::new(half, half),
        Vec2::new(-half, half),
    ]
    .map(|corner| center + rot.rotate(corner))
}

/// Generate vertices for a rotated, flat-colored sprite (two triangles)
pub fn sprite(center: Vec2, size: f32, rotation: f32, color: [f32; 4]) -> Vec<Vertex> {
    let [tl, tr, br, bl] = sprite_quad(center, size, rotation);
    [tl, bl, tr, tr, bl, br]
        .iter()
        .map(|p| Vertex::new(p.x, p.y, color))
        .collect()
}
