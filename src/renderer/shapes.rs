//! Shape generation for table primitives and the score readout

use glam::{Mat4, Vec2, Vec3};

use super::vertex::Vertex;

/// Seven-segment masks for 0-9, bits `a b c d e f g` from 0x40 down to 0x01
pub const SEGMENTS: [u8; 10] = [0x7E, 0x30, 0x6D, 0x79, 0x33, 0x5B, 0x5F, 0x70, 0x7F, 0x7B];

/// Segment rects in digit-local units: (bit, x, y, w, h)
const SEGMENT_RECTS: [(u8, f32, f32, f32, f32); 7] = [
    (0x40, 0.05, 1.15, 0.9, 0.12),  // a top
    (0x20, 0.83, 0.62, 0.12, 0.55), // b top-right
    (0x10, 0.83, 0.07, 0.12, 0.55), // c bottom-right
    (0x08, 0.05, 0.0, 0.9, 0.12),   // d bottom
    (0x04, 0.0, 0.07, 0.12, 0.55),  // e bottom-left
    (0x02, 0.0, 0.62, 0.12, 0.55),  // f top-left
    (0x01, 0.05, 0.575, 0.9, 0.12), // g middle
];

/// Width of one digit cell in the score readout
pub const DIGIT_ADVANCE: f32 = 1.2;
/// Space reserved for the dash between the two scores
pub const SCORE_GAP: f32 = 0.5;
/// Baseline of the score readout
pub const SCORE_Y: f32 = 5.5;

/// An axis-aligned rectangle as (min, max)
pub type Rect = (Vec2, Vec2);

/// Lit segments of `digit` with its lower-left corner at `origin`.
/// Digits outside 0-9 draw nothing.
pub fn digit_rects(digit: u32, origin: Vec2, size: f32) -> Vec<Rect> {
    let Some(&mask) = SEGMENTS.get(digit as usize) else {
        return Vec::new();
    };
    SEGMENT_RECTS
        .iter()
        .filter(|(bit, ..)| mask & bit != 0)
        .map(|&(_, x, y, w, h)| {
            let min = origin + Vec2::new(x, y) * size;
            let max = origin + Vec2::new(x + w, y + h) * size;
            (min, max)
        })
        .collect()
}

/// "LL-RR" centered above the table. Scores display modulo 100.
pub fn score_rects(left: u32, right: u32) -> Vec<Rect> {
    let total_w = DIGIT_ADVANCE * 4.0 + SCORE_GAP;
    let x = -total_w * 0.5;
    let y = SCORE_Y;
    let (left, right) = (left % 100, right % 100);

    let mut rects = Vec::with_capacity(29);
    rects.extend(digit_rects(left / 10, Vec2::new(x, y), 1.0));
    rects.extend(digit_rects(left % 10, Vec2::new(x + DIGIT_ADVANCE, y), 1.0));
    rects.push((
        Vec2::new(x + DIGIT_ADVANCE * 2.0 + SCORE_GAP * 0.2, y + 0.4),
        Vec2::new(x + DIGIT_ADVANCE * 2.0 + SCORE_GAP * 0.8, y + 0.6),
    ));
    rects.extend(digit_rects(
        right / 10,
        Vec2::new(x + DIGIT_ADVANCE * 2.0 + SCORE_GAP, y),
        1.0,
    ));
    rects.extend(digit_rects(
        right % 10,
        Vec2::new(x + DIGIT_ADVANCE * 3.0 + SCORE_GAP, y),
        1.0,
    ));
    rects
}

/// Model matrix for a unit cube scaled to `size` and centered at `center`
pub fn box_model(center: Vec3, size: Vec3) -> Mat4 {
    Mat4::from_translation(center) * Mat4::from_scale(size)
}

/// Two triangles covering a rect at height `z`
pub fn rect_vertices(min: Vec2, max: Vec2, z: f32, color: [f32; 4]) -> [Vertex; 6] {
    let bl = Vertex::new(min.x, min.y, z, color);
    let br = Vertex::new(max.x, min.y, z, color);
    let tr = Vertex::new(max.x, max.y, z, color);
    let tl = Vertex::new(min.x, max.y, z, color);
    [bl, br, tr, bl, tr, tl]
}

/// Top face of a unit cube transformed by `model`, as two triangles
pub fn cube_top_vertices(model: &Mat4, color: [f32; 4]) -> [Vertex; 6] {
    let corner = |x: f32, y: f32| {
        let p = model.transform_point3(Vec3::new(x, y, 0.5));
        Vertex::new(p.x, p.y, p.z, color)
    };
    let bl = corner(-0.5, -0.5);
    let br = corner(0.5, -0.5);
    let tr = corner(0.5, 0.5);
    let tl = corner(-0.5, 0.5);
    [bl, br, tr, bl, tr, tl]
}
