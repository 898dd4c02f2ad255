//! Render façade
//!
//! Turns a read-only [`Snapshot`] into world-space draw commands. Nothing here
//! feeds back into the simulation; a GPU backend uploads
//! [`DrawList::vertices`] and draws them with the camera matrices.

pub mod shapes;
pub mod vertex;

use glam::{Mat4, Vec2, Vec3};

use crate::sim::{Snapshot, paddle_collider};
pub use vertex::{Vertex, colors};

/// Height of the ball cube above the table plane
const BALL_Z: f32 = 0.15;
/// Ball cube edge, as a multiple of the ball radius
const BALL_SCALE: f32 = 2.5;
const BORDER_MARGIN: f32 = 0.5;
const BORDER_HEIGHT: f32 = 0.05;
const DEBUG_Z: f32 = 0.2;
const SCORE_Z: f32 = 1.0;

/// What to draw besides the game itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Overlay paddle collision boxes
    pub show_colliders: bool,
}

/// A single draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Unit cube transformed by `model`
    Cube { model: Mat4, color: [f32; 4] },
    /// Filled rectangle in the plane `z`
    Rect {
        min: Vec2,
        max: Vec2,
        z: f32,
        color: [f32; 4],
    },
}

/// Ordered draw calls for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    /// Color the frame is cleared to before any command is drawn
    pub clear_color: [f32; 4],
    pub commands: Vec<DrawCommand>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            clear_color: colors::BACKGROUND,
            commands: Vec::new(),
        }
    }
}

impl DrawList {
    pub fn cube(&mut self, model: Mat4, color: [f32; 4]) {
        self.commands.push(DrawCommand::Cube { model, color });
    }

    pub fn rect(&mut self, min: Vec2, max: Vec2, z: f32, color: [f32; 4]) {
        self.commands.push(DrawCommand::Rect { min, max, z, color });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Flat triangle list; cubes contribute their top face
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut out = Vec::with_capacity(self.commands.len() * 6);
        for command in &self.commands {
            match command {
                DrawCommand::Cube { model, color } => {
                    out.extend(shapes::cube_top_vertices(model, *color));
                }
                DrawCommand::Rect { min, max, z, color } => {
                    out.extend(shapes::rect_vertices(*min, *max, *z, *color));
                }
            }
        }
        out
    }

    /// Vertices packed for a GPU buffer upload
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }
}

/// Build the draw list for one frame
pub fn build_frame(snapshot: &Snapshot, options: &RenderOptions) -> DrawList {
    let table = snapshot.table;
    let mut list = DrawList::default();

    list.cube(
        shapes::box_model(
            Vec3::new(0.0, 0.0, -0.1),
            Vec3::new(table.length, table.width, 0.2),
        ),
        colors::TABLE,
    );
    list.cube(
        shapes::box_model(
            Vec3::new(0.0, 0.0, BORDER_HEIGHT / 2.0),
            Vec3::new(
                table.length + BORDER_MARGIN,
                table.width + BORDER_MARGIN,
                BORDER_HEIGHT,
            ),
        ),
        colors::BORDER,
    );

    // Paddles are drawn at exactly their collision bounds
    let left = paddle_collider(&table, &snapshot.left, snapshot.ball_radius);
    let right = paddle_collider(&table, &snapshot.right, snapshot.ball_radius);
    list.rect(left.min, left.max, 0.0, colors::LEFT_PADDLE);
    list.rect(right.min, right.max, 0.0, colors::RIGHT_PADDLE);

    list.cube(
        shapes::box_model(
            snapshot.ball_pos.extend(BALL_Z),
            Vec3::splat(snapshot.ball_radius * BALL_SCALE),
        ),
        colors::BALL,
    );

    if options.show_colliders {
        list.rect(left.min, left.max, DEBUG_Z, colors::COLLIDER_DEBUG);
        list.rect(right.min, right.max, DEBUG_Z, colors::COLLIDER_DEBUG);
    }

    for (min, max) in shapes::score_rects(snapshot.score.left, snapshot.score.right) {
        list.rect(min, max, SCORE_Z, colors::SCORE);
    }

    list
}
