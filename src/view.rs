//! Camera for looking down at the table
//!
//! Resizing only rebuilds the projection; the simulation never sees it.

use glam::{Mat4, Vec3};

/// Camera position, straight above the table center
pub const EYE: Vec3 = Vec3::new(0.0, 0.0, 25.0);
/// Half the visible world height
pub const VIEW_HALF_HEIGHT: f32 = 14.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 100.0;

/// View and orthographic projection matrices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
    width: u32,
    height: u32,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self {
            view: Mat4::look_at_rh(EYE, Vec3::ZERO, Vec3::Y),
            projection: orthographic(width, height),
            width,
            height,
        }
    }

    /// Rebuild the projection for a new framebuffer size.
    ///
    /// A zero dimension (minimized window) keeps the current projection and
    /// returns `false`.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            log::debug!("Ignoring resize to {}x{}", width, height);
            return false;
        }
        self.width = width;
        self.height = height;
        self.projection = orthographic(width, height);
        true
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Column-major view-projection, ready for a uniform buffer
    pub fn view_projection_cols(&self) -> [[f32; 4]; 4] {
        self.view_projection().to_cols_array_2d()
    }

    /// World position to normalized device coordinates
    pub fn world_to_ndc(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }
}

fn orthographic(width: u32, height: u32) -> Mat4 {
    let aspect = width as f32 / height as f32;
    Mat4::orthographic_rh_gl(
        -aspect * VIEW_HALF_HEIGHT,
        aspect * VIEW_HALF_HEIGHT,
        -VIEW_HALF_HEIGHT,
        VIEW_HALF_HEIGHT,
        NEAR,
        FAR,
    )
}
