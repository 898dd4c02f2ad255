//! CPong - 3D table Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (fixed-step physics, collisions, scoring, AI)
//! - `game`: Host-facing façade owning the simulation and camera
//! - `view`: Camera view/projection
//! - `renderer`: World-space draw lists built from read-only snapshots
//! - `settings`: Host configuration

pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod view;

pub use game::Game;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed physics sub-step (600 Hz)
    pub const SIM_DT: f32 = 1.0 / 600.0;
    /// Maximum sub-steps per frame to bound work per frame
    pub const MAX_SUBSTEPS: u32 = 160;
    /// Frame delta clamp (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Table dimensions (long axis X, short axis Y)
    pub const TABLE_LENGTH: f32 = 20.0;
    pub const TABLE_WIDTH: f32 = 12.0;

    /// Paddle defaults
    pub const PADDLE_HEIGHT: f32 = 2.5;
    pub const PADDLE_DEPTH: f32 = 0.5;
    /// Human paddle speed (units/s)
    pub const PADDLE_SPEED: f32 = 14.0;
    /// Collider extension toward the table center, as a multiple of ball radius
    pub const PADDLE_COLLIDER_PAD: f32 = 1.2;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.4;
    /// Horizontal launch speed after a reset
    pub const BALL_START_SPEED: f32 = 10.0;
    /// Vertical launch component range (±)
    pub const BALL_START_VY_RANGE: f32 = 5.0;
    /// Maximum ball speed
    pub const BALL_MAX_SPEED: f32 = 28.0;
    /// Speed boost when ball hits paddle (multiplicative)
    pub const PADDLE_BOOST: f32 = 1.08;
    /// Gap left between ball and paddle face after a hit
    pub const PADDLE_SEPARATION: f32 = 0.01;

    /// AI tuning
    pub const AI_SPEED: f32 = 11.0;
    pub const AI_MISTAKE_RANGE: f32 = 2.5;
    pub const AI_REAIM_INTERVAL: f32 = 0.35;
    pub const AI_DEAD_ZONE: f32 = 0.15;
    /// How far past the legal paddle range the AI may aim
    pub const AI_TARGET_SLACK: f32 = 1.0;
}
