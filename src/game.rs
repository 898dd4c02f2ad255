//! Host-facing game façade
//!
//! Owns the simulation state and the camera. The host calls, once per frame:
//! `process_input`, `update`, then reads `snapshot`/`render` and the scores.

use crate::renderer::{self, DrawList, RenderOptions};
use crate::settings::Settings;
use crate::sim::{self, GameEvent, GameState, KeyState, Snapshot};
use crate::view::Camera;

pub struct Game {
    state: GameState,
    camera: Camera,
}

impl Game {
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        log::info!("New game {}x{} (seed {})", width, height, seed);
        Self {
            state: GameState::new(seed),
            camera: Camera::new(width, height),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::new(settings.window_width, settings.window_height, seed)
    }

    /// Apply held keys for this frame (raw delta)
    pub fn process_input(&mut self, keys: &KeyState, dt: f32) {
        sim::process_input(&mut self.state, keys, dt);
    }

    /// Advance physics, scoring and AI for this frame
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        sim::update(&mut self.state, dt)
    }

    /// Framebuffer resized; simulation state is untouched
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    pub fn score_left(&self) -> u32 {
        self.state.score.left
    }

    pub fn score_right(&self) -> u32 {
        self.state.score.right
    }

    pub fn should_close(&self) -> bool {
        self.state.should_close
    }

    pub fn set_should_close(&mut self, value: bool) {
        self.state.should_close = value;
    }

    pub fn window_title(&self) -> String {
        format!("3D Pong - {} : {}", self.score_left(), self.score_right())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn render(&self, options: &RenderOptions) -> DrawList {
        renderer::build_frame(&self.snapshot(), options)
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.state.seed
    }
}
