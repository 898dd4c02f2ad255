//! CPong entry point
//!
//! Headless host loop: feeds a fixed frame delta and key state into the game,
//! builds the frame's draw list and reports the score the way a window title
//! would. Usage: `cpong [settings.json]`.

use std::path::PathBuf;

use cpong::sim::KeyState;
use cpong::{Game, Settings};

fn main() {
    env_logger::init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref());
    let mut game = Game::from_settings(&settings);
    let options = settings.render_options();

    let dt = settings.frame_dt();
    let frames = settings.frame_count();
    log::info!(
        "CPong (headless) starting: {} frames at {} fps, seed {}",
        frames,
        settings.frame_rate,
        game.seed()
    );

    let mut title = game.window_title();
    let mut keys = KeyState::default();
    for frame in 0..frames {
        if game.should_close() {
            break;
        }

        autopilot::steer(&mut keys, &game.snapshot(), frame + 1 == frames);
        game.process_input(&keys, dt);
        let events = game.update(dt);
        let draw_list = game.render(&options);
        log::trace!(
            "frame {}: {} events, {} draw commands",
            frame,
            events.len(),
            draw_list.len()
        );

        let new_title = game.window_title();
        if new_title != title {
            log::info!("{}", new_title);
            title = new_title;
        }
    }

    match serde_json::to_string_pretty(&game.snapshot()) {
        Ok(json) => log::info!("Final state:\n{}", json),
        Err(e) => log::warn!("Could not serialize final state: {}", e),
    }
    println!("{}", title);
}

mod autopilot {
    use cpong::sim::{Key, KeyState, Snapshot};

    /// Stop chasing once the paddle is this close to the ball
    const SLACK: f32 = 0.3;

    /// Hold Up/Down toward the ball and let go once close enough; press
    /// Quit on the last frame
    pub fn steer(keys: &mut KeyState, snapshot: &Snapshot, last_frame: bool) {
        let diff = snapshot.ball_pos.y - snapshot.left.y;
        let wanted = if diff > SLACK {
            Some(Key::Up)
        } else if diff < -SLACK {
            Some(Key::Down)
        } else {
            None
        };

        for key in [Key::Up, Key::Down] {
            if Some(key) == wanted {
                if !keys.is_held(key) {
                    log::trace!("autopilot presses {:?}", key);
                    keys.press(key);
                }
            } else {
                keys.release(key);
            }
        }

        if last_frame {
            keys.press(Key::Quit);
        }
    }
}
