//! Player autopilot that only sees the presented frame.
//!
//! The ball's on-screen size gives its depth, which undoes the perspective
//! shift of its centre. Paddle steering reuses the computer's controller.

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{
    ComputerController, Config, InputEvent, InputSource, PixelRect, Scene, Side, BALL_COLOR,
    PLAYER_COLOR,
};
use glam::Vec2;

use crate::screen::Screen;

/// World-space centre and depth of a projected square of known extent
///
/// With a ratio of 1 nothing shrinks, so depth cannot be read and is reported as 0.
pub fn unproject(scene: &Scene, rect: PixelRect, extent: Vec2) -> (Vec2, f32) {
    let screen_center = Vec2::new(
        rect.x as f32 + rect.w as f32 / 2.0,
        rect.y as f32 + rect.h as f32 / 2.0,
    );
    if scene.ratio >= 1.0 {
        return (screen_center, 0.0);
    }

    let scale = (rect.w as f32 / extent.x).max(scene.ratio);
    let z = (scale - 1.0) / (scene.ratio - 1.0) * scene.depth;
    let center = scene.center() + (screen_center - scene.center()) / scale;
    (center, z.clamp(0.0, scene.depth))
}

pub struct Autopilot {
    screen: Rc<RefCell<Screen>>,
    scene: Scene,
    ball_extent: Vec2,
    controller: ComputerController,
    /// Aim this far right of the ball so returns come back angled
    aim_offset: f32,
    /// Quit after this many polls; zero plays until the match ends
    max_frames: u64,
    polls: u64,
    last_z: Option<f32>,
}

impl Autopilot {
    pub fn new(
        screen: Rc<RefCell<Screen>>,
        config: &Config,
        aim_offset: f32,
        max_frames: u64,
    ) -> Self {
        Self {
            screen,
            scene: config.scene(),
            ball_extent: config.ball_extent(),
            controller: ComputerController::new(
                Side::Player,
                config.paddle_key_speed,
                config.serve_epsilon,
            ),
            aim_offset,
            max_frames,
            polls: 0,
            last_z: None,
        }
    }

    /// Where the pointer should go this tick, if both sprites are on screen
    fn steer(&mut self) -> Option<Vec2> {
        let screen = self.screen.borrow();
        let ball = screen.find(BALL_COLOR)?;
        let paddle = screen.find(PLAYER_COLOR)?;

        let (ball_center, z) = unproject(&self.scene, ball, self.ball_extent);
        let approaching = self.last_z.is_some_and(|last| z < last);
        self.last_z = Some(z);

        // Near plane is unscaled, so the paddle rect is already in world units
        let paddle_center = Vec2::new(
            paddle.x as f32 + paddle.w as f32 / 2.0,
            paddle.y as f32 + paddle.h as f32 / 2.0,
        );
        let target = if approaching {
            ball_center + Vec2::new(self.aim_offset, 0.0)
        } else {
            self.scene.center()
        };

        Some(paddle_center + self.controller.velocity_toward(paddle_center, target))
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.polls += 1;
        if self.max_frames > 0 && self.polls > self.max_frames {
            return vec![InputEvent::Quit];
        }

        let mut events = Vec::with_capacity(2);
        if let Some(pointer) = self.steer() {
            events.push(InputEvent::PointerMove {
                x: pointer.x,
                y: pointer.y,
            });
        }
        // Starts the match and serves as soon as the ball is ours
        events.push(InputEvent::PointerTrigger);
        events
    }
}
