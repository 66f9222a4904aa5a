use std::time::Duration;

use glam::{Vec2, Vec3};

use crate::{ConfigError, Params, Scene, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub scene_width: f32,
    pub scene_height: f32,
    pub scene_depth: f32,
    pub depth_ratio: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_key_speed: f32,
    pub ball_size: f32,
    pub ball_serve_speed: f32,
    pub ball_deflection: f32,
    pub computer_speed: f32,
    pub serve_epsilon: f32,
    pub room_rings: u32,
    pub win_score: u8,
    pub frame_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scene_width: Params::SCENE_WIDTH,
            scene_height: Params::SCENE_HEIGHT,
            scene_depth: Params::SCENE_DEPTH,
            depth_ratio: Params::DEPTH_RATIO,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_key_speed: Params::PADDLE_KEY_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_serve_speed: Params::BALL_SERVE_SPEED,
            ball_deflection: Params::BALL_DEFLECTION,
            computer_speed: Params::COMPUTER_SPEED,
            serve_epsilon: Params::SERVE_EPSILON,
            room_rings: Params::ROOM_RINGS,
            win_score: Params::WIN_SCORE,
            frame_delay: Duration::from_millis(Params::FRAME_DELAY_MS),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("width", self.scene_width),
            ("height", self.scene_height),
            ("depth", self.scene_depth),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidSceneDimension { name, value });
            }
        }

        if !(self.depth_ratio > 0.0 && self.depth_ratio <= 1.0) {
            return Err(ConfigError::InvalidDepthRatio(self.depth_ratio));
        }

        for (entity, width, height) in [
            ("paddle", self.paddle_width, self.paddle_height),
            ("ball", self.ball_size, self.ball_size),
        ] {
            let fits = width > 0.0
                && height > 0.0
                && width <= self.scene_width
                && height <= self.scene_height;
            if !fits {
                return Err(ConfigError::EntityTooLarge {
                    entity,
                    width,
                    height,
                });
            }
        }

        for (name, value) in [
            ("paddle key speed", self.paddle_key_speed),
            ("ball serve speed", self.ball_serve_speed),
            ("computer speed", self.computer_speed),
            ("serve epsilon", self.serve_epsilon),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidSpeed { name, value });
            }
        }

        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }

        Ok(())
    }

    /// Scene bounds used by projection and collision
    pub fn scene(&self) -> Scene {
        Scene::new(
            self.scene_width,
            self.scene_height,
            self.scene_depth,
            self.depth_ratio,
        )
    }

    pub fn paddle_extent(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    pub fn ball_extent(&self) -> Vec2 {
        Vec2::splat(self.ball_size)
    }

    /// Z plane a paddle lives on: the player is near, the computer is far
    pub fn paddle_z(&self, side: Side) -> f32 {
        match side {
            Side::Player => 0.0,
            Side::Computer => self.scene_depth,
        }
    }

    /// Starting position of a paddle, centred on its plane
    pub fn paddle_spawn(&self, side: Side) -> Vec3 {
        let extent = self.paddle_extent();
        Vec3::new(
            (self.scene_width - extent.x) / 2.0,
            (self.scene_height - extent.y) / 2.0,
            self.paddle_z(side),
        )
    }
}
