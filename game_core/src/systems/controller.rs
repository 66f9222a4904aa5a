use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::{Ball, Config, GameRng, Paddle, Scene, Side};

/// Computer paddle controller
///
/// Moves at a constant `speed` per axis toward its target and snaps to it on the
/// last tick, so it never overshoots.
#[derive(Debug, Clone, Copy)]
pub struct ComputerController {
    pub side: Side,
    pub speed: f32,
    pub epsilon: f32,
    serve_target: Option<Vec2>,
}

impl ComputerController {
    pub fn new(side: Side, speed: f32, epsilon: f32) -> Self {
        Self {
            side,
            speed,
            epsilon,
            serve_target: None,
        }
    }

    pub fn from_config(side: Side, config: &Config) -> Self {
        Self::new(side, config.computer_speed, config.serve_epsilon)
    }

    /// Per-tick velocity that moves `center` toward `target`
    pub fn velocity_toward(&self, center: Vec2, target: Vec2) -> Vec2 {
        let diff = target - center;
        diff.clamp(Vec2::splat(-self.speed), Vec2::splat(self.speed))
    }

    /// Set the paddle's velocity toward `target`
    pub fn track(&self, paddle: &mut Paddle, target: Vec2) {
        paddle.vel = self.velocity_toward(paddle.center(), target);
    }

    /// Follow the ball while it comes our way, otherwise drift back to centre
    pub fn choose_target(&self, ball: &Ball, scene: &Scene) -> Vec2 {
        if ball.heading_to(self.side) {
            ball.center()
        } else {
            scene.center()
        }
    }

    pub fn serve_target(&self) -> Option<Vec2> {
        self.serve_target
    }

    /// Walk toward a random serve point; true while still approaching
    pub fn aim_serve(&mut self, paddle: &mut Paddle, scene: &Scene, rng: &mut GameRng) -> bool {
        let target = match self.serve_target {
            Some(target) => target,
            None => {
                let (min, max) = paddle.center_range(scene);
                let target = Vec2::new(
                    rng.0.gen_range(min.x..=max.x),
                    rng.0.gen_range(min.y..=max.y),
                );
                self.serve_target = Some(target);
                target
            }
        };

        let diff = (target - paddle.center()).abs();
        if diff.x <= self.epsilon && diff.y <= self.epsilon {
            paddle.vel = Vec2::ZERO;
            self.serve_target = None;
            return false;
        }

        self.track(paddle, target);
        true
    }
}

/// Point the controlled paddle at its target for this tick
pub fn drive_controller(world: &mut World, controller: &ComputerController, scene: &Scene) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| *ball);

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != controller.side {
            continue;
        }
        let target = match &ball {
            Some(ball) => controller.choose_target(ball, scene),
            None => scene.center(),
        };
        controller.track(paddle, target);
    }
}

/// Run serve aiming on the controlled paddle; true while still approaching
pub fn drive_serve(
    world: &mut World,
    controller: &mut ComputerController,
    scene: &Scene,
    rng: &mut GameRng,
) -> bool {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == controller.side {
            return controller.aim_serve(paddle, scene, rng);
        }
    }
    false
}
