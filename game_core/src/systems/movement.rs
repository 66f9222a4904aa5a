use glam::{Vec2, Vec3};
use hecs::World;
use tracing::info;

use crate::{Ball, Paddle, Scene, Side};

/// Apply paddle velocities, then clamp every paddle into the scene
pub fn move_paddles(world: &mut World, scene: &Scene) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.vel != Vec2::ZERO {
            let pos = paddle.position();
            paddle.set_position(Vec2::new(pos.x, pos.y) + paddle.vel);
        }

        // Clamp runs every tick, moved or not
        paddle.clamp_to(scene);
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}

/// Hold the ball on the serving paddle's face
pub fn pin_ball(world: &mut World, server: Side) {
    let paddle = world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == server)
        .map(|(_e, p)| *p);

    if let Some(paddle) = paddle {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.pin_to(&paddle);
        }
    }
}

/// Release the ball straight down the court, away from the server
pub fn launch_ball(world: &mut World, server: Side, speed: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = Vec3::new(0.0, 0.0, server.serve_direction() * speed);
        info!(?server, pos = ?ball.position(), "ball served");
    }
}
