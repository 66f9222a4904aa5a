use glam::Vec2;
use hecs::World;
use tracing::{debug, trace};

use crate::{Ball, Config, Paddle, Scene, Side};

/// What the ball did this tick; exactly one per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    PlayerHit,
    ComputerHit,
    PlayerMiss,
    ComputerMiss,
    WallHit,
    NoCollision,
}

impl CollisionOutcome {
    fn hit(side: Side) -> Self {
        match side {
            Side::Player => CollisionOutcome::PlayerHit,
            Side::Computer => CollisionOutcome::ComputerHit,
        }
    }

    fn miss(side: Side) -> Self {
        match side {
            Side::Player => CollisionOutcome::PlayerMiss,
            Side::Computer => CollisionOutcome::ComputerMiss,
        }
    }

    /// Side that wins the point, if this outcome ends the rally
    pub fn scorer(self) -> Option<Side> {
        match self {
            CollisionOutcome::PlayerMiss => Some(Side::Computer),
            CollisionOutcome::ComputerMiss => Some(Side::Player),
            _ => None,
        }
    }
}

/// Result of testing the ball against one paddle plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaneContact {
    /// Ball did not reach the plane this tick
    Clear,
    /// Ball crossed the plane over the paddle; offset from its top-left corner
    Hit { relative: Vec2 },
    /// Ball crossed the plane beside the paddle
    Miss,
}

/// Swept test of the ball's z window against a paddle's plane
pub fn test_plane(ball: &Ball, paddle: &Paddle) -> PlaneContact {
    let plane = paddle.position().z;
    let (lo, hi) = ball.z_window();

    if !ball.heading_to(paddle.side) || plane < lo || plane > hi {
        return PlaneContact::Clear;
    }

    let corner = paddle.position();
    let relative = ball.center() - Vec2::new(corner.x, corner.y);
    let inside = relative.x >= 0.0
        && relative.x < paddle.extent.x
        && relative.y >= 0.0
        && relative.y < paddle.extent.y;

    if inside {
        PlaneContact::Hit { relative }
    } else {
        PlaneContact::Miss
    }
}

/// Lateral velocity added by a hit at `relative` on a paddle of `extent`
///
/// Zero at the centre, `-strength`/`+strength` at the low/high edges.
pub fn deflection(relative: Vec2, extent: Vec2, strength: f32) -> Vec2 {
    (relative * 2.0 / extent - Vec2::ONE) * strength
}

/// Reverse the ball along z and add the off-centre deflection
pub fn rebound(ball: &mut Ball, paddle: &Paddle, relative: Vec2, strength: f32) {
    let push = deflection(relative, paddle.extent, strength);
    ball.vel.z = -ball.vel.z;
    ball.vel.x += push.x;
    ball.vel.y += push.y;

    // Snap onto the paddle face so the ball never ends the tick past it
    let mut pos = ball.position();
    pos.z = paddle.position().z;
    ball.place(pos);
}

/// Bounce off the side walls; true if either axis was out of bounds
pub fn bounce_walls(ball: &mut Ball, scene: &Scene) -> bool {
    let pos = ball.position();
    let max = scene.max_position(ball.extent);
    let mut hit = false;

    // Point back inside; a ball already heading in keeps its velocity
    if pos.x < 0.0 {
        ball.vel.x = ball.vel.x.abs();
        hit = true;
    } else if pos.x > max.x {
        ball.vel.x = -ball.vel.x.abs();
        hit = true;
    }
    if pos.y < 0.0 {
        ball.vel.y = ball.vel.y.abs();
        hit = true;
    } else if pos.y > max.y {
        ball.vel.y = -ball.vel.y.abs();
        hit = true;
    }

    if hit {
        // Clamp position to prevent stuck
        let xy = scene.clamp_position(Vec2::new(pos.x, pos.y), ball.extent);
        ball.set_position(xy.extend(pos.z));
    }
    hit
}

/// Resolve the ball against both paddles and the walls
///
/// Paddle planes are tested player first; the first contact wins and walls are
/// only considered when neither plane reported anything.
pub fn check_collisions(world: &mut World, config: &Config) -> CollisionOutcome {
    let scene = config.scene();

    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();
    paddles.sort_by_key(|p| p.side != Side::Player);

    let Some((_entity, ball)) = world.query_mut::<&mut Ball>().into_iter().next() else {
        return CollisionOutcome::NoCollision; // No ball in world
    };

    for paddle in &paddles {
        match test_plane(ball, paddle) {
            PlaneContact::Clear => continue,
            PlaneContact::Hit { relative } => {
                rebound(ball, paddle, relative, config.ball_deflection);
                debug!(side = ?paddle.side, ?relative, vel = ?ball.vel, "ball hit paddle");
                return CollisionOutcome::hit(paddle.side);
            }
            PlaneContact::Miss => {
                debug!(side = ?paddle.side, pos = ?ball.position(), "ball missed paddle");
                return CollisionOutcome::miss(paddle.side);
            }
        }
    }

    if bounce_walls(ball, &scene) {
        trace!(vel = ?ball.vel, "ball hit wall");
        return CollisionOutcome::WallHit;
    }

    CollisionOutcome::NoCollision
}
