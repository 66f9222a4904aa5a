pub mod components;
pub mod config;
pub mod error;
pub mod flow;
pub mod game;
pub mod geometry;
pub mod params;
pub mod projection;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use flow::*;
pub use game::*;
pub use geometry::*;
pub use params::*;
pub use projection::*;
pub use resources::*;
pub use systems::*;

use glam::Vec3;
use hecs::World;

/// Near paddle is see-through so the ball stays visible behind it
pub const PLAYER_COLOR: Color = Color::WHITE.with_alpha(128);
pub const COMPUTER_COLOR: Color = Color::RED;
pub const BALL_COLOR: Color = Color::WHITE;
pub const ROOM_COLOR: Color = Color::GREEN;
pub const DEPTH_INDICATOR_COLOR: Color = Color::BLUE;

/// Helper to create a paddle entity centred on its plane
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    let color = match side {
        Side::Player => PLAYER_COLOR,
        Side::Computer => COMPUTER_COLOR,
    };
    world.spawn((Paddle::new(
        side,
        config.paddle_spawn(side),
        config.paddle_extent(),
        color,
    ),))
}

/// Helper to create the ball entity at rest
pub fn create_ball(world: &mut World, config: &Config, pos: Vec3) -> hecs::Entity {
    world.spawn((Ball::new(
        pos,
        Vec3::ZERO,
        config.ball_extent(),
        BALL_COLOR,
    ),))
}

/// Helper to create the court wireframe
pub fn create_room(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Room::from_config(config),))
}
