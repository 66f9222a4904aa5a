use glam::Vec2;
use hecs::World;

use crate::{Config, HeldKeys, InputEvent, Key, Paddle, PlayerInput, Side};

fn arrow(held: &mut HeldKeys, key: Key) -> Option<&mut bool> {
    match key {
        Key::Up => Some(&mut held.up),
        Key::Down => Some(&mut held.down),
        Key::Left => Some(&mut held.left),
        Key::Right => Some(&mut held.right),
        _ => None,
    }
}

/// Handle key down: returns the new set of held arrows
pub fn handle_key_down(key: Key, mut held: HeldKeys) -> HeldKeys {
    if let Some(state) = arrow(&mut held, key) {
        *state = true;
    }
    held
}

/// Handle key up: only the released arrow stops counting
pub fn handle_key_up(key: Key, mut held: HeldKeys) -> HeldKeys {
    if let Some(state) = arrow(&mut held, key) {
        *state = false;
    }
    held
}

/// Fold this tick's events into the player input state
pub fn ingest_inputs<I>(events: I, input: &mut PlayerInput)
where
    I: IntoIterator<Item = InputEvent>,
{
    input.begin_tick();

    for event in events {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => input.quit = true,
            InputEvent::KeyDown(Key::Launch) | InputEvent::PointerTrigger => input.trigger = true,
            InputEvent::KeyDown(key) => input.held = handle_key_down(key, input.held),
            InputEvent::KeyUp(key) => input.held = handle_key_up(key, input.held),
            InputEvent::PointerMove { x, y } => input.pointer = Some(Vec2::new(x, y)),
        }
    }
}

/// Drive the player paddle: the pointer places it, held keys give it velocity
pub fn apply_player_input(world: &mut World, input: &PlayerInput, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }

        if let Some(pointer) = input.pointer {
            paddle.set_center(pointer);
        }
        paddle.vel = input.key_dir() * config.paddle_key_speed;
    }
}
