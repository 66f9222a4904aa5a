use hecs::World;

use crate::{Ball, Color, Drawable, Line, Paddle, Rect, Room, Scene};

/// Drawing backend the core hands projected geometry to
pub trait Renderer {
    fn clear(&mut self, color: Color);
    fn draw_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color);
    fn present(&mut self);
}

fn draw_line(renderer: &mut impl Renderer, line: &Line, color: Color) {
    let (x1, y1, x2, y2) = line.to_pixels();
    renderer.draw_line(x1, y1, x2, y2, color);
}

/// Draw one frame: room wireframe, then paddles and ball far to near
pub fn render_world(world: &mut World, scene: &Scene, renderer: &mut impl Renderer) {
    renderer.clear(Color::BLACK);

    let ball_z = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.position().z);

    let room = world
        .query::<&Room>()
        .iter()
        .next()
        .map(|(_e, room)| *room);

    if let Some(room) = room {
        for line in room.rails(scene).iter().chain(room.rings(scene).iter()) {
            draw_line(renderer, line, room.color);
        }
        if let Some(z) = ball_z {
            for line in room.depth_indicator(scene, z).iter() {
                draw_line(renderer, line, room.indicator_color);
            }
        }
    }

    // (depth, rect, colour) for every solid entity
    let mut sprites: Vec<(f32, Rect, Color)> = Vec::new();
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        sprites.push((paddle.position().z, paddle.screen_rect(scene), paddle.color()));
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        sprites.push((ball.position().z, ball.screen_rect(scene), ball.color()));
    }
    sprites.sort_by(|a, b| b.0.total_cmp(&a.0));

    for (_z, rect, color) in sprites {
        let px = rect.to_pixels();
        renderer.draw_rectangle(px.x, px.y, px.w, px.h, color);
    }

    renderer.present();
}
