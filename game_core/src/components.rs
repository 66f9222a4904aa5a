use glam::{Vec2, Vec3};

use crate::projection::{project, project_point, ProjectionCache};
use crate::{Color, Config, Line, Rect, Scene, DEPTH_INDICATOR_COLOR, ROOM_COLOR};

/// Which end of the court an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // near plane, z = 0
    Computer, // far plane, z = depth
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    /// Sign of a z velocity that travels away from this side's plane
    pub fn serve_direction(self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Computer => -1.0,
        }
    }
}

/// Anything that can report its screen rectangle
pub trait Drawable {
    fn project(&self, scene: &Scene) -> Rect;
    fn color(&self) -> Color;
    fn cache(&mut self) -> &mut ProjectionCache;

    /// Rect for this frame, reprojected only if the entity moved since the last draw
    fn screen_rect(&mut self, scene: &Scene) -> Rect {
        if self.cache().take_dirty() {
            let rect = self.project(scene);
            self.cache().store(rect);
        }
        self.cache().rect()
    }
}

/// Paddle component - a flat rectangle on one end plane
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pos: Vec3,
    pub vel: Vec2,
    pub extent: Vec2,
    pub color: Color,
    pub cache: ProjectionCache,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec3, extent: Vec2, color: Color) -> Self {
        Self {
            side,
            pos,
            vel: Vec2::ZERO,
            extent,
            color,
            cache: ProjectionCache::new(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.pos
    }

    /// Place the paddle's top-left corner; z stays on the paddle's plane
    ///
    /// Only an actual move marks the projection dirty.
    pub fn set_position(&mut self, xy: Vec2) {
        if xy.x == self.pos.x && xy.y == self.pos.y {
            return;
        }
        self.pos.x = xy.x;
        self.pos.y = xy.y;
        self.cache.mark_dirty();
    }

    /// Place the paddle so its centre sits at `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.set_position(center - self.extent / 2.0);
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y) + self.extent / 2.0
    }

    /// Keep the paddle inside `[0, w - extent.x] x [0, h - extent.y]`
    pub fn clamp_to(&mut self, scene: &Scene) {
        let xy = scene.clamp_position(Vec2::new(self.pos.x, self.pos.y), self.extent);
        self.set_position(xy);
    }

    /// Legal range for the paddle centre
    pub fn center_range(&self, scene: &Scene) -> (Vec2, Vec2) {
        let half = self.extent / 2.0;
        (half, scene.max_position(self.extent) + half)
    }
}

impl Drawable for Paddle {
    fn project(&self, scene: &Scene) -> Rect {
        project(scene, self.pos, self.extent)
    }

    fn color(&self) -> Color {
        self.color
    }

    fn cache(&mut self) -> &mut ProjectionCache {
        &mut self.cache
    }
}

/// Ball component - travels along z between the paddle planes
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pos: Vec3,
    prev_pos: Vec3,
    pub vel: Vec3,
    pub extent: Vec2,
    pub color: Color,
    pub cache: ProjectionCache,
}

impl Ball {
    pub fn new(pos: Vec3, vel: Vec3, extent: Vec2, color: Color) -> Self {
        Self {
            pos,
            prev_pos: pos,
            vel,
            extent,
            color,
            cache: ProjectionCache::new(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.pos
    }

    pub fn prev_position(&self) -> Vec3 {
        self.prev_pos
    }

    /// Teleport the ball; the previous position follows so no plane is swept
    pub fn place(&mut self, pos: Vec3) {
        self.set_position(pos);
        self.prev_pos = pos;
    }

    /// Move the ball without touching its previous position
    pub fn set_position(&mut self, pos: Vec3) {
        if pos != self.pos {
            self.pos = pos;
            self.cache.mark_dirty();
        }
    }

    /// Advance by one tick of velocity, remembering where it came from
    pub fn advance(&mut self) {
        self.prev_pos = self.pos;
        self.pos += self.vel;
        self.cache.mark_dirty();
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y) + self.extent / 2.0
    }

    /// z interval swept during the last tick
    pub fn z_window(&self) -> (f32, f32) {
        (
            self.prev_pos.z.min(self.pos.z),
            self.prev_pos.z.max(self.pos.z),
        )
    }

    /// Pin the ball to the face of a paddle, centred on it
    pub fn pin_to(&mut self, paddle: &Paddle) {
        let xy = paddle.center() - self.extent / 2.0;
        self.vel = Vec3::ZERO;
        self.place(Vec3::new(xy.x, xy.y, paddle.position().z));
    }

    /// Whether the ball is travelling toward the given side's plane
    pub fn heading_to(&self, side: Side) -> bool {
        self.vel.z * side.serve_direction() < 0.0
    }
}

impl Drawable for Ball {
    fn project(&self, scene: &Scene) -> Rect {
        project(scene, self.pos, self.extent)
    }

    fn color(&self) -> Color {
        self.color
    }

    fn cache(&mut self) -> &mut ProjectionCache {
        &mut self.cache
    }
}

/// Room component - the wireframe court drawn behind everything
#[derive(Debug, Clone, Copy)]
pub struct Room {
    pub rings: u32,
    pub color: Color,
    pub indicator_color: Color,
}

impl Room {
    pub fn new(rings: u32, color: Color, indicator_color: Color) -> Self {
        Self {
            rings,
            color,
            indicator_color,
        }
    }

    /// Corner rails from the near plane to the far plane
    pub fn rails(&self, scene: &Scene) -> Vec<Line> {
        let near = scene.corners(0.0);
        let far = scene.corners(scene.depth);
        near.iter()
            .zip(far.iter())
            .map(|(n, f)| Line::new(project_point(scene, *n), project_point(scene, *f)))
            .collect()
    }

    /// Evenly spaced depth rings, near plane excluded, far plane included
    pub fn rings(&self, scene: &Scene) -> Vec<Line> {
        (1..=self.rings)
            .flat_map(|i| ring(scene, scene.depth * i as f32 / self.rings as f32))
            .collect()
    }

    /// Ring at the ball's depth so the player can read distance
    pub fn depth_indicator(&self, scene: &Scene, z: f32) -> [Line; 4] {
        ring(scene, z.clamp(0.0, scene.depth))
    }
}

impl Room {
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.room_rings, ROOM_COLOR, DEPTH_INDICATOR_COLOR)
    }
}

/// Outline of the court cross-section at depth `z`
fn ring(scene: &Scene, z: f32) -> [Line; 4] {
    let c = scene.corners(z).map(|p| project_point(scene, p));
    [
        Line::new(c[0], c[1]),
        Line::new(c[1], c[2]),
        Line::new(c[2], c[3]),
        Line::new(c[3], c[0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::new(800.0, 600.0, 2400.0, 0.25)
    }

    fn paddle(side: Side, x: f32, y: f32) -> Paddle {
        Paddle::new(
            side,
            Vec3::new(x, y, 0.0),
            Vec2::new(160.0, 120.0),
            Color::WHITE,
        )
    }

    #[test]
    fn test_paddle_clamp_idempotent() {
        let scene = scene();
        for (x, y) in [(-100.0, -100.0), (5000.0, 5000.0), (300.0, 200.0), (-1.0, 700.0)] {
            let mut once = paddle(Side::Player, x, y);
            once.clamp_to(&scene);
            let mut twice = once;
            twice.clamp_to(&scene);
            assert_eq!(once.position(), twice.position(), "clamp at ({x}, {y})");
            assert!(once.position().x >= 0.0 && once.position().x <= 640.0);
            assert!(once.position().y >= 0.0 && once.position().y <= 480.0);
        }
    }

    #[test]
    fn test_set_position_marks_dirty() {
        let mut p = paddle(Side::Player, 0.0, 0.0);
        assert!(p.cache.take_dirty());
        p.set_position(Vec2::new(10.0, 10.0));
        assert!(p.cache.is_dirty());
    }

    #[test]
    fn test_ball_advance_tracks_previous_position() {
        let mut ball = Ball::new(
            Vec3::new(0.0, 0.0, 100.0),
            Vec3::new(1.0, 2.0, -30.0),
            Vec2::splat(40.0),
            Color::WHITE,
        );
        ball.advance();
        assert_eq!(ball.prev_position(), Vec3::new(0.0, 0.0, 100.0));
        assert_eq!(ball.position(), Vec3::new(1.0, 2.0, 70.0));
        assert_eq!(ball.z_window(), (70.0, 100.0));
        assert!(ball.heading_to(Side::Player));
        assert!(!ball.heading_to(Side::Computer));
    }

    #[test]
    fn test_pin_centres_ball_on_paddle_face() {
        let p = paddle(Side::Player, 100.0, 50.0);
        let mut ball = Ball::new(
            Vec3::new(500.0, 500.0, 900.0),
            Vec3::new(3.0, 3.0, 3.0),
            Vec2::splat(40.0),
            Color::WHITE,
        );
        ball.pin_to(&p);
        assert_eq!(ball.center(), p.center());
        assert_eq!(ball.position().z, 0.0);
        assert_eq!(ball.vel, Vec3::ZERO);
        assert_eq!(ball.z_window(), (0.0, 0.0));
    }

    #[test]
    fn test_screen_rect_reprojects_only_after_move() {
        let scene = scene();
        let mut p = paddle(Side::Player, 0.0, 0.0);
        assert_eq!(p.screen_rect(&scene), Rect::new(0.0, 0.0, 160.0, 120.0));
        assert!(!p.cache.is_dirty(), "flag consumed by the draw");

        // A stale rect is served until the entity is moved through its setters
        p.extent = Vec2::new(10.0, 10.0);
        assert_eq!(p.screen_rect(&scene), Rect::new(0.0, 0.0, 160.0, 120.0));

        p.set_position(Vec2::new(5.0, 5.0));
        assert_eq!(p.screen_rect(&scene), Rect::new(5.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn test_unchanged_placement_keeps_projection_clean() {
        let scene = scene();
        let mut p = paddle(Side::Player, 640.0, 0.0);
        p.screen_rect(&scene);

        p.clamp_to(&scene);
        p.set_center(p.center());
        assert!(!p.cache.is_dirty(), "in-bounds paddle did not move");

        let mut ball = Ball::new(Vec3::ZERO, Vec3::ZERO, Vec2::splat(40.0), Color::WHITE);
        ball.pin_to(&p);
        ball.screen_rect(&scene);
        ball.pin_to(&p);
        assert!(!ball.cache.is_dirty(), "re-pinning in place is not a move");

        p.set_position(Vec2::new(600.0, 0.0));
        ball.pin_to(&p);
        assert!(p.cache.is_dirty());
        assert!(ball.cache.is_dirty());
    }

    #[test]
    fn test_room_geometry_counts() {
        let scene = scene();
        let room = Room::from_config(&Config {
            room_rings: 4,
            ..Config::new()
        });
        assert_eq!(room.color, ROOM_COLOR);
        assert_eq!(room.rails(&scene).len(), 4);
        assert_eq!(room.rings(&scene).len(), 4 * room.rings as usize);
        let far_ring = room.depth_indicator(&scene, scene.depth);
        assert_eq!(far_ring[0].from, Vec2::new(300.0, 225.0));
    }
}
