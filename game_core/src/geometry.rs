use glam::{Vec2, Vec3};

/// Fixed bounding volume of play
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    /// Far-wall to near-wall size ratio
    pub ratio: f32,
}

impl Scene {
    pub fn new(width: f32, height: f32, depth: f32, ratio: f32) -> Self {
        Self {
            width,
            height,
            depth,
            ratio,
        }
    }

    /// Centre of the play-field in the x/y plane
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a top-left position so a footprint of `extent` stays in bounds
    pub fn clamp_position(&self, pos: Vec2, extent: Vec2) -> Vec2 {
        let max = self.max_position(extent);
        Vec2::new(pos.x.clamp(0.0, max.x), pos.y.clamp(0.0, max.y))
    }

    /// Largest legal top-left position for a footprint of `extent`
    pub fn max_position(&self, extent: Vec2) -> Vec2 {
        Vec2::new(
            (self.width - extent.x).max(0.0),
            (self.height - extent.y).max(0.0),
        )
    }

    /// Four near-plane corners, clockwise from the top-left
    pub fn corners(&self, z: f32) -> [Vec3; 4] {
        [
            Vec3::new(0.0, 0.0, z),
            Vec3::new(self.width, 0.0, z),
            Vec3::new(self.width, self.height, z),
            Vec3::new(0.0, self.height, z),
        ]
    }
}

/// Screen-space rectangle before rounding
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Round to whole pixels; only done at the render boundary
    pub fn to_pixels(&self) -> PixelRect {
        PixelRect {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
            w: self.w.round() as i32,
            h: self.h.round() as i32,
        }
    }
}

/// Rectangle in whole pixels as handed to a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// Screen-space line segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Vec2,
    pub to: Vec2,
}

impl Line {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    pub fn to_pixels(&self) -> (i32, i32, i32, i32) {
        (
            self.from.x.round() as i32,
            self.from.y.round() as i32,
            self.to.x.round() as i32,
            self.to.y.round() as i32,
        )
    }
}

/// RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 200, 0);
    pub const BLUE: Color = Color::rgb(40, 80, 255);
    pub const RED: Color = Color::rgb(220, 40, 40);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::new(800.0, 600.0, 2400.0, 0.25)
    }

    #[test]
    fn test_clamp_position_negative_and_over_max() {
        let scene = scene();
        let extent = Vec2::new(160.0, 120.0);
        assert_eq!(
            scene.clamp_position(Vec2::new(-50.0, -1.0), extent),
            Vec2::ZERO
        );
        assert_eq!(
            scene.clamp_position(Vec2::new(5000.0, 900.0), extent),
            Vec2::new(640.0, 480.0)
        );
        let inside = Vec2::new(100.0, 200.0);
        assert_eq!(scene.clamp_position(inside, extent), inside);
    }

    #[test]
    fn test_rect_rounds_only_when_asked() {
        let rect = Rect::new(10.4, 10.6, 99.5, 0.49);
        assert_eq!(rect.x, 10.4);
        assert_eq!(
            rect.to_pixels(),
            PixelRect {
                x: 10,
                y: 11,
                w: 100,
                h: 0
            }
        );
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(0.0, 0.0, 40.0, 20.0);
        assert_eq!(rect.center(), Vec2::new(20.0, 10.0));
    }
}
