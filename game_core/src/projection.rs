//! Pseudo-3D projection
//!
//! Not a camera: sizes shrink linearly with depth, from full size on the near
//! plane (z = 0) to `ratio * size` on the far plane (z = depth), and positions
//! are pulled toward the screen centre by the same factor so that a centred
//! object stays centred at every depth.

use glam::{Vec2, Vec3};

use crate::{Rect, Scene};

/// Linear depth fraction `z / depth` times `(ratio - 1)`
fn shrink(scene: &Scene, z: f32) -> f32 {
    z / scene.depth * (scene.ratio - 1.0)
}

/// Project a world position and x/y extent onto a screen rectangle
pub fn project(scene: &Scene, pos: Vec3, extent: Vec2) -> Rect {
    let k = shrink(scene, pos.z);
    let center = scene.center();

    Rect {
        x: pos.x + k * pos.x - k * center.x,
        y: pos.y + k * pos.y - k * center.y,
        w: extent.x + k * extent.x,
        h: extent.y + k * extent.y,
    }
}

/// Project a single point (used for room rails and depth rings)
pub fn project_point(scene: &Scene, pos: Vec3) -> Vec2 {
    let rect = project(scene, pos, Vec2::ZERO);
    Vec2::new(rect.x, rect.y)
}

/// Cached projection guarded by a redraw flag
///
/// Moving an entity marks the cache dirty; the draw path consumes the flag once
/// per frame and only reprojects when it was set.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionCache {
    dirty: bool,
    rect: Rect,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self {
            dirty: true,
            rect: Rect::default(),
        }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read-then-reset the redraw flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn store(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Last projected rect
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Default for ProjectionCache {
    fn default() -> Self {
        Self::new()
    }
}
