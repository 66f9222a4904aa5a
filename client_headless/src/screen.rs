use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Color, PixelRect, Renderer};
use tracing::{debug, trace};

/// Last presented frame, as a list of filled rectangles
#[derive(Debug, Default)]
pub struct Screen {
    pub frame: u64,
    pub rects: Vec<(PixelRect, Color)>,
}

impl Screen {
    /// First rectangle drawn in exactly this colour
    pub fn find(&self, color: Color) -> Option<PixelRect> {
        self.rects
            .iter()
            .find(|(_rect, c)| *c == color)
            .map(|(rect, _c)| *rect)
    }
}

/// Renderer with no window: logs draw calls and publishes each frame to a shared [`Screen`]
pub struct TraceRenderer {
    screen: Rc<RefCell<Screen>>,
    pending: Vec<(PixelRect, Color)>,
    lines: usize,
    log_every: u64,
}

impl TraceRenderer {
    pub fn new(screen: Rc<RefCell<Screen>>, log_every: u64) -> Self {
        Self {
            screen,
            pending: Vec::new(),
            lines: 0,
            log_every: log_every.max(1),
        }
    }
}

impl Renderer for TraceRenderer {
    fn clear(&mut self, color: Color) {
        self.pending.clear();
        self.lines = 0;
        trace!(?color, "clear");
    }

    fn draw_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        trace!(x, y, w, h, ?color, "rect");
        self.pending.push((PixelRect { x, y, w, h }, color));
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        trace!(x1, y1, x2, y2, ?color, "line");
        self.lines += 1;
    }

    fn present(&mut self) {
        let mut screen = self.screen.borrow_mut();
        screen.frame += 1;
        std::mem::swap(&mut screen.rects, &mut self.pending);

        if screen.frame % self.log_every == 0 {
            debug!(
                frame = screen.frame,
                rects = screen.rects.len(),
                lines = self.lines,
                "frame presented"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_publishes_frame() {
        let screen = Rc::new(RefCell::new(Screen::default()));
        let mut renderer = TraceRenderer::new(screen.clone(), 1);

        renderer.clear(Color::BLACK);
        renderer.draw_line(0, 0, 10, 10, Color::GREEN);
        renderer.draw_rectangle(1, 2, 3, 4, Color::RED);
        assert!(screen.borrow().rects.is_empty(), "nothing shown before present");

        renderer.present();
        let screen = screen.borrow();
        assert_eq!(screen.frame, 1);
        assert_eq!(
            screen.find(Color::RED),
            Some(PixelRect {
                x: 1,
                y: 2,
                w: 3,
                h: 4
            })
        );
        assert_eq!(screen.find(Color::WHITE), None);
    }
}
