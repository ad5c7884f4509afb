use raylib::prelude::*;

use crate::constants::*;

/// A soft glow that trails the pointer, closing a fixed fraction of the gap
/// every animation frame.
#[derive(Debug, Clone)]
pub struct CursorGlow {
    pub position: Vector2,
    target: Vector2,
    pub visible: bool,
}

impl CursorGlow {
    /// Touch devices have no hovering pointer, so the glow stays hidden there.
    pub fn new(touch_device: bool) -> Self {
        Self {
            position: Vector2::new(0.0, 0.0),
            target: Vector2::new(0.0, 0.0),
            visible: !touch_device,
        }
    }

    /// A touch arrived: the device has no hovering pointer after all.
    pub fn touch_detected(&mut self) {
        self.visible = false;
    }

    pub fn pointer_moved(&mut self, pointer: Vector2) {
        self.target = pointer;
    }

    /// One animation frame.
    pub fn step(&mut self) {
        self.position = self.position.lerp(self.target, CURSOR_EASING);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if !self.visible {
            return;
        }
        d.draw_circle_gradient(
            self.position.x as i32,
            self.position.y as i32,
            CURSOR_GLOW_RADIUS,
            Color::new(99, 102, 241, 40),
            Color::new(99, 102, 241, 0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_a_tenth_of_the_way_each_frame() {
        let mut glow = CursorGlow::new(false);
        glow.pointer_moved(Vector2::new(100.0, 50.0));
        glow.step();
        assert!((glow.position.x - 10.0).abs() < 1e-4);
        assert!((glow.position.y - 5.0).abs() < 1e-4);
        glow.step();
        assert!((glow.position.x - 19.0).abs() < 1e-4);
    }

    #[test]
    fn converges_on_a_still_pointer() {
        let mut glow = CursorGlow::new(false);
        glow.pointer_moved(Vector2::new(400.0, 300.0));
        for _ in 0..200 {
            glow.step();
        }
        assert!((glow.position.x - 400.0).abs() < 0.01);
        assert!((glow.position.y - 300.0).abs() < 0.01);
    }

    #[test]
    fn does_not_move_without_pointer_input() {
        let mut glow = CursorGlow::new(false);
        glow.step();
        assert_eq!(glow.position.x, 0.0);
        assert_eq!(glow.position.y, 0.0);
    }

    #[test]
    fn first_touch_hides_glow_for_the_session() {
        let mut glow = CursorGlow::new(false);
        glow.touch_detected();
        glow.pointer_moved(Vector2::new(10.0, 10.0));
        glow.step();
        assert!(!glow.visible);
    }

    #[test]
    fn hidden_on_touch_devices() {
        assert!(!CursorGlow::new(true).visible);
        assert!(CursorGlow::new(false).visible);
    }
}
