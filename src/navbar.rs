use raylib::prelude::*;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarStyle {
    pub solid: bool,  // past the hero: opaque background and a drop shadow
    pub hidden: bool, // scrolling down: slid up out of view
}

impl NavbarStyle {
    pub fn background(&self) -> Color {
        if self.solid {
            Color::new(10, 10, 15, 242) // 0.95 alpha
        } else {
            Color::new(10, 10, 15, 204) // 0.8 alpha
        }
    }

    pub fn has_shadow(&self) -> bool {
        self.solid
    }

    /// Vertical translation of the bar, as a fraction of its height.
    pub fn translate_y(&self) -> f32 {
        if self.hidden { -1.0 } else { 0.0 }
    }
}

#[derive(Debug, Clone)]
pub struct Navbar {
    last_scroll: f32,
    style: NavbarStyle,
}

impl Default for Navbar {
    fn default() -> Self {
        Self {
            last_scroll: 0.0,
            style: NavbarStyle { solid: false, hidden: false },
        }
    }
}

impl Navbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self) -> NavbarStyle {
        self.style
    }

    /// Handles a scroll event at page offset `current`.
    pub fn scrolled(&mut self, current: f32) -> NavbarStyle {
        self.style = NavbarStyle {
            solid: current > NAVBAR_SOLID_AFTER,
            hidden: current > self.last_scroll && current > NAVBAR_HIDE_AFTER,
        };
        self.last_scroll = current;
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translucent_near_the_top() {
        let mut navbar = Navbar::new();
        let style = navbar.scrolled(80.0);
        assert!(!style.solid);
        assert!(!style.has_shadow());
        assert_eq!(style.background().a, 204);
    }

    #[test]
    fn solid_past_threshold() {
        let mut navbar = Navbar::new();
        let style = navbar.scrolled(150.0);
        assert!(style.solid);
        assert_eq!(style.background().a, 242);
        assert!(!style.hidden);
    }

    #[test]
    fn hides_when_scrolling_down_far_enough() {
        let mut navbar = Navbar::new();
        navbar.scrolled(150.0);
        let style = navbar.scrolled(250.0);
        assert!(style.hidden);
        assert_eq!(style.translate_y(), -1.0);
    }

    #[test]
    fn shows_again_when_scrolling_up() {
        let mut navbar = Navbar::new();
        navbar.scrolled(500.0);
        assert!(navbar.style().hidden);
        let style = navbar.scrolled(450.0);
        assert!(!style.hidden);
        assert!(style.solid);
    }

    #[test]
    fn scrolling_down_near_top_keeps_bar_visible() {
        let mut navbar = Navbar::new();
        navbar.scrolled(50.0);
        assert!(!navbar.scrolled(180.0).hidden);
    }

    #[test]
    fn repeated_offset_shows_bar() {
        let mut navbar = Navbar::new();
        navbar.scrolled(600.0);
        assert!(!navbar.scrolled(600.0).hidden);
    }
}
