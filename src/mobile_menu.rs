use raylib::prelude::*;

/// Transform of one hamburger bar, in the icon's own pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPose {
    pub rotation: f32, // degrees
    pub translate: Vector2,
    pub opacity: f32,
}

impl BarPose {
    const REST: BarPose = BarPose {
        rotation: 0.0,
        translate: Vector2 { x: 0.0, y: 0.0 },
        opacity: 1.0,
    };
}

#[derive(Debug, Default, Clone)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_clicked(&mut self) {
        self.open = !self.open;
    }

    /// Following any menu link closes the menu.
    pub fn link_clicked(&mut self) {
        self.open = false;
    }

    /// Bars of the toggle icon: three lines at rest, an X while open.
    pub fn bars(&self) -> [BarPose; 3] {
        if !self.open {
            return [BarPose::REST; 3];
        }
        [
            BarPose { rotation: 45.0, translate: Vector2::new(5.0, 5.0), opacity: 1.0 },
            BarPose { opacity: 0.0, ..BarPose::REST },
            BarPose { rotation: -45.0, translate: Vector2::new(5.0, -5.0), opacity: 1.0 },
        ]
    }

    /// Draws the toggle icon inside `area`; bars are 25x3 with 5 pixel gaps.
    pub fn draw_toggle(&self, d: &mut RaylibDrawHandle, area: Rectangle, color: Color) {
        let left = area.x + (area.width - 25.0) * 0.5;
        let top = area.y + (area.height - 19.0) * 0.5;

        for (row, pose) in self.bars().iter().enumerate() {
            if pose.opacity <= 0.0 {
                continue;
            }
            let center = Vector2::new(
                left + 12.5 + pose.translate.x,
                top + row as f32 * 8.0 + 1.5 + pose.translate.y,
            );
            d.draw_rectangle_pro(
                Rectangle::new(center.x, center.y, 25.0, 3.0),
                Vector2::new(12.5, 1.5),
                pose.rotation,
                color.fade(pose.opacity),
            );
        }
    }
}
