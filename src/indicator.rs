use raylib::prelude::*;

use crate::constants::DOT_RADIUS;
use crate::element::{ActiveFlag, Element};

/// Navigation dot. Its position comes from the layout each frame.
#[derive(Debug, Default)]
pub struct Dot {
    flag: ActiveFlag,
}

impl Dot {
    pub fn new(active: bool) -> Self {
        Self { flag: ActiveFlag::new(active) }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, center: (f32, f32)) {
        let center = Vector2::new(center.0, center.1);
        let fill = if self.flag.is_active() {
            Color::WHITE
        } else {
            Color::new(255, 255, 255, 110)
        };
        d.draw_circle_v(center, DOT_RADIUS + 1.5, Color::new(0, 0, 0, 90));
        d.draw_circle_v(center, DOT_RADIUS, fill);
    }
}

impl Element for Dot {
    fn set_active(&mut self, active: bool) {
        self.flag.set_active(active);
    }

    fn is_active(&self) -> bool {
        self.flag.is_active()
    }
}
