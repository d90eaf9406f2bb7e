use raylib::prelude::*;

use crate::element::{ActiveFlag, Element};

pub struct HeroSlide {
    image: Texture2D,
    flag: ActiveFlag,
}

impl HeroSlide {
    pub fn new(image: Texture2D, active: bool) -> Self {
        Self {
            image,
            flag: ActiveFlag::new(active),
        }
    }

    /// Draws the slide covering the whole `width` x `height` area, cropping
    /// whichever dimension overflows. Inactive slides draw nothing.
    pub fn draw(&self, d: &mut RaylibDrawHandle, width: f32, height: f32) {
        if !self.flag.is_active() {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        if tex_width <= 0.0 || tex_height <= 0.0 {
            return;
        }

        let scale = (width / tex_width).max(height / tex_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                (width - scaled_width) * 0.5,
                (height - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

impl Element for HeroSlide {
    fn set_active(&mut self, active: bool) {
        self.flag.set_active(active);
    }

    fn is_active(&self) -> bool {
        self.flag.is_active()
    }
}
