use std::time::Duration;

use raylib::prelude::*;
use tracing::{debug, info, warn};

use crate::constants::AUTO_PLAY_INTERVAL;
use crate::controller::{Markup, Mounted, SliderController};
use crate::event::NavKey;
use crate::indicator::Dot;
use crate::layout::{dot_centers, hit_test};
use crate::signals::{FrameSample, SignalTracker};
use crate::slide::HeroSlide;
use crate::source::SlideEntry;
use crate::texture_loader::load_texture;

/// Hosts the slider in a raylib window: samples input, drives the
/// controller and draws whatever is active.
pub struct HeroEngine {
    slider: Mounted<HeroSlide, Dot>,
    signals: SignalTracker,
}

impl HeroEngine {
    pub fn initialize(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        entries: Vec<SlideEntry>,
    ) -> Self {
        let mut slides = Vec::with_capacity(entries.len());
        for entry in entries {
            match load_texture(rl, thread, &entry.image) {
                Ok(texture) => {
                    debug!(title = %entry.title, path = %entry.image.display(), "slide loaded");
                    // First slide starts active, as the markup would have it
                    let first = slides.is_empty();
                    slides.push(HeroSlide::new(texture, first));
                }
                Err(e) => warn!(path = %entry.image.display(), error = %e, "skipping slide"),
            }
        }

        let dots = (0..slides.len()).map(|i| Dot::new(i == 0)).collect();
        let slider = SliderController::mount(Markup::new(slides, dots));
        if slider.is_active() {
            info!(slides = slider.slides().len(), interval = ?AUTO_PLAY_INTERVAL, "slider running");
        } else {
            info!(slides = slider.slides().len(), "fewer than two slides, rotation disabled");
        }

        Self {
            slider,
            signals: SignalTracker::new(),
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slider.slides().len()
    }

    fn sample(&self, rl: &RaylibHandle) -> FrameSample {
        let mouse = rl.get_mouse_position();

        let pointer = rl.is_cursor_on_screen().then_some((mouse.x, mouse.y));

        let touch = if rl.get_touch_point_count() > 0 {
            Some(rl.get_touch_position(0))
        } else if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            Some(mouse)
        } else {
            None
        };

        let centers = dot_centers(
            self.slider.indicators().len(),
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
        );
        let at = touch.unwrap_or(mouse);
        let indicator = hit_test((at.x, at.y), &centers);

        let mut keys = Vec::new();
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            keys.push(NavKey::ArrowLeft);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            keys.push(NavKey::ArrowRight);
        }

        FrameSample {
            pointer,
            touch_x: touch.map(|point| point.x),
            hidden: rl.is_window_minimized() || rl.is_window_hidden(),
            keys,
            indicator,
        }
    }

    pub fn update(&mut self, rl: &RaylibHandle, dt: Duration) {
        let sample = self.sample(rl);
        let events = self.signals.update(&sample);

        let Some(controller) = self.slider.controller_mut() else {
            return;
        };
        for event in events {
            debug!(?event, "slider input");
            controller.handle(event);
        }
        controller.tick(dt);
    }

    pub fn render_frame(&self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let width = rl.get_screen_width() as f32;
        let height = rl.get_screen_height() as f32;

        let mut d = rl.begin_drawing(thread);
        d.clear_background(Color::BLACK);

        for slide in self.slider.slides() {
            slide.draw(&mut d, width, height);
        }

        // A lone slide has nothing to navigate to
        if self.slider.is_active() {
            let dots = self.slider.indicators();
            for (dot, center) in dots.iter().zip(dot_centers(dots.len(), width, height)) {
                dot.draw(&mut d, center);
            }
        }
    }
}
