use std::time::Duration;

use tracing::trace;

use crate::element::Element;
use crate::event::{NavKey, SliderEvent, Visibility};
use crate::gesture::{SwipeDirection, TouchGesture};
use crate::timer::AutoPlayTimer;

/// Slides and indicators as discovered, before any slider logic is attached.
///
/// By convention slide 0 (and indicator 0) arrive already active.
#[derive(Debug)]
pub struct Markup<S, I> {
    pub slides: Vec<S>,
    pub indicators: Vec<I>,
}

impl<S, I> Markup<S, I> {
    pub fn new(slides: Vec<S>, indicators: Vec<I>) -> Self {
        Self { slides, indicators }
    }
}

/// Result of mounting: either a live controller or markup left as-is.
#[derive(Debug)]
pub enum Mounted<S, I> {
    Active(SliderController<S, I>),
    Inert(Markup<S, I>),
}

impl<S: Element, I: Element> Mounted<S, I> {
    pub fn slides(&self) -> &[S] {
        match self {
            Mounted::Active(controller) => controller.slides(),
            Mounted::Inert(markup) => &markup.slides,
        }
    }

    pub fn indicators(&self) -> &[I] {
        match self {
            Mounted::Active(controller) => controller.indicators(),
            Mounted::Inert(markup) => &markup.indicators,
        }
    }

    pub fn controller_mut(&mut self) -> Option<&mut SliderController<S, I>> {
        match self {
            Mounted::Active(controller) => Some(controller),
            Mounted::Inert(_) => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Mounted::Active(_))
    }
}

pub struct SliderController<S, I> {
    slides: Vec<S>,
    indicators: Vec<I>,
    current: usize,
    auto_play: AutoPlayTimer,
    touch: TouchGesture,
}

impl<S, I> std::fmt::Debug for SliderController<S, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderController")
            .field("slides", &self.slides.len())
            .field("indicators", &self.indicators.len())
            .field("current", &self.current)
            .field("auto_play", &self.auto_play)
            .finish()
    }
}

impl<S: Element, I: Element> SliderController<S, I> {
    /// Attaches slider behavior to the markup and starts auto-play.
    ///
    /// Fewer than two slides need no rotation, so the markup comes back
    /// untouched as `Mounted::Inert`.
    pub fn mount(markup: Markup<S, I>) -> Mounted<S, I> {
        if markup.slides.len() <= 1 {
            return Mounted::Inert(markup);
        }

        let mut controller = Self {
            slides: markup.slides,
            indicators: markup.indicators,
            current: 0,
            auto_play: AutoPlayTimer::new(),
            touch: TouchGesture::new(),
        };
        controller.start_auto_play();
        Mounted::Active(controller)
    }

    pub fn show_slide(&mut self, index: usize) {
        if index >= self.slides.len() {
            return;
        }

        for slide in self.slides.iter_mut() {
            slide.set_active(false);
        }
        for indicator in self.indicators.iter_mut() {
            indicator.set_active(false);
        }

        self.slides[index].set_active(true);
        if let Some(indicator) = self.indicators.get_mut(index) {
            indicator.set_active(true);
        }

        self.current = index;
        trace!(index, "slide shown");
    }

    pub fn next_slide(&mut self) {
        let next = (self.current + 1) % self.slides.len();
        self.show_slide(next);
    }

    pub fn prev_slide(&mut self) {
        let len = self.slides.len();
        let prev = (self.current + len - 1) % len;
        self.show_slide(prev);
    }

    pub fn start_auto_play(&mut self) {
        self.stop_auto_play();
        self.auto_play.start();
    }

    pub fn stop_auto_play(&mut self) {
        self.auto_play.stop();
    }

    fn restart_auto_play(&mut self) {
        self.stop_auto_play();
        self.start_auto_play();
    }

    /// Feeds elapsed time to auto-play, advancing once per elapsed period.
    pub fn tick(&mut self, dt: Duration) {
        for _ in 0..self.auto_play.advance(dt) {
            self.next_slide();
        }
    }

    pub fn handle(&mut self, event: SliderEvent) {
        match event {
            SliderEvent::IndicatorClicked(index) => {
                // Dots without a matching slide have nothing to show
                if index < self.slides.len() {
                    self.show_slide(index);
                    self.restart_auto_play();
                }
            }
            SliderEvent::KeyPressed(NavKey::ArrowLeft) => {
                self.prev_slide();
                self.restart_auto_play();
            }
            SliderEvent::KeyPressed(NavKey::ArrowRight) => {
                self.next_slide();
                self.restart_auto_play();
            }
            SliderEvent::PointerEntered => self.stop_auto_play(),
            SliderEvent::PointerLeft => self.start_auto_play(),
            SliderEvent::TouchStarted { x } => self.touch.begin(x),
            SliderEvent::TouchEnded { x } => match self.touch.finish(x) {
                Some(SwipeDirection::Left) => {
                    self.next_slide();
                    self.restart_auto_play();
                }
                Some(SwipeDirection::Right) => {
                    self.prev_slide();
                    self.restart_auto_play();
                }
                None => {}
            },
            SliderEvent::VisibilityChanged(Visibility::Hidden) => self.stop_auto_play(),
            SliderEvent::VisibilityChanged(Visibility::Visible) => self.start_auto_play(),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn indicators(&self) -> &[I] {
        &self.indicators
    }

    pub fn auto_play(&self) -> &AutoPlayTimer {
        &self.auto_play
    }
}
