use crate::event::{NavKey, SliderEvent, Visibility};

/// Raw window state sampled once per frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrameSample {
    /// Pointer position, `None` while the cursor is outside the slider area.
    pub pointer: Option<(f32, f32)>,
    /// X of the primary touch (or pressed mouse button), `None` when released.
    pub touch_x: Option<f32>,
    pub hidden: bool,
    pub keys: Vec<NavKey>,
    /// Indicator under the primary touch or pointer this frame.
    pub indicator: Option<usize>,
}

/// Turns successive frame samples into the discrete events the slider
/// listens for. Only transitions produce events.
#[derive(Debug, Default)]
pub struct SignalTracker {
    primed: bool,
    hovering: bool,
    hidden: bool,
    touch_x: Option<f32>,
    pressed_indicator: Option<usize>,
    held_indicator: Option<usize>,
}

impl SignalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, sample: &FrameSample) -> Vec<SliderEvent> {
        let mut events = Vec::new();

        // --- Visibility ---
        if self.primed && sample.hidden != self.hidden {
            events.push(SliderEvent::VisibilityChanged(if sample.hidden {
                Visibility::Hidden
            } else {
                Visibility::Visible
            }));
        }
        self.hidden = sample.hidden;

        // --- Hover ---
        // A cursor already inside on the first frame is an enter like any other
        let hovering = sample.pointer.is_some();
        if hovering != self.hovering {
            events.push(if hovering {
                SliderEvent::PointerEntered
            } else {
                SliderEvent::PointerLeft
            });
        }
        self.hovering = hovering;

        // --- Touch and indicator clicks ---
        // A click needs press and release on the same dot
        match (self.touch_x, sample.touch_x) {
            (None, Some(x)) => {
                events.push(SliderEvent::TouchStarted { x });
                self.pressed_indicator = sample.indicator;
            }
            (Some(last_x), None) => {
                events.push(SliderEvent::TouchEnded { x: last_x });
                match (self.pressed_indicator.take(), self.held_indicator) {
                    (Some(pressed), Some(released)) if pressed == released => {
                        events.push(SliderEvent::IndicatorClicked(pressed));
                    }
                    _ => {}
                }
            }
            _ => {}
        }
        self.touch_x = sample.touch_x;
        if sample.touch_x.is_some() {
            self.held_indicator = sample.indicator;
        }

        // --- Keys ---
        events.extend(sample.keys.iter().map(|&key| SliderEvent::KeyPressed(key)));

        self.primed = true;
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle() -> FrameSample {
        FrameSample::default()
    }

    #[test]
    fn first_idle_frame_is_silent() {
        let mut tracker = SignalTracker::new();
        assert!(tracker.update(&idle()).is_empty());
        assert!(tracker.update(&idle()).is_empty());
    }

    #[test]
    fn starting_hidden_is_not_a_change() {
        let mut tracker = SignalTracker::new();
        let hidden = FrameSample { hidden: true, ..idle() };
        assert!(tracker.update(&hidden).is_empty());
        assert_eq!(
            tracker.update(&idle()),
            vec![SliderEvent::VisibilityChanged(Visibility::Visible)]
        );
    }

    #[test]
    fn hover_transitions_emit_enter_and_leave_once() {
        let mut tracker = SignalTracker::new();
        let inside = FrameSample { pointer: Some((10.0, 10.0)), ..idle() };
        let moved = FrameSample { pointer: Some((20.0, 15.0)), ..idle() };
        assert_eq!(tracker.update(&inside), vec![SliderEvent::PointerEntered]);
        assert!(tracker.update(&moved).is_empty());
        assert_eq!(tracker.update(&idle()), vec![SliderEvent::PointerLeft]);
        assert!(tracker.update(&idle()).is_empty());
    }

    #[test]
    fn touch_end_reports_last_known_position() {
        let mut tracker = SignalTracker::new();
        tracker.update(&idle());
        let down = |x| FrameSample { touch_x: Some(x), ..idle() };
        assert_eq!(tracker.update(&down(200.0)), vec![SliderEvent::TouchStarted { x: 200.0 }]);
        assert!(tracker.update(&down(150.0)).is_empty());
        assert!(tracker.update(&down(90.0)).is_empty());
        assert_eq!(tracker.update(&idle()), vec![SliderEvent::TouchEnded { x: 90.0 }]);
    }

    #[test]
    fn hide_while_hovering_orders_visibility_first() {
        let mut tracker = SignalTracker::new();
        let inside = FrameSample { pointer: Some((1.0, 1.0)), ..idle() };
        tracker.update(&inside);
        let hidden = FrameSample { hidden: true, ..idle() };
        assert_eq!(
            tracker.update(&hidden),
            vec![
                SliderEvent::VisibilityChanged(Visibility::Hidden),
                SliderEvent::PointerLeft,
            ]
        );
    }

    #[test]
    fn keys_pass_through() {
        let mut tracker = SignalTracker::new();
        let sample = FrameSample {
            keys: vec![NavKey::ArrowRight, NavKey::ArrowLeft],
            ..idle()
        };
        assert_eq!(
            tracker.update(&sample),
            vec![
                SliderEvent::KeyPressed(NavKey::ArrowRight),
                SliderEvent::KeyPressed(NavKey::ArrowLeft),
            ]
        );
    }

    fn touching(x: f32, indicator: Option<usize>) -> FrameSample {
        FrameSample { touch_x: Some(x), indicator, ..idle() }
    }

    #[test]
    fn press_and_release_on_a_dot_clicks_it() {
        let mut tracker = SignalTracker::new();
        tracker.update(&idle());
        tracker.update(&touching(640.0, Some(2)));
        tracker.update(&touching(641.0, Some(2)));
        assert_eq!(
            tracker.update(&idle()),
            vec![SliderEvent::TouchEnded { x: 641.0 }, SliderEvent::IndicatorClicked(2)]
        );
    }

    #[test]
    fn drag_onto_a_dot_is_only_a_swipe() {
        let mut tracker = SignalTracker::new();
        tracker.update(&idle());
        tracker.update(&touching(900.0, None));
        tracker.update(&touching(640.0, Some(1)));
        assert_eq!(tracker.update(&idle()), vec![SliderEvent::TouchEnded { x: 640.0 }]);
    }

    #[test]
    fn drag_between_dots_is_not_a_click() {
        let mut tracker = SignalTracker::new();
        tracker.update(&idle());
        tracker.update(&touching(612.0, Some(0)));
        tracker.update(&touching(668.0, Some(2)));
        assert_eq!(tracker.update(&idle()), vec![SliderEvent::TouchEnded { x: 668.0 }]);
    }

    #[test]
    fn drag_off_a_dot_is_not_a_click() {
        let mut tracker = SignalTracker::new();
        tracker.update(&idle());
        tracker.update(&touching(640.0, Some(1)));
        tracker.update(&touching(400.0, None));
        assert_eq!(tracker.update(&idle()), vec![SliderEvent::TouchEnded { x: 400.0 }]);
    }
}
