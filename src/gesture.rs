use crate::constants::SWIPE_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved toward the left edge: show the next slide.
    Left,
    /// Finger moved toward the right edge: show the previous slide.
    Right,
}

/// Horizontal touch gesture: where it started and where it ended.
#[derive(Debug, Default, Clone, Copy)]
pub struct TouchGesture {
    start_x: f32,
    end_x: f32,
}

impl TouchGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32) {
        self.start_x = x;
    }

    /// Records the end of the gesture and classifies it.
    pub fn finish(&mut self, x: f32) -> Option<SwipeDirection> {
        self.end_x = x;
        classify(self.start_x, self.end_x)
    }
}

/// Displacements of exactly the threshold do not count.
pub fn classify(start_x: f32, end_x: f32) -> Option<SwipeDirection> {
    if end_x < start_x - SWIPE_THRESHOLD {
        Some(SwipeDirection::Left)
    } else if end_x > start_x + SWIPE_THRESHOLD {
        Some(SwipeDirection::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_left_swipe_is_left() {
        assert_eq!(classify(200.0, 100.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn long_right_swipe_is_right() {
        assert_eq!(classify(100.0, 200.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn very_long_swipes_still_count() {
        assert_eq!(classify(1000.0, 100.0), Some(SwipeDirection::Left));
        assert_eq!(classify(100.0, 1000.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn short_moves_are_ignored() {
        assert_eq!(classify(200.0, 170.0), None);
        assert_eq!(classify(200.0, 230.0), None);
        assert_eq!(classify(200.0, 150.0), None);
        assert_eq!(classify(200.0, 250.0), None);
    }

    #[test]
    fn gesture_keeps_last_start_between_cycles() {
        let mut gesture = TouchGesture::new();
        gesture.begin(300.0);
        assert_eq!(gesture.finish(100.0), Some(SwipeDirection::Left));
        assert_eq!(gesture.finish(400.0), Some(SwipeDirection::Right));
    }
}
