use std::time::Duration;

use crate::constants::AUTO_PLAY_INTERVAL;

/// Recurring auto-play timer, advanced by frame time.
///
/// At most one interval is live: `start` always cancels the current one
/// before scheduling a new one.
#[derive(Debug, Default)]
pub struct AutoPlayTimer {
    elapsed: Option<Duration>,
    started: u64,
}

impl AutoPlayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.stop();
        self.started += 1;
        self.elapsed = Some(Duration::ZERO);
    }

    pub fn stop(&mut self) {
        self.elapsed = None;
    }

    /// Moves the live interval forward and returns how many periods elapsed.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        let Some(elapsed) = self.elapsed.as_mut() else {
            return 0;
        };

        *elapsed += dt;
        let mut fired = 0;
        while *elapsed >= AUTO_PLAY_INTERVAL {
            *elapsed -= AUTO_PLAY_INTERVAL;
            fired += 1;
        }
        fired
    }

    /// Number of pending intervals, 0 or 1.
    pub fn pending(&self) -> usize {
        usize::from(self.elapsed.is_some())
    }

    /// How many intervals have been scheduled since creation.
    pub fn started(&self) -> u64 {
        self.started
    }
}
