/// A recurring timer driven by frame delta time.
///
/// There is a single handle per timer: arming it again always discards the
/// pending countdown first, so two schedules can never be live at once.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTimer {
    interval: f32,
    elapsed: Option<f32>, // None while cancelled
}

impl IntervalTimer {
    /// Creates a cancelled timer. `interval` is in seconds and must be positive.
    pub fn new(interval: f32) -> Self {
        assert!(interval > 0.0, "interval must be positive");
        Self { interval, elapsed: None }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.elapsed.is_some()
    }

    /// Cancels any pending countdown and starts a fresh full interval.
    pub fn restart(&mut self) {
        self.elapsed = Some(0.0);
    }

    pub fn cancel(&mut self) {
        self.elapsed = None;
    }

    /// Seconds left until the next tick, if armed.
    pub fn remaining(&self) -> Option<f32> {
        self.elapsed.map(|elapsed| self.interval - elapsed)
    }

    /// Moves time forward and returns how many ticks fired.
    ///
    /// The timer keeps its phase across ticks: a tick does not restart it.
    /// Negative or non-finite steps are treated as no time passing.
    pub fn advance(&mut self, dt: f32) -> u32 {
        let Some(elapsed) = self.elapsed.as_mut() else {
            return 0;
        };
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }

        *elapsed += dt;
        if *elapsed < self.interval {
            return 0;
        }
        let ticks = (*elapsed / self.interval).floor();
        *elapsed %= self.interval;
        ticks as u32
    }
}
