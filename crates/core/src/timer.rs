/// One second of countdown progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    /// Seconds left after this tick, never below zero.
    pub remaining: u32,
    /// Set on the single tick that reaches zero.
    pub expired: bool,
}

/// Cooperative per-question countdown.
///
/// The timer does not own a clock. Whoever drives it calls
/// [`CountdownTimer::tick`] once per elapsed second; the tick that reaches zero
/// reports expiry and deactivates the timer, so expiry is seen exactly once per
/// `start`.
#[derive(Debug, Clone, Default)]
pub struct CountdownTimer {
    limit: u32,
    elapsed: u32,
    active: bool,
}

impl CountdownTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restarts the countdown at `limit_secs` seconds.
    pub fn start(&mut self, limit_secs: u32) {
        self.limit = limit_secs;
        self.elapsed = 0;
        self.active = true;
    }

    /// Stops the timer. Later ticks are ignored until the next `start`.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Advances the countdown by one second.
    ///
    /// Returns `None` when the timer is not running.
    pub fn tick(&mut self) -> Option<TimerTick> {
        if !self.active {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(1).min(self.limit);
        let remaining = self.remaining();
        let expired = remaining == 0;
        if expired {
            self.active = false;
        }
        Some(TimerTick { remaining, expired })
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.elapsed)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Renders seconds as `MM:SS`, or `--:--` when there is nothing to show.
#[must_use]
pub fn format_clock(seconds: Option<u32>) -> String {
    match seconds {
        Some(s) => format!("{:02}:{:02}", s / 60, s % 60),
        None => "--:--".to_owned(),
    }
}
