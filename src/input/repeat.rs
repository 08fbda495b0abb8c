//! Held-key repeat policy
//!
//! A held key fires on the first tick it is down, stays quiet until `delay`
//! ticks have passed, then fires every `interval` ticks.

/// Tick-based key repeat schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatPolicy {
    pub delay: u32,
    pub interval: u32,
}

impl Default for RepeatPolicy {
    fn default() -> Self {
        Self {
            delay: 30,
            interval: 3,
        }
    }
}

impl RepeatPolicy {
    /// Whether a key held for `ticks` ticks (1 = just pressed) fires now
    ///
    /// # Examples
    /// ```
    /// use wordle_board::input::RepeatPolicy;
    ///
    /// let policy = RepeatPolicy::default();
    /// assert!(policy.fires(1));
    /// assert!(!policy.fires(2));
    /// assert!(policy.fires(30));
    /// assert!(policy.fires(33));
    /// ```
    #[must_use]
    pub const fn fires(&self, ticks: u32) -> bool {
        if ticks == 1 {
            return true;
        }
        ticks >= self.delay && self.interval > 0 && (ticks - self.delay) % self.interval == 0
    }
}

/// Tracks one control key across ticks
///
/// Terminals that cannot report key releases deliver every repeat as a fresh
/// press; with `track_release` off each press is treated as a one-tick tap.
#[derive(Debug, Clone, Default)]
pub struct KeyRepeat {
    held: bool,
    pressed: bool,
    ticks: u32,
    track_release: bool,
}

impl KeyRepeat {
    #[must_use]
    pub fn new(track_release: bool) -> Self {
        Self {
            track_release,
            ..Self::default()
        }
    }

    /// Key went down (a repeated press while held is ignored)
    pub fn press(&mut self) {
        if !self.held || !self.track_release {
            self.ticks = 0;
        }
        self.held = true;
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    /// Advance one tick and report whether the key fires
    pub fn tick(&mut self, policy: RepeatPolicy) -> bool {
        let active = self.held || self.pressed;
        self.pressed = false;

        if !active {
            self.ticks = 0;
            return false;
        }

        self.ticks = self.ticks.saturating_add(1);
        let fires = policy.fires(self.ticks);

        if !self.track_release || !self.held {
            self.held = false;
            self.ticks = 0;
        }

        fires
    }
}
