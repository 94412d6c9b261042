//! Time and work ceilings for the anytime planners.
//!
//! # Cadence
//!
//! Reading the monotonic clock on every expansion would dominate the inner
//! loop on small graphs, so [`SearchGuard`] only samples
//! [`Instant::now`] every `check_every` expansions.  The ceiling is a soft
//! deadline: a search may overrun it by at most `check_every` expansions.
//!
//! An optional `max_expansions` cap makes a search fully deterministic,
//! which is what the unit tests rely on.

use std::time::{Duration, Instant};

/// Bounds on a single planner call.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Wall-clock ceiling measured from the start of the call.
    pub time_ceiling: Duration,

    /// Hard cap on node expansions.  `None` means unlimited.
    pub max_expansions: Option<u64>,

    /// Sample the clock every N expansions.  `0` is treated as `1`.
    pub check_every: u32,
}

impl SearchLimits {
    /// Maximum-coverage search ("Mode 1"): about one second.
    pub fn mode1() -> Self {
        Self::with_ceiling(Duration::from_millis(1_000))
    }

    /// Default planning mode ("Mode 2"): about 1.2 seconds.
    pub fn mode2() -> Self {
        Self::with_ceiling(Duration::from_millis(1_200))
    }

    pub fn with_ceiling(time_ceiling: Duration) -> Self {
        Self {
            time_ceiling,
            max_expansions: None,
            check_every: 64,
        }
    }

    /// Cap the number of expansions (builder style).
    pub fn max_expansions(mut self, n: u64) -> Self {
        self.max_expansions = Some(n);
        self
    }

    /// Start a guard for one search run.
    pub fn start(&self) -> SearchGuard {
        SearchGuard {
            started:     Instant::now(),
            limits:      *self,
            expansions:  0,
            until_check: 0,
            expired:     false,
        }
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::mode2()
    }
}

/// Per-run expansion counter and deadline check.
#[derive(Debug)]
pub struct SearchGuard {
    started:     Instant,
    limits:      SearchLimits,
    expansions:  u64,
    until_check: u32,
    expired:     bool,
}

impl SearchGuard {
    /// Record one expansion.  Returns `false` once the search must stop.
    ///
    /// After returning `false` the guard stays expired.
    pub fn tick(&mut self) -> bool {
        if self.expired {
            return false;
        }
        if self.limits.max_expansions.is_some_and(|cap| self.expansions >= cap) {
            self.expired = true;
            return false;
        }
        if self.until_check == 0 {
            self.until_check = self.limits.check_every.max(1);
            if self.started.elapsed() >= self.limits.time_ceiling {
                self.expired = true;
                return false;
            }
        }
        self.until_check -= 1;
        self.expansions += 1;
        true
    }

    /// Expansions granted so far.
    #[inline]
    pub fn expansions(&self) -> u64 {
        self.expansions
    }

    /// `true` once a limit has been hit.
    #[inline]
    pub fn expired(&self) -> bool {
        self.expired
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
