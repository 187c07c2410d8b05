//! Client-side idle tracking
//!
//! Purely informational: going idle never clears the session.

/// DOM events that count as user activity
pub const ACTIVITY_EVENTS: [&str; 5] = ["mousedown", "mousemove", "keypress", "scroll", "touchstart"];

/// Snapshot exposed to views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionActivity {
    /// Milliseconds since the Unix epoch
    pub last_activity: u64,
    pub is_active: bool,
}

/// Tracks the last interaction and flips to inactive past the idle threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityTracker {
    idle_threshold_ms: u64,
    activity: SessionActivity,
}

impl ActivityTracker {
    pub const fn new(now_ms: u64, idle_threshold_ms: u64) -> Self {
        Self {
            idle_threshold_ms,
            activity: SessionActivity {
                last_activity: now_ms,
                is_active: true,
            },
        }
    }

    /// An interaction happened
    pub const fn record(&mut self, now_ms: u64) -> SessionActivity {
        self.activity = SessionActivity {
            last_activity: now_ms,
            is_active: true,
        };
        self.activity
    }

    /// Periodic idle check
    pub const fn tick(&mut self, now_ms: u64) -> SessionActivity {
        if now_ms.saturating_sub(self.activity.last_activity) > self.idle_threshold_ms {
            self.activity.is_active = false;
        }
        self.activity
    }

    pub const fn activity(&self) -> SessionActivity {
        self.activity
    }

    pub const fn idle_threshold_ms(&self) -> u64 {
        self.idle_threshold_ms
    }
}
