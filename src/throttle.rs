//! Notification rate limiting.

use std::time::{Duration, Instant};

/// Minimum spacing between user-facing limit alerts.
pub const NOTIFY_COOLDOWN: Duration = Duration::from_millis(4000);

/// One-slot throttle for "tab closed" notifications.
///
/// Suppressed notifications are dropped, not queued: within a cooldown
/// window the user sees at most one alert, however many tabs were blocked.
/// State lives on the owning core instance and resets with the process.
#[derive(Debug)]
pub struct NotificationThrottle {
    cooldown: Duration,
    last_shown: Option<Instant>,
}

impl NotificationThrottle {
    pub fn new() -> Self {
        Self::with_cooldown(NOTIFY_COOLDOWN)
    }

    pub fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_shown: None,
        }
    }

    /// Whether a notification may be shown at `now`. Records `now` as the
    /// last-shown time when it returns true. The first call always passes.
    pub fn should_notify(&mut self, now: Instant) -> bool {
        let allowed = match self.last_shown {
            Some(last) => now.duration_since(last) >= self.cooldown,
            None => true,
        };
        if allowed {
            self.last_shown = Some(now);
        }
        allowed
    }
}

impl Default for NotificationThrottle {
    fn default() -> Self {
        Self::new()
    }
}
