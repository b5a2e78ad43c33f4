//! Session state and the logout countdown
//!
//! A session exists from a successful login until logout, closure or
//! expiry. The countdown is sliding-expiration: every successful mutating
//! operation restarts it at the full duration. Time advances only through
//! discrete [`SessionTimer::tick`] calls delivered by the event loop, so
//! the whole mechanism is deterministic under test.

/// Countdown until forced logout
///
/// At most one countdown exists per session; restarting replaces the
/// remaining value rather than stacking a second timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimer {
    duration: u32,
    remaining: u32,
}

impl SessionTimer {
    /// Start a countdown at the full duration (in ticks)
    pub fn start(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
        }
    }

    /// Restart at the full duration ("activity extends session")
    pub fn restart(&mut self) {
        self.remaining = self.duration;
    }

    /// Advance one tick; returns true when the countdown has expired
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    /// Remaining ticks
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Remaining time as an `MM:SS` label
    pub fn label(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

/// The currently authenticated account and its display state
#[derive(Debug, Clone)]
pub struct Session {
    /// Username of the logged-in account
    pub username: String,

    /// Display-only sort toggle; the stored ledger order never changes
    pub sorted: bool,

    /// Logout countdown
    pub timer: SessionTimer,
}

impl Session {
    /// Open a session for `username` with a fresh countdown
    pub fn open(username: impl Into<String>, timeout: u32) -> Self {
        Self {
            username: username.into(),
            sorted: false,
            timer: SessionTimer::start(timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_counts_down_to_expiry() {
        let mut timer = SessionTimer::start(3);
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_timer_restart() {
        let mut timer = SessionTimer::start(120);
        timer.tick();
        timer.tick();
        assert_eq!(timer.remaining(), 118);

        timer.restart();
        assert_eq!(timer.remaining(), 120);
    }

    #[test]
    fn test_timer_label() {
        let mut timer = SessionTimer::start(120);
        assert_eq!(timer.label(), "02:00");
        timer.tick();
        assert_eq!(timer.label(), "01:59");
    }

    #[test]
    fn test_expired_timer_stays_expired() {
        let mut timer = SessionTimer::start(1);
        assert!(timer.tick());
        assert!(timer.tick());
        assert_eq!(timer.label(), "00:00");
    }

    #[test]
    fn test_open_session_is_unsorted() {
        let session = Session::open("js", 120);
        assert_eq!(session.username, "js");
        assert!(!session.sorted);
        assert_eq!(session.timer.remaining(), 120);
    }
}
