//! Match-clock state machine.
//!
//! Pure state: the once-per-second ticker task and all broadcasting live in
//! the clock service. The machine has two run states (stopped/running) and an
//! orthogonal direction flag; countdown mode remembers the last explicitly
//! set time so `reset` can restore it.

use crate::dto::ws::ClockStatus;

/// Direction the clock advances in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockMode {
    /// Seconds increase without bound.
    CountUp,
    /// Seconds decrease toward zero and the clock auto-stops there (futsal).
    CountDown,
}

/// Result of advancing the clock by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The clock advanced and keeps running; carries the new seconds value.
    Advanced(u64),
    /// The countdown reached zero; the clock stopped itself.
    ReachedZero,
}

/// Authoritative elapsed-time state and its run/stop/direction machine.
///
/// All inputs are clamped or guarded; no operation fails. Whether a call
/// changed the run state is reported back so the owning scheduler knows when
/// to spawn or cancel the ticker task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    running: bool,
    seconds: u64,
    mode: ClockMode,
    last_countdown_target: u64,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            running: false,
            seconds: 0,
            mode: ClockMode::CountUp,
            last_countdown_target: 0,
        }
    }
}

impl ClockState {
    /// Create a stopped count-up clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the clock is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current seconds value.
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Current direction mode.
    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Externally visible status snapshot.
    pub fn status(&self) -> ClockStatus {
        ClockStatus {
            is_running: self.running,
            seconds: self.seconds,
        }
    }

    /// Transition stopped -> running. Returns true when the transition
    /// happened. Refused silently when already running, or in countdown mode
    /// at zero where there is nothing to count down from.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        if self.mode == ClockMode::CountDown && self.seconds == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Transition running -> stopped. Returns true when the transition
    /// happened.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        true
    }

    /// Force the clock stopped and restore the mode's reset value: zero in
    /// count-up mode, the last explicitly set countdown target otherwise.
    /// Returns the new seconds value.
    pub fn reset(&mut self) -> u64 {
        self.running = false;
        self.seconds = match self.mode {
            ClockMode::CountUp => 0,
            ClockMode::CountDown => self.last_countdown_target,
        };
        self.seconds
    }

    /// Set an absolute time, clamping negatives to zero. In countdown mode
    /// the value also becomes the new reset target. Does not change the run
    /// state. Returns the stored seconds.
    pub fn set_time(&mut self, seconds: i64) -> u64 {
        self.seconds = seconds.max(0) as u64;
        if self.mode == ClockMode::CountDown {
            self.last_countdown_target = self.seconds;
        }
        self.seconds
    }

    /// Switch direction mode, forcing the clock stopped first so a running
    /// ticker cannot race the semantic change. Entering countdown at zero
    /// adopts the remembered target; leaving countdown at zero forgets it.
    pub fn set_mode(&mut self, countdown: bool) {
        self.running = false;
        self.mode = if countdown {
            ClockMode::CountDown
        } else {
            ClockMode::CountUp
        };
        match self.mode {
            ClockMode::CountDown if self.seconds == 0 => {
                self.seconds = self.last_countdown_target;
            }
            ClockMode::CountUp if self.seconds == 0 => {
                self.last_countdown_target = 0;
            }
            _ => {}
        }
    }

    /// Advance by one second. In countdown mode the tick that lands on zero
    /// stops the clock and reports [`TickOutcome::ReachedZero`] so the owning
    /// scheduler can wind the ticker task down.
    pub fn tick(&mut self) -> TickOutcome {
        match self.mode {
            ClockMode::CountUp => {
                self.seconds += 1;
                TickOutcome::Advanced(self.seconds)
            }
            ClockMode::CountDown => {
                self.seconds = self.seconds.saturating_sub(1);
                if self.seconds == 0 {
                    self.running = false;
                    TickOutcome::ReachedZero
                } else {
                    TickOutcome::Advanced(self.seconds)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_stopped_count_up_zero() {
        let clock = ClockState::new();
        assert!(!clock.is_running());
        assert_eq!(clock.seconds(), 0);
        assert_eq!(clock.mode(), ClockMode::CountUp);
    }

    #[test]
    fn start_stop_reflect_run_state() {
        let mut clock = ClockState::new();
        assert!(clock.start());
        assert!(clock.is_running());
        // Starting again is a no-op.
        assert!(!clock.start());
        assert!(clock.stop());
        assert!(!clock.is_running());
        assert!(!clock.stop());
    }

    #[test]
    fn count_up_ticks_accumulate() {
        let mut clock = ClockState::new();
        clock.start();
        for expected in 1..=5 {
            assert_eq!(clock.tick(), TickOutcome::Advanced(expected));
        }
        assert_eq!(clock.seconds(), 5);
    }

    #[test]
    fn countdown_auto_stops_at_zero() {
        let mut clock = ClockState::new();
        clock.set_mode(true);
        clock.set_time(10);
        assert!(clock.start());

        for expected in (1..=9).rev() {
            assert_eq!(clock.tick(), TickOutcome::Advanced(expected));
        }
        assert_eq!(clock.tick(), TickOutcome::ReachedZero);
        assert_eq!(clock.seconds(), 0);
        assert!(!clock.is_running());
    }

    #[test]
    fn countdown_refuses_to_start_at_zero() {
        let mut clock = ClockState::new();
        clock.set_mode(true);
        assert_eq!(clock.seconds(), 0);
        assert!(!clock.start());
        assert!(!clock.is_running());
    }

    #[test]
    fn set_time_clamps_negative_in_both_modes() {
        let mut clock = ClockState::new();
        assert_eq!(clock.set_time(-5), 0);
        clock.set_mode(true);
        assert_eq!(clock.set_time(-5), 0);
    }

    #[test]
    fn reset_count_up_yields_zero() {
        let mut clock = ClockState::new();
        clock.set_time(120);
        clock.start();
        assert_eq!(clock.reset(), 0);
        assert!(!clock.is_running());
    }

    #[test]
    fn reset_countdown_restores_last_target() {
        let mut clock = ClockState::new();
        clock.set_mode(true);
        clock.set_time(600);
        clock.start();
        clock.tick();
        clock.tick();
        assert_eq!(clock.seconds(), 598);
        assert_eq!(clock.reset(), 600);
    }

    #[test]
    fn set_time_updates_countdown_target_only_in_countdown() {
        let mut clock = ClockState::new();
        clock.set_time(30);
        clock.set_mode(true);
        // Entering countdown with a nonzero time keeps it.
        assert_eq!(clock.seconds(), 30);
        clock.set_time(90);
        assert_eq!(clock.reset(), 90);
    }

    #[test]
    fn entering_countdown_at_zero_adopts_remembered_target() {
        let mut clock = ClockState::new();
        clock.set_mode(true);
        clock.set_time(300);
        clock.set_mode(false);
        clock.set_time(0);
        clock.set_mode(true);
        assert_eq!(clock.seconds(), 300);
    }

    #[test]
    fn leaving_countdown_at_zero_forgets_target() {
        let mut clock = ClockState::new();
        clock.set_mode(true);
        clock.set_time(1);
        clock.start();
        assert_eq!(clock.tick(), TickOutcome::ReachedZero);
        clock.set_mode(false);
        clock.set_mode(true);
        // The remembered target was dropped when count-up mode was entered
        // at zero, so countdown comes back with nothing to count from.
        assert_eq!(clock.seconds(), 0);
    }

    #[test]
    fn set_mode_forces_stop() {
        let mut clock = ClockState::new();
        clock.set_time(10);
        clock.start();
        clock.set_mode(true);
        assert!(!clock.is_running());
    }
}
