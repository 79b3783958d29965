//! Clock operations and ownership of the advancing (ticker) task.
//!
//! The pure state machine lives in [`crate::state::clock`]; this module is
//! the owning scheduler. The ticker's join handle is stored next to the
//! state, behind the same mutex, so `stop` and mode switches can cancel it
//! while no tick can possibly be mid-commit.

use std::{sync::Arc, time::Duration};

use tokio::{task::JoinHandle, time::sleep};
use tracing::info;

use crate::{
    dto::ws::ClockStatus,
    services::ws_events,
    state::{SharedState, TickOutcome},
};

/// Snapshot of the clock's externally visible status.
pub async fn current_status(state: &SharedState) -> ClockStatus {
    state.clock().lock().await.state.status()
}

/// Start the clock and spawn the ticker. A start refused by the state
/// machine (already running, or countdown at zero) is a silent no-op.
pub async fn start(state: &SharedState) {
    let mut clock = state.clock().lock().await;
    if !clock.state.start() {
        return;
    }
    clock.ticker = Some(spawn_ticker(Arc::clone(state)));
    let status = clock.state.status();
    drop(clock);

    ws_events::broadcast_status(state, status);
    info!("clock started");
}

/// Stop the clock and cancel the ticker. No-op when already stopped.
pub async fn stop(state: &SharedState) {
    let mut clock = state.clock().lock().await;
    if !clock.state.stop() {
        return;
    }
    if let Some(ticker) = clock.ticker.take() {
        ticker.abort();
    }
    let status = clock.state.status();
    drop(clock);

    ws_events::broadcast_status(state, status);
    info!("clock stopped");
}

/// Force the clock stopped and restore the mode's reset value. Returns the
/// new seconds.
pub async fn reset(state: &SharedState) -> u64 {
    let mut clock = state.clock().lock().await;
    let was_running = clock.state.is_running();
    if let Some(ticker) = clock.ticker.take() {
        ticker.abort();
    }
    let seconds = clock.state.reset();
    let status = clock.state.status();
    drop(clock);

    if was_running {
        ws_events::broadcast_status(state, status);
    }
    ws_events::broadcast_time(state, seconds);
    info!(seconds, "clock reset");
    seconds
}

/// Set an absolute time without touching the run state. Returns the clamped
/// seconds.
pub async fn set_time(state: &SharedState, seconds: i64) -> u64 {
    let mut clock = state.clock().lock().await;
    let seconds = clock.state.set_time(seconds);
    drop(clock);

    ws_events::broadcast_time(state, seconds);
    info!(seconds, "clock time set");
    seconds
}

/// Switch between count-up and countdown mode, stopping the clock first.
pub async fn set_mode(state: &SharedState, countdown: bool) -> ClockStatus {
    let mut clock = state.clock().lock().await;
    if let Some(ticker) = clock.ticker.take() {
        ticker.abort();
    }
    clock.state.set_mode(countdown);
    let status = clock.state.status();
    drop(clock);

    ws_events::broadcast_status(state, status);
    info!(countdown, "clock mode set");
    status
}

/// Spawn the once-per-second advancing task. Each tick commits under the
/// clock mutex before its broadcast, and a countdown that lands on zero ends
/// the task from the outside in: the state machine stops itself and the loop
/// reacts to the outcome instead of re-entering `stop`.
fn spawn_ticker(state: SharedState) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            sleep(Duration::from_secs(1)).await;

            let mut clock = state.clock().lock().await;
            if !clock.state.is_running() {
                break;
            }
            match clock.state.tick() {
                TickOutcome::Advanced(seconds) => {
                    drop(clock);
                    ws_events::broadcast_time(&state, seconds);
                }
                TickOutcome::ReachedZero => {
                    // Detach our own handle; there is nothing left to cancel.
                    clock.ticker = None;
                    let status = clock.state.status();
                    drop(clock);

                    ws_events::broadcast_time(&state, 0);
                    ws_events::broadcast_status(&state, status);
                    info!("countdown reached zero; clock stopped");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    async fn test_state() -> SharedState {
        let dir = std::env::temp_dir().join(format!("pitchside-clock-{}", uuid::Uuid::new_v4()));
        AppState::new(&dir).await
    }

    #[tokio::test(start_paused = true)]
    async fn count_up_ticks_once_per_second() {
        let state = test_state().await;
        start(&state).await;

        // A little past five virtual seconds, so exactly five ticks landed.
        sleep(Duration::from_millis(5_100)).await;
        stop(&state).await;

        let status = current_status(&state).await;
        assert!(!status.is_running);
        assert_eq!(status.seconds, 5);

        // No further ticks after the stop.
        sleep(Duration::from_secs(5)).await;
        assert_eq!(current_status(&state).await.seconds, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_auto_stops_at_zero() {
        let state = test_state().await;
        set_mode(&state, true).await;
        set_time(&state, 3).await;
        start(&state).await;

        sleep(Duration::from_secs(10)).await;

        let status = current_status(&state).await;
        assert!(!status.is_running);
        assert_eq!(status.seconds, 0);
        assert!(state.clock().lock().await.ticker.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn start_while_running_spawns_no_second_ticker() {
        let state = test_state().await;
        start(&state).await;
        sleep(Duration::from_millis(2_100)).await;
        start(&state).await;
        sleep(Duration::from_millis(2_000)).await;
        stop(&state).await;

        // Two tickers would have double-counted the second window.
        assert_eq!(current_status(&state).await.seconds, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn start_refused_for_countdown_at_zero() {
        let state = test_state().await;
        set_mode(&state, true).await;
        start(&state).await;

        assert!(!current_status(&state).await.is_running);
        assert!(state.clock().lock().await.ticker.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn set_mode_cancels_running_ticker() {
        let state = test_state().await;
        start(&state).await;
        sleep(Duration::from_millis(2_100)).await;

        set_mode(&state, true).await;
        let frozen = current_status(&state).await.seconds;
        sleep(Duration::from_secs(3)).await;

        assert_eq!(current_status(&state).await.seconds, frozen);
        assert!(!current_status(&state).await.is_running);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_restores_countdown_target() {
        let state = test_state().await;
        set_mode(&state, true).await;
        set_time(&state, 600).await;
        start(&state).await;
        sleep(Duration::from_millis(2_100)).await;

        assert_eq!(reset(&state).await, 600);
        assert!(!current_status(&state).await.is_running);
    }
}
