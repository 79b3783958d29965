//! Shared application state: config store, clock and broadcast hub.

/// Match-clock state machine.
pub mod clock;
/// Display session registry and fan-out.
pub mod hub;

use std::{path::Path, sync::Arc};

use tokio::{sync::Mutex, task::JoinHandle};

use crate::dao::store::ConfigStore;

pub use self::clock::{ClockMode, ClockState, TickOutcome};
pub use self::hub::{DisplayHub, ExtraTimeState, OverlayState};

/// Cheaply clonable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Clock state machine bundled with the handle of its ticker task, so the
/// task can be cancelled under the same lock that guards the state. At most
/// one ticker exists: it is spawned on start and taken on stop.
pub struct ClockRuntime {
    /// The pure state machine.
    pub state: ClockState,
    /// Handle of the advancing task while the clock runs.
    pub ticker: Option<JoinHandle<()>>,
}

/// Central application state wiring the three core components together.
pub struct AppState {
    store: ConfigStore,
    clock: Mutex<ClockRuntime>,
    hub: DisplayHub,
}

impl AppState {
    /// Load the persisted documents from `data_dir` and construct the shared
    /// state wrapped in an [`Arc`] so it can be cloned cheaply.
    pub async fn new(data_dir: &Path) -> SharedState {
        Arc::new(Self {
            store: ConfigStore::load(data_dir).await,
            clock: Mutex::new(ClockRuntime {
                state: ClockState::new(),
                ticker: None,
            }),
            hub: DisplayHub::new(),
        })
    }

    /// The persistent document store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// The clock runtime guarded by its mutex. Only the clock service locks
    /// this; routes never touch clock state directly.
    pub fn clock(&self) -> &Mutex<ClockRuntime> {
        &self.clock
    }

    /// The display session hub.
    pub fn hub(&self) -> &DisplayHub {
        &self.hub
    }
}
