//! Keeps the client's view of the monitor list in step with the backend.
//!
//! The controller does no I/O. Whoever drives it asks [`RefreshController::request`]
//! whether to start a fetch and reports the result back through
//! [`RefreshController::complete`], which says whether a queued follow-up fetch
//! should start. At most one fetch is in flight at a time, so responses are
//! applied in the order they were requested.

use crate::monitor::Monitor;
use crate::stats::MonitorStats;

pub const BACKEND_UNREACHABLE: &str = "Failed to load monitors. Make sure the backend is running.";

/// The monitors as of the last successful fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonitorStore {
    monitors: Vec<Monitor>,
}

impl MonitorStore {
    /// Swaps in a full listing. Entries missing from `monitors` are dropped.
    pub fn replace(&mut self, monitors: Vec<Monitor>) {
        self.monitors = monitors;
    }

    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    pub fn stats(&self) -> MonitorStats {
        MonitorStats::collect(&self.monitors)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RefreshState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

/// What the dashboard should render right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardView<'a> {
    Loading,
    Unreachable,
    Empty,
    Monitors(&'a [Monitor]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefreshController {
    state: RefreshState,
    store: MonitorStore,
    in_flight: bool,
    queued: bool,
    active: bool,
}

impl Default for RefreshController {
    fn default() -> Self {
        Self::new()
    }
}

impl RefreshController {
    pub fn new() -> Self {
        Self {
            state: RefreshState::Idle,
            store: MonitorStore::default(),
            in_flight: false,
            queued: false,
            active: true,
        }
    }

    /// Asks for a reload. Returns `true` when the caller should start a fetch now.
    ///
    /// A request made while a fetch is in flight is folded into a single
    /// follow-up that [`complete`](Self::complete) hands back.
    pub fn request(&mut self) -> bool {
        if !self.active {
            return false;
        }
        if self.in_flight {
            self.queued = true;
            return false;
        }

        self.in_flight = true;
        if self.state == RefreshState::Idle {
            self.state = RefreshState::Loading;
        }
        true
    }

    /// Applies the outcome of the in-flight fetch. Returns `true` when a queued
    /// follow-up fetch should start immediately.
    pub fn complete(&mut self, outcome: Result<Vec<Monitor>, String>) -> bool {
        self.in_flight = false;
        if !self.active {
            self.queued = false;
            return false;
        }

        match outcome {
            Ok(monitors) => {
                self.store.replace(monitors);
                self.state = RefreshState::Ready;
            }
            Err(reason) => self.state = RefreshState::Error(reason),
        }

        if self.queued {
            self.queued = false;
            self.in_flight = true;
            return true;
        }
        false
    }

    /// Stops the controller. Later requests are refused and late results dropped.
    pub fn teardown(&mut self) {
        self.active = false;
        self.queued = false;
    }

    pub fn view(&self) -> DashboardView<'_> {
        match &self.state {
            RefreshState::Idle | RefreshState::Loading => DashboardView::Loading,
            RefreshState::Error(_) => DashboardView::Unreachable,
            RefreshState::Ready if self.store.is_empty() => DashboardView::Empty,
            RefreshState::Ready => DashboardView::Monitors(self.store.monitors()),
        }
    }

    pub fn state(&self) -> &RefreshState {
        &self.state
    }

    pub fn store(&self) -> &MonitorStore {
        &self.store
    }

    /// Reason of the last failed fetch, if the last fetch failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            RefreshState::Error(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight
    }
}
