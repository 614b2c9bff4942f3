use std::time::Duration;

use api::{check_monitor, get_dashboard_settings, list_monitors};
use dioxus::logger::tracing::{debug, error, warn};
use dioxus::prelude::*;
use shared::{
    check::{CheckTracker, CHECK_FAILED, CHECK_REQUESTED},
    refresh::{DashboardView, RefreshController, RefreshState, BACKEND_UNREACHABLE},
    DashboardSettings, Monitor,
};

use crate::{
    timer::sleep, use_notifier, AccessNotice, AddMonitor, LiveIndicator, MonitorCard, Navbar,
    StatsCards,
};

/// Drives list fetches through the shared [`RefreshController`].
#[derive(Clone, Copy)]
struct Refresher {
    controller: Signal<RefreshController>,
}

impl Refresher {
    /// Fetches the list, then any follow-up queued while it was in flight.
    async fn reload(mut self) {
        if !self.controller.write().request() {
            debug!("Refresh coalesced into the one in flight");
            return;
        }

        loop {
            let outcome = list_monitors().await.map_err(|e| {
                warn!("Refreshing monitors failed: {e}");
                e.to_string()
            });

            // the task dies with the dashboard, so the controller is still alive here
            let follow_up = self.controller.write().complete(outcome);
            if !follow_up {
                break;
            }
        }
    }

    fn reload_after(self, delay: Duration) {
        spawn(async move {
            sleep(delay).await;
            self.reload().await;
        });
    }
}

fn summary(count: usize, refresh_secs: u64) -> String {
    let noun = if count == 1 { "monitor" } else { "monitors" };
    format!("{count} {noun} • Auto-refresh every {refresh_secs}s")
}

#[component]
pub fn Dashboard() -> Element {
    let notifier = use_notifier();
    let mut settings = use_signal(DashboardSettings::default);
    let mut controller = use_signal(RefreshController::new);
    let mut checks = use_signal(CheckTracker::default);
    let refresher = Refresher { controller };

    // cancelled by Dioxus when the dashboard unmounts
    use_future(move || async move {
        match get_dashboard_settings().await {
            Ok(loaded) => settings.set(loaded),
            Err(e) => warn!("Using default dashboard settings: {e}"),
        }
        notifier.set_display(settings().notification_duration());

        refresher.reload().await;
        loop {
            sleep(settings().refresh_interval()).await;
            refresher.reload().await;
        }
    });

    use_drop(move || {
        if let Ok(mut controller) = controller.try_write() {
            controller.teardown();
        }
    });

    let on_check = move |id: String| {
        spawn(async move {
            checks.write().begin(&id);
            let outcome = check_monitor(id.clone()).await;
            checks.write().settle(&id);

            match outcome {
                Ok(()) => {
                    notifier.success(CHECK_REQUESTED);
                    refresher.reload_after(settings().check_refresh_delay());
                }
                Err(e) => {
                    error!("Check for monitor {id} failed: {e}");
                    notifier.error(CHECK_FAILED);
                }
            }
        });
    };

    let on_added = move |_: Monitor| {
        refresher.reload_after(settings().create_refresh_delay());
    };

    let current = settings();
    let state = controller.read();
    let online = !matches!(state.state(), RefreshState::Error(_));
    let refreshing = state.is_fetching();

    let body = match state.view() {
        DashboardView::Loading => rsx! {
          div { class: "flex flex-col items-center justify-center py-16 gap-3 text-slate-400",
            div { class: "w-8 h-8 border-2 border-slate-600 border-t-sky-500 rounded-full animate-spin" }
            p { "Loading monitors..." }
          }
        },
        DashboardView::Unreachable => {
            let reason = state.error().unwrap_or_default().to_string();
            rsx! {
              div { class: "p-4 bg-red-900/20 border border-red-500/50 rounded-lg text-red-300",
                p { "{BACKEND_UNREACHABLE}" }
                p { class: "mt-1 text-xs font-mono text-red-400/70", "{reason}" }
              }
            }
        }
        DashboardView::Empty => rsx! {
          div { class: "text-center py-16 text-slate-400",
            p { class: "text-lg", "No monitors yet" }
            p { class: "text-sm", "Add a URL above to start watching it." }
          }
        },
        DashboardView::Monitors(monitors) => {
            let checking = checks.read();
            rsx! {
              StatsCards { stats: state.store().stats() }
              h2 { class: "text-sm text-slate-400 mb-3",
                {summary(monitors.len(), current.refresh_interval_secs)}
                if refreshing {
                  span { class: "ml-2 text-sky-400", "Refreshing..." }
                }
              }
              div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                for monitor in monitors.iter() {
                  MonitorCard {
                    key: "{monitor.id}",
                    monitor: monitor.clone(),
                    checking: checking.is_checking(&monitor.id),
                    on_check,
                  }
                }
              }
            }
        }
    };

    rsx! {
      Navbar {
        LiveIndicator { online }
      }
      main { class: "flex-grow py-8",
        AccessNotice {}
        AddMonitor { check_interval: current.default_check_interval, on_added }
        {body}
      }
    }
}
