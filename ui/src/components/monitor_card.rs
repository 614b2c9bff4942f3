use chrono::Utc;
use dioxus::prelude::*;
use shared::{
    diagnostics::simplify_error,
    format::{
        format_check_interval, format_last_checked, format_response_time, format_status_code,
        format_url,
    },
    Monitor, MonitorStatus,
};

use crate::{Button, ButtonVariant};

fn status_classes(status: MonitorStatus) -> &'static str {
    match status {
        MonitorStatus::Up => "bg-emerald-500/15 text-emerald-300 border-emerald-500/40",
        MonitorStatus::Down => "bg-red-500/15 text-red-300 border-red-500/40",
        MonitorStatus::Unknown => "bg-slate-500/15 text-slate-300 border-slate-500/40",
    }
}

#[component]
fn Metric(label: &'static str, value: String) -> Element {
    rsx! {
      div {
        dt { class: "text-xs uppercase tracking-wider text-slate-500", "{label}" }
        dd { class: "font-mono text-slate-200", "{value}" }
      }
    }
}

#[component]
pub fn MonitorCard(monitor: Monitor, checking: bool, on_check: EventHandler<String>) -> Element {
    let status = monitor.status();
    let result = monitor.last_result.as_ref();

    let response_time = format_response_time(result.and_then(|r| r.response_time));
    let status_code = format_status_code(result.map(|r| r.status_code).unwrap_or_default());
    // read on every render so the label ages with the refresh cycle
    let last_checked = format_last_checked(result.map(|r| r.timestamp), Utc::now());
    let error = result
        .and_then(|r| r.error.as_deref())
        .map(simplify_error);
    let host = format_url(&monitor.url).to_string();
    let badge = status_classes(status);
    let interval = format_check_interval(monitor.check_interval);
    let id = monitor.id.clone();

    rsx! {
      div { class: "bg-slate-800 border border-slate-700 rounded-xl p-5 flex flex-col gap-4 shadow",
        div { class: "flex items-start justify-between gap-3",
          h3 {
            class: "font-semibold text-white truncate",
            title: "{monitor.url}",
            "{host}"
          }
          span { class: "px-2 py-0.5 text-xs font-mono uppercase border rounded-full {badge}",
            "{status}"
          }
        }

        dl { class: "grid grid-cols-2 gap-3 text-sm",
          Metric { label: "Response Time", value: response_time }
          Metric { label: "Status Code", value: status_code }
          Metric { label: "Last Checked", value: last_checked }
          Metric { label: "Interval", value: interval }
        }

        if let Some(error) = error {
          p { class: "text-sm text-red-300 bg-red-500/10 border border-red-500/30 rounded p-2",
            "{error}"
          }
        }

        Button {
          variant: ButtonVariant::Outline,
          class: "self-start",
          disabled: checking,
          onclick: move |_| on_check.call(id.clone()),
          if checking {
            "Checking..."
          } else {
            "Check Now"
          }
        }
      }
    }
}
