use dioxus::prelude::*;
use shared::stats::MonitorStats;

#[component]
fn StatCard(label: &'static str, value: String, hint: String, accent: &'static str) -> Element {
    rsx! {
      div { class: "bg-slate-800 border border-slate-700 rounded-xl p-4",
        p { class: "text-xs uppercase tracking-wider text-slate-500", "{label}" }
        p { class: "text-2xl font-bold {accent}", "{value}" }
        p { class: "text-xs text-slate-400 mt-1", "{hint}" }
      }
    }
}

#[component]
pub fn StatsCards(stats: MonitorStats) -> Element {
    rsx! {
      div { class: "grid grid-cols-2 md:grid-cols-4 gap-4 mb-6",
        StatCard {
          label: "Monitors",
          value: stats.total.to_string(),
          hint: "being watched".to_string(),
          accent: "text-white",
        }
        StatCard {
          label: "Up",
          value: stats.up.to_string(),
          hint: stats.down_summary(),
          accent: "text-emerald-300",
        }
        StatCard {
          label: "Uptime",
          value: format!("{}%", stats.uptime_label()),
          hint: "of monitors responding".to_string(),
          accent: "text-sky-300",
        }
        StatCard {
          label: "Avg Response",
          value: format!("{}ms", stats.avg_response_ms),
          hint: "across last checks".to_string(),
          accent: "text-amber-300",
        }
      }
    }
}
