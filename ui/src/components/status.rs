use dioxus::prelude::*;

/// Green while the last refresh reached the backend, red otherwise.
#[component]
pub fn LiveIndicator(online: bool) -> Element {
    rsx! {
      span { class: "flex items-center gap-2 text-xs font-mono tracking-widest text-slate-400",
        span {
          class: format!(
              "w-2 h-2 rounded-full {}",
              if online { "bg-emerald-400 animate-pulse" } else { "bg-red-500" },
          ),
        }
        if online {
          "LIVE"
        } else {
          "OFFLINE"
        }
      }
    }
}
