use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
      footer { class: "py-4 mt-8 text-center border-t border-slate-800",
        p { class: "text-xs text-slate-500",
          "Checks run on the monitoring backend. This page only displays their results."
        }
      }
    }
}
