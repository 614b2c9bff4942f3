use dioxus::prelude::*;

#[component]
pub fn AccessNotice() -> Element {
    rsx! {
      div { class: "mb-6 p-4 rounded-lg border border-amber-500/40 bg-amber-500/10 text-amber-200 text-sm",
        p { class: "font-semibold mb-1", "Shared dashboard" }
        p {
          "Everyone sees the same monitors. Anyone can trigger a check, but adding a monitor requires the admin password."
        }
      }
    }
}
