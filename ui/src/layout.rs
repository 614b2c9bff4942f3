use crate::components::Footer;
use dioxus::prelude::*;

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
      div { class: "min-h-screen bg-slate-900 text-slate-100",
        div { class: "relative flex flex-col min-h-screen max-w-6xl mx-auto px-4 sm:px-6 lg:px-8",
          {children}
          Footer {}
        }
      }
    }
}
