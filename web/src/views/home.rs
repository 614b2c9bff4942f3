use dioxus::prelude::*;
use ui::Dashboard;

#[component]
pub fn Home() -> Element {
    rsx! {
        Dashboard {}
    }
}
