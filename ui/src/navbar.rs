use dioxus::prelude::*;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header { class: "flex justify-between items-center py-6 border-b border-slate-800",
            div { class: "flex items-center gap-3 cursor-default",
                div { class: "w-10 h-10 bg-sky-600 rounded-lg flex items-center justify-center shadow-lg",
                    svg {
                        class: "w-6 h-6 text-white",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M3 12h4l3 8 4-16 3 8h4",
                        }
                    }
                }
                div {
                    h1 { class: "text-2xl font-bold tracking-tight text-white", "URL Monitor" }
                    p { class: "text-sm text-slate-400", "Uptime and response times at a glance" }
                }
            }

            nav { class: "flex items-center gap-4", {children} }
        }
    }
}
