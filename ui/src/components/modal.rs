use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    /// Called when the backdrop or the close button is clicked
    pub on_close: EventHandler,
    /// The content to be displayed inside the modal
    pub children: Element,
    /// The header of the modal
    pub header: Element,
    /// When false, clicks outside and the close button do nothing
    #[props(default = true)]
    pub dismissible: bool,
}

#[component]
pub fn Modal(props: Props) -> Element {
    let close = move |_| {
        if props.dismissible {
            props.on_close.call(())
        }
    };

    rsx! {
      // Backdrop
      div {
        class: "fixed inset-0 bg-black/60 backdrop-blur-sm z-40 transition-opacity",
        onclick: close,
      }

      // Container
      div {
        class: "fixed inset-0 flex items-center justify-center z-50 pointer-events-none",
        onclick: close,

        div {
          class: "bg-slate-800 border border-slate-700 max-h-[85vh] overflow-hidden flex flex-col rounded-xl shadow-2xl max-w-md w-full pointer-events-auto",
          onclick: move |event| event.stop_propagation(),
          div { class: "flex items-center justify-between p-4 border-b border-slate-700",
            div { class: "flex-1 min-w-0", {props.header} }
            button {
              class: "text-slate-400 hover:text-white transition-colors ml-4 cursor-pointer disabled:opacity-30",
              disabled: !props.dismissible,
              onclick: close,
              svg {
                class: "w-5 h-5",
                fill: "none",
                view_box: "0 0 24 24",
                stroke: "currentColor",
                path {
                  stroke_linecap: "round",
                  stroke_linejoin: "round",
                  stroke_width: "2",
                  d: "M6 18L18 6M6 6l12 12",
                }
              }
            }
          }
          div { class: "overflow-y-auto p-4", {props.children} }
        }
      }
    }
}
