use dioxus::prelude::*;

#[derive(Clone, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    fn get_classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-sky-600 hover:bg-sky-500 text-white font-medium px-5 py-2.5 transition-colors cursor-pointer",
            ButtonVariant::Secondary => "bg-slate-700 hover:bg-slate-600 text-slate-100 font-medium px-5 py-2.5 transition-colors cursor-pointer",
            ButtonVariant::Outline => "border border-slate-600 text-slate-300 hover:border-sky-500 hover:text-white text-sm px-3 py-1.5 transition-colors cursor-pointer",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    children: Element,
    #[props(into)]
    onclick: EventHandler<MouseEvent>,
    #[props(optional, default)]
    variant: ButtonVariant,
    #[props(optional, default)]
    disabled: bool,
    #[props(optional, into)]
    class: String,
}

#[component]
pub fn Button(props: Props) -> Element {
    let variant_classes = props.variant.get_classes();
    let disabled_classes = if props.disabled {
        "opacity-50 cursor-not-allowed pointer-events-none"
    } else {
        ""
    };
    let additional_classes = props.class;

    rsx! {
        button {
            class: "{variant_classes} {disabled_classes} {additional_classes} rounded-md",
            onclick: move |evt| {
                if !props.disabled {
                    props.onclick.call(evt)
                }
            },
            disabled: props.disabled,
            {props.children}
        }
    }
}
