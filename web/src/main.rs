use dioxus::prelude::*;

use ui::{Layout, ToastProvider};
use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(WebLayout)]
        #[route("/")]
        Home {},
}

const MAIN_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        dotenvy::dotenv().ok();
        dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
    }

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "URL Monitor" }

        ToastProvider { Router::<Route> {} }
    }
}

#[component]
fn WebLayout() -> Element {
    rsx! {
        Layout {
            Outlet::<Route> {}
        }
    }
}
