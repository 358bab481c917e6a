use dioxus::prelude::*;

use ui::{SessionProvider, ToastHost};
use views::{About, Admin, Directory, Events, Home, Join, Login, SiteLayout};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/events")]
    Events {},
    #[route("/directory")]
    Directory {},
    #[route("/join")]
    Join {},
    #[route("/login")]
    Login {},
    #[route("/admin")]
    Admin {},
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        SessionProvider {
            ToastHost {
                Router::<Route> {}
            }
        }
    }
}
