use dioxus::prelude::*;

use crate::Route;

/// Shared chrome for every page: sticky header with the main navigation,
/// the routed content, and the footer.
#[component]
pub fn SiteLayout() -> Element {
    let mut menu_open = use_signal(|| false);
    let current = use_route::<Route>();
    let active = move |route: Route| {
        if current == route {
            "nav-active"
        } else {
            ""
        }
    };

    let mobile_nav = if menu_open() {
        rsx! {
            nav {
                class: "mobile-nav",
                Link { to: Route::Home {}, onclick: move |_| menu_open.set(false), "Início" }
                Link { to: Route::About {}, onclick: move |_| menu_open.set(false), "Sobre" }
                Link { to: Route::Events {}, onclick: move |_| menu_open.set(false), "Eventos" }
                Link { to: Route::Directory {}, onclick: move |_| menu_open.set(false), "Encontre um Médico" }
                Link { to: Route::Join {}, onclick: move |_| menu_open.set(false), "Associe-se" }
            }
        }
    } else {
        rsx! {}
    };

    rsx! {
        header {
            class: "site-header",
            div {
                class: "site-header-inner",
                Link {
                    to: Route::Home {},
                    class: "site-brand",
                    "S.P.O."
                    br {}
                    span { style: "font-size: 0.7rem; font-weight: 400; color: #78716c;",
                        "Sociedade Paraense de Oftalmologia"
                    }
                }
                nav {
                    class: "site-nav",
                    Link { to: Route::Home {}, class: active(Route::Home {}), "Início" }
                    Link { to: Route::About {}, class: active(Route::About {}), "Sobre" }
                    Link { to: Route::Events {}, class: active(Route::Events {}), "Eventos" }
                    Link { to: Route::Directory {}, class: active(Route::Directory {}), "Encontre um Médico" }
                    Link { to: Route::Join {}, class: "nav-cta", "Associe-se" }
                }
                button {
                    class: "nav-toggle",
                    onclick: move |_| menu_open.toggle(),
                    "☰"
                }
            }
            {mobile_nav}
        }

        main {
            Outlet::<Route> {}
        }

        footer {
            class: "site-footer",
            div {
                strong { "Sociedade Paraense de Oftalmologia" }
                p { "Promovendo a saúde ocular no estado do Pará." }
            }
            div {
                p { "Belém, Pará, Brasil" }
                a {
                    href: "https://instagram.com/spo.ofc",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "@spo.ofc"
                }
            }
            div {
                Link { to: Route::Login {}, "Área administrativa" }
            }
        }
    }
}
