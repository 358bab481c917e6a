use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "page",
            section {
                class: "hero",
                h1 { "Cuidando da visão do povo paraense" }
                p {
                    "A Sociedade Paraense de Oftalmologia reúne os oftalmologistas "
                    "do estado do Pará em torno da ciência, do ensino e do acesso "
                    "à saúde ocular de qualidade."
                }
                Link {
                    to: Route::Directory {},
                    class: "hero-cta",
                    "Encontre um Médico"
                }
                a {
                    class: "hero-social",
                    href: "https://instagram.com/spo.ofc",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Siga @spo.ofc"
                }
            }

            section {
                class: "tile-grid",
                div {
                    class: "tile tile-primary",
                    h3 { "Missão" }
                    p {
                        "Congregar os especialistas do Pará, fomentar a educação "
                        "continuada e defender o exercício ético da oftalmologia."
                    }
                }
                div {
                    class: "tile",
                    h3 { "Eventos e Jornadas" }
                    p {
                        "Congressos, jornadas e cursos ao longo do ano. Confira a "
                        "agenda e garanta sua inscrição."
                    }
                    Link { to: Route::Events {}, "Ver agenda →" }
                }
                div {
                    class: "tile",
                    h3 { "Associe-se" }
                    p {
                        "Faça parte da S.P.O. e tenha acesso a condições especiais "
                        "em eventos e à rede de membros."
                    }
                    Link { to: Route::Join {}, "Solicitar filiação →" }
                }
            }
        }
    }
}
