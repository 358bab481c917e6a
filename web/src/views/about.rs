use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        div {
            class: "page",
            div {
                class: "page-intro",
                span { class: "eyebrow", "Quem somos" }
                h1 { "Sobre a S.P.O." }
                p {
                    "Fundada por oftalmologistas paraenses, a Sociedade Paraense "
                    "de Oftalmologia representa a especialidade no estado e "
                    "trabalha pela formação contínua de seus membros."
                }
            }

            section {
                class: "tile-grid",
                div {
                    class: "tile",
                    h3 { "Ciência" }
                    p {
                        "Apoiamos a produção científica regional e trazemos ao "
                        "Pará os grandes nomes da oftalmologia brasileira."
                    }
                }
                div {
                    class: "tile",
                    h3 { "Ética" }
                    p {
                        "Zelamos pelo exercício ético e qualificado da medicina "
                        "oftalmológica em todo o estado."
                    }
                }
                div {
                    class: "tile",
                    h3 { "Comunidade" }
                    p {
                        "Promovemos campanhas de prevenção à cegueira e ações de "
                        "saúde ocular junto à população paraense."
                    }
                }
            }
        }
    }
}
