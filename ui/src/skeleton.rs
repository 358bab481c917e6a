use dioxus::prelude::*;

/// Placeholder cards shown while a list request is in flight.
#[component]
pub fn SkeletonGrid(
    #[props(default = 6)] count: usize,
    #[props(default = "".to_string())] class: String,
) -> Element {
    rsx! {
        div {
            class: "skeleton-grid {class}",
            for i in 0..count {
                div { key: "{i}", class: "skeleton-card" }
            }
        }
    }
}
