use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{NO_TIPS_MESSAGE, search_tips};

#[component]
pub fn TipsView() -> Element {
    let ctx = use_context::<AppContext>();
    let tips = ctx.tips();
    let mut search = use_signal(String::new);

    let visible = search_tips(&tips, &search());

    rsx! {
        div { class: "page tips-page",
            header { class: "view-header",
                h2 { class: "view-title", "Health Tips" }
                p { class: "view-subtitle", "Search by keyword or tag." }
            }
            div { class: "view-divider" }
            div { class: "tips-search",
                input {
                    class: "tips-search-input",
                    r#type: "text",
                    placeholder: "Search tips...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                if !search().is_empty() {
                    button {
                        class: "tips-search-clear",
                        r#type: "button",
                        onclick: move |_| search.set(String::new()),
                        "×"
                    }
                }
            }
            ul { class: "tips-list",
                if visible.is_empty() {
                    li { class: "tips-empty", "{NO_TIPS_MESSAGE}" }
                }
                for tip in visible {
                    li { class: "tip",
                        p { class: "tip-text", "{tip.text}" }
                        span { class: "tip-tags", "{tip.tags_label}" }
                    }
                }
            }
        }
    }
}
