use dioxus::prelude::*;

use crate::context::AppContext;

#[component]
pub fn AboutView() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "page about-page",
            h2 { "About" }
            p {
                "Health Companion helps you keep an eye on everyday habits: "
                "compute your BMI, log water and exercise, browse short tips, "
                "and test your nutrition knowledge in the food quiz."
            }
            p { "Entries are stored locally for user {ctx.user()}." }
            p { "Quiz progress lasts until the app is closed." }
        }
    }
}
