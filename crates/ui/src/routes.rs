use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};

use crate::views::{AboutView, ActivityView, BmiView, HomeView, QuizView, TipsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/bmi", BmiView)] Bmi {},
        #[route("/activity", ActivityView)] Activity {},
        #[route("/tips", TipsView)] Tips {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/about", AboutView)] About {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let navigator = use_navigator();

    rsx! {
        nav { class: "sidebar",
            h1 { "Health" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Bmi {}, "BMI" } }
                li { Link { to: Route::Activity {}, "Water & Exercise" } }
                li { Link { to: Route::Tips {}, "Tips" } }
                li { Link { to: Route::Quiz {}, "Food Quiz" } }
                li { Link { to: Route::About {}, "About" } }
            }
            button {
                class: "btn btn-secondary sidebar-back",
                r#type: "button",
                onclick: move |_| navigator.go_back(),
                "Back"
            }
        }
    }
}
