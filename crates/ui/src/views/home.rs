use dioxus::prelude::*;
use dioxus_router::Link;
use health_core::model::{ActivityKind, HealthCollection};
use services::last_entry_notice;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::feed::use_collection_refresh;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::format_bmi;

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    water_notice: String,
    exercise_notice: String,
    bmi_notice: String,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let activity = ctx.activity();
    let bmi = ctx.bmi();
    let quiz_progress = {
        let select = ctx.quiz().level_select();
        format!(
            "Quiz progress: level {} of {} unlocked.",
            select.max_unlocked, select.total_levels
        )
    };

    let water_refresh = use_collection_refresh(HealthCollection::WaterLogs);
    let exercise_refresh = use_collection_refresh(HealthCollection::ExerciseLogs);
    let bmi_refresh = use_collection_refresh(HealthCollection::BmiHistory);

    let resource = use_resource(move || {
        let activity = activity.clone();
        let bmi = bmi.clone();
        let _ = (water_refresh(), exercise_refresh(), bmi_refresh());
        async move {
            let water = activity
                .latest(ActivityKind::Water)
                .await
                .map_err(|_| ViewError::Unknown)?;
            let exercise = activity
                .latest(ActivityKind::Exercise)
                .await
                .map_err(|_| ViewError::Unknown)?;
            let history = bmi.history().await.map_err(|_| ViewError::Unknown)?;
            let bmi_notice = history.last().map_or_else(
                || "No BMI readings yet.".to_string(),
                |record| {
                    format!(
                        "Latest BMI: {} ({}).",
                        format_bmi(&record.reading),
                        record.reading.category()
                    )
                },
            );
            Ok(HomeData {
                water_notice: last_entry_notice(ActivityKind::Water, water.as_ref()),
                exercise_notice: last_entry_notice(ActivityKind::Exercise, exercise.as_ref()),
                bmi_notice,
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Welcome" }
                p { class: "view-subtitle", "Logging as {ctx.user()}" }
            }
            div { class: "view-divider" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    ul { class: "home-summary",
                        li { "{data.water_notice}" }
                        li { "{data.exercise_notice}" }
                        li { "{data.bmi_notice}" }
                        li { "{quiz_progress}" }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }

            div { class: "home-links",
                Link { class: "btn btn-primary", to: Route::Bmi {}, "Check BMI" }
                Link { class: "btn btn-primary", to: Route::Activity {}, "Log water & exercise" }
                Link { class: "btn btn-primary", to: Route::Tips {}, "Browse tips" }
                Link { class: "btn btn-primary", to: Route::Quiz {}, "Play the food quiz" }
            }
        }
    }
}
