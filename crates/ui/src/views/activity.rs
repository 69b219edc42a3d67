use dioxus::prelude::*;
use health_core::model::ActivityKind;

use crate::context::AppContext;
use crate::views::feed::use_collection_refresh;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{activity_error_message, activity_input_label, activity_title, map_activity_panel};

#[component]
pub fn ActivityView() -> Element {
    rsx! {
        div { class: "page activity-page",
            header { class: "view-header",
                h2 { class: "view-title", "Water & Exercise" }
                p { class: "view-subtitle", "Log what you drink and how long you move." }
            }
            div { class: "view-divider" }
            div { class: "activity-panels",
                ActivityPanel { kind: ActivityKind::Water }
                ActivityPanel { kind: ActivityKind::Exercise }
            }
        }
    }
}

#[component]
fn ActivityPanel(kind: ActivityKind) -> Element {
    let ctx = use_context::<AppContext>();
    let activity = ctx.activity();
    let list_service = ctx.activity();

    let mut amount = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let refresh = use_collection_refresh(kind.collection());
    let resource = use_resource(move || {
        let service = list_service.clone();
        let _ = refresh();
        async move {
            let records = service.list(kind).await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_activity_panel(kind, &records))
        }
    });
    let state = view_state_from_resource(&resource);

    let on_log = move |_: MouseEvent| {
        let activity = activity.clone();
        let raw = amount();
        spawn(async move {
            saving.set(true);
            match activity.log(kind, &raw).await {
                Ok(_) => {
                    error.set(None);
                    amount.set(String::new());
                }
                Err(err) => error.set(Some(activity_error_message(&err))),
            }
            saving.set(false);
        });
    };

    rsx! {
        section { class: "activity-panel activity-panel--{kind}",
            h3 { "{activity_title(kind)}" }
            div { class: "activity-form",
                label { class: "field",
                    span { "{activity_input_label(kind)}" }
                    input {
                        r#type: "number",
                        min: "1",
                        step: "1",
                        value: "{amount}",
                        oninput: move |evt| amount.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: saving(),
                    onclick: on_log,
                    "Log"
                }
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(panel) => rsx! {
                    p { class: "activity-notice", "{panel.notice}" }
                    if !panel.entries.is_empty() {
                        ul { class: "entry-list",
                            for entry in panel.entries {
                                li { key: "{entry.id}", class: "entry",
                                    span { class: "entry-value", "{entry.amount_label}" }
                                    span { class: "entry-meta", "{entry.recorded_at_str}" }
                                }
                            }
                        }
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
        }
    }
}
