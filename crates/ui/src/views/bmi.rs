use dioxus::prelude::*;
use health_core::model::HealthCollection;

use crate::context::AppContext;
use crate::views::feed::use_collection_refresh;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{BmiHistoryRowVm, BmiResultVm, bmi_error_message, map_bmi_history};

#[component]
pub fn BmiView() -> Element {
    let ctx = use_context::<AppContext>();
    let bmi = ctx.bmi();
    let history_service = ctx.bmi();

    let mut weight = use_signal(String::new);
    let mut height = use_signal(String::new);
    let mut result = use_signal(|| None::<BmiResultVm>);
    let mut input_error = use_signal(|| None::<&'static str>);
    let mut calculating = use_signal(|| false);

    let refresh = use_collection_refresh(HealthCollection::BmiHistory);
    let history = use_resource(move || {
        let service = history_service.clone();
        let _ = refresh();
        async move {
            let records = service.history().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_bmi_history(&records))
        }
    });
    let history_state = view_state_from_resource(&history);

    let on_calculate = move |_: MouseEvent| {
        let bmi = bmi.clone();
        let weight_value = weight();
        let height_value = height();
        spawn(async move {
            calculating.set(true);
            match bmi.calculate_and_record(&weight_value, &height_value).await {
                Ok(calc) => {
                    input_error.set(None);
                    result.set(Some(BmiResultVm::from(&calc)));
                }
                Err(err) => {
                    result.set(None);
                    input_error.set(Some(bmi_error_message(&err)));
                }
            }
            calculating.set(false);
        });
    };

    rsx! {
        div { class: "page bmi-page",
            header { class: "view-header",
                h2 { class: "view-title", "BMI Calculator" }
                p { class: "view-subtitle", "Enter your weight and height to see your body mass index." }
            }
            div { class: "view-divider" }

            div { class: "bmi-form",
                label { class: "field",
                    span { "Weight (kg)" }
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.1",
                        value: "{weight}",
                        oninput: move |evt| weight.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { "Height (cm)" }
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.1",
                        value: "{height}",
                        oninput: move |evt| height.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: calculating(),
                    onclick: on_calculate,
                    "Calculate"
                }
            }

            if let Some(message) = input_error() {
                p { class: "form-error", "{message}" }
            }
            if let Some(vm) = result() {
                div { class: "bmi-result",
                    p { class: "bmi-value", "Your BMI: {vm.value_label}" }
                    p { class: "bmi-category {vm.category_class}", "Category: {vm.category_label}" }
                    p {
                        class: "{save_notice_class(vm.saved)}",
                        "{vm.save_notice}"
                    }
                }
            }

            section { class: "bmi-history",
                h3 { "History" }
                match history_state {
                    ViewState::Idle => rsx! {
                        p { "Idle" }
                    },
                    ViewState::Loading => rsx! {
                        p { "Loading..." }
                    },
                    ViewState::Ready(rows) => rsx! {
                        if rows.is_empty() {
                            p { "No BMI readings yet." }
                        } else {
                            ul { class: "entry-list",
                                for row in rows {
                                    BmiHistoryRow { key: "{row.id}", row }
                                }
                            }
                        }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                    },
                }
            }
        }
    }
}

#[component]
fn BmiHistoryRow(row: BmiHistoryRowVm) -> Element {
    rsx! {
        li { class: "entry",
            span { class: "entry-value {row.category_class}", "{row.value_label} · {row.category_label}" }
            span { class: "entry-meta", "{row.measurement_label} · {row.recorded_at_str}" }
        }
    }
}

fn save_notice_class(saved: bool) -> &'static str {
    if saved {
        "save-notice"
    } else {
        "save-notice save-notice--failed"
    }
}
