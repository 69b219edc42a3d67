use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{FeedbackVm, QuizScreen, QuizVm, ScheduledStep};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = ctx.quiz();
    let mut vm = use_signal({
        let quiz = quiz.clone();
        move || QuizVm::new(quiz)
    });
    use_drop(move || quiz.abandon_level());

    // Delays run as tasks owned by this view, so leaving the view cancels them.
    let schedule = move |step: Option<ScheduledStep>| {
        if let Some(step) = step {
            spawn(async move {
                let mut next = Some(step);
                while let Some(step) = next {
                    tokio::time::sleep(step.delay).await;
                    next = vm.write().run(step);
                }
            });
        }
    };

    let screen = vm.read().screen().clone();
    let notice = vm.read().notice().map(str::to_string);
    let options_enabled = vm.read().options_enabled();

    rsx! {
        div { class: "page quiz-page",
            header { class: "view-header",
                h2 { class: "view-title", "Healthy Food Quiz" }
            }
            div { class: "view-divider" }

            match screen {
                QuizScreen::LevelSelect(select) => rsx! {
                    h3 { class: "quiz-question", "Choose a quiz level" }
                    p { class: "quiz-message", "{select.summary}" }
                    if let Some(text) = notice {
                        p { class: "form-error", "{text}" }
                    }
                    div { class: "quiz-levels",
                        for level in select.levels {
                            button {
                                key: "{level.number}",
                                class: "{level_class(level.unlocked)}",
                                r#type: "button",
                                disabled: !level.unlocked,
                                onclick: move |_| vm.write().start_level(level.number),
                                "{level.label}"
                            }
                        }
                    }
                },
                QuizScreen::Question { question, feedback } => {
                    let buttons = question
                        .options
                        .iter()
                        .map(|option| (option.clone(), option.clone(), option_class(option, feedback.as_ref())))
                        .collect::<Vec<_>>();
                    rsx! {
                        h3 { class: "quiz-question", "{question.heading}: {question.prompt}" }
                        p { class: "quiz-score", "{question.score_label}" }
                        div { class: "quiz-options",
                            for (value, label, class) in buttons {
                                button {
                                    key: "{label}",
                                    class: "{class}",
                                    r#type: "button",
                                    disabled: !options_enabled,
                                    onclick: move |_| {
                                        let step = vm.write().answer(&value);
                                        schedule(step);
                                    },
                                    "{label}"
                                }
                            }
                        }
                        match feedback {
                            Some(feedback) => rsx! {
                                p { class: "{feedback_class(feedback.correct)}", "{feedback.message}" }
                            },
                            None => rsx! {
                                p { class: "quiz-message", "Pick one of the answers below." }
                            },
                        }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| vm.write().back_to_levels(),
                            "Back to levels"
                        }
                    }
                }
                QuizScreen::Outcome(outcome) => rsx! {
                    h3 { class: "{outcome_class(outcome.passed)}", "{outcome.headline}" }
                    p { class: "quiz-message", "{outcome.notice}" }
                },
            }
        }
    }
}

fn level_class(unlocked: bool) -> &'static str {
    if unlocked {
        "btn level-btn"
    } else {
        "btn level-btn level-btn--locked"
    }
}

/// Highlights the right answer, and the wrong pick if any, once feedback is showing.
fn option_class(option: &str, feedback: Option<&FeedbackVm>) -> &'static str {
    match feedback {
        Some(feedback) if option == feedback.correct_answer => "btn quiz-option quiz-option--correct",
        Some(feedback) if option == feedback.selected => "btn quiz-option quiz-option--wrong",
        _ => "btn quiz-option",
    }
}

fn feedback_class(correct: bool) -> &'static str {
    if correct {
        "quiz-message quiz-message--correct"
    } else {
        "quiz-message quiz-message--wrong"
    }
}

fn outcome_class(passed: bool) -> &'static str {
    if passed {
        "quiz-question quiz-outcome--passed"
    } else {
        "quiz-question quiz-outcome--failed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_class_marks_pick_and_answer() {
        let feedback = FeedbackVm {
            correct: false,
            selected: "Chips".into(),
            correct_answer: "Apple".into(),
            message: String::new(),
        };
        assert_eq!(option_class("Apple", Some(&feedback)), "btn quiz-option quiz-option--correct");
        assert_eq!(option_class("Chips", Some(&feedback)), "btn quiz-option quiz-option--wrong");
        assert_eq!(option_class("Soda", Some(&feedback)), "btn quiz-option");
        assert_eq!(option_class("Apple", None), "btn quiz-option");
    }
}
