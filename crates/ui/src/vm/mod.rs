mod activity_vm;
mod bmi_vm;
mod quiz_vm;
mod time_fmt;
mod tips_vm;

pub use activity_vm::{
    ActivityEntryVm, ActivityPanelVm, activity_error_message, activity_input_label,
    activity_title, map_activity_panel,
};
pub use bmi_vm::{
    BmiHistoryRowVm, BmiResultVm, bmi_error_message, category_class, format_bmi,
    map_bmi_history,
};
pub use quiz_vm::{
    FeedbackVm, LevelButtonVm, LevelSelectVm, OutcomeVm, QuestionVm, QuizScreen, QuizTimer,
    QuizVm, ScheduledStep,
};
pub use time_fmt::{format_datetime, format_datetime_in};
pub use tips_vm::{NO_TIPS_MESSAGE, TipVm, search_tips};
