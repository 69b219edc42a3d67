mod about;
mod activity;
mod bmi;
mod feed;
mod home;
mod quiz;
mod state;
mod tips;

pub use about::AboutView;
pub use activity::ActivityView;
pub use bmi::BmiView;
pub use home::HomeView;
pub use quiz::QuizView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use tips::TipsView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
