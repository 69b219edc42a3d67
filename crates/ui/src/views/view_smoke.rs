use std::sync::Arc;

use health_core::model::{ActivityKind, UserId};
use storage::repository::{
    ActivityLogRecord, ActivityLogRepository, NewActivityLog, Storage, StorageError,
};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_latest_entries() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.app.activity().log_water("3").await.expect("log water");

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Last water entry: 3 glasses"), "missing water notice in {html}");
    assert!(html.contains("No exercise entries yet."), "missing exercise notice in {html}");
    assert!(html.contains("No BMI readings yet."), "missing bmi notice in {html}");
    assert!(
        html.contains("Quiz progress: level 1 of 10 unlocked."),
        "missing quiz progress in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn activity_view_smoke_reloads_after_log() {
    let mut harness = setup_view_harness(ViewKind::Activity);
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No water entries yet."), "missing water notice in {html}");
    assert!(html.contains("No exercise entries yet."), "missing exercise notice in {html}");

    harness.app.activity().log_exercise("45").await.expect("log exercise");
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Last exercise entry: 45 minutes"),
        "missing refreshed notice in {html}"
    );
    assert!(html.contains("45 minutes"), "missing entry row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn bmi_view_smoke_lists_history() {
    let mut harness = setup_view_harness(ViewKind::Bmi);
    harness
        .app
        .bmi()
        .calculate_and_record("70", "175")
        .await
        .expect("record bmi");

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("BMI Calculator"), "missing title in {html}");
    assert!(html.contains("22.86"), "missing history value in {html}");
    assert!(html.contains("Normal weight"), "missing category in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tips_view_smoke_lists_all_tips() {
    let mut harness = setup_view_harness(ViewKind::Tips);
    harness.rebuild();
    let html = harness.render();
    let total = harness.app.tips().all().len();
    assert_eq!(html.matches("class=\"tip-text\"").count(), total, "tips in {html}");
    assert!(html.contains("Tags: #"), "missing tags in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_level_select() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Choose a quiz level"), "missing heading in {html}");
    assert!(html.contains("level 1 of 10"), "missing summary in {html}");
    assert!(html.contains("Level 2 🔒"), "missing locked level in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_resumes_started_level() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.app.quiz().start_level(1).expect("start level");

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Level 1 | Question 1/5"), "missing heading in {html}");
    assert!(
        html.contains("Pick one of the answers below."),
        "missing answer hint in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn about_view_smoke_names_user() {
    let mut harness = setup_view_harness(ViewKind::About);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("user local"), "missing user in {html}");
}

struct FailingActivityRepo;

#[async_trait::async_trait]
impl ActivityLogRepository for FailingActivityRepo {
    async fn append_activity(
        &self,
        _entry: NewActivityLog,
    ) -> Result<ActivityLogRecord, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn list_activity(
        &self,
        _user: &UserId,
        _kind: ActivityKind,
    ) -> Result<Vec<ActivityLogRecord>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn latest_activity(
        &self,
        _user: &UserId,
        _kind: ActivityKind,
    ) -> Result<Option<ActivityLogRecord>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

fn failing_storage() -> Storage {
    Storage {
        activity_logs: Arc::new(FailingActivityRepo),
        ..Storage::in_memory()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_storage(ViewKind::Home, &failing_storage());
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn activity_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_storage(ViewKind::Activity, &failing_storage());
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
}
