use health_core::model::{ActivityKind, BmiCategory, HealthCollection, UserId};
use health_core::time::fixed_clock;
use services::{AppServices, SaveStatus, last_entry_notice};

#[tokio::test]
async fn logs_and_reads_back_through_app_services() {
    let app = AppServices::in_memory(fixed_clock(), UserId::local());
    let mut water_changes = app.subscribe(HealthCollection::WaterLogs);

    let activity = app.activity();
    activity.log_water("2").await.unwrap();
    activity.log_water("3").await.unwrap();
    activity.log_exercise("40").await.unwrap();
    assert!(activity.log_water("zero").await.is_err());
    assert!(water_changes.changed().await);

    let water = activity.list(ActivityKind::Water).await.unwrap();
    assert_eq!(water.len(), 2);
    let latest = activity.latest(ActivityKind::Water).await.unwrap();
    assert_eq!(latest.as_ref().map(|r| r.amount.value()), Some(3));
    assert!(
        last_entry_notice(ActivityKind::Water, latest.as_ref())
            .starts_with("Last water entry: 3 glasses")
    );
    assert_eq!(
        last_entry_notice(
            ActivityKind::Exercise,
            activity
                .latest(ActivityKind::Exercise)
                .await
                .unwrap()
                .as_ref()
        )
        .split(" at ")
        .next(),
        Some("Last exercise entry: 40 minutes")
    );

    let calc = app.bmi().calculate_and_record("50", "180").await.unwrap();
    assert_eq!(calc.reading.category(), BmiCategory::Underweight);
    assert!(matches!(calc.status, SaveStatus::Saved(_)));
    assert_eq!(app.bmi().history().await.unwrap().len(), 1);
}

#[tokio::test]
async fn sqlite_backed_services_keep_users_apart() {
    let url = "sqlite:file:memdb_services_users?mode=memory&cache=shared";
    let alice = AppServices::new_sqlite(url, fixed_clock(), UserId::new("alice").unwrap())
        .await
        .unwrap();
    let bob = AppServices::new_sqlite(url, fixed_clock(), UserId::new("bob").unwrap())
        .await
        .unwrap();

    alice.activity().log_exercise("25").await.unwrap();
    alice.bmi().calculate_and_record("70", "175").await.unwrap();

    assert_eq!(
        alice
            .activity()
            .list(ActivityKind::Exercise)
            .await
            .unwrap()
            .len(),
        1
    );
    assert!(
        bob.activity()
            .list(ActivityKind::Exercise)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(bob.bmi().history().await.unwrap().is_empty());
}
