// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! Run with: FIRESTORE_EMULATOR_HOST=localhost:8080 cargo test --test firestore_integration

use chrono::NaiveDate;
use running_log::models::{Run, Target, TargetType};

mod common;
use common::test_db;

fn unique_user() -> String {
    format!("it-{}", uuid::Uuid::new_v4())
}

fn make_run(user_id: &str, date: &str, distance_km: f64) -> Run {
    Run {
        run_id: uuid::Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        distance_km,
        duration_seconds: 1800,
        notes: "integration".to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
    }
}

#[tokio::test]
async fn test_run_crud() {
    require_emulator!();

    let db = test_db().await;
    let user_id = unique_user();
    let run = make_run(&user_id, "2025-06-15", 8.5);

    db.save_run(&run).await.expect("Failed to save run");

    let fetched = db
        .get_run(&user_id, &run.run_id)
        .await
        .expect("Failed to get run")
        .expect("Run not found");
    assert_eq!(fetched, run);

    let listed = db.list_runs(&user_id).await.expect("Failed to list runs");
    assert_eq!(listed.len(), 1);

    // Another user cannot see or delete it
    assert!(db.get_run("someone-else", &run.run_id).await.unwrap().is_none());
    assert!(!db.delete_run("someone-else", &run.run_id).await.unwrap());

    assert!(db.delete_run(&user_id, &run.run_id).await.unwrap());
    assert!(db.get_run(&user_id, &run.run_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_target_crud() {
    require_emulator!();

    let db = test_db().await;
    let user_id = unique_user();
    let mut target = Target {
        target_id: uuid::Uuid::new_v4().to_string(),
        user_id: user_id.clone(),
        target_type: TargetType::Monthly,
        period: "2025-06".to_string(),
        distance_km: 50.0,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    db.save_target(&target).await.expect("Failed to save target");

    target.distance_km = 75.0;
    db.save_target(&target).await.expect("Failed to update target");

    let targets = db
        .list_targets(&user_id)
        .await
        .expect("Failed to list targets");
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].distance_km, 75.0);
    assert_eq!(targets[0].target_type, TargetType::Monthly);

    assert!(db.delete_target(&user_id, &target.target_id).await.unwrap());
    assert!(db.list_targets(&user_id).await.unwrap().is_empty());
}
