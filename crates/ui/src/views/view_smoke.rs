use storage::repository::{KeyValueRepository, Storage};
use storage::snapshot::PROGRESS_STORAGE_KEY;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_every_stack() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Showing 9 of 9 tech stacks"),
        "missing count in {html}"
    );
    assert!(html.contains("MERN Stack"), "missing MERN in {html}");
    assert!(html.contains("JAMstack (Gatsby)"), "missing JAMstack in {html}");
    assert!(!html.contains("Progress 0%"), "empty progress rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_shows_stack_progress() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.toggle("mern", "setup", "nodejs-install").await;
    harness.toggle("mern", "setup", "mongodb-setup").await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Progress 67%"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_reads_saved_progress() {
    let storage = Storage::in_memory();
    storage
        .kv
        .put(
            PROGRESS_STORAGE_KEY,
            r#"{"nextjs":{"completedSections":[],"completedSteps":["nextjs-create"],"lastUpdated":"2024-05-01T10:15:30.000Z"}}"#,
        )
        .await
        .expect("seed progress");

    let mut harness = setup_view_harness_with_storage(ViewKind::Home, storage).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Progress 100%"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn stack_view_smoke_renders_tutorial() {
    let mut harness = setup_view_harness(ViewKind::Stack("mern".to_string())).await;
    harness.toggle("mern", "setup", "nodejs-install").await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("33% complete"), "missing percent in {html}");
    assert!(html.contains("1 of 3 steps"), "missing steps label in {html}");
    assert!(html.contains("Install Node.js"), "missing step title in {html}");
    assert!(html.contains("Completed"), "missing completed toggle in {html}");
    assert!(html.contains("Mark complete"), "missing open toggle in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn stack_view_smoke_handles_unknown_stack() {
    let mut harness = setup_view_harness(ViewKind::Stack("cobol-on-cogs".to_string())).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Stack not found"), "missing not-found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn compare_view_smoke_renders_default_pair() {
    let mut harness = setup_view_harness(ViewKind::Compare).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("MERN Stack"), "missing left stack in {html}");
    assert!(html.contains("MEAN Stack"), "missing right stack in {html}");
    assert!(html.contains("Difficulty"), "missing difficulty row in {html}");
    assert!(html.contains("Top Pros"), "missing pros row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Progress).await;
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Start Your Learning Journey"),
        "missing empty state in {html}"
    );
    assert!(html.contains("0h"), "missing time invested in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_lists_started_stacks() {
    let mut harness = setup_view_harness(ViewKind::Progress).await;
    harness.toggle("lamp", "setup", "apache-install").await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("LAMP Stack"), "missing entry in {html}");
    assert!(html.contains("1 of 1 steps"), "missing steps label in {html}");
    assert!(html.contains("Last updated 2023-11-14"), "missing date in {html}");
    assert!(html.contains("1h"), "missing time invested in {html}");
    assert!(
        !html.contains("Start Your Learning Journey"),
        "unexpected empty state in {html}"
    );
}
