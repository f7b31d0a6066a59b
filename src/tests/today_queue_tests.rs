//! Tests for the daily operator queue: windowed listing and completion.

use std::sync::Arc;

use chrono::{Local, TimeDelta, TimeZone, Utc};
use eyre::{OptionExt, Result, ensure};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

use crate::adapters::memory::InMemoryTaskRepository;
use crate::domain::{DayWindow, TaskId, TaskStatus};
use crate::ports::TaskRepository;
use crate::services::{TodayQueueError, TodayQueueService};
use crate::tests::fixtures::{FailingTaskRepository, completed_task, open_task};

type TestQueue = TodayQueueService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn repository() -> Arc<InMemoryTaskRepository> {
    Arc::new(InMemoryTaskRepository::new())
}

fn queue(repository: &Arc<InMemoryTaskRepository>) -> TestQueue {
    TodayQueueService::new(Arc::clone(repository), Arc::new(DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn due_in_window_filters_and_orders_ascending(
    repository: Arc<InMemoryTaskRepository>,
) -> Result<()> {
    let start = Utc
        .with_ymd_and_hms(2025, 6, 12, 0, 0, 0)
        .single()
        .ok_or_eyre("valid instant")?;
    let window = DayWindow::from_bounds(start, start + TimeDelta::days(1));

    let afternoon = open_task(start + TimeDelta::hours(14));
    let morning = open_task(start + TimeDelta::hours(9));
    let done = completed_task(start + TimeDelta::hours(10));
    let before = open_task(start - TimeDelta::hours(1));
    let at_end = open_task(start + TimeDelta::days(1));
    for task in [afternoon, morning, done, before, at_end] {
        repository.insert(&task).await?;
    }

    let due = repository.due_in_window(window).await?;

    let ids: Vec<TaskId> = due.iter().map(|task| task.id()).collect();
    ensure!(ids == vec![morning.id(), afternoon.id()], "expected morning then afternoon, got {ids:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn due_in_window_includes_the_start_instant(
    repository: Arc<InMemoryTaskRepository>,
) -> Result<()> {
    let start = Utc
        .with_ymd_and_hms(2025, 6, 12, 0, 0, 0)
        .single()
        .ok_or_eyre("valid instant")?;
    let window = DayWindow::from_bounds(start, start + TimeDelta::days(1));
    let at_start = open_task(start);
    repository.insert(&at_start).await?;

    let due = repository.due_in_window(window).await?;

    ensure!(due.len() == 1, "start of window is inclusive");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_today_returns_only_open_tasks_of_the_current_day(
    repository: Arc<InMemoryTaskRepository>,
) -> Result<()> {
    let window = DayWindow::containing(Local::now());
    let due_today = open_task(window.start() + TimeDelta::hours(14));
    let finished = completed_task(window.start() + TimeDelta::hours(10));
    let tomorrow = open_task(window.end() + TimeDelta::hours(9));
    for task in [due_today, finished, tomorrow] {
        repository.insert(&task).await?;
    }

    let listed = queue(&repository).list_today().await?;

    let ids: Vec<TaskId> = listed.iter().map(|task| task.id()).collect();
    ensure!(ids == vec![due_today.id()], "expected only the open task due today, got {ids:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_today_is_empty_when_nothing_is_due(repository: Arc<InMemoryTaskRepository>) {
    let listed = queue(&repository)
        .list_today()
        .await
        .expect("listing should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_today_surfaces_store_failures_as_errors() {
    let service = TodayQueueService::new(Arc::new(FailingTaskRepository), Arc::new(DefaultClock));

    let err = service
        .list_today()
        .await
        .expect_err("store failure must not look like an empty list");

    assert!(matches!(err, TodayQueueError::Retrieval(_)));
    assert_eq!(err.to_string(), "failed to load tasks");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_transitions_the_task_and_excludes_it_from_listing(
    repository: Arc<InMemoryTaskRepository>,
) -> Result<()> {
    let window = DayWindow::containing(Local::now());
    let task = open_task(window.start() + TimeDelta::hours(14));
    repository.insert(&task).await?;
    let service = queue(&repository);

    service.complete(task.id()).await?;

    let stored = repository
        .find_by_id(task.id())
        .await?
        .ok_or_eyre("task should remain stored")?;
    ensure!(stored.status() == TaskStatus::Completed, "status must be terminal");
    ensure!(stored.updated_at() > task.updated_at(), "updated_at must advance");
    ensure!(service.list_today().await?.is_empty(), "completed tasks leave the queue");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_twice_matches_completing_once(
    repository: Arc<InMemoryTaskRepository>,
) -> Result<()> {
    let window = DayWindow::containing(Local::now());
    let task = open_task(window.start() + TimeDelta::hours(11));
    repository.insert(&task).await?;
    let service = queue(&repository);

    service.complete(task.id()).await?;
    service.complete(task.id()).await?;

    let stored = repository
        .find_by_id(task.id())
        .await?
        .ok_or_eyre("task should remain stored")?;
    ensure!(stored.status() == TaskStatus::Completed, "status must stay terminal");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_reports_success_for_unknown_identifiers(
    repository: Arc<InMemoryTaskRepository>,
) {
    let service = queue(&repository);

    service
        .complete(TaskId::new())
        .await
        .expect("zero matched rows still reports success");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn complete_surfaces_store_failures_as_errors() {
    let service = TodayQueueService::new(Arc::new(FailingTaskRepository), Arc::new(DefaultClock));

    let err = service
        .complete(TaskId::new())
        .await
        .expect_err("store failure surfaces");

    assert!(matches!(err, TodayQueueError::Completion(_)));
    assert_eq!(err.to_string(), "failed to mark task complete");
}
