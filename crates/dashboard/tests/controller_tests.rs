//! 看板控制器集成测试
//!
//! 覆盖新建 / 编辑 / 删除的完整流程以及过滤视图。

use chrono::{NaiveDate, TimeZone, Utc};
use dashboard::validation::{BUDGET_NOT_FINITE, DEADLINE_IN_PAST, NAME_REQUIRED};
use dashboard::{
    DashboardController, DeleteOutcome, FormField, PresetAnswer, ProjectService, ProjectServiceTrait, StatusFilter,
    SubmitOutcome, TeamMemberFilter,
};
use shared_lib::SimulatedLatency;
use std::sync::Arc;
use std::time::Duration;
use store::seed::builtin_projects;
use store::{Clock, InMemoryProjectRepository, ManualClock, ProjectStatus, StoreOptions};

type Service = ProjectService<InMemoryProjectRepository>;

fn service_with(latency: SimulatedLatency) -> (Service, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2025, 6, 15, 9, 30, 0).unwrap()));
    let repo = InMemoryProjectRepository::new(
        builtin_projects().unwrap(),
        StoreOptions {
            latency,
            clock: clock.clone(),
            ..Default::default()
        },
    );
    (ProjectService::new(repo, clock.clone()), clock)
}

async fn controller() -> (DashboardController<Service>, Service, Arc<ManualClock>) {
    let (service, clock) = service_with(SimulatedLatency::none());
    let controller = DashboardController::new(service.clone()).await.unwrap();
    (controller, service, clock)
}

fn fill_valid(controller: &mut DashboardController<Service>) {
    let form = controller.form_mut().unwrap();
    form.set_name("New Test Project");
    form.set_status(ProjectStatus::Active);
    form.set_assigned_team_member("John Doe");
    form.set_deadline("2026-01-31");
    form.set_budget_input("50000");
}

#[tokio::test]
async fn valid_create_adds_project_and_closes_modal() {
    let (mut controller, _, clock) = controller().await;

    controller.open_add();
    assert!(controller.is_modal_open());
    assert!(controller.selection().is_none());
    fill_valid(&mut controller);

    let created = match controller.submit().await {
        SubmitOutcome::Saved(project) => project,
        other => panic!("unexpected outcome: {other:?}"),
    };

    assert_eq!(created.id, "9");
    assert_eq!(created.name, "New Test Project");
    assert_eq!(created.status, ProjectStatus::Active);
    assert_eq!(created.assigned_team_member, "John Doe");
    assert_eq!(created.budget, 50000.0);
    assert_eq!(created.deadline, NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
    assert_eq!(created.created_at, clock.now());
    assert_eq!(created.updated_at, created.created_at);

    assert!(!controller.is_modal_open());
    assert!(controller.selection().is_none());
    assert!(controller.form().is_none());
    assert!(!controller.is_pending());
    assert_eq!(controller.projects().len(), 9);
    assert_eq!(controller.view().stats.active, 5);
}

#[tokio::test]
async fn empty_form_submission_keeps_modal_open_with_errors() {
    let (mut controller, service, _) = controller().await;

    controller.open_add();
    assert!(matches!(controller.submit().await, SubmitOutcome::Invalid));

    let form = controller.form().unwrap();
    assert_eq!(form.errors().len(), 4);
    assert_eq!(form.error(FormField::Name), Some(NAME_REQUIRED));
    assert!(controller.is_modal_open());
    assert_eq!(service.list_projects().await.unwrap().len(), 8);
}

#[tokio::test]
async fn oversized_budget_is_rejected_before_the_store() {
    let (mut controller, service, _) = controller().await;

    controller.open_add();
    fill_valid(&mut controller);
    controller.form_mut().unwrap().set_budget_input(&"9".repeat(400));

    assert!(matches!(controller.submit().await, SubmitOutcome::Invalid));
    assert_eq!(controller.form().unwrap().error(FormField::Budget), Some(BUDGET_NOT_FINITE));
    assert!(controller.is_modal_open());

    // 仓库中的每条记录都可以原样序列化再读回
    let projects = service.list_projects().await.unwrap();
    assert_eq!(projects.len(), 8);
    let json = serde_json::to_string(&*projects).unwrap();
    let reloaded: Vec<store::Project> = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded, *projects);
}

#[tokio::test]
async fn past_deadline_is_the_single_error() {
    let (mut controller, _, _) = controller().await;

    controller.open_add();
    {
        let form = controller.form_mut().unwrap();
        form.set_name("Test");
        form.set_assigned_team_member("John");
        form.set_deadline("2020-01-01");
        form.set_budget_input("1000");
    }

    assert!(matches!(controller.submit().await, SubmitOutcome::Invalid));
    let errors = controller.form().unwrap().errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(FormField::Deadline), Some(DEADLINE_IN_PAST));
}

#[tokio::test]
async fn edit_prepopulates_and_updates_in_place() {
    let (mut controller, _, clock) = controller().await;

    assert!(controller.open_edit("6"));
    assert_eq!(controller.selection().map(|p| p.id.as_str()), Some("6"));
    {
        let form = controller.form_mut().unwrap();
        assert_eq!(form.draft().name, "Performance Optimization");
        assert_eq!(form.budget_display(), "52000");
        // 种子数据的截止日期已经过去，需要改成未来的日期
        form.set_deadline("2025-07-01");
        form.set_status(ProjectStatus::Active);
    }
    let original = controller.selection().cloned().unwrap();

    clock.advance_secs(120);
    let updated = match controller.submit().await {
        SubmitOutcome::Saved(project) => project,
        other => panic!("unexpected outcome: {other:?}"),
    };

    assert_eq!(updated.id, "6");
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.updated_at, clock.now());
    assert_eq!(updated.status, ProjectStatus::Active);
    assert_eq!(updated.description, original.description);
    assert_eq!(controller.projects()[5], updated);
    assert!(!controller.is_modal_open());
}

#[tokio::test]
async fn open_edit_of_unknown_project_does_nothing() {
    let (mut controller, _, _) = controller().await;
    assert!(!controller.open_edit("404"));
    assert!(!controller.is_modal_open());
}

#[tokio::test]
async fn dismiss_resets_selection() {
    let (mut controller, _, _) = controller().await;

    controller.open_edit("2");
    controller.dismiss();

    assert!(!controller.is_modal_open());
    assert!(controller.selection().is_none());
    assert!(controller.view().modal.is_none());
}

#[tokio::test]
async fn failed_update_keeps_modal_open() {
    let (mut controller, service, _) = controller().await;

    controller.open_edit("3");
    controller.form_mut().unwrap().set_deadline("2030-01-01");
    // 另一个入口在保存之前删除了这个项目
    service.delete_project("3", &PresetAnswer(true)).await.unwrap();

    match controller.submit().await {
        SubmitOutcome::Failed(err) => assert!(err.is_not_found()),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(controller.is_modal_open());
    assert!(!controller.is_pending());
}

#[tokio::test]
async fn delete_confirmed_and_declined() {
    let (mut controller, _, _) = controller().await;
    let before = controller.projects().to_vec();

    assert!(matches!(
        controller.delete("4", &PresetAnswer(false)).await,
        DeleteOutcome::Declined
    ));
    assert_eq!(controller.projects(), before.as_slice());

    match controller.delete("4", &PresetAnswer(true)).await {
        DeleteOutcome::Deleted(project) => assert_eq!(project.id, "4"),
        other => panic!("unexpected outcome: {other:?}"),
    }
    let remaining: Vec<&str> = controller.projects().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(remaining, vec!["1", "2", "3", "5", "6", "7", "8"]);
    assert!(!controller.is_modal_open());
}

#[tokio::test]
async fn create_update_delete_round_trip_restores_store() {
    let (mut controller, service, _) = controller().await;
    let before = service.list_projects().await.unwrap();

    controller.open_add();
    fill_valid(&mut controller);
    let created = match controller.submit().await {
        SubmitOutcome::Saved(project) => project,
        other => panic!("unexpected outcome: {other:?}"),
    };

    controller.open_edit(&created.id);
    controller.form_mut().unwrap().set_name("Renamed Project");
    assert!(matches!(controller.submit().await, SubmitOutcome::Saved(_)));

    assert!(matches!(
        controller.delete(&created.id, &PresetAnswer(true)).await,
        DeleteOutcome::Deleted(_)
    ));

    assert_eq!(*service.list_projects().await.unwrap(), *before);
}

#[tokio::test]
async fn view_applies_filters_and_tracks_team_members() {
    let (mut controller, _, _) = controller().await;

    let view = controller.view();
    assert_eq!(view.projects.len(), 8);
    assert!(!view.filters_active);
    assert_eq!(view.team_members.len(), 8);

    controller.set_status_filter(StatusFilter::Only(ProjectStatus::OnHold));
    let view = controller.view();
    assert!(view.filters_active);
    let ids: Vec<&str> = view.projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "6"]);
    // 统计基于未过滤的列表
    assert_eq!(view.stats.total, 8);
    assert_eq!(view.total, 8);

    controller.set_search_term("cloud");
    controller.set_team_member_filter(TeamMemberFilter::Only("David Rodriguez".to_string()));
    assert_eq!(controller.view().projects.len(), 1);

    controller.clear_filters();
    let view = controller.view();
    assert!(!view.filters_active);
    assert_eq!(view.projects.len(), 8);

    // 新增一个负责人之后下拉框选项会变化
    controller.open_add();
    fill_valid(&mut controller);
    controller.submit().await;
    let members = controller.view().team_members;
    assert_eq!(members.len(), 9);
    assert!(members.contains(&"John Doe".to_string()));
}

#[tokio::test]
async fn modal_view_reflects_mode() {
    let (mut controller, _, _) = controller().await;

    controller.open_add();
    let modal = controller.view().modal.unwrap();
    assert_eq!(modal.title, "Add New Project");
    assert_eq!(modal.submit_label, "Create Project");
    assert_eq!(modal.editing_id, None);

    controller.open_edit("1");
    let modal = controller.view().modal.unwrap();
    assert_eq!(modal.title, "Edit Project");
    assert_eq!(modal.submit_label, "Update Project");
    assert_eq!(modal.editing_id.as_deref(), Some("1"));
}

#[tokio::test(start_paused = true)]
async fn submit_waits_for_simulated_latency() {
    let latency = SimulatedLatency {
        create: Duration::from_millis(1000),
        update: Duration::from_millis(1000),
        delete: Duration::from_millis(500),
    };
    let (service, _) = service_with(latency);
    let mut controller = DashboardController::new(service).await.unwrap();

    controller.open_add();
    fill_valid(&mut controller);

    let started = tokio::time::Instant::now();
    assert!(matches!(controller.submit().await, SubmitOutcome::Saved(_)));
    assert!(started.elapsed() >= Duration::from_millis(1000));

    let started = tokio::time::Instant::now();
    controller.delete("1", &PresetAnswer(true)).await;
    assert!(started.elapsed() >= Duration::from_millis(500));
}
