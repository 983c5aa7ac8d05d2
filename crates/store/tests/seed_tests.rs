//! 种子数据和仓库初始化的集成测试

use shared_lib::{AppConfig, SimulatedLatency};
use std::collections::HashSet;
use std::sync::Arc;
use store::seed::{builtin_projects, parse_projects};
use store::{initialize_store, ProjectRepositoryTrait, ProjectStatus, StoreError};

#[test]
fn builtin_seed_has_eight_valid_projects() {
    let projects = builtin_projects().unwrap();
    assert_eq!(projects.len(), 8);

    for project in &projects {
        assert!(!project.id.trim().is_empty());
        assert!(!project.name.trim().is_empty());
        assert!(!project.assigned_team_member.trim().is_empty());
        assert!(project.budget > 0.0 && project.budget < 1_000_000.0);
        assert!(project.updated_at >= project.created_at);
        assert!(project.has_description());
    }
}

#[test]
fn builtin_seed_ids_are_unique() {
    let projects = builtin_projects().unwrap();
    let ids: HashSet<&str> = projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids.len(), projects.len());
}

#[test]
fn builtin_seed_covers_every_status_and_several_members() {
    let projects = builtin_projects().unwrap();

    let statuses: HashSet<ProjectStatus> = projects.iter().map(|p| p.status).collect();
    assert_eq!(statuses.len(), 3);

    let members: HashSet<&str> = projects.iter().map(|p| p.assigned_team_member.as_str()).collect();
    assert!(members.len() > 1);
}

#[test]
fn timestamps_serialize_back_to_second_precision_iso() {
    let projects = builtin_projects().unwrap();
    let value = serde_json::to_value(&projects).unwrap();

    assert_eq!(value[0]["createdAt"], "2024-01-10T09:00:00Z");
    assert_eq!(value[0]["updatedAt"], "2024-01-20T14:30:00Z");
    assert_eq!(value[2]["status"], "on hold");
    assert_eq!(value[7]["assignedTeamMember"], "Jennifer Lee");
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = r#"[
        {"id":"1","name":"A","status":"active","deadline":"2030-01-01","assignedTeamMember":"X","budget":1,
         "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"},
        {"id":"1","name":"B","status":"completed","deadline":"2030-01-01","assignedTeamMember":"Y","budget":2,
         "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}
    ]"#;

    assert!(matches!(parse_projects(json), Err(StoreError::DuplicateId(id)) if id == "1"));
}

#[test]
fn updated_before_created_is_rejected() {
    let json = r#"[
        {"id":"1","name":"A","status":"active","deadline":"2030-01-01","assignedTeamMember":"X","budget":1,
         "createdAt":"2024-02-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}
    ]"#;

    assert!(matches!(parse_projects(json), Err(StoreError::InvalidSeed(_))));
}

#[test]
fn unknown_status_is_a_format_error() {
    let json = r#"[
        {"id":"1","name":"A","status":"paused","deadline":"2030-01-01","assignedTeamMember":"X","budget":1,
         "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}
    ]"#;

    assert!(matches!(parse_projects(json), Err(StoreError::SeedFormat(_))));
}

#[tokio::test]
async fn initialize_store_reads_seed_file_from_config() {
    let path = std::env::temp_dir().join(format!("project-dashboard-seed-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"[{"id":"10","name":"Solo","status":"on hold","deadline":"2030-01-01","assignedTeamMember":"Kim",
            "budget":99.5,"createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}]"#,
    )
    .unwrap();

    let seed_file = path.to_string_lossy().to_string();
    let mut config = AppConfig::from_lookup(|key| match key {
        "SEED_FILE" => Some(seed_file.clone()),
        _ => None,
    })
    .unwrap();
    config.latency = SimulatedLatency::none();

    let repo = initialize_store(Arc::new(config)).unwrap();
    let projects = repo.list_projects().await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Solo");
    assert!(projects[0].description.is_none());

    std::fs::remove_file(&path).unwrap();
}

#[tokio::test]
async fn initialize_store_defaults_to_builtin_seed() {
    let mut config = AppConfig::from_lookup(|_| None).unwrap();
    config.latency = SimulatedLatency::none();

    let repo = initialize_store(Arc::new(config)).unwrap();
    assert_eq!(repo.list_projects().await.unwrap().len(), 8);
}
