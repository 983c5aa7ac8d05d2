//! 种子数据
//!
//! 内置八个示例项目（`data/seed_projects.json`），也可以通过配置 `SEED_FILE` 从文件加载。
//! 加载时会检查ID唯一、`updatedAt >= createdAt`、预算为正数。

use crate::models::project::Project;
use crate::{StoreError, StoreResult};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

const BUILTIN_SEED: &str = include_str!("../data/seed_projects.json");

/// 内置的示例项目
pub fn builtin_projects() -> StoreResult<Vec<Project>> {
    parse_projects(BUILTIN_SEED)
}

/// 从JSON文件加载项目
pub fn load_projects_from_file(path: &Path) -> StoreResult<Vec<Project>> {
    debug!("📂 加载种子文件: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_projects(&content)
}

/// 解析并检查JSON格式的项目列表
pub fn parse_projects(json: &str) -> StoreResult<Vec<Project>> {
    let projects: Vec<Project> = serde_json::from_str(json)?;
    check_projects(&projects)?;
    Ok(projects)
}

fn check_projects(projects: &[Project]) -> StoreResult<()> {
    let mut seen = HashSet::with_capacity(projects.len());

    for project in projects {
        if !seen.insert(project.id.as_str()) {
            return Err(StoreError::DuplicateId(project.id.clone()));
        }
        if project.updated_at < project.created_at {
            return Err(StoreError::invalid_seed(format!("项目 {} 的 updatedAt 早于 createdAt", project.id)));
        }
        if project.budget <= 0.0 {
            return Err(StoreError::invalid_seed(format!("项目 {} 的预算必须大于0", project.id)));
        }
    }

    Ok(())
}
