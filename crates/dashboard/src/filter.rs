//! 项目过滤
//!
//! 三个过滤条件（搜索词 / 状态 / 负责人）分别判断，最后取交集。
//! 过滤结果保持仓库中的原始顺序，不做排序。

use serde::Serialize;
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;
use store::{ParseStatusError, Project, ProjectStatus};

/// 表示“不限制”的下拉框取值
pub const ALL_SENTINEL: &str = "all";

/// 状态过滤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProjectStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: ProjectStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// 负责人过滤（精确匹配）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TeamMemberFilter {
    #[default]
    All,
    Only(String),
}

impl TeamMemberFilter {
    pub fn matches(&self, member: &str) -> bool {
        match self {
            TeamMemberFilter::All => true,
            TeamMemberFilter::Only(expected) => expected == member,
        }
    }
}

impl FromStr for TeamMemberFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == ALL_SENTINEL {
            TeamMemberFilter::All
        } else {
            TeamMemberFilter::Only(s.to_string())
        })
    }
}

/// 看板的过滤条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectFilter {
    /// 搜索词，不区分大小写匹配名称或描述，空字符串匹配全部
    pub search_term: String,
    pub status: StatusFilter,
    pub team_member: TeamMemberFilter,
}

impl ProjectFilter {
    /// 是否有任意一个过滤条件生效
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || self.status != StatusFilter::All || self.team_member != TeamMemberFilter::All
    }

    /// 一次性重置所有过滤条件
    pub fn clear(&mut self) {
        *self = ProjectFilter::default();
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.matches_lowered(project, &self.search_term.to_lowercase())
    }

    /// `needle` 为已经转成小写的搜索词，批量过滤时只需要转换一次
    fn matches_lowered(&self, project: &Project, needle: &str) -> bool {
        matches_search(project, needle)
            && self.status.matches(project.status)
            && self.team_member.matches(&project.assigned_team_member)
    }
}

fn matches_search(project: &Project, needle: &str) -> bool {
    needle.is_empty()
        || project.name.to_lowercase().contains(needle)
        || project
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
}

/// 计算可见的项目列表，保持原有顺序
pub fn filter_projects<'a>(projects: &'a [Project], filter: &ProjectFilter) -> Vec<&'a Project> {
    let needle = filter.search_term.to_lowercase();

    projects
        .iter()
        .filter(|p| filter.matches_lowered(p, &needle))
        .collect()
}

/// 负责人下拉框选项：去重并升序排列
///
/// 每次项目列表变化之后都需要重新计算
pub fn team_members(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .map(|p| p.assigned_team_member.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// 各状态项目数量，基于未过滤的完整列表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub total: usize,
    pub active: usize,
    pub on_hold: usize,
    pub completed: usize,
}

impl ProjectStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        projects.iter().fold(
            ProjectStats {
                total: projects.len(),
                ..Default::default()
            },
            |mut stats, project| {
                match project.status {
                    ProjectStatus::Active => stats.active += 1,
                    ProjectStatus::OnHold => stats.on_hold += 1,
                    ProjectStatus::Completed => stats.completed += 1,
                }
                stats
            },
        )
    }
}
