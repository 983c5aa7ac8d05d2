//! 项目数据模型
//!
//! 定义项目记录、项目状态以及表单提交数据。
//!
//! JSON 字段名使用 camelCase（`assignedTeamMember`、`createdAt` 等），
//! 与种子数据保持一致，替换持久层时字段名和类型都不能改变。

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 项目状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "active")]
    Active,

    #[serde(rename = "on hold")]
    OnHold,

    #[serde(rename = "completed")]
    Completed,
}

impl ProjectStatus {
    /// 所有状态，顺序和表单下拉框一致
    pub const ALL: [ProjectStatus; 3] = [ProjectStatus::Active, ProjectStatus::OnHold, ProjectStatus::Completed];

    /// 序列化使用的值
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::OnHold => "on hold",
            ProjectStatus::Completed => "completed",
        }
    }

    /// 页面展示使用的名称
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("未知的项目状态: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for ProjectStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// 项目记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// 项目ID，由仓库分配
    pub id: String,

    pub name: String,

    pub status: ProjectStatus,

    /// 截止日期（不含时间）
    pub deadline: NaiveDate,

    /// 负责人
    pub assigned_team_member: String,

    /// 预算，最多两位小数
    pub budget: f64,

    /// 项目描述（可选）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 创建时间（UTC，精确到秒），创建后不再变化
    pub created_at: DateTime<Utc>,

    /// 更新时间（UTC，精确到秒），始终不早于创建时间
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// 根据表单数据创建新项目
    ///
    /// `created_at` 和 `updated_at` 都设置为 `now`
    pub fn from_form(id: String, form: ProjectFormData, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: form.name,
            status: form.status,
            deadline: form.deadline,
            assigned_team_member: form.assigned_team_member,
            budget: form.budget,
            description: normalize_description(form.description),
            created_at: now,
            updated_at: now,
        }
    }

    /// 使用表单数据整体替换可编辑字段
    ///
    /// `id` 和 `created_at` 保持不变，`updated_at` 不会早于 `created_at`
    pub fn with_update(&self, form: ProjectFormData, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            name: form.name,
            status: form.status,
            deadline: form.deadline,
            assigned_team_member: form.assigned_team_member,
            budget: form.budget,
            description: normalize_description(form.description),
            created_at: self.created_at,
            updated_at: now.max(self.created_at),
        }
    }

    /// 是否有描述（空字符串视为没有）
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// 转换为表单数据，编辑时用于回填表单
    pub fn to_form_data(&self) -> ProjectFormData {
        ProjectFormData {
            name: self.name.clone(),
            status: self.status,
            deadline: self.deadline,
            assigned_team_member: self.assigned_team_member.clone(),
            budget: self.budget,
            description: self.description.clone(),
        }
    }
}

/// 表单提交数据
///
/// 与 [`Project`] 字段相同，但不包含 `id`、`createdAt`、`updatedAt`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFormData {
    pub name: String,
    pub status: ProjectStatus,
    pub deadline: NaiveDate,
    pub assigned_team_member: String,
    pub budget: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.is_empty())
}
