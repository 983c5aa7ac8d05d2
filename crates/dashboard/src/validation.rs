//! 表单校验规则
//!
//! 每个规则都是纯函数，返回 `None` 表示通过，`Some(message)` 表示错误信息。
//! [`validate_form`] 校验正在编辑的表单（预算同时需要显示文本），
//! [`validate_form_data`] 对已经是强类型的提交数据执行同样的规则。

use crate::budget::format_budget;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use store::{ProjectFormData, ProjectStatus};

pub const NAME_REQUIRED: &str = "Project name is required";
pub const TEAM_MEMBER_REQUIRED: &str = "Team member is required";
pub const DEADLINE_REQUIRED: &str = "Deadline is required";
pub const DEADLINE_IN_PAST: &str = "Deadline cannot be in the past";
pub const DEADLINE_INVALID: &str = "Deadline must be a valid date";
pub const BUDGET_NOT_POSITIVE: &str = "Budget must be greater than 0";
pub const BUDGET_NOT_FINITE: &str = "Budget is too large";
pub const BUDGET_TOO_PRECISE: &str = "Budget can have at most 2 decimal places";

/// 截止日期的文本格式
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

/// 表单字段，顺序与页面上的表单一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Status,
    AssignedTeamMember,
    Deadline,
    Budget,
    Description,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Status => "status",
            FormField::AssignedTeamMember => "assignedTeamMember",
            FormField::Deadline => "deadline",
            FormField::Budget => "budget",
            FormField::Description => "description",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 字段错误信息（字段 → 错误信息），按表单字段顺序排列
///
/// 字段没有错误时不会出现在集合中
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// 用新的错误集合整体替换
    pub fn set_all(&mut self, errors: FieldErrors) {
        self.0 = errors.0;
    }

    /// 清除单个字段的错误，其他字段不受影响
    pub fn clear(&mut self, field: FormField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn record(&mut self, field: FormField, outcome: Option<&'static str>) {
        if let Some(message) = outcome {
            self.insert(field, message);
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// 正在编辑的表单内容
///
/// 截止日期保留为原始文本，提交时才解析；预算是显示文本解析之后的数值
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub status: ProjectStatus,
    pub deadline: String,
    pub assigned_team_member: String,
    pub budget: f64,
    pub description: String,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            status: ProjectStatus::Active,
            deadline: String::new(),
            assigned_team_member: String::new(),
            budget: 0.0,
            description: String::new(),
        }
    }
}

impl ProjectDraft {
    /// 从已有数据回填，缺失的描述使用空字符串
    pub fn from_form_data(data: &ProjectFormData) -> Self {
        Self {
            name: data.name.clone(),
            status: data.status,
            deadline: data.deadline.format(DEADLINE_FORMAT).to_string(),
            assigned_team_member: data.assigned_team_member.clone(),
            budget: data.budget,
            description: data.description.clone().unwrap_or_default(),
        }
    }

    /// 转换为提交数据，截止日期无法解析时返回 `None`
    pub fn to_form_data(&self) -> Option<ProjectFormData> {
        let deadline = parse_deadline(&self.deadline)?;
        Some(ProjectFormData {
            name: self.name.clone(),
            status: self.status,
            deadline,
            assigned_team_member: self.assigned_team_member.clone(),
            budget: self.budget,
            description: Some(self.description.clone()).filter(|d| !d.is_empty()),
        })
    }
}

pub fn parse_deadline(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DEADLINE_FORMAT).ok()
}

pub fn validate_name(name: &str) -> Option<&'static str> {
    name.trim().is_empty().then_some(NAME_REQUIRED)
}

pub fn validate_assigned_team_member(member: &str) -> Option<&'static str> {
    member.trim().is_empty().then_some(TEAM_MEMBER_REQUIRED)
}

/// 截止日期文本校验，只比较日期（不考虑时间）
pub fn validate_deadline(raw: &str, today: NaiveDate) -> Option<&'static str> {
    if raw.trim().is_empty() {
        return Some(DEADLINE_REQUIRED);
    }
    match parse_deadline(raw) {
        Some(deadline) => validate_deadline_date(deadline, today),
        None => Some(DEADLINE_INVALID),
    }
}

pub fn validate_deadline_date(deadline: NaiveDate, today: NaiveDate) -> Option<&'static str> {
    (deadline < today).then_some(DEADLINE_IN_PAST)
}

/// 预算校验
///
/// 显示文本为空，或者数值 <= 0 时失败。`"0"` 和无法解析的文本得到同样的错误。
/// 超出 `f64` 范围的数值无法序列化为JSON数字，同样视为无效。
pub fn validate_budget(value: f64, display: &str) -> Option<&'static str> {
    if display.trim().is_empty() || value.is_nan() || value <= 0.0 {
        return Some(BUDGET_NOT_POSITIVE);
    }
    if !value.is_finite() {
        return Some(BUDGET_NOT_FINITE);
    }
    (decimal_places(value) > 2).then_some(BUDGET_TOO_PRECISE)
}

/// 按最短表示计算小数位数，`0.29` 是两位而不是浮点误差展开之后的位数
fn decimal_places(value: f64) -> usize {
    format_budget(value).split_once('.').map_or(0, |(_, fraction)| fraction.len())
}

/// 校验整个表单
///
/// 状态和描述永远不会产生错误
pub fn validate_form(draft: &ProjectDraft, budget_display: &str, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    errors.record(FormField::Name, validate_name(&draft.name));
    errors.record(FormField::AssignedTeamMember, validate_assigned_team_member(&draft.assigned_team_member));
    errors.record(FormField::Deadline, validate_deadline(&draft.deadline, today));
    errors.record(FormField::Budget, validate_budget(draft.budget, budget_display));

    errors
}

/// 校验强类型的提交数据
pub fn validate_form_data(data: &ProjectFormData, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::new();

    errors.record(FormField::Name, validate_name(&data.name));
    errors.record(FormField::AssignedTeamMember, validate_assigned_team_member(&data.assigned_team_member));
    errors.record(FormField::Deadline, validate_deadline_date(data.deadline, today));
    errors.record(FormField::Budget, validate_budget(data.budget, &format_budget(data.budget)));

    errors
}
