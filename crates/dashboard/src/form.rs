//! 项目表单控制器
//!
//! 保存正在编辑的表单内容、预算显示文本以及每个字段的错误信息。
//! 某个字段的值变化时只清除这个字段的错误，不会重新校验其他字段。

use crate::budget::{format_budget, mask_budget_input, parse_budget};
use crate::validation::{validate_form, FieldErrors, FormField, ProjectDraft};
use chrono::NaiveDate;
use store::{ParseStatusError, Project, ProjectFormData, ProjectStatus};

/// 表单模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    draft: ProjectDraft,
    budget_display: String,
    errors: FieldErrors,
    mode: FormMode,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectForm {
    /// 新建项目使用的空表单，状态默认为 active
    pub fn new() -> Self {
        Self {
            draft: ProjectDraft::default(),
            budget_display: String::new(),
            errors: FieldErrors::new(),
            mode: FormMode::Create,
        }
    }

    /// 编辑已有项目，表单内容从项目回填
    pub fn for_project(project: &Project) -> Self {
        Self {
            draft: ProjectDraft::from_form_data(&project.to_form_data()),
            budget_display: format_budget(project.budget),
            errors: FieldErrors::new(),
            mode: FormMode::Edit { id: project.id.clone() },
        }
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn budget_display(&self) -> &str {
        &self.budget_display
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Project"
        } else {
            "Add New Project"
        }
    }

    pub fn submit_label(&self, pending: bool) -> &'static str {
        match (pending, self.is_edit()) {
            (true, _) => "Saving...",
            (false, true) => "Update Project",
            (false, false) => "Create Project",
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.errors.clear(FormField::Name);
    }

    pub fn set_status(&mut self, status: ProjectStatus) {
        self.draft.status = status;
        self.errors.clear(FormField::Status);
    }

    pub fn set_assigned_team_member(&mut self, member: impl Into<String>) {
        self.draft.assigned_team_member = member.into();
        self.errors.clear(FormField::AssignedTeamMember);
    }

    pub fn set_deadline(&mut self, deadline: impl Into<String>) {
        self.draft.deadline = deadline.into();
        self.errors.clear(FormField::Deadline);
    }

    /// 预算输入：先格式化为显示文本，再解析为数值
    pub fn set_budget_input(&mut self, raw: &str) {
        self.budget_display = mask_budget_input(raw);
        self.draft.budget = parse_budget(&self.budget_display);
        self.errors.clear(FormField::Budget);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
        self.errors.clear(FormField::Description);
    }

    /// 按字段名写入原始输入
    ///
    /// 状态必须是三个合法值之一，否则返回错误且表单不变
    pub fn input(&mut self, field: FormField, raw: &str) -> Result<(), ParseStatusError> {
        match field {
            FormField::Name => self.set_name(raw),
            FormField::Status => self.set_status(raw.parse()?),
            FormField::AssignedTeamMember => self.set_assigned_team_member(raw),
            FormField::Deadline => self.set_deadline(raw),
            FormField::Budget => self.set_budget_input(raw),
            FormField::Description => self.set_description(raw),
        }
        Ok(())
    }

    /// 校验整个表单并保存错误信息，返回是否通过
    pub fn validate(&mut self, today: NaiveDate) -> bool {
        let errors = validate_form(&self.draft, &self.budget_display, today);
        self.errors.set_all(errors);
        self.errors.is_empty()
    }

    /// 提交表单，校验通过时返回提交数据
    pub fn submit(&mut self, today: NaiveDate) -> Option<ProjectFormData> {
        if !self.validate(today) {
            return None;
        }
        self.draft.to_form_data()
    }

    /// 使用外部（比如服务层）返回的错误替换当前错误
    pub fn set_errors(&mut self, errors: FieldErrors) {
        self.errors.set_all(errors);
    }
}
