//! 项目看板模块
//!
//! 看板的全部业务逻辑，不包含任何页面渲染：
//! - 表单校验规则和预算输入格式化
//! - 搜索 / 状态 / 负责人过滤
//! - 项目服务（先校验再调用仓库，删除前需要确认）
//! - 表单控制器和看板控制器（弹窗、选中项目、保存中状态）

pub mod budget;
pub mod confirm;
pub mod controller;
pub mod error;
pub mod filter;
pub mod form;
pub mod services;
pub mod validation;

pub use budget::{format_budget, mask_budget_input, parse_budget};
pub use confirm::{Confirm, PresetAnswer, DELETE_CONFIRMATION_PROMPT};
pub use controller::{DashboardController, DashboardView, DeleteOutcome, ModalView, SubmitOutcome};
pub use error::{ServiceError, ServiceResult};
pub use filter::{filter_projects, team_members, ProjectFilter, ProjectStats, StatusFilter, TeamMemberFilter};
pub use form::{FormMode, ProjectForm};
pub use services::{ProjectService, ProjectServiceTrait};
pub use validation::{validate_form, validate_form_data, FieldErrors, FormField, ProjectDraft};
