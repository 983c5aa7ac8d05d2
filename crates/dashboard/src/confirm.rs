//! 删除确认
//!
//! 删除项目之前必须得到明确的“是”，否则不做任何操作。

/// 删除确认提示语
pub const DELETE_CONFIRMATION_PROMPT: &str =
    "Are you sure you want to delete this project? This action cannot be undone.";

/// 是/否确认
///
/// 页面上对应浏览器的确认对话框，HTTP接口中对应 `confirm` 查询参数
pub trait Confirm: Send + Sync {
    /// 返回 `true` 表示用户明确同意
    fn confirm(&self, prompt: &str) -> bool;
}

/// 预先给定答案的确认
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetAnswer(pub bool);

impl Confirm for PresetAnswer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
