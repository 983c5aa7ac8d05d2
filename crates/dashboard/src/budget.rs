//! 预算输入格式化
//!
//! 用户输入的预算先经过 [`mask_budget_input`] 得到显示文本，再用 [`parse_budget`] 得到数值。

/// 把任意输入转换为规范的数字文本
///
/// - 只保留数字和小数点
/// - 只保留第一个小数点
/// - 小数点后最多两位
///
/// 这个函数是幂等的：`mask(mask(x)) == mask(x)`
pub fn mask_budget_input(raw: &str) -> String {
    let mut masked = String::with_capacity(raw.len());
    let mut seen_point = false;
    let mut decimals = 0;

    for c in raw.chars() {
        if c.is_ascii_digit() {
            if seen_point {
                if decimals == 2 {
                    continue;
                }
                decimals += 1;
            }
            masked.push(c);
        } else if c == '.' && !seen_point {
            seen_point = true;
            masked.push(c);
        }
    }

    masked
}

/// 解析格式化后的预算文本，空字符串或无法解析（比如 `"."`）时为 0
pub fn parse_budget(masked: &str) -> f64 {
    if masked.is_empty() {
        return 0.0;
    }
    masked.parse().unwrap_or(0.0)
}

/// 编辑已有项目时回填的预算文本，使用最短的数字表示（`75000`、`1234.5`）
pub fn format_budget(budget: f64) -> String {
    budget.to_string()
}
