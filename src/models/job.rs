//! 职位记录模型

use chrono::Local;

/// 描述字段写入记录前的最大字符数
pub const DESCRIPTION_LIMIT: usize = 500;

/// 单条职位记录
///
/// 每处理一个职位生成一条，追加写入 CSV 后不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    /// 处理时间
    pub processed_at: String,
    /// 职位名称
    pub title: String,
    /// 公司名称
    pub company: String,
    /// 工作地点
    pub location: String,
    /// 职位描述（最多 [`DESCRIPTION_LIMIT`] 个字符）
    pub description: String,
}

impl JobRecord {
    /// 创建新的职位记录，描述超长时截断
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            processed_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            title: title.into(),
            company: company.into(),
            location: location.into(),
            description: truncate_chars(&description.into(), DESCRIPTION_LIMIT),
        }
    }
}

/// 按字符数截断文本，不足时原样返回
fn truncate_chars(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_description_truncated() {
        let record = JobRecord::new("t", "c", "l", "x".repeat(600));
        assert_eq!(record.description.chars().count(), DESCRIPTION_LIMIT);
    }

    #[test]
    fn test_short_description_unmodified() {
        let record = JobRecord::new("t", "c", "l", "负责核心服务开发");
        assert_eq!(record.description, "负责核心服务开发");
    }

    #[test]
    fn test_exact_limit_unmodified() {
        let text = "a".repeat(DESCRIPTION_LIMIT);
        let record = JobRecord::new("t", "c", "l", text.clone());
        assert_eq!(record.description, text);
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let record = JobRecord::new("t", "c", "l", "描".repeat(600));
        assert_eq!(record.description.chars().count(), DESCRIPTION_LIMIT);
        assert_eq!(record.description, "描".repeat(DESCRIPTION_LIMIT));
    }
}
