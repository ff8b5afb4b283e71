//! 页面操作能力 - 基础设施层
//!
//! 定义流水线对页面的全部操作能力，与站点无关；
//! 真实实现由 [`crate::infrastructure::CdpPage`] 提供，
//! 测试中可以用脚本化的实现替代

use crate::error::AppResult;
use async_trait::async_trait;
use std::time::Duration;

/// 页面操作能力
///
/// 职责：
/// - 只暴露 DOM 级别的能力（导航 / 等待 / 点击 / 输入 / 取文本）
/// - 不认识 Job / Record
/// - 不处理业务流程
#[async_trait]
pub trait PageOps: Send + Sync {
    /// 导航到指定 URL
    async fn goto(&self, url: &str) -> AppResult<()>;

    /// 轮询等待元素出现，超时返回 `WaitTimeout`
    async fn wait_for(&self, selector: &str, timeout: Duration) -> AppResult<()>;

    /// 点击第一个匹配的元素
    async fn click(&self, selector: &str) -> AppResult<()>;

    /// 点击第 index 个匹配的元素（从 0 开始）
    async fn click_nth(&self, selector: &str, index: usize) -> AppResult<()>;

    /// 悬停在第 index 个匹配的元素上（从 0 开始）
    async fn hover_nth(&self, selector: &str, index: usize) -> AppResult<()>;

    /// 清空第一个匹配的元素并输入文本
    async fn type_into(&self, selector: &str, text: &str) -> AppResult<()>;

    /// 在第一个匹配的元素上按下回车
    async fn press_enter(&self, selector: &str) -> AppResult<()>;

    /// 获取第一个匹配元素的文本
    async fn text_of(&self, selector: &str) -> AppResult<String>;

    /// 统计匹配元素的数量
    async fn count_of(&self, selector: &str) -> AppResult<usize>;
}
