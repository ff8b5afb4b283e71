//! CDP 页面 - 基础设施层
//!
//! 持有唯一的 Page 资源，通过 chromiumoxide 实现 [`PageOps`] 能力

use crate::error::{AppError, AppResult, BrowserError};
use crate::infrastructure::page_ops::PageOps;
use async_trait::async_trait;
use chromiumoxide::Page;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// 轮询等待的间隔
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// CDP 页面
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 实现 [`PageOps`] 的全部 DOM 能力
/// - 不认识 Job / Record
/// - 不处理业务流程
pub struct CdpPage {
    page: Page,
}

impl CdpPage {
    /// 包装一个已有的页面
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 获取 page 的引用（用于其他操作）
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 执行 JS 代码并返回 JSON 结果
    pub async fn eval(&self, js_code: impl Into<String>) -> AppResult<JsonValue> {
        let result = self.page.evaluate(js_code.into()).await?;
        let json_value = result.into_value()?;
        Ok(json_value)
    }
}

#[async_trait]
impl PageOps for CdpPage {
    async fn goto(&self, url: &str) -> AppResult<()> {
        debug!("导航到: {}", url);
        self.page
            .goto(url)
            .await
            .map_err(|e| AppError::navigation_failed(url, e))?;
        // 单页应用的导航事件不一定触发，这里容忍失败
        let _ = self.page.wait_for_navigation().await;
        Ok(())
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> AppResult<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.page.find_element(selector).await.is_ok() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                debug!("等待超时: {}", selector);
                return Err(AppError::wait_timeout(selector, timeout));
            }
            sleep(POLL_INTERVAL).await;
        }
    }

    async fn click(&self, selector: &str) -> AppResult<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| AppError::element_not_found(selector))?;
        element
            .click()
            .await
            .map_err(|e| AppError::interaction_failed(selector, e))?;
        debug!("已点击: {}", selector);
        Ok(())
    }

    async fn click_nth(&self, selector: &str, index: usize) -> AppResult<()> {
        let elements = self
            .page
            .find_elements(selector)
            .await
            .map_err(|_| AppError::element_not_found(selector))?;
        let element = elements
            .into_iter()
            .nth(index)
            .ok_or_else(|| AppError::element_not_found(format!("{}#{}", selector, index)))?;
        element
            .scroll_into_view()
            .await
            .map_err(|e| AppError::interaction_failed(selector, e))?;
        element
            .click()
            .await
            .map_err(|e| AppError::interaction_failed(selector, e))?;
        debug!("已点击第 {} 个: {}", index + 1, selector);
        Ok(())
    }

    async fn hover_nth(&self, selector: &str, index: usize) -> AppResult<()> {
        let js = format!(
            r#"(() => {{
                const nodes = document.querySelectorAll({selector});
                const el = nodes[{index}];
                if (!el) return false;
                el.scrollIntoView({{ block: 'center' }});
                el.dispatchEvent(new MouseEvent('mouseover', {{ bubbles: true }}));
                return true;
            }})()"#,
            selector = serde_json::to_string(selector)?,
            index = index,
        );
        let result = self.eval(js).await?;
        if result.as_bool().unwrap_or(false) {
            Ok(())
        } else {
            Err(AppError::element_not_found(format!(
                "{}#{}",
                selector, index
            )))
        }
    }

    async fn type_into(&self, selector: &str, text: &str) -> AppResult<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| AppError::element_not_found(selector))?;
        // 先聚焦再清空已有内容
        element
            .click()
            .await
            .map_err(|e| AppError::interaction_failed(selector, e))?;
        let js = format!(
            r#"(() => {{
                const el = document.querySelector({selector});
                if (el) el.value = '';
                return null;
            }})()"#,
            selector = serde_json::to_string(selector)?,
        );
        self.eval(js).await?;
        element
            .type_str(text)
            .await
            .map_err(|e| AppError::interaction_failed(selector, e))?;
        debug!("已输入文本: {} ({} 字符)", selector, text.chars().count());
        Ok(())
    }

    async fn press_enter(&self, selector: &str) -> AppResult<()> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| AppError::element_not_found(selector))?;
        element
            .press_key("Enter")
            .await
            .map_err(|e| AppError::interaction_failed(selector, e))?;
        Ok(())
    }

    async fn text_of(&self, selector: &str) -> AppResult<String> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|_| AppError::element_not_found(selector))?;
        let text = element
            .inner_text()
            .await
            .map_err(|e| AppError::interaction_failed(selector, e))?
            .unwrap_or_default();
        Ok(text)
    }

    async fn count_of(&self, selector: &str) -> AppResult<usize> {
        let elements = self
            .page
            .find_elements(selector)
            .await
            .map_err(|_| AppError::element_not_found(selector))?;
        Ok(elements.len())
    }
}
