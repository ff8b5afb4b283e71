//! 筛选服务 - 业务能力层
//!
//! 只负责"按快速申请筛选搜索结果"能力，不关心流程

use crate::error::{AppError, AppResult, BrowserError};
use crate::infrastructure::{PageOps, PortalLocators};
use std::time::Duration;
use tracing::{info, warn};

/// 结果列表（筛选前后）的等待上限
const RESULTS_TIMEOUT: Duration = Duration::from_secs(30);
/// 筛选面板元素的等待上限
const PANEL_TIMEOUT: Duration = Duration::from_secs(20);

/// 筛选服务
pub struct FilterService;

impl FilterService {
    /// 创建新的筛选服务
    pub fn new() -> Self {
        Self
    }

    /// 筛选出支持快速申请的结果
    ///
    /// 筛选失败只会降级（结果未筛选），不会中断运行
    pub async fn run(&self, surface: &dyn PageOps, locators: &PortalLocators) -> AppResult<()> {
        match self.filter_inner(surface, locators).await {
            Ok(()) => Ok(()),
            Err(AppError::Browser(BrowserError::WaitTimeout { .. }))
            | Err(AppError::Browser(BrowserError::ElementNotFound { .. })) => {
                warn!("⚠️ 筛选超时：未找到筛选控件，页面结构可能已变更");
                Ok(())
            }
            Err(e) => {
                warn!("⚠️ 筛选过程中发生错误: {}", e);
                Ok(())
            }
        }
    }

    async fn filter_inner(
        &self,
        surface: &dyn PageOps,
        locators: &PortalLocators,
    ) -> AppResult<()> {
        surface
            .wait_for(locators.results_list, RESULTS_TIMEOUT)
            .await?;

        surface
            .wait_for(locators.all_filters_button, PANEL_TIMEOUT)
            .await?;
        surface.click(locators.all_filters_button).await?;
        info!("已打开筛选面板");

        surface
            .wait_for(locators.filter_panel, PANEL_TIMEOUT)
            .await?;

        surface.click(locators.easy_apply_toggle).await?;
        info!("已勾选快速申请筛选");

        surface.click(locators.show_results_button).await?;
        info!("已应用筛选");

        surface
            .wait_for(locators.results_list, RESULTS_TIMEOUT)
            .await?;
        info!("✓ 筛选后的结果已加载");

        Ok(())
    }
}

impl Default for FilterService {
    fn default() -> Self {
        Self::new()
    }
}
