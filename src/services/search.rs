//! 职位搜索服务 - 业务能力层
//!
//! 只负责"按关键词和地点搜索职位"能力，不关心流程

use crate::config::Config;
use crate::error::{AppError, AppResult, BrowserError};
use crate::infrastructure::{PageOps, PortalLocators};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// 搜索输入框与结果列表的等待上限
const INPUT_TIMEOUT: Duration = Duration::from_secs(20);
const RESULTS_TIMEOUT: Duration = Duration::from_secs(20);
/// 输入地点后等待联想下拉稳定
const AFTER_LOCATION_PAUSE: Duration = Duration::from_secs(3);

/// 搜索服务
pub struct SearchService {
    jobs_url: String,
    keywords: String,
    location: String,
}

impl SearchService {
    /// 创建新的搜索服务
    pub fn new(config: &Config) -> Self {
        Self {
            jobs_url: config.jobs_url.clone(),
            keywords: config.keywords.clone(),
            location: config.location.clone(),
        }
    }

    /// 执行职位搜索
    ///
    /// 搜索失败只会降级（结果列表为空），不会中断运行
    pub async fn run(&self, surface: &dyn PageOps, locators: &PortalLocators) -> AppResult<()> {
        match self.search_inner(surface, locators).await {
            Ok(()) => Ok(()),
            Err(AppError::Browser(BrowserError::WaitTimeout { .. })) => {
                warn!("⚠️ 搜索超时：未找到搜索输入框或结果列表，页面结构可能已变更");
                Ok(())
            }
            Err(e) => {
                warn!("⚠️ 搜索过程中发生错误: {}", e);
                Ok(())
            }
        }
    }

    async fn search_inner(
        &self,
        surface: &dyn PageOps,
        locators: &PortalLocators,
    ) -> AppResult<()> {
        surface.goto(&self.jobs_url).await?;
        info!("已进入职位搜索页");

        surface
            .wait_for(locators.search_keywords_input, INPUT_TIMEOUT)
            .await?;
        surface
            .wait_for(locators.search_location_input, INPUT_TIMEOUT)
            .await?;

        surface
            .type_into(locators.search_keywords_input, &self.keywords)
            .await?;
        info!("已输入关键词: {}", self.keywords);

        surface
            .type_into(locators.search_location_input, &self.location)
            .await?;
        info!("已输入地点: {}", self.location);

        sleep(AFTER_LOCATION_PAUSE).await;

        // 回车提交搜索
        surface.press_enter(locators.search_location_input).await?;
        info!("已提交搜索");

        surface
            .wait_for(locators.results_list, RESULTS_TIMEOUT)
            .await?;
        info!("✓ 搜索结果已加载");

        Ok(())
    }
}
