//! 会话编排 - 编排层
//!
//! 管理应用生命周期（初始化、运行、关闭），按固定顺序调度各阶段：
//!
//! 登录 → 搜索 → 筛选 → 遍历投递 → 关闭
//!
//! 除了打开浏览器会话失败，任何阶段的错误都只记录日志并继续；
//! 会话最终总会被关闭

use crate::browser;
use crate::config::Config;
use crate::infrastructure::{CdpPage, PortalLocators};
use crate::orchestrator::offer_processor::{self, OfferStats};
use crate::services::{AuthService, FilterService, LoginOutcome, SearchService};
use crate::utils::logging;
use crate::workflow::ApplyFlow;
use anyhow::Result;
use chromiumoxide::Browser;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// 阶段之间的固定等待
const AFTER_LOGIN_PAUSE: Duration = Duration::from_secs(5);
const AFTER_SEARCH_PAUSE: Duration = Duration::from_secs(5);
const AFTER_FILTER_PAUSE: Duration = Duration::from_secs(2);

/// 应用主结构
pub struct App {
    config: Config,
    browser: Browser,
    surface: CdpPage,
    locators: PortalLocators,
}

impl App {
    /// 初始化应用
    ///
    /// 打开浏览器会话；失败是致命错误
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config);

        let (browser, page) = match config.browser_debug_port {
            Some(port) => {
                browser::connect_to_browser(port, portal_host(&config.jobs_url)).await?
            }
            None => {
                browser::launch_browser(config.headless, config.browser_path.as_deref()).await?
            }
        };

        Ok(Self {
            config,
            browser,
            surface: CdpPage::new(page),
            locators: PortalLocators::default(),
        })
    }

    /// 运行投递流水线
    pub async fn run(&self) -> Result<()> {
        // ========== 阶段 1: 登录 ==========
        let auth = AuthService::new(&self.config);
        match auth.login(&self.surface, &self.locators).await {
            Ok(LoginOutcome::Authenticated) => {}
            Ok(LoginOutcome::ManualRequired) => {
                logging::log_operator_notice(&self.config);
                return Ok(());
            }
            Err(e) => {
                error!("登录阶段发生错误: {}", e);
            }
        }
        sleep(AFTER_LOGIN_PAUSE).await;

        // ========== 阶段 2: 搜索 ==========
        let search = SearchService::new(&self.config);
        if let Err(e) = search.run(&self.surface, &self.locators).await {
            error!("搜索阶段发生错误: {}", e);
        }
        sleep(AFTER_SEARCH_PAUSE).await;

        // ========== 阶段 3: 筛选 ==========
        let filter = FilterService::new();
        if let Err(e) = filter.run(&self.surface, &self.locators).await {
            error!("筛选阶段发生错误: {}", e);
        }
        sleep(AFTER_FILTER_PAUSE).await;

        // ========== 阶段 4: 遍历投递 ==========
        let flow = ApplyFlow::new(&self.config);
        let stats = match offer_processor::process_offers(
            &self.surface,
            &self.locators,
            &flow,
            self.config.max_applications,
        )
        .await
        {
            Ok(stats) => stats,
            Err(e) => {
                error!("遍历结果阶段发生错误: {}", e);
                OfferStats::default()
            }
        };

        logging::print_final_stats(&stats, &self.config.jobs_csv_path);

        Ok(())
    }

    /// 关闭会话
    ///
    /// 无论流水线结果如何都必须调用
    pub async fn close_session(mut self) {
        info!("👋 会话结束，下次见！");
        if let Err(e) = self.browser.close().await {
            warn!("关闭浏览器失败: {}", e);
        }
        let _ = self.browser.wait().await;
    }
}

/// 从 URL 中提取主机名，用于复用已打开的站点页面
fn portal_host(url: &str) -> &str {
    let without_scheme = url.split("://").nth(1).unwrap_or(url);
    without_scheme.split('/').next().unwrap_or(without_scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_host() {
        assert_eq!(portal_host("https://www.linkedin.com/jobs/"), "www.linkedin.com");
        assert_eq!(portal_host("www.linkedin.com/jobs"), "www.linkedin.com");
        assert_eq!(portal_host("localhost"), "localhost");
    }
}
