//! 职位投递流程 - 流程层
//!
//! 核心职责：定义"一个职位"的完整处理流程
//!
//! 流程顺序：
//! 1. 打开职位详情
//! 2. 提取职位信息 → 写入记录（先写记录，再尝试投递）
//! 3. 点击投递按钮（找不到视为已投递过，跳过）

use crate::config::Config;
use crate::error::{AppError, AppResult, BrowserError};
use crate::infrastructure::{PageOps, PortalLocators};
use crate::models::JobRecord;
use crate::services::RecordWriter;
use crate::utils::logging::truncate_text;
use crate::workflow::job_ctx::JobCtx;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// 职位详情加载的等待上限
const DETAIL_TIMEOUT: Duration = Duration::from_secs(20);
/// 投递按钮的等待上限
const APPLY_BUTTON_TIMEOUT: Duration = Duration::from_secs(10);
/// 点击职位条目后的固定等待
const AFTER_CLICK_PAUSE: Duration = Duration::from_secs(2);
/// 点击投递后等待申请表单渲染
const AFTER_APPLY_PAUSE: Duration = Duration::from_secs(5);

/// 职位处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessResult {
    /// 已点击投递
    Applied,
    /// 已记录但跳过投递（未找到投递按钮或点击失败）
    Skipped,
}

/// 职位投递流程
///
/// - 编排单个职位的完整处理流程
/// - 不持有任何页面资源
/// - 只依赖业务能力（services）
pub struct ApplyFlow {
    record_writer: RecordWriter,
    verbose_logging: bool,
}

impl ApplyFlow {
    /// 创建新的投递流程
    pub fn new(config: &Config) -> Self {
        Self {
            record_writer: RecordWriter::new(config),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 处理单个职位
    ///
    /// 返回 Err 表示未能进入记录阶段（不计入投递数量）
    pub async fn run(
        &self,
        surface: &dyn PageOps,
        locators: &PortalLocators,
        ctx: &JobCtx,
    ) -> AppResult<ProcessResult> {
        // ========== 打开职位详情 ==========
        surface.click_nth(locators.result_title, ctx.index - 1).await?;
        sleep(AFTER_CLICK_PAUSE).await;

        surface
            .wait_for(locators.detail_container, DETAIL_TIMEOUT)
            .await?;

        // ========== 提取职位信息 ==========
        let title = surface.text_of(locators.detail_title).await?;
        let company = surface.text_of(locators.detail_company).await?;
        let location = surface.text_of(locators.detail_location).await?;
        let description = surface.text_of(locators.detail_description).await?;

        info!("{} 职位: {} @ {}", ctx, truncate_text(&title, 40), company);
        if self.verbose_logging {
            info!("{} 地点: {}", ctx, location);
            info!("{} 描述预览: {}", ctx, truncate_text(&description, 80));
        }

        // ========== 先写记录，再尝试投递 ==========
        // 每个职位只写一行；投递失败时也已留有记录
        let record = JobRecord::new(title, company, location, description);
        if let Err(e) = self.record_writer.append(&record).await {
            error!(
                "{} 写入职位记录失败: {} (文件: {}, 工作目录: {:?})",
                ctx,
                e,
                self.record_writer.csv_path(),
                std::env::current_dir().ok()
            );
        }

        // ========== 点击投递按钮 ==========
        match surface
            .wait_for(locators.apply_button, APPLY_BUTTON_TIMEOUT)
            .await
        {
            Ok(()) => {}
            Err(AppError::Browser(BrowserError::WaitTimeout { .. }))
            | Err(AppError::Browser(BrowserError::ElementNotFound { .. })) => {
                info!("{} 未找到投递按钮，可能已投递过该职位", ctx);
                return Ok(ProcessResult::Skipped);
            }
            Err(e) => return Err(e),
        }

        if let Err(e) = surface.click(locators.apply_button).await {
            warn!("{} 点击投递按钮失败: {}", ctx, e);
            return Ok(ProcessResult::Skipped);
        }

        info!("{} ✓ 已点击投递按钮", ctx);

        // 等待申请表单渲染；不填写多步表单，到此为止
        sleep(AFTER_APPLY_PAUSE).await;

        Ok(ProcessResult::Applied)
    }
}
