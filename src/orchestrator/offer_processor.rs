//! 结果遍历处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **读取结果统计**：尽力解析结果数量标签，非数字时按 0 处理
//! 2. **遍历结果条目**：只处理当前可见批次，不翻页
//! 3. **数量上限**：投递数量达到配置上限后立即停止，包括批次中途
//! 4. **统计输出**：记录投递 / 跳过数量

use crate::infrastructure::{PageOps, PortalLocators};
use crate::workflow::{ApplyFlow, JobCtx, ProcessResult};
use anyhow::Result;
use regex::Regex;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

/// 读取结果统计后的固定等待
const AFTER_COUNT_PAUSE: Duration = Duration::from_secs(2);

/// 结果处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OfferStats {
    /// 已点击投递的职位数
    pub applied: usize,
    /// 已记录但跳过投递的职位数
    pub skipped: usize,
}

impl OfferStats {
    /// 已处理的职位总数（投递 + 跳过）
    pub fn processed(&self) -> usize {
        self.applied + self.skipped
    }
}

/// 解析结果数量标签
///
/// 去掉所有非数字字符后解析；标签为空或不含数字时返回 0
pub fn parse_results_total(label: &str) -> u64 {
    match Regex::new(r"[^0-9]") {
        Ok(re) => re.replace_all(label.trim(), "").parse().unwrap_or(0),
        Err(_) => 0,
    }
}

/// 遍历当前批次的结果条目并逐个投递
///
/// 投递数量作为显式状态在这里累计并随返回值向上传递
pub async fn process_offers(
    surface: &dyn PageOps,
    locators: &PortalLocators,
    flow: &ApplyFlow,
    max_applications: usize,
) -> Result<OfferStats> {
    let mut stats = OfferStats::default();

    // 读取结果统计（尽力而为）
    match surface.text_of(locators.results_count_label).await {
        Ok(label) => {
            let total = parse_results_total(&label);
            if total > 0 {
                info!("共找到 {} 个结果", total);
            } else {
                info!("结果统计不可用，按现有条目继续");
            }
        }
        Err(e) => {
            warn!("未找到结果统计标签: {}，按现有条目继续", e);
        }
    }

    sleep(AFTER_COUNT_PAUSE).await;

    // 当前可见批次的条目数（不翻页）
    let visible = match surface.count_of(locators.result_item).await {
        Ok(n) => n,
        Err(e) => {
            warn!("⚠️ 未找到结果列表条目: {}", e);
            return Ok(stats);
        }
    };
    info!("当前批次共 {} 个条目", visible);

    for index in 0..visible {
        // 数量上限检查（包括批次中途）
        if stats.processed() >= max_applications {
            info!("✓ 已达到最大投递数量 ({})", max_applications);
            break;
        }

        let ctx = JobCtx::new(index + 1, visible);

        // 悬停加载条目（尽力而为）
        if let Err(e) = surface.hover_nth(locators.result_item, index).await {
            warn!("{} 悬停失败: {}", ctx, e);
        }

        match flow.run(surface, locators, &ctx).await {
            Ok(ProcessResult::Applied) => {
                stats.applied += 1;
            }
            Ok(ProcessResult::Skipped) => {
                stats.skipped += 1;
            }
            Err(e) => {
                error!("{} 处理失败: {}", ctx, e);
                continue;
            }
        }
    }

    Ok(stats)
}
