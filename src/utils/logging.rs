/// 日志辅助模块
///
/// 提供启动横幅、最终统计与操作者提示的输出
use crate::config::Config;
use crate::orchestrator::OfferStats;
use tracing::{info, warn};

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 快速申请投递模式");
    info!("🔎 关键词: {} | 地点: {}", config.keywords, config.location);
    info!("📊 最大投递数量: {}", config.max_applications);
    info!("{}", "=".repeat(60));
}

/// 提示操作者手动完成登录
///
/// 不阻塞等待输入；操作者手动登录后重新运行即可
pub fn log_operator_notice(config: &Config) {
    warn!("{}", "=".repeat(60));
    warn!("⚠️ 登录未完成，需要人工介入");
    warn!("请使用带调试端口的浏览器手动登录，例如:");
    warn!("  chrome --remote-debugging-port=9222");
    warn!("登录完成后设置 browser_debug_port = 9222 重新运行，");
    warn!("程序会连接到已登录的浏览器继续投递");
    if config.headless {
        warn!("当前为无头模式，建议改用有头模式完成登录");
    }
    warn!("{}", "=".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &OfferStats, csv_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 本次运行统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 已投递: {}", stats.applied);
    info!("⏭️ 已跳过: {}", stats.skipped);
    info!("📄 共处理: {}", stats.processed());
    info!("{}", "=".repeat(60));
    info!("\n职位记录已保存至: {}", csv_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
