//! 日志初始化

use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志输出
///
/// 默认级别 info，可通过 RUST_LOG 环境变量覆盖；
/// 重复调用不报错（测试中会多次初始化）
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
