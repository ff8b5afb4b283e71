//! 真实浏览器集成测试
//!
//! 默认忽略，需要手动运行：cargo test -- --ignored

use easy_apply_bot::utils::logger;
use easy_apply_bot::{App, Config};

#[tokio::test]
#[ignore] // 需要本机安装 Chromium 系浏览器
async fn test_browser_launch() {
    // 初始化日志
    logger::init();

    let mut config = Config::default();
    config.headless = true;

    let app = App::initialize(config).await.expect("启动浏览器失败");
    app.close_session().await;
}

#[tokio::test]
#[ignore] // 需要先手动启动: chrome --remote-debugging-port=9222
async fn test_attach_to_running_browser() {
    logger::init();

    let mut config = Config::default();
    config.browser_debug_port = Some(9222);

    let app = App::initialize(config).await.expect("连接浏览器失败");
    app.close_session().await;
}

#[tokio::test]
#[ignore] // 需要 config.toml 中配置真实凭据
async fn test_full_pipeline() {
    logger::init();

    let config = Config::load("config.toml").expect("加载配置失败");
    config.validate().expect("配置不完整");

    let app = App::initialize(config).await.expect("启动浏览器失败");
    let outcome = app.run().await;
    app.close_session().await;

    outcome.expect("投递流水线运行失败");
}
