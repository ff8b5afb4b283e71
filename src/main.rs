use anyhow::Result;
use easy_apply_bot::utils::logger;
use easy_apply_bot::{App, Config};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::load("config.toml")?;
    config.validate()?;

    // 初始化应用（打开浏览器会话失败是致命错误）
    let app = App::initialize(config).await?;

    // 运行流水线；无论结果如何都关闭会话
    let outcome = app.run().await;
    app.close_session().await;

    if let Err(e) = outcome {
        error!("运行过程中发生错误: {}", e);
    }

    Ok(())
}
