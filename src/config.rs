use crate::error::{AppError, AppResult, FileError};
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 登录邮箱
    pub email: String,
    /// 登录密码
    pub password: String,
    /// 职位搜索关键词
    pub keywords: String,
    /// 职位搜索地点
    pub location: String,
    /// 最大投递数量
    pub max_applications: usize,
    /// 浏览器可执行文件路径（不设置则使用系统默认）
    pub browser_path: Option<String>,
    /// 浏览器调试端口（设置后连接已运行的浏览器，而不是新启动一个）
    pub browser_debug_port: Option<u16>,
    /// 是否无头模式
    pub headless: bool,
    /// 登录页 URL
    pub login_url: String,
    /// 职位搜索页 URL
    pub jobs_url: String,
    /// 职位记录 CSV 文件路径
    pub jobs_csv_path: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            keywords: String::new(),
            location: String::new(),
            max_applications: 5,
            browser_path: None,
            browser_debug_port: None,
            headless: false,
            login_url: "https://www.linkedin.com/login".to_string(),
            jobs_url: "https://www.linkedin.com/jobs/".to_string(),
            jobs_csv_path: "processed_jobs.csv".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从 TOML 配置文件加载，并应用环境变量覆盖
    ///
    /// 配置文件不存在时使用默认配置；解析失败是错误
    pub fn load(path: &str) -> AppResult<Self> {
        let mut config = if Path::new(path).exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| AppError::file_read_failed(path, e))?;
            toml::from_str(&content).map_err(|e| {
                AppError::File(FileError::TomlParseFailed {
                    path: path.to_string(),
                    source: Box::new(e),
                })
            })?
        } else {
            warn!("⚠️ 配置文件 {} 不存在，使用默认配置", path);
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// 应用环境变量覆盖
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("LINKEDIN_EMAIL") {
            self.email = v;
        }
        if let Ok(v) = std::env::var("LINKEDIN_PASSWORD") {
            self.password = v;
        }
        if let Ok(v) = std::env::var("SEARCH_KEYWORDS") {
            self.keywords = v;
        }
        if let Ok(v) = std::env::var("SEARCH_LOCATION") {
            self.location = v;
        }
        if let Some(v) = std::env::var("MAX_APPLICATIONS").ok().and_then(|v| v.parse().ok()) {
            self.max_applications = v;
        }
        if let Ok(v) = std::env::var("BROWSER_PATH") {
            self.browser_path = Some(v);
        }
        if let Some(v) = std::env::var("BROWSER_DEBUG_PORT").ok().and_then(|v| v.parse().ok()) {
            self.browser_debug_port = Some(v);
        }
        if let Some(v) = std::env::var("HEADLESS").ok().and_then(|v| v.parse().ok()) {
            self.headless = v;
        }
        if let Ok(v) = std::env::var("JOBS_CSV_PATH") {
            self.jobs_csv_path = v;
        }
        if let Some(v) = std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()) {
            self.verbose_logging = v;
        }
    }

    /// 校验必填字段
    ///
    /// attach 模式下操作者可能已手动登录，不强制凭据
    pub fn validate(&self) -> AppResult<()> {
        if self.browser_debug_port.is_none() {
            if self.email.is_empty() {
                return Err(AppError::missing_field("email"));
            }
            if self.password.is_empty() {
                return Err(AppError::missing_field("password"));
            }
        }
        Ok(())
    }
}
