//! 登录服务 - 业务能力层
//!
//! 只负责"登录站点"能力，不关心流程

use crate::config::Config;
use crate::error::{AppError, AppResult, BrowserError};
use crate::infrastructure::{PageOps, PortalLocators};
use std::time::Duration;
use tracing::{info, warn};

/// 页面整体加载与登录完成的等待上限
const PAGE_LOAD_TIMEOUT: Duration = Duration::from_secs(30);
/// 单个表单元素的等待上限
const FIELD_TIMEOUT: Duration = Duration::from_secs(10);

/// 登录结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// 登录成功
    Authenticated,
    /// 等待超时，需要操作者手动介入
    ManualRequired,
}

/// 登录服务
///
/// 职责：
/// - 打开登录页并提交凭据
/// - 等待登录完成
/// - 超时不阻塞等待人工输入，返回 [`LoginOutcome::ManualRequired`]，
///   由编排层通知操作者后结束本次运行
pub struct AuthService {
    login_url: String,
    email: String,
    password: String,
}

impl AuthService {
    /// 创建新的登录服务
    pub fn new(config: &Config) -> Self {
        Self {
            login_url: config.login_url.clone(),
            email: config.email.clone(),
            password: config.password.clone(),
        }
    }

    /// 登录站点
    pub async fn login(
        &self,
        surface: &dyn PageOps,
        locators: &PortalLocators,
    ) -> AppResult<LoginOutcome> {
        surface.goto(&self.login_url).await?;

        // 等待登录页加载完成
        if let Err(e) = surface.wait_for(locators.page_body, PAGE_LOAD_TIMEOUT).await {
            return manual_required("登录页加载超时", e);
        }
        info!("登录页加载完成");

        // 填写邮箱
        if let Err(e) = surface.wait_for(locators.login_email, FIELD_TIMEOUT).await {
            return manual_required("等待邮箱输入框超时", e);
        }
        surface.type_into(locators.login_email, &self.email).await?;
        info!("已输入邮箱");

        // 填写密码
        if let Err(e) = surface.wait_for(locators.login_password, FIELD_TIMEOUT).await {
            return manual_required("等待密码输入框超时", e);
        }
        surface
            .type_into(locators.login_password, &self.password)
            .await?;
        info!("已输入密码");

        // 点击登录按钮
        if let Err(e) = surface.wait_for(locators.login_submit, FIELD_TIMEOUT).await {
            return manual_required("等待登录按钮超时", e);
        }
        surface.click(locators.login_submit).await?;
        info!("已点击登录按钮");

        // 等待登录完成
        match surface.wait_for(locators.global_nav, PAGE_LOAD_TIMEOUT).await {
            Ok(()) => {
                info!("✅ 登录成功");
                Ok(LoginOutcome::Authenticated)
            }
            Err(e) => manual_required("等待登录完成超时，可能需要验证码或二次确认", e),
        }
    }
}

/// 统一的人工介入出口
///
/// 只把等待超时映射为 ManualRequired，其他错误原样向上传递
fn manual_required(reason: &str, err: AppError) -> AppResult<LoginOutcome> {
    match err {
        AppError::Browser(BrowserError::WaitTimeout { .. }) => {
            warn!("⚠️ {}: {}", reason, err);
            Ok(LoginOutcome::ManualRequired)
        }
        other => Err(other),
    }
}
