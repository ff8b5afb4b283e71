//! # Easy Apply Bot
//!
//! 一个用于自动化职位投递的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `CdpPage` - 唯一的 page owner，实现 `PageOps` 的 DOM 能力
//! - `PortalLocators` - 全部站点选择器集中于此
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个动作
//! - `AuthService` - 登录能力
//! - `SearchService` / `FilterService` - 搜索与筛选能力
//! - `RecordWriter` - 写 CSV 记录能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个职位"的完整处理流程
//! - `JobCtx` - 上下文封装（本批第几个结果条目）
//! - `ApplyFlow` - 流程编排（详情 → 记录 → 投递）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 会话生命周期与阶段顺序
//! - `orchestrator/offer_processor` - 遍历结果条目，控制投递上限
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use browser::{connect_to_browser, launch_browser};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{CdpPage, PageOps, PortalLocators};
pub use models::JobRecord;
pub use orchestrator::{process_offers, App, OfferStats};
pub use services::{AuthService, FilterService, LoginOutcome, RecordWriter, SearchService};
pub use workflow::{ApplyFlow, JobCtx, ProcessResult};
