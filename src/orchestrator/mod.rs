//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责会话生命周期与阶段调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `app` - 会话编排
//! - 管理应用生命周期（初始化、运行、关闭）
//! - 打开浏览器会话（启动新浏览器或连接已运行的浏览器）
//! - 按固定顺序调度各阶段（登录 → 搜索 → 筛选 → 遍历投递）
//! - 无论结果如何都关闭会话
//!
//! ### `offer_processor` - 结果遍历处理器
//! - 读取结果统计标签（尽力而为）
//! - 遍历当前可见批次的结果条目
//! - 控制投递数量上限（包括批次中途）
//! - 输出本次运行的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! app (会话生命周期 + 阶段顺序)
//!     ↓
//! offer_processor (遍历结果条目)
//!     ↓
//! workflow::ApplyFlow (处理单个职位)
//!     ↓
//! services (能力层：auth / search / filter / record)
//!     ↓
//! infrastructure (基础设施：CdpPage / PortalLocators)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：app 管会话与阶段，offer_processor 管条目遍历
//! 2. **资源隔离**：只有编排层持有 Browser
//! 3. **向下依赖**：编排层 → workflow → services → infrastructure
//! 4. **显式状态**：投递数量由 OfferStats 随调用链传递，不用全局可变字段

pub mod app;
pub mod offer_processor;

// 重新导出主要类型
pub use app::App;
pub use offer_processor::{parse_results_total, process_offers, OfferStats};
