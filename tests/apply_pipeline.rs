//! 投递流水线测试
//!
//! 用脚本化的 PageOps 实现代替真实浏览器，验证：
//! - 投递数量上限
//! - 记录文件的表头与行数
//! - 描述截断
//! - 投递失败时的记录行为
//! - 结果统计标签不可用时的降级
//! - 登录超时的人工介入出口

use async_trait::async_trait;
use easy_apply_bot::error::{AppError, AppResult};
use easy_apply_bot::infrastructure::{PageOps, PortalLocators};
use easy_apply_bot::orchestrator::process_offers;
use easy_apply_bot::services::{AuthService, FilterService, LoginOutcome, RecordWriter, SearchService};
use easy_apply_bot::workflow::ApplyFlow;
use easy_apply_bot::{Config, JobRecord};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// 脚本化的页面实现
#[derive(Default)]
struct MockPortal {
    /// 选择器 -> 文本
    texts: HashMap<String, String>,
    /// 选择器 -> 匹配数量
    counts: HashMap<String, usize>,
    /// 查找会失败的选择器
    missing: HashSet<String>,
    /// 点击历史（"选择器" 或 "选择器#索引"）
    clicks: Mutex<Vec<String>>,
}

impl MockPortal {
    /// 构造一个带 result_count 个完整结果条目的页面
    fn with_results(locators: &PortalLocators, result_count: usize) -> Self {
        let mut mock = Self::default();
        mock.counts
            .insert(locators.result_item.to_string(), result_count);
        mock.counts
            .insert(locators.result_title.to_string(), result_count);
        mock.texts.insert(
            locators.results_count_label.to_string(),
            format!("{} results", result_count),
        );
        mock.texts
            .insert(locators.detail_title.to_string(), "Rust 后端工程师".to_string());
        mock.texts
            .insert(locators.detail_company.to_string(), "Acme".to_string());
        mock.texts
            .insert(locators.detail_location.to_string(), "上海".to_string());
        mock.texts.insert(
            locators.detail_description.to_string(),
            "负责核心服务开发".to_string(),
        );
        mock
    }

    fn clicks(&self) -> Vec<String> {
        self.clicks.lock().unwrap().clone()
    }

    fn clicks_on(&self, selector: &str) -> usize {
        self.clicks()
            .iter()
            .filter(|c| c.as_str() == selector || c.starts_with(&format!("{}#", selector)))
            .count()
    }
}

#[async_trait]
impl PageOps for MockPortal {
    async fn goto(&self, _url: &str) -> AppResult<()> {
        Ok(())
    }

    async fn wait_for(&self, selector: &str, timeout: Duration) -> AppResult<()> {
        if self.missing.contains(selector) {
            Err(AppError::wait_timeout(selector, timeout))
        } else {
            Ok(())
        }
    }

    async fn click(&self, selector: &str) -> AppResult<()> {
        if self.missing.contains(selector) {
            return Err(AppError::element_not_found(selector));
        }
        self.clicks.lock().unwrap().push(selector.to_string());
        Ok(())
    }

    async fn click_nth(&self, selector: &str, index: usize) -> AppResult<()> {
        if self.missing.contains(selector)
            || index >= self.counts.get(selector).copied().unwrap_or(0)
        {
            return Err(AppError::element_not_found(format!("{}#{}", selector, index)));
        }
        self.clicks
            .lock()
            .unwrap()
            .push(format!("{}#{}", selector, index));
        Ok(())
    }

    async fn hover_nth(&self, selector: &str, index: usize) -> AppResult<()> {
        if index >= self.counts.get(selector).copied().unwrap_or(0) {
            return Err(AppError::element_not_found(format!("{}#{}", selector, index)));
        }
        Ok(())
    }

    async fn type_into(&self, _selector: &str, _text: &str) -> AppResult<()> {
        Ok(())
    }

    async fn press_enter(&self, _selector: &str) -> AppResult<()> {
        Ok(())
    }

    async fn text_of(&self, selector: &str) -> AppResult<String> {
        self.texts
            .get(selector)
            .cloned()
            .ok_or_else(|| AppError::element_not_found(selector))
    }

    async fn count_of(&self, selector: &str) -> AppResult<usize> {
        Ok(self.counts.get(selector).copied().unwrap_or(0))
    }
}

fn test_config(csv_path: &Path, max_applications: usize) -> Config {
    let mut config = Config::default();
    config.max_applications = max_applications;
    config.jobs_csv_path = csv_path.to_string_lossy().to_string();
    config
}

/// 读取 CSV 数据行（不含表头）
fn read_rows(path: &Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).expect("读取 CSV 失败");
    reader.records().map(|r| r.expect("解析 CSV 行失败")).collect()
}

/// 统计原始文件中表头出现的次数
fn header_lines(path: &Path) -> usize {
    let content = std::fs::read_to_string(path).expect("读取 CSV 失败");
    content
        .lines()
        .filter(|line| line.starts_with("Date Processed,"))
        .count()
}

#[tokio::test(start_paused = true)]
async fn cap_limits_processed_jobs() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("jobs.csv");
    let locators = PortalLocators::default();
    let mock = MockPortal::with_results(&locators, 5);
    let config = test_config(&csv_path, 2);
    let flow = ApplyFlow::new(&config);

    let stats = process_offers(&mock, &locators, &flow, config.max_applications)
        .await
        .unwrap();

    assert_eq!(stats.applied, 2);
    assert_eq!(stats.skipped, 0);
    assert_eq!(stats.processed(), 2);

    // 第 3-5 个条目不会被点开，投递点击不超过上限
    assert_eq!(mock.clicks_on(locators.result_title), 2);
    assert_eq!(mock.clicks_on(locators.apply_button), 2);

    // 每个处理过的职位正好一行记录
    assert_eq!(read_rows(&csv_path).len(), 2);
    assert_eq!(header_lines(&csv_path), 1);
}

#[tokio::test(start_paused = true)]
async fn cap_zero_processes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("jobs.csv");
    let locators = PortalLocators::default();
    let mock = MockPortal::with_results(&locators, 5);
    let config = test_config(&csv_path, 0);
    let flow = ApplyFlow::new(&config);

    let stats = process_offers(&mock, &locators, &flow, config.max_applications)
        .await
        .unwrap();

    assert_eq!(stats.processed(), 0);
    assert_eq!(mock.clicks().len(), 0);
    // 没有处理任何职位，记录文件不会被创建
    assert!(!csv_path.exists());
}

#[tokio::test(start_paused = true)]
async fn apply_failure_still_writes_one_row() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("jobs.csv");
    let locators = PortalLocators::default();
    let mut mock = MockPortal::with_results(&locators, 1);
    // 投递按钮不存在（可能已投递过）
    mock.missing.insert(locators.apply_button.to_string());
    let config = test_config(&csv_path, 3);
    let flow = ApplyFlow::new(&config);

    let stats = process_offers(&mock, &locators, &flow, config.max_applications)
        .await
        .unwrap();

    assert_eq!(stats.applied, 0);
    assert_eq!(stats.skipped, 1);

    // 投递失败也正好留下一行记录，没有重复
    let rows = read_rows(&csv_path);
    assert_eq!(rows.len(), 1);
    assert_eq!(header_lines(&csv_path), 1);
    assert_eq!(&rows[0][1], "Rust 后端工程师");
}

#[tokio::test(start_paused = true)]
async fn nonnumeric_count_label_defaults_to_zero() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("jobs.csv");
    let locators = PortalLocators::default();
    let mut mock = MockPortal::with_results(&locators, 3);
    // 结果统计标签不含数字
    mock.texts.insert(
        locators.results_count_label.to_string(),
        "正在加载结果...".to_string(),
    );
    let config = test_config(&csv_path, 10);
    let flow = ApplyFlow::new(&config);

    // 统计不可用时仍按现有条目处理
    let stats = process_offers(&mock, &locators, &flow, config.max_applications)
        .await
        .unwrap();

    assert_eq!(stats.processed(), 3);
    assert_eq!(read_rows(&csv_path).len(), 3);
}

#[tokio::test(start_paused = true)]
async fn missing_count_label_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("jobs.csv");
    let locators = PortalLocators::default();
    let mut mock = MockPortal::with_results(&locators, 2);
    mock.texts.remove(locators.results_count_label);
    let config = test_config(&csv_path, 10);
    let flow = ApplyFlow::new(&config);

    let stats = process_offers(&mock, &locators, &flow, config.max_applications)
        .await
        .unwrap();

    assert_eq!(stats.processed(), 2);
}

#[tokio::test]
async fn header_written_once_across_appends() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("jobs.csv");
    let writer = RecordWriter::with_path(csv_path.to_string_lossy().to_string());

    writer
        .append(&JobRecord::new("t1", "c1", "l1", "d1"))
        .await
        .unwrap();
    writer
        .append(&JobRecord::new("t2", "c2", "l2", "d2"))
        .await
        .unwrap();

    assert_eq!(header_lines(&csv_path), 1);
    let rows = read_rows(&csv_path);
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][1], "t1");
    assert_eq!(&rows[1][1], "t2");
}

#[tokio::test]
async fn long_description_truncated_in_row() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("jobs.csv");
    let writer = RecordWriter::with_path(csv_path.to_string_lossy().to_string());

    writer
        .append(&JobRecord::new("t", "c", "l", "x".repeat(600)))
        .await
        .unwrap();
    writer
        .append(&JobRecord::new("t", "c", "l", "简短描述"))
        .await
        .unwrap();

    let rows = read_rows(&csv_path);
    assert_eq!(rows[0][4].chars().count(), 500);
    assert_eq!(&rows[1][4], "简短描述");
}

#[tokio::test(start_paused = true)]
async fn login_timeout_requires_operator() {
    let locators = PortalLocators::default();
    let mut mock = MockPortal::default();
    // 登录提交后导航栏一直不出现
    mock.missing.insert(locators.global_nav.to_string());

    let mut config = Config::default();
    config.email = "a@b.c".to_string();
    config.password = "secret".to_string();

    let auth = AuthService::new(&config);
    let outcome = auth.login(&mock, &locators).await.unwrap();

    assert_eq!(outcome, LoginOutcome::ManualRequired);
    // 凭据已提交过一次
    assert_eq!(mock.clicks_on(locators.login_submit), 1);
}

/// 端到端场景：配置要求 2 次投递，页面上有 5 个快速申请结果
#[tokio::test(start_paused = true)]
async fn end_to_end_two_applications() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("jobs.csv");
    let locators = PortalLocators::default();
    let mock = MockPortal::with_results(&locators, 5);

    let mut config = test_config(&csv_path, 2);
    config.keywords = "rust".to_string();
    config.location = "Shanghai".to_string();

    SearchService::new(&config)
        .run(&mock, &locators)
        .await
        .unwrap();
    FilterService::new().run(&mock, &locators).await.unwrap();

    let flow = ApplyFlow::new(&config);
    let stats = process_offers(&mock, &locators, &flow, config.max_applications)
        .await
        .unwrap();

    // 正好处理 2 个，写 2 行，结果 3-5 不再评估
    assert_eq!(stats.processed(), 2);
    assert_eq!(read_rows(&csv_path).len(), 2);
    assert_eq!(mock.clicks_on(locators.result_title), 2);

    // 筛选面板交互已发生
    assert!(mock
        .clicks()
        .iter()
        .any(|c| c == locators.show_results_button));
}
