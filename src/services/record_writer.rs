//! 职位记录写入服务 - 业务能力层
//!
//! 只负责"追加一条 CSV 记录"能力，不关心流程

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::JobRecord;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::debug;

/// CSV 表头
const HEADERS: [&str; 5] = [
    "Date Processed",
    "Job Title",
    "Company",
    "Location",
    "Description",
];

/// 职位记录写入服务
///
/// 职责：
/// - 将单条职位记录追加写入 CSV 文件
/// - 文件不存在时先写入表头
/// - 不读取已有内容
pub struct RecordWriter {
    csv_path: String,
}

impl RecordWriter {
    /// 创建新的记录写入服务
    pub fn new(config: &Config) -> Self {
        Self {
            csv_path: config.jobs_csv_path.clone(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            csv_path: path.into(),
        }
    }

    /// 记录文件路径
    pub fn csv_path(&self) -> &str {
        &self.csv_path
    }

    /// 追加写入一条职位记录
    ///
    /// 每条记录只写入一次；同一职位不会产生重复行
    pub async fn append(&self, record: &JobRecord) -> AppResult<()> {
        debug!("写入职位记录: {} | {}", record.title, record.company);

        let file_exists = Path::new(&self.csv_path).exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.csv_path)
            .map_err(|e| AppError::file_write_failed(&self.csv_path, e))?;

        let mut writer = csv::Writer::from_writer(file);

        if !file_exists {
            writer
                .write_record(HEADERS)
                .map_err(|e| AppError::file_write_failed(&self.csv_path, e))?;
            debug!("已创建 CSV 文件并写入表头");
        }

        writer
            .write_record([
                record.processed_at.as_str(),
                record.title.as_str(),
                record.company.as_str(),
                record.location.as_str(),
                record.description.as_str(),
            ])
            .map_err(|e| AppError::file_write_failed(&self.csv_path, e))?;

        writer
            .flush()
            .map_err(|e| AppError::file_write_failed(&self.csv_path, e))?;

        Ok(())
    }
}
