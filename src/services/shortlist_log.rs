//! 入围记录服务 - 业务能力层
//!
//! 只负责把已入围的职员追加写入记录文件。
//! 文件只写不读，下一次运行不会据此去重。

use anyhow::Result;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::models::{Role, ShortlistTarget};

pub struct ShortlistLog {
    file_path: String,
}

impl ShortlistLog {
    /// 使用指定文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            file_path: path.into(),
        }
    }

    pub async fn record(&self, page: u32, role: Role, target: &ShortlistTarget) -> Result<()> {
        debug!("写入入围记录: {} #{} -> {}", role, target.profile_id, self.file_path);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
            .await?;

        let line = format!(
            "{} | 第 {} 页 | {} #{} | {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            page,
            role,
            target.profile_id,
            target.category
        );
        file.write_all(line.as_bytes()).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShortlistCategory;

    #[tokio::test]
    async fn test_record_appends_lines() {
        let path = std::env::temp_dir().join(format!("igp_shortlist_log_{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let log = ShortlistLog::with_path(path.to_string_lossy().to_string());

        let target = ShortlistTarget {
            profile_id: "401".into(),
            category: ShortlistCategory::Driver,
        };
        log.record(2, Role::Driver, &target).await.unwrap();
        log.record(2, Role::Driver, &target).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("#401"));
        assert!(content.contains("车手(3)"));

        let _ = std::fs::remove_file(&path);
    }
}
