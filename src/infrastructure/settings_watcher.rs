//! 设置文件热加载 - 基础设施层
//!
//! 编排层在每页开始时调用 [`SettingsSource::current`]，拿到的快照在本页内不变。
//! 文件修改时间变化时重新读取；读取失败则保留上一份快照。

use crate::error::ConfigError;
use crate::models::{load_settings, Settings, Snapshot};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tokio::fs;
use tracing::{info, warn};

/// 当前设置快照的提供者
#[allow(async_fn_in_trait)]
pub trait SettingsSource {
    async fn current(&mut self) -> Snapshot;
}

/// 固定不变的设置（测试或一次性运行）
#[derive(Debug, Clone)]
pub struct FixedSettings(Snapshot);

impl FixedSettings {
    pub fn new(settings: Settings) -> Self {
        Self(Snapshot::new(0, settings))
    }
}

impl SettingsSource for FixedSettings {
    async fn current(&mut self) -> Snapshot {
        self.0.clone()
    }
}

/// 监视设置文件，按修改时间重新加载
#[derive(Debug)]
pub struct SettingsWatcher {
    path: PathBuf,
    modified: Option<SystemTime>,
    snapshot: Snapshot,
}

impl SettingsWatcher {
    /// 首次加载，失败即返回错误
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let modified = modified_time(&path).await;
        let settings = load_settings(&path).await?;
        info!("✓ 已加载设置: {}", path.display());

        Ok(Self {
            path,
            modified,
            snapshot: Snapshot::new(0, settings),
        })
    }
}

impl SettingsSource for SettingsWatcher {
    async fn current(&mut self) -> Snapshot {
        let modified = modified_time(&self.path).await;
        if modified.is_none() || modified == self.modified {
            return self.snapshot.clone();
        }
        self.modified = modified;

        match load_settings(&self.path).await {
            Ok(settings) => {
                let version = self.snapshot.version + 1;
                self.snapshot = Snapshot::new(version, settings);
                info!("🔄 设置已重新加载 (版本 {})", version);
            }
            Err(e) => {
                warn!("⚠️ 设置重新加载失败，继续使用版本 {}: {}", self.snapshot.version, e);
            }
        }

        self.snapshot.clone()
    }
}

async fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).await.ok()?.modified().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "igp_shortlist_{}_{}.toml",
            name,
            std::process::id()
        ))
    }

    fn write_with_mtime(path: &Path, content: &str, mtime: SystemTime) {
        std::fs::write(path, content).unwrap();
        let file = std::fs::File::options().write(true).open(path).unwrap();
        file.set_modified(mtime).unwrap();
    }

    #[tokio::test]
    async fn test_reload_bumps_version_only_on_change() {
        let path = temp_settings_path("reload");
        let base = SystemTime::now() - Duration::from_secs(60);
        write_with_mtime(&path, "[criteria]\nstarting_page = 3\n", base);

        let mut watcher = SettingsWatcher::open(&path).await.unwrap();
        let first = watcher.current().await;
        assert_eq!(first.version, 0);
        assert_eq!(first.criteria().starting_page, 3);

        // 文件未变化，快照不变
        let again = watcher.current().await;
        assert_eq!(again.version, 0);

        write_with_mtime(
            &path,
            "[criteria]\nstarting_page = 3\nmaximum_level = 7\n",
            base + Duration::from_secs(10),
        );
        let reloaded = watcher.current().await;
        assert_eq!(reloaded.version, 1);
        assert_eq!(reloaded.criteria().maximum_level, 7);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_snapshot() {
        let path = temp_settings_path("broken");
        let base = SystemTime::now() - Duration::from_secs(60);
        write_with_mtime(&path, "[criteria]\nmaximum_level = 4\n", base);

        let mut watcher = SettingsWatcher::open(&path).await.unwrap();
        write_with_mtime(&path, "[criteria\n", base + Duration::from_secs(10));

        let snapshot = watcher.current().await;
        assert_eq!(snapshot.version, 0);
        assert_eq!(snapshot.criteria().maximum_level, 4);

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_open_fails_without_file() {
        let result = SettingsWatcher::open(temp_settings_path("missing")).await;
        assert!(result.is_err());
    }
}
