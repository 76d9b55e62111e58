use crate::error::ConfigError;
use crate::models::settings::Settings;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载设置
pub async fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

    parse_settings(&content, path)
}

pub(crate) fn parse_settings(content: &str, path: &Path) -> Result<Settings, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let result = load_settings(Path::new("definitely/not/here.toml")).await;
        assert!(matches!(result, Err(ConfigError::ReadFailed { .. })));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = parse_settings("[criteria\nstarting_page = ", Path::new("x.toml"));
        assert!(matches!(result, Err(ConfigError::TomlParseFailed { .. })));
    }

    #[test]
    fn test_unknown_attribute_is_rejected() {
        let result = parse_settings(
            "[criteria]\ngood_strengths = [\"Top speed\"]\n",
            Path::new("x.toml"),
        );
        assert!(result.is_err());
    }
}
