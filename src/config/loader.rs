use std::fs;

use crate::config::structs::AppConfig;
use crate::errors::CacheError;

impl AppConfig {
    /// 从文件加载配置
    pub fn from_file(path: &str) -> Result<Self, CacheError> {
        let content = fs::read_to_string(path)
            .map_err(|e| CacheError::Config(format!("Failed to read config file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| CacheError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// 加载默认配置文件（config.toml）
    pub fn load() -> Result<Self, CacheError> {
        Self::from_file("config.toml")
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), CacheError> {
        if self.cache.backend.trim().is_empty() {
            return Err(CacheError::Config("Cache backend name must not be empty".into()));
        }

        match self.log.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(CacheError::Config(format!(
                    "Unsupported log format: {} (expected \"pretty\" or \"json\")",
                    other
                )));
            }
        }

        Ok(())
    }
}
