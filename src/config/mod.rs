use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{RoutingError, RoutingResult};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    pub log: LogConfig,
    pub routing: RoutingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RoutingConfig {
    /// 未显式指定时每个查询返回的路径条数
    pub default_k: usize,
    /// 结果不足K条时是否附带候选池剩余路径
    pub keep_pending: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "routingdb".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            default_k: 3,
            keep_pending: false,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> RoutingResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| RoutingError::Config(e.to_string()))?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> RoutingResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| RoutingError::Config(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}
