//! 统一错误处理系统 for RoutingDB
//!
//! 路径搜索本身不产生错误：不可达、起点等于终点、K为0等情况
//! 一律返回空结果。错误类型只覆盖引擎运行前后的环境问题：
//! 配置读写、图数据装载、日志初始化。

use thiserror::Error;

/// 统一的路由错误类型
#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("图数据错误: {0}")]
    Graph(String),

    #[error("日志错误: {0}")]
    Logging(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部错误: {0}")]
    Internal(String),
}

/// 统一的结果类型
pub type RoutingResult<T> = Result<T, RoutingError>;
