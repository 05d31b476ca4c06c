//! 工具模块
//!
//! 包含日志等通用基础设施

pub mod logging;
