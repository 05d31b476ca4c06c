//! 服务层模块
//!
//! 包含路径搜索相关的高级服务

pub mod algorithm;
