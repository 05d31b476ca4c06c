//! 图操作核心模块
//!
//! 包含路径搜索所依赖的内存图表示

pub mod route_graph;

// 重新导出图相关类型
pub use route_graph::{RouteEdge, RouteGraph};
