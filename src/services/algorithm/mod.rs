//! 算法模块
//!
//! 包含路径搜索相关算法实现

pub mod dijkstra;
pub mod yen;

// 重新导出常用算法类型
pub use dijkstra::Dijkstra;
pub use yen::{find_k_shortest_batch, NoopVisitor, Visitor, Yen};
