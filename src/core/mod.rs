//! 核心模型模块
//!
//! 包含路径模型与统一错误处理

pub mod error;
pub mod path;

// 重新导出常用类型
pub use error::{RoutingError, RoutingResult};
pub use path::{Hop, Path};
