//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResult`] - 应用错误类型
//! - [`query_builder`] - 类型化 SQL 查询构建器
//! - 日志初始化

pub mod error;
pub mod logger;
pub mod query_builder;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
