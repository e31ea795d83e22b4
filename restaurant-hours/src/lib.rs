//! Restaurant Hours - 营业时间查询
//!
//! # 架构概述
//!
//! One question, "which restaurants are open at this day and time?",
//! answered by three interchangeable backends that must agree row for row.
//! The open-hours rule itself lives in the `shared` crate.
//!
//! # 模块结构
//!
//! ```text
//! restaurant-hours/src/
//! ├── core/          # 配置、启动环境
//! ├── db/            # SQLite 连接池、迁移、仓储
//! ├── services/      # CSV / SQL / QueryBuilder 三个后端
//! └── utils/         # 错误、日志、查询构建器
//! ```

pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, setup_environment};
pub use db::DbService;
pub use services::{
    BuilderRestaurantService, CsvRestaurantService, MenuBackend, OpenHoursBackend,
    SqlRestaurantService,
};
pub use utils::{AppError, AppResult};
