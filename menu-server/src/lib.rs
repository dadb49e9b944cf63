//! Lazeez Menu Server - 餐厅菜单目录服务
//!
//! # 架构概述
//!
//! 本模块是菜单服务的主入口，提供以下核心功能：
//!
//! - **目录查询** (`api`): 分类、子分类、菜品的 RESTful 查询接口
//! - **目录管理** (`api`): 稀疏 patch 语义的 CRUD 接口
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储、schema 和结构 seed
//! - **批量维护** (`migrate`): 子分类分配、重名去重、批量导入
//! - **预订购物车** (`cart`): 会话级购物车和 WhatsApp/Viber 消息导出
//!
//! # 模块结构
//!
//! ```text
//! menu-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models / repository / schema / seed)
//! ├── migrate/       # 批量维护操作
//! ├── cart/          # 预订购物车和外链
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod cart;
pub mod core;
pub mod db;
pub mod migrate;
pub mod utils;

// Re-export 公共类型
pub use cart::{Cart, CartItem, CartRates};
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResult};

/// 设置环境 (dotenv, 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let log_dir = config.log_dir();
    utils::init_logger_with_file(Some(&config.log_level), log_dir.to_str());

    Ok(())
}
