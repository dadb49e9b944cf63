//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`categories`] - 分类查询和管理接口
//! - [`subcategories`] - 子分类查询和管理接口
//! - [`menu_items`] - 菜品查询、搜索和管理接口
//! - [`settings`] - 站点配置接口
//! - [`hours`] - 营业时间接口
//! - [`reservations`] - 预订管理接口
//! - [`admin`] - 批量维护操作 (seed / 子分类分配 / 推荐标记 / 批量导入)

pub mod health;

// Catalog APIs
pub mod categories;
pub mod menu_items;
pub mod subcategories;

// Restaurant info APIs
pub mod hours;
pub mod settings;

// Customer interaction APIs
pub mod reservations;

// Admin batch operations
pub mod admin;
