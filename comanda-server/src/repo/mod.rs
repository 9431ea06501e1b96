//! 数据仓库层
//!
//! 每类持久化文档一个仓库：整文档读-改-写，读取失败降级为空数据，
//! 写入失败向上传播。
//!
//! - [`MenuRepository`] - 工作菜单与确认快照
//! - [`TableRepository`] - 桌台列表 (密集编号)
//! - [`OrderRepository`] - 订单日志

pub mod menu;
pub mod orders;
pub mod tables;

pub use menu::MenuRepository;
pub use orders::OrderRepository;
pub use tables::TableRepository;
