//! 服务模块
//!
//! - [`carts`] - 会话购物车注册表

pub mod carts;

pub use carts::{CartError, CartRegistry};
