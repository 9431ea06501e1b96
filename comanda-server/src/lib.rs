//! Comanda Server - 扫码点餐系统服务端
//!
//! # 架构概述
//!
//! 本模块是点餐服务的主入口，提供以下核心功能：
//!
//! - **文档存储** (`store`): 嵌入式 redb 键值文档存储 (整文档覆盖写)
//! - **数据仓库** (`repo`): 菜单、桌台、订单文档的读写与校验
//! - **购物车** (`services::carts`): 会话级购物车累加器
//! - **HTTP API** (`api`): RESTful API 接口 + 轮询同步
//!
//! # 模块结构
//!
//! ```text
//! comanda-server/src/
//! ├── core/          # 配置、状态、服务器、后台任务
//! ├── store.rs       # 文档存储 (redb)
//! ├── repo/          # 菜单 / 桌台 / 订单仓库
//! ├── services/      # 购物车注册表
//! ├── qr.rs          # 桌台二维码目标地址推导
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod core;
pub mod qr;
pub mod repo;
pub mod services;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use self::core::{Config, Server, ServerState};
pub use store::{DocumentStore, StoreError, StoreResult};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv, 日志)
///
/// 在加载配置之前调用
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    // .env is optional; ignore a missing file
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______
  / ____/___  ____ ___  ____ _____  ____/ /___ _
 / /   / __ \/ __ `__ \/ __ `/ __ \/ __  / __ `/
/ /___/ /_/ / / / / / / /_/ / / / / /_/ / /_/ /
\____/\____/_/ /_/ /_/\__,_/_/ /_/\__,_/\__,_/
    "#
    );
}
