use std::sync::Arc;

use dashmap::DashMap;
use shared::SyncPayload;
use shared::models::SyncStatus;
use tokio::sync::broadcast;

use crate::core::Config;
use crate::core::tasks::BackgroundTasks;
use crate::services::CartRegistry;
use crate::store::DocumentStore;

/// Sync 广播通道容量
const SYNC_CHANNEL_CAPACITY: usize = 1024;

/// 购物车回收扫描间隔
const CART_JANITOR_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

/// Resource names used in sync notifications and version polling
pub mod resources {
    pub const MENU: &str = "menu";
    pub const TABLES: &str = "tables";
    pub const ORDERS: &str = "orders";

    /// Resources whose versions are exposed to polling clients
    pub const CLIENT_VISIBLE: &[&str] = &[MENU, TABLES, ORDERS];
}

/// 资源版本管理器
///
/// 每种资源类型维护独立的版本号，支持原子递增。轮询客户端通过版本号
/// 判断数据新旧，决定是否重新读取文档。
#[derive(Debug)]
pub struct ResourceVersions {
    versions: DashMap<String, u64>,
}

impl ResourceVersions {
    /// 创建空的版本管理器
    pub fn new() -> Self {
        Self {
            versions: DashMap::new(),
        }
    }

    /// 递增指定资源的版本号并返回新值
    ///
    /// 如果资源不存在，从 0 开始递增（返回 1）
    pub fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// 获取指定资源的当前版本号
    ///
    /// 如果资源不存在，返回 0
    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }
}

impl Default for ResourceVersions {
    fn default() -> Self {
        Self::new()
    }
}

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是服务的核心数据结构，使用 Arc 实现浅拷贝，
/// 所有权成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | DocumentStore | 嵌入式文档存储 (redb) |
/// | carts | Arc<CartRegistry> | 会话购物车注册表 |
/// | resource_versions | Arc<ResourceVersions> | 资源版本管理 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式文档存储
    pub store: DocumentStore,
    /// 会话购物车注册表 (内存态，不持久化)
    pub carts: Arc<CartRegistry>,
    /// 服务实例 epoch - 启动时生成的唯一标识
    /// 客户端用它检测服务重启后触发全量刷新
    pub epoch: String,
    /// 资源版本管理器 (用于 broadcast_sync 自动递增版本号)
    pub resource_versions: Arc<ResourceVersions>,
    /// 同步通知广播通道
    sync_tx: broadcast::Sender<SyncPayload>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：工作目录结构、文档存储、购物车注册表。
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        // 0. Ensure work_dir structure exists
        config.ensure_work_dir_structure()?;

        // 1. Open the document store at work_dir/database/comanda.db
        let db_path = config.database_dir().join("comanda.db");
        let store = DocumentStore::open(&db_path)?;

        let (sync_tx, _) = broadcast::channel(SYNC_CHANNEL_CAPACITY);
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(epoch = %epoch, db = %db_path.display(), "Server state initialized");

        Ok(Self {
            config: config.clone(),
            store,
            carts: Arc::new(CartRegistry::new()),
            epoch,
            resource_versions: Arc::new(ResourceVersions::new()),
            sync_tx,
        })
    }

    /// 构造测试用状态 (内存外状态由调用方提供)
    pub fn with_store(config: Config, store: DocumentStore) -> Self {
        let (sync_tx, _) = broadcast::channel(SYNC_CHANNEL_CAPACITY);
        Self {
            config,
            store,
            carts: Arc::new(CartRegistry::new()),
            epoch: uuid::Uuid::new_v4().to_string(),
            resource_versions: Arc::new(ResourceVersions::new()),
            sync_tx,
        }
    }

    /// 广播同步消息
    ///
    /// 文档每次变更后调用：版本号自动递增，载荷发给所有进程内订阅者。
    /// 没有订阅者时发送失败是正常情况，轮询客户端依旧能从
    /// `/api/sync/status` 观察到版本变化。
    ///
    /// # 参数
    /// - `resource`: 资源类型 (如 "menu", "tables", "orders")
    /// - `action`: 变更类型 ("created", "updated", "deleted", "confirmed")
    /// - `id`: 资源内实体标识
    /// - `data`: 资源数据 (deleted 时为 None)
    pub fn broadcast_sync<T: serde::Serialize>(
        &self,
        resource: &str,
        action: &str,
        id: &str,
        data: Option<&T>,
    ) {
        let version = self.resource_versions.increment(resource);
        let payload = SyncPayload {
            resource: resource.to_string(),
            version,
            action: action.to_string(),
            id: id.to_string(),
            data: data.and_then(|d| serde_json::to_value(d).ok()),
        };
        let _ = self.sync_tx.send(payload);
    }

    /// 订阅同步通知 (进程内)
    pub fn subscribe(&self) -> broadcast::Receiver<SyncPayload> {
        self.sync_tx.subscribe()
    }

    /// 当前同步状态 (epoch + 各资源版本)
    pub fn sync_status(&self) -> SyncStatus {
        let mut versions = std::collections::HashMap::new();
        for &resource in resources::CLIENT_VISIBLE {
            versions.insert(resource.to_string(), self.resource_versions.get(resource));
        }
        SyncStatus {
            epoch: self.epoch.clone(),
            versions,
        }
    }

    /// 启动后台任务
    ///
    /// 必须在 `Server::run()` 中调用；返回的管理器负责优雅关闭。
    ///
    /// 启动的任务：
    /// - 购物车回收器 (闲置会话定期清理)
    pub fn start_background_tasks(&self) -> BackgroundTasks {
        let mut tasks = BackgroundTasks::new();

        let carts = self.carts.clone();
        let idle = std::time::Duration::from_secs(self.config.cart_idle_timeout_secs);
        let token = tasks.shutdown_token();
        tasks.spawn("cart_janitor", async move {
            let mut ticker = tokio::time::interval(CART_JANITOR_INTERVAL);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        let evicted = carts.evict_idle(idle);
                        if evicted > 0 {
                            tracing::info!(evicted, "Evicted idle cart sessions");
                        }
                    }
                }
            }
        });

        tasks.log_summary();
        tasks
    }
}
