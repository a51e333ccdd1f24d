use crate::core::{Config, Result};
use crate::fulfillment::FulfillmentEngine;
use crate::inventory::InventoryService;
use crate::menu::MenuService;
use crate::orders::OrderService;
use crate::reports::ReportService;
use crate::store::Stores;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 所有服务共享同一组 [`Stores`] (包括集合锁)，克隆成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | inventory | InventoryService | 原料库存 |
/// | menu | MenuService | 菜单与配方 |
/// | orders | OrderService | 订单查询、修改、删除 |
/// | fulfillment | FulfillmentEngine | 订单创建与结单扣库存 |
/// | reports | ReportService | 销售统计 |
///
/// # 使用示例
///
/// ```ignore
/// let state = ServerState::new(config, Stores::in_memory());
/// let item = state.inventory.get_by_id("milk")?;
/// ```
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Config,
    pub inventory: InventoryService,
    pub menu: MenuService,
    pub orders: OrderService,
    pub fulfillment: FulfillmentEngine,
    pub reports: ReportService,
}

impl ServerState {
    /// Wire every service to the given stores
    pub fn new(config: Config, stores: Stores) -> Self {
        Self {
            config,
            inventory: InventoryService::new(stores.clone()),
            menu: MenuService::new(stores.clone()),
            orders: OrderService::new(stores.clone()),
            fulfillment: FulfillmentEngine::new(stores.clone()),
            reports: ReportService::new(stores),
        }
    }

    /// Open the file-backed stores under `config.data_dir`
    pub fn initialize(config: Config) -> Result<Self> {
        let stores = Stores::open_dir(&config.data_dir)?;
        Ok(Self::new(config, stores))
    }
}
