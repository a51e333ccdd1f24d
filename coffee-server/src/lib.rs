//! Hot Coffee Server - 咖啡店库存、菜单与订单服务
//!
//! # 架构概述
//!
//! 三个集合 (原料库存、菜单、订单) 各自以整份 JSON 文件持久化，
//! 每次操作都完整地 "加载 → 校验 → 修改 → 写回"，并保证集合之间的一致性：
//!
//! - 订单只能引用存在的菜品，菜品只能引用存在的原料
//! - 结单按配方扣减库存，要么全部扣减，要么完全不变
//! - 统计报表基于已结订单实时计算
//!
//! # 模块结构
//!
//! ```text
//! coffee-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── store/         # 集合存储 (JSON 文件 / 内存) 与集合锁
//! ├── inventory/     # 原料缓存、扣减计划
//! ├── menu/          # 菜单缓存、按配方扣减
//! ├── orders/        # 订单缓存、编号、修改
//! ├── fulfillment/   # 下单与结单
//! ├── reports/       # 销售统计
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、金额、校验
//! ```

pub mod api;
pub mod core;
pub mod fulfillment;
pub mod inventory;
pub mod menu;
pub mod orders;
pub mod reports;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use fulfillment::FulfillmentEngine;
pub use inventory::InventoryService;
pub use menu::MenuService;
pub use orders::OrderService;
pub use reports::ReportService;
pub use store::{JsonFileStore, MemoryStore, RecordStore, Stores};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    __          __                  ________
   / /_  ____  / /_      _________ / __/ __/__  ___
  / __ \/ __ \/ __/_____/ ___/ __ \/ /_/ /_/ _ \/ _ \
 / / / / /_/ / /_/_____/ /__/ /_/ / __/ __/  __/  __/
/_/ /_/\____/\__/      \___/\____/_/ /_/  \___/\___/
    "#
    );
}
