// ==========================================
// 船坞泵排预订系统 - 核心库
// ==========================================
// 系统定位: 批量计划排期与额度分配引擎 (纯计算,无 I/O)
// 外部协作: 预订处理端提供历史请求,计划目录提供价格定义
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 值对象与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 计划目录
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AllocationState, RequestStatus};

// 领域值对象
pub use domain::{
    AllocationQuote, BulkPlanAllocation, PlanDefinition, RequestValidation, SeasonWindow,
    ServiceRequest, UsageSummary,
};

// 引擎
pub use engine::{AllocationEngine, SeasonCalendar, UsageEngine};

// 配置
pub use config::PlanCatalog;

// API
pub use api::{BookingApi, BookingDecision, BookingError, PurchaseQuote};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "船坞泵排预订系统";
