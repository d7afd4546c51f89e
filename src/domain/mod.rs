// ==========================================
// 船坞泵排预订系统 - 领域模型层
// ==========================================
// 职责: 定义领域值对象与类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod plan;
pub mod request;
pub mod types;

// 重导出核心类型
pub use plan::{
    AllocationQuote, BulkPlanAllocation, PlanDefinition, RequestValidation, SeasonWindow,
    UsageSummary,
};
pub use request::ServiceRequest;
pub use types::{AllocationState, RequestStatus};
