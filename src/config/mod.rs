// ==========================================
// 船坞泵排预订系统 - 配置层
// ==========================================
// 职责: 计划目录管理,内置默认 + JSON 覆写
// ==========================================

pub mod plan_catalog;

// 重导出计划目录
pub use plan_catalog::PlanCatalog;
