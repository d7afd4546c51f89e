// ==========================================
// 船坞泵排预订系统 - 引擎层
// ==========================================
// 职责: 排期与额度分配的业务规则引擎
// 红线: 纯函数、无 I/O、无共享可变状态,"今天"显式注入
// ==========================================

pub mod allocation;
pub mod calendar;
pub mod usage;

// 重导出核心引擎
pub use allocation::AllocationEngine;
pub use calendar::SeasonCalendar;
pub use usage::UsageEngine;
