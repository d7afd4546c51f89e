// ==========================================
// 船坞泵排预订系统 - 领域类型定义
// ==========================================
// 职责: 定义服务请求状态与额度分配状态
// 红线: 分配状态是派生值,不落库存储
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 服务请求状态 (Request Status)
// ==========================================
// 已取消的请求不消耗额度,也不参与周冲突判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Active,    // 已预约,待执行
    Completed, // 已完成服务
    Canceled,  // 已取消
}

impl RequestStatus {
    /// 判断该请求是否计入额度消耗
    ///
    /// 规则: 除 Canceled 外均计入
    pub fn consumes_credit(&self) -> bool {
        !matches!(self, RequestStatus::Canceled)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Active => write!(f, "ACTIVE"),
            RequestStatus::Completed => write!(f, "COMPLETED"),
            RequestStatus::Canceled => write!(f, "CANCELED"),
        }
    }
}

// ==========================================
// 额度分配状态 (Allocation State)
// ==========================================
// 每次查询时由 total/used/today 重新推导,不存储
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllocationState {
    Active,   // 季内且剩余额度 > 0
    Depleted, // 季内但剩余额度 = 0
    Expired,  // 当前日期已过季末截止日
    Inactive, // 分配归属年份不是当前年份
}

impl fmt::Display for AllocationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationState::Active => write!(f, "ACTIVE"),
            AllocationState::Depleted => write!(f, "DEPLETED"),
            AllocationState::Expired => write!(f, "EXPIRED"),
            AllocationState::Inactive => write!(f, "INACTIVE"),
        }
    }
}
