// ==========================================
// 船坞泵排预订系统 - 服务请求领域模型
// ==========================================
// 职责: 定义历史服务请求记录 (调用方传入)
// 红线: 引擎只读取请求历史,从不修改
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::RequestStatus;

// ==========================================
// ServiceRequest - 历史泵排服务请求
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub request_id: Uuid,           // 请求ID (调用方存储层分配)
    pub requested_date: NaiveDate,  // 请求服务日期
    pub status: RequestStatus,      // 请求状态
}

impl ServiceRequest {
    /// 构造新的服务请求记录
    pub fn new(requested_date: NaiveDate, status: RequestStatus) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            requested_date,
            status,
        }
    }

    /// 判断该记录是否计入指定服务季的额度消耗
    ///
    /// 规则: 状态非 Canceled 且请求日期年份等于服务季年份
    pub fn counts_toward(&self, season_year: i32) -> bool {
        self.status.consumes_credit() && self.requested_date.year() == season_year
    }
}
