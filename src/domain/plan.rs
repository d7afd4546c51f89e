// ==========================================
// 船坞泵排预订系统 - 批量计划领域模型
// ==========================================
// 职责: 定义计划定义、季窗口、额度分配等值对象
// 红线: 全部为瞬态值对象,引擎不持久化任何实体
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ==========================================
// PlanDefinition - 计划目录条目
// ==========================================
// 来源: 计划目录 (config::plan_catalog),引擎不自行查询
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDefinition {
    pub plan_code: String,                  // 计划代码 (目录内唯一)
    pub display_name: String,               // 展示名称
    pub base_pump_outs: u32,                // 基础泵排次数
    pub base_price_cents: u64,              // 基础价格 (美分)
    pub price_per_additional_cents: u64,    // 追加单次价格 (美分)
}

// ==========================================
// SeasonWindow - 服务季窗口
// ==========================================
// 不变式: cutoff_date 恒为该年 10 月 31 日
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonWindow {
    pub year: i32,               // 服务季年份
    pub cutoff_date: NaiveDate,  // 季末截止日 (10-31)
}

// ==========================================
// BulkPlanAllocation - 批量计划额度分配
// ==========================================
// 不变式: total_pump_outs = base + additional,
//         且不超过购买日至季末之间的可用周数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkPlanAllocation {
    pub purchase_date: NaiveDate,    // 购买日期
    pub base_pump_outs: u32,         // 基础次数
    pub additional_pump_outs: u32,   // 追加次数
    pub total_pump_outs: u32,        // 总次数 (base + additional)
    pub season_end_date: NaiveDate,  // 季末截止日
}

impl BulkPlanAllocation {
    /// 分配归属的服务季年份
    pub fn season_year(&self) -> i32 {
        self.season_end_date.year()
    }
}

// ==========================================
// AllocationQuote - 追加额度报价结果
// ==========================================
// 结构化结果,message 仅供前端原样展示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationQuote {
    pub total_available_weeks: u32,      // 购买日至季末的可用周数
    pub max_additional_pump_outs: u32,   // 可追加购买的次数上限
    pub season_end_date: NaiveDate,      // 季末截止日
    pub is_valid_purchase_date: bool,    // 购买日期是否有效
    pub message: String,                 // 用户可读消息
}

// ==========================================
// RequestValidation - 预约校验结果
// ==========================================
// 策略拒绝不是错误: 以结构化结果表达,不抛出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestValidation {
    pub is_valid: bool,           // 是否允许预约
    pub message: Option<String>,  // 拒绝原因 (通过时为 None)
}

impl RequestValidation {
    /// 校验通过
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    /// 校验拒绝,附用户可读原因
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
        }
    }
}

// ==========================================
// UsageSummary - 额度使用汇总
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageSummary {
    pub total_pump_outs: u32,      // 分配总额度
    pub used_pump_outs: u32,       // 已消耗额度 (非取消且同年)
    pub remaining_pump_outs: u32,  // 剩余额度 (饱和减法,不为负)
}
