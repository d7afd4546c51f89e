// ==========================================
// 船坞泵排预订系统 - 额度分配引擎
// ==========================================
// 职责: 计算追加额度上限、校验购买时机、计算计划费用
// 红线: 总额度永不超过购买日至季末的物理可用周数
// ==========================================

use chrono::{Datelike, NaiveDate};
use tracing::instrument;

use crate::domain::plan::{AllocationQuote, BulkPlanAllocation};
use crate::engine::calendar::SeasonCalendar;

// ==========================================
// AllocationEngine - 额度分配引擎
// ==========================================
pub struct AllocationEngine;

impl AllocationEngine {
    /// 计算可追加购买的泵排次数上限
    ///
    /// # 规则
    /// - season_end_date = 购买日所在年份的 10-31
    /// - 购买日 > 季末 → 拒绝购买 (is_valid_purchase_date = false, 上限 0)
    /// - 否则: total_available_weeks = 购买日至季末的周一数,
    ///   max_additional = max(0, total_available_weeks - base_pump_outs)
    ///
    /// # 参数
    /// - purchase_date: 购买日期
    /// - base_pump_outs: 计划基础次数
    ///
    /// # 返回
    /// 结构化报价结果,message 供前端原样展示
    #[instrument]
    pub fn max_additional_pump_outs(
        purchase_date: NaiveDate,
        base_pump_outs: u32,
    ) -> AllocationQuote {
        let season_end_date = SeasonCalendar::season_cutoff(purchase_date.year());

        if purchase_date > season_end_date {
            return AllocationQuote {
                total_available_weeks: 0,
                max_additional_pump_outs: 0,
                season_end_date,
                is_valid_purchase_date: false,
                message: Self::purchase_closed_message(purchase_date.year()),
            };
        }

        let total_available_weeks =
            SeasonCalendar::count_mondays_between(purchase_date, season_end_date);
        let max_additional = total_available_weeks.saturating_sub(base_pump_outs);

        AllocationQuote {
            total_available_weeks,
            max_additional_pump_outs: max_additional,
            season_end_date,
            is_valid_purchase_date: true,
            message: Self::quote_message(max_additional),
        }
    }

    /// 计算批量计划总费用 (美分)
    ///
    /// # 规则
    /// - base_price + price_per_additional × additional_count
    ///
    /// # 前置条件
    /// - additional_count 不超过 max_additional_pump_outs 的上限,
    ///   由调用方在调用前强制;本函数只做纯算术,不做策略闸门
    pub fn calculate_bulk_plan_cost(
        base_price_cents: u64,
        price_per_additional_cents: u64,
        additional_count: u32,
    ) -> u64 {
        base_price_cents + price_per_additional_cents * additional_count as u64
    }

    /// 构造额度分配值对象
    ///
    /// # 规则
    /// - total_pump_outs = base + additional,由此处统一装配,
    ///   调用方不手工拼装该不变式
    pub fn build_allocation(
        purchase_date: NaiveDate,
        base_pump_outs: u32,
        additional_pump_outs: u32,
    ) -> BulkPlanAllocation {
        BulkPlanAllocation {
            purchase_date,
            base_pump_outs,
            additional_pump_outs,
            total_pump_outs: base_pump_outs + additional_pump_outs,
            season_end_date: SeasonCalendar::season_cutoff(purchase_date.year()),
        }
    }

    // ==========================================
    // 消息构造 (展示层,与数值计算分离)
    // ==========================================

    /// 购买窗口已关闭的用户消息
    fn purchase_closed_message(year: i32) -> String {
        format!(
            "Bulk plans cannot be purchased after the October 31, {} season cutoff.",
            year
        )
    }

    /// 报价结果的用户消息
    fn quote_message(max_additional: u32) -> String {
        if max_additional == 0 {
            "Your base plan already covers every available week this season.".to_string()
        } else {
            format!(
                "You may purchase up to {} additional pump-outs this season.",
                max_additional
            )
        }
    }
}
