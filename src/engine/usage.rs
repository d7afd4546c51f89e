// ==========================================
// 船坞泵排预订系统 - 用量与预约校验引擎
// ==========================================
// 职责: 统计额度消耗、校验周冲突、推导分配状态
// 红线: 周冲突与剩余额度是两个独立查询,引擎不合并裁决
// 红线: "今天"一律由参数显式注入,引擎内部不读时钟
// ==========================================

use chrono::{Datelike, NaiveDate};
use tracing::instrument;

use crate::domain::plan::{BulkPlanAllocation, RequestValidation, UsageSummary};
use crate::domain::request::ServiceRequest;
use crate::domain::types::AllocationState;
use crate::engine::calendar::SeasonCalendar;

// ==========================================
// UsageEngine - 用量与校验引擎
// ==========================================
pub struct UsageEngine;

impl UsageEngine {
    /// 统计指定服务季的已消耗额度
    ///
    /// # 规则
    /// - 记录计入消耗 iff 状态非 Canceled 且请求日期年份 = 服务季年份
    /// - 已取消的请求永不扣减额度,之后重新预约也不补扣
    pub fn used_pump_outs(records: &[ServiceRequest], season_year: i32) -> u32 {
        records
            .iter()
            .filter(|r| r.counts_toward(season_year))
            .count() as u32
    }

    /// 计算剩余额度
    ///
    /// # 规则
    /// - remaining = max(0, total - used),饱和减法不为负
    pub fn remaining_pump_outs(total_pump_outs: u32, used_pump_outs: u32) -> u32 {
        total_pump_outs.saturating_sub(used_pump_outs)
    }

    /// 额度使用汇总
    pub fn usage_summary(
        allocation: &BulkPlanAllocation,
        records: &[ServiceRequest],
    ) -> UsageSummary {
        let used = Self::used_pump_outs(records, allocation.season_year());
        UsageSummary {
            total_pump_outs: allocation.total_pump_outs,
            used_pump_outs: used,
            remaining_pump_outs: Self::remaining_pump_outs(allocation.total_pump_outs, used),
        }
    }

    /// 校验新的泵排预约请求
    ///
    /// # 规则 (按序)
    /// 1. request_date > season_end_date → 拒绝 (计划已过季)
    /// 2. 任一非取消历史请求与 request_date 同属一个 ISO 周 → 拒绝
    ///    (每日历周至多一次服务,与剩余额度无关)
    /// 3. 否则通过
    ///
    /// 同日重复与同周异日同等处理,周归属是唯一判据;
    /// 校验是对全量历史的集合成员检查,不是提前短路的扫描
    ///
    /// # 注意
    /// 剩余额度检查是独立关注点: 即使本函数判定周可用,
    /// 调用方仍须用 remaining_pump_outs 拒绝零额度的请求
    #[instrument(skip(existing_requests), fields(existing = existing_requests.len()))]
    pub fn validate_request(
        request_date: NaiveDate,
        existing_requests: &[ServiceRequest],
        season_end_date: NaiveDate,
    ) -> RequestValidation {
        if request_date > season_end_date {
            return RequestValidation::invalid(Self::plan_expired_message(season_end_date));
        }

        let request_week = SeasonCalendar::monday_of(request_date);
        let week_taken = existing_requests.iter().any(|r| {
            r.status.consumes_credit() && SeasonCalendar::monday_of(r.requested_date) == request_week
        });

        if week_taken {
            return RequestValidation::invalid(Self::week_conflict_message(request_week));
        }

        RequestValidation::valid()
    }

    /// 推导分配状态 (派生值,每次查询重算)
    ///
    /// # 规则 (按序)
    /// 1. 分配归属年份 ≠ today 年份 → Inactive
    /// 2. today > season_end_date → Expired
    /// 3. 剩余额度 = 0 → Depleted
    /// 4. 否则 → Active
    pub fn derive_state(
        allocation: &BulkPlanAllocation,
        records: &[ServiceRequest],
        today: NaiveDate,
    ) -> AllocationState {
        if allocation.season_year() != today.year() {
            return AllocationState::Inactive;
        }
        if today > allocation.season_end_date {
            return AllocationState::Expired;
        }

        let summary = Self::usage_summary(allocation, records);
        if summary.remaining_pump_outs == 0 {
            AllocationState::Depleted
        } else {
            AllocationState::Active
        }
    }

    // ==========================================
    // 消息构造 (展示层,与判定逻辑分离)
    // ==========================================

    /// 计划已过季的用户消息
    fn plan_expired_message(season_end_date: NaiveDate) -> String {
        format!(
            "Your bulk plan expired on {}; pump-outs cannot be requested after the season cutoff.",
            season_end_date.format("%B %-d, %Y")
        )
    }

    /// 周冲突的用户消息
    fn week_conflict_message(week_monday: NaiveDate) -> String {
        format!(
            "Only one pump-out service is allowed per calendar week; you already have a request in the week of {}.",
            week_monday.format("%B %-d, %Y")
        )
    }
}
