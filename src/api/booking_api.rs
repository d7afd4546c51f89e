// ==========================================
// 船坞泵排预订系统 - 预订业务接口
// ==========================================
// 职责: 组合计划目录与各引擎,向预订处理端提供业务接口
// 红线: 周冲突与剩余额度两路信号独立返回,不合并裁决
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::api::error::BookingError;
use crate::config::PlanCatalog;
use crate::domain::plan::{AllocationQuote, BulkPlanAllocation, RequestValidation};
use crate::domain::request::ServiceRequest;
use crate::domain::types::AllocationState;
use crate::engine::{AllocationEngine, UsageEngine};

// ==========================================
// PurchaseQuote - 购买报价结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseQuote {
    pub allocation: BulkPlanAllocation, // 将要持久化的额度分配
    pub quote: AllocationQuote,         // 追加额度报价
    pub total_cost_cents: u64,          // 总费用 (美分)
}

// ==========================================
// BookingDecision - 预约判定结果
// ==========================================
// 两路信号独立: 周可用性与剩余额度由调用方分别呈现
// ("额度用尽但可加购" 与 "本周已占用" 是不同的用户话术)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDecision {
    pub week_verdict: RequestValidation, // 周冲突/过季校验
    pub remaining_pump_outs: u32,        // 剩余额度
    pub state: AllocationState,          // 分配状态 (派生)
}

impl BookingDecision {
    /// 综合可预约判定: 周可用且剩余额度 > 0
    ///
    /// 便捷只读视图,调用方仍可分别读取两路信号
    pub fn is_bookable(&self) -> bool {
        self.week_verdict.is_valid && self.remaining_pump_outs > 0
    }
}

// ==========================================
// BookingApi - 预订业务接口
// ==========================================
pub struct BookingApi {
    catalog: PlanCatalog,
}

impl BookingApi {
    /// 以指定计划目录构造接口
    pub fn new(catalog: PlanCatalog) -> Self {
        Self { catalog }
    }

    /// 查询追加额度报价
    ///
    /// # 错误
    /// - UnknownPlan: 计划代码不在目录中
    #[instrument(skip(self))]
    pub fn quote_additional(
        &self,
        plan_code: &str,
        purchase_date: NaiveDate,
    ) -> Result<AllocationQuote, BookingError> {
        let plan = self.lookup_plan(plan_code)?;
        Ok(AllocationEngine::max_additional_pump_outs(
            purchase_date,
            plan.base_pump_outs,
        ))
    }

    /// 购买报价: 校验购买时机与追加上限,计算费用并装配分配
    ///
    /// # 错误
    /// - UnknownPlan: 计划代码不在目录中
    /// - PurchaseWindowClosed: 购买日已过季末截止日
    /// - AdditionalOverCap: 追加数量超过报价上限
    #[instrument(skip(self))]
    pub fn price_purchase(
        &self,
        plan_code: &str,
        purchase_date: NaiveDate,
        additional_count: u32,
    ) -> Result<PurchaseQuote, BookingError> {
        let plan = self.lookup_plan(plan_code)?.clone();
        let quote = AllocationEngine::max_additional_pump_outs(purchase_date, plan.base_pump_outs);

        if !quote.is_valid_purchase_date {
            return Err(BookingError::PurchaseWindowClosed {
                message: quote.message,
            });
        }
        if additional_count > quote.max_additional_pump_outs {
            return Err(BookingError::AdditionalOverCap {
                plan_code: plan.plan_code.clone(),
                requested: additional_count,
                cap: quote.max_additional_pump_outs,
            });
        }

        let allocation =
            AllocationEngine::build_allocation(purchase_date, plan.base_pump_outs, additional_count);
        let total_cost_cents = AllocationEngine::calculate_bulk_plan_cost(
            plan.base_price_cents,
            plan.price_per_additional_cents,
            additional_count,
        );

        debug!(
            plan_code = %plan.plan_code,
            total_pump_outs = allocation.total_pump_outs,
            total_cost_cents,
            "purchase priced"
        );

        Ok(PurchaseQuote {
            allocation,
            quote,
            total_cost_cents,
        })
    }

    /// 预约判定: 组合周冲突校验、剩余额度、分配状态
    ///
    /// 纯查询,不修改任何输入;调用方据此持久化或拒绝
    #[instrument(skip(self, allocation, records), fields(records = records.len()))]
    pub fn check_booking(
        &self,
        allocation: &BulkPlanAllocation,
        records: &[ServiceRequest],
        request_date: NaiveDate,
        today: NaiveDate,
    ) -> BookingDecision {
        let week_verdict =
            UsageEngine::validate_request(request_date, records, allocation.season_end_date);
        let summary = UsageEngine::usage_summary(allocation, records);
        let state = UsageEngine::derive_state(allocation, records, today);

        BookingDecision {
            week_verdict,
            remaining_pump_outs: summary.remaining_pump_outs,
            state,
        }
    }

    /// 按代码查目录
    fn lookup_plan(&self, plan_code: &str) -> Result<&crate::domain::plan::PlanDefinition, BookingError> {
        self.catalog
            .get(plan_code)
            .ok_or_else(|| BookingError::UnknownPlan(plan_code.to_string()))
    }
}
