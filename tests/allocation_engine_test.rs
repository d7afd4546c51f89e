// ==========================================
// 额度分配引擎测试
// ==========================================
// 职责: 验证追加额度上限、购买时机校验与费用计算
// ==========================================

use chrono::NaiveDate;
use marina_pumpout_engine::engine::{AllocationEngine, SeasonCalendar};

// ==========================================
// 测试辅助函数
// ==========================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ==========================================
// 报价场景
// ==========================================

#[test]
fn test_scenario_01_monday_purchase_reference_quote() {
    // 场景1: 2024-05-06 (周一) 购买,基础 10 次
    // 2024-05-06 至 2024-10-28 共 26 个周一 → 上限 16
    let quote = AllocationEngine::max_additional_pump_outs(date(2024, 5, 6), 10);
    assert!(quote.is_valid_purchase_date);
    assert_eq!(quote.season_end_date, date(2024, 10, 31));
    assert_eq!(quote.total_available_weeks, 26);
    assert_eq!(quote.max_additional_pump_outs, 16);
}

#[test]
fn test_scenario_02_november_purchase_rejected() {
    // 场景2: 11月1日购买 → 拒绝,额度全零
    let quote = AllocationEngine::max_additional_pump_outs(date(2024, 11, 1), 10);
    assert!(!quote.is_valid_purchase_date);
    assert_eq!(quote.total_available_weeks, 0);
    assert_eq!(quote.max_additional_pump_outs, 0);
    assert!(!quote.message.is_empty());
}

#[test]
fn test_scenario_03_cutoff_day_purchase_still_valid() {
    // 场景3: 10月31日当天购买仍有效 (2024-10-31 是周四,剩余 0 周)
    let quote = AllocationEngine::max_additional_pump_outs(date(2024, 10, 31), 5);
    assert!(quote.is_valid_purchase_date);
    assert_eq!(quote.total_available_weeks, 0);
    assert_eq!(quote.max_additional_pump_outs, 0);
}

#[test]
fn test_scenario_04_base_exceeds_weeks_cap_is_zero() {
    // 场景4: 基础次数超过剩余周数 → 上限饱和为 0
    let quote = AllocationEngine::max_additional_pump_outs(date(2024, 9, 30), 20);
    assert!(quote.is_valid_purchase_date);
    assert!(quote.total_available_weeks < 20);
    assert_eq!(quote.max_additional_pump_outs, 0);
}

#[test]
fn test_scenario_05_cap_never_exceeds_physical_weeks() {
    // 场景5: 不变式 — base + max_additional ≤ 可用周数 (上限非零时取等)
    for base in [0u32, 1, 5, 10, 30] {
        let quote = AllocationEngine::max_additional_pump_outs(date(2024, 4, 3), base);
        let weeks = SeasonCalendar::count_mondays_between(date(2024, 4, 3), quote.season_end_date);
        assert_eq!(quote.total_available_weeks, weeks);
        assert_eq!(quote.max_additional_pump_outs, weeks.saturating_sub(base));
    }
}

#[test]
fn test_scenario_06_zero_base_gets_all_weeks() {
    // 场景6: 基础 0 次 → 可追加数等于全部可用周数
    let quote = AllocationEngine::max_additional_pump_outs(date(2024, 5, 6), 0);
    assert_eq!(quote.max_additional_pump_outs, 26);
}

// ==========================================
// 费用计算
// ==========================================

#[test]
fn test_scenario_07_cost_arithmetic() {
    // 场景7: 47500 + 2500 × 3 = 55000
    assert_eq!(AllocationEngine::calculate_bulk_plan_cost(47_500, 2_500, 3), 55_000);
    assert_eq!(AllocationEngine::calculate_bulk_plan_cost(47_500, 2_500, 0), 47_500);
    assert_eq!(AllocationEngine::calculate_bulk_plan_cost(0, 2_500, 16), 40_000);
}

// ==========================================
// 分配装配
// ==========================================

#[test]
fn test_scenario_08_allocation_invariant() {
    // 场景8: total = base + additional,季末为购买年 10-31
    let alloc = AllocationEngine::build_allocation(date(2024, 6, 12), 10, 16);
    assert_eq!(alloc.total_pump_outs, 26);
    assert_eq!(alloc.season_end_date, date(2024, 10, 31));
    assert_eq!(alloc.purchase_date, date(2024, 6, 12));
}
