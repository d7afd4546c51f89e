// ==========================================
// 船坞泵排预订系统 - 季历计算纯函数库
// ==========================================
// 职责: 日历日期到服务季边界、周槽位的确定性映射
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

use chrono::{Datelike, Duration, NaiveDate};

use crate::domain::plan::SeasonWindow;

// 季末截止: 每年 10 月 31 日
const SEASON_CUTOFF_MONTH: u32 = 10;
const SEASON_CUTOFF_DAY: u32 = 31;

// ==========================================
// SeasonCalendar - 纯函数工具类
// ==========================================
pub struct SeasonCalendar;

impl SeasonCalendar {
    /// 计算指定年份的季末截止日
    ///
    /// # 规则
    /// - 恒为该年 10 月 31 日
    ///
    /// # 参数
    /// - year: 服务季年份 (来自真实日期,无需校验)
    pub fn season_cutoff(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, SEASON_CUTOFF_MONTH, SEASON_CUTOFF_DAY).unwrap()
    }

    /// 构造指定年份的服务季窗口
    pub fn season_window(year: i32) -> SeasonWindow {
        SeasonWindow {
            year,
            cutoff_date: Self::season_cutoff(year),
        }
    }

    /// 计算日期所在周的周一 (ISO 周,周一为一周之始)
    ///
    /// # 规则
    /// - date 本身是周一 → 原样返回
    /// - 否则 → 回退到本周周一
    ///
    /// # 示例
    /// ```
    /// use chrono::NaiveDate;
    /// use marina_pumpout_engine::engine::SeasonCalendar;
    ///
    /// // 2024-06-11 是周二 → 周一为 2024-06-10
    /// let tue = NaiveDate::from_ymd_opt(2024, 6, 11).unwrap();
    /// let mon = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    /// assert_eq!(SeasonCalendar::monday_of(tue), mon);
    /// assert_eq!(SeasonCalendar::monday_of(mon), mon);
    /// ```
    pub fn monday_of(date: NaiveDate) -> NaiveDate {
        date - Duration::days(date.weekday().num_days_from_monday() as i64)
    }

    /// 枚举 [start, end] 区间内的全部周一
    ///
    /// # 规则
    /// - 产出满足 start <= m <= end 的每个周一,升序、去重、有限
    /// - start 非周一时,首个槽位是 start 之后的下一个周一,
    ///   不补发所在周的残余部分 (周三购买不获得本周额度)
    /// - start > end → 空序列,不报错
    ///
    /// # 参数
    /// - start: 区间起点 (含)
    /// - end: 区间终点 (含)
    pub fn enumerate_mondays(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let mut mondays = Vec::new();

        // 首个周一: start 所在周的周一,若早于 start 则推进到下周
        let mut cursor = Self::monday_of(start);
        if cursor < start {
            cursor += Duration::weeks(1);
        }

        // 逐周推进 (start > end 时循环体不执行)
        while cursor <= end {
            mondays.push(cursor);
            cursor += Duration::weeks(1);
        }

        mondays
    }

    /// 统计 [start, end] 区间内的周一数量
    ///
    /// # 规则
    /// - 等于 enumerate_mondays(start, end) 的长度
    pub fn count_mondays_between(start: NaiveDate, end: NaiveDate) -> u32 {
        Self::enumerate_mondays(start, end).len() as u32
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_season_cutoff_is_oct_31() {
        assert_eq!(SeasonCalendar::season_cutoff(2024), date(2024, 10, 31));
        assert_eq!(SeasonCalendar::season_cutoff(2025), date(2025, 10, 31));
    }

    #[test]
    fn test_season_window() {
        let window = SeasonCalendar::season_window(2024);
        assert_eq!(window.year, 2024);
        assert_eq!(window.cutoff_date, date(2024, 10, 31));
    }

    #[test]
    fn test_monday_of_identity_on_monday() {
        // 2024-05-06 是周一
        let mon = date(2024, 5, 6);
        assert_eq!(SeasonCalendar::monday_of(mon), mon);
    }

    #[test]
    fn test_monday_of_midweek() {
        // 2024-06-11 (周二) 与 2024-06-16 (周日) 同属 2024-06-10 周
        assert_eq!(SeasonCalendar::monday_of(date(2024, 6, 11)), date(2024, 6, 10));
        assert_eq!(SeasonCalendar::monday_of(date(2024, 6, 16)), date(2024, 6, 10));
    }

    #[test]
    fn test_count_same_day_monday_is_one() {
        let mon = date(2024, 5, 6);
        assert_eq!(SeasonCalendar::count_mondays_between(mon, mon), 1);
    }

    #[test]
    fn test_count_same_day_non_monday_is_zero() {
        let wed = date(2024, 5, 8);
        assert_eq!(SeasonCalendar::count_mondays_between(wed, wed), 0);
    }

    #[test]
    fn test_enumerate_skips_partial_week() {
        // 周三起算 → 首个槽位是下周一,不含本周
        let wed = date(2024, 5, 8);
        let mondays = SeasonCalendar::enumerate_mondays(wed, date(2024, 5, 31));
        assert_eq!(
            mondays,
            vec![date(2024, 5, 13), date(2024, 5, 20), date(2024, 5, 27)]
        );
    }

    #[test]
    fn test_enumerate_start_after_end_is_empty() {
        let mondays = SeasonCalendar::enumerate_mondays(date(2024, 6, 1), date(2024, 5, 1));
        assert!(mondays.is_empty());
    }

    #[test]
    fn test_enumerate_ascending_weekly_all_mondays() {
        let mondays = SeasonCalendar::enumerate_mondays(date(2024, 5, 6), date(2024, 10, 31));
        for m in &mondays {
            assert_eq!(m.weekday(), Weekday::Mon);
        }
        for pair in mondays.windows(2) {
            assert_eq!((pair[1] - pair[0]).num_days(), 7);
        }
    }

    #[test]
    fn test_count_mondays_spec_example() {
        // 2024-05-06 (周一) 至 2024-10-31: 最后一个周一是 2024-10-28,共 26 个
        assert_eq!(
            SeasonCalendar::count_mondays_between(date(2024, 5, 6), date(2024, 10, 31)),
            26
        );
    }
}
