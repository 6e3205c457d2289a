use crate::error::{AppError, Result};
use chrono::{Datelike, Duration, NaiveDate};

/// 聚合窗口：一周（起始日加6天）或日历月尾段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeDuration {
    Week,
    Month,
}

impl RangeDuration {
    /// 解析 duration 查询参数
    /// 大小写敏感，缺失或其他取值一律拒绝
    pub fn parse(value: Option<&str>) -> Result<Self> {
        match value {
            Some("week") => Ok(RangeDuration::Week),
            Some("month") => Ok(RangeDuration::Month),
            _ => Err(AppError::validation(
                "Invalid duration. Please select either 'week' or 'month'.",
            )),
        }
    }
}

/// 校验并解析路径中的日期参数
/// 年份必须是四位数字，月份 1-12，日期必须在当月有效
pub fn parse_date(year: &str, month: &str, day: &str) -> Result<NaiveDate> {
    let invalid = || AppError::validation("Invalid date provided.");

    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    let day: u32 = day.parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// 当月的最后一天
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    // 四位年份下，下个月的第一天总是可表示的
    first_of_next.and_then(|d| d.pred_opt()).unwrap_or(date)
}

/// 把起始日期和聚合窗口展开为按日递增的日期序列（含两端）
/// month 取的是日历月尾段：月中起始会得到不足整月的范围
pub fn expand_range(start: NaiveDate, duration: RangeDuration) -> Vec<NaiveDate> {
    let end = match duration {
        RangeDuration::Week => start + Duration::days(6),
        RangeDuration::Month => last_day_of_month(start),
    };

    start.iter_days().take_while(|day| *day <= end).collect()
}
