use chrono::NaiveDate;

/// 星期几取值校验：0 = 周一 .. 6 = 周日
pub fn validate_day_in_week(day_in_week: i32) -> Result<(), &'static str> {
    if !(0..=6).contains(&day_in_week) {
        return Err("day_in_week must be between 0 (Monday) and 6 (Sunday)");
    }
    Ok(())
}

/// 节次取值校验：0 ..= 10
pub fn validate_hour_in_day(hour_in_day: i32) -> Result<(), &'static str> {
    if !(0..=10).contains(&hour_in_day) {
        return Err("hour_in_day must be between 0 and 10");
    }
    Ok(())
}

/// 日期区间形状校验：起点不得晚于终点（两端闭区间）
pub fn validate_date_interval(from: NaiveDate, to: NaiveDate) -> Result<(), &'static str> {
    if from > to {
        return Err("valid_from must not be later than valid_to");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_in_week_bounds() {
        assert!(validate_day_in_week(0).is_ok());
        assert!(validate_day_in_week(6).is_ok());
        assert!(validate_day_in_week(-1).is_err());
        assert!(validate_day_in_week(7).is_err());
    }

    #[test]
    fn test_hour_in_day_bounds() {
        assert!(validate_hour_in_day(0).is_ok());
        assert!(validate_hour_in_day(10).is_ok());
        assert!(validate_hour_in_day(-1).is_err());
        assert!(validate_hour_in_day(11).is_err());
    }

    #[test]
    fn test_date_interval_shape() {
        let from = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert!(validate_date_interval(from, to).is_ok());
        // 单日区间合法
        assert!(validate_date_interval(from, from).is_ok());
        assert!(validate_date_interval(to, from).is_err());
    }
}
