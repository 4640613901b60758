//! 有效期区间
//!
//! 课表版本、班级与学籍的有效期统一用两端闭区间表示，
//! 全部按日粒度比较（chrono::NaiveDate），不涉及时区换算。

use chrono::NaiveDate;

/// 日期区间 [from, to]，两端闭
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateInterval {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// 两区间是否有交集：a.from <= b.to && b.from <= a.to
    pub fn overlaps(&self, other: &DateInterval) -> bool {
        self.from <= other.to && other.from <= self.to
    }

    /// self 是否完整包含 inner
    pub fn contains(&self, inner: &DateInterval) -> bool {
        self.from <= inner.from && inner.to <= self.to
    }

    /// 指定日期是否落在区间内
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn iv(from: &str, to: &str) -> DateInterval {
        DateInterval::new(d(from), d(to))
    }

    #[test]
    fn test_overlaps_disjoint() {
        let a = iv("2024-09-01", "2025-01-31");
        let b = iv("2025-02-01", "2025-06-30");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_overlaps_shared_boundary_day() {
        // 两端闭区间：共享同一天即为重叠
        let a = iv("2024-09-01", "2025-01-31");
        let b = iv("2025-01-31", "2025-06-30");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlaps_nested() {
        let outer = iv("2024-09-01", "2025-06-30");
        let inner = iv("2024-10-01", "2024-12-20");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_contains() {
        let outer = iv("2024-09-01", "2025-06-30");
        let inner = iv("2024-10-01", "2024-12-20");
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        // 等同区间互相包含
        assert!(outer.contains(&outer));
    }

    #[test]
    fn test_contains_partial_overlap() {
        let a = iv("2024-09-01", "2025-01-31");
        let b = iv("2025-01-01", "2025-06-30");
        assert!(a.overlaps(&b));
        assert!(!a.contains(&b));
    }

    #[test]
    fn test_contains_date_bounds_inclusive() {
        let set = iv("2024-09-01", "2025-06-30");
        assert!(set.contains_date(d("2024-09-01")));
        assert!(set.contains_date(d("2025-06-30")));
        assert!(set.contains_date(d("2024-10-01")));
        assert!(!set.contains_date(d("2024-08-31")));
        assert!(!set.contains_date(d("2025-07-01")));
    }
}
