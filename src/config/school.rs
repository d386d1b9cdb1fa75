use chrono::{Datelike, NaiveDate};

use super::SchoolConfig;

impl SchoolConfig {
    /// 计算某一天所属的学年
    ///
    /// 配置了 `current_school_year` 时直接返回该值；否则按起始月份推算，
    /// 如起始月份为 6 时，2024-06-01 属于 "2024-2025"，2024-05-31 属于 "2023-2024"。
    pub fn school_year_for(&self, date: NaiveDate) -> String {
        if let Some(year) = self
            .current_school_year
            .as_deref()
            .map(str::trim)
            .filter(|y| !y.is_empty())
        {
            return year.to_string();
        }

        let start_month = self.school_year_start_month.clamp(1, 12);
        let start_year = if date.month() >= start_month {
            date.year()
        } else {
            date.year() - 1
        };
        format!("{}-{}", start_year, start_year + 1)
    }

    /// 根据公私立类型返回 ESC 补助金额
    pub fn esc_for(&self, public_private: &str) -> f64 {
        if public_private.trim().eq_ignore_ascii_case("private") {
            self.esc_private
        } else {
            self.esc_public
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn school(override_year: Option<&str>) -> SchoolConfig {
        SchoolConfig {
            current_school_year: override_year.map(str::to_string),
            school_year_start_month: 6,
            esc_private: 14000.0,
            esc_public: 17500.0,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_school_year_boundary() {
        let cfg = school(None);
        assert_eq!(cfg.school_year_for(date(2024, 6, 1)), "2024-2025");
        assert_eq!(cfg.school_year_for(date(2024, 5, 31)), "2023-2024");
        assert_eq!(cfg.school_year_for(date(2025, 1, 15)), "2024-2025");
    }

    #[test]
    fn test_school_year_override_wins() {
        let cfg = school(Some("2030-2031"));
        assert_eq!(cfg.school_year_for(date(2024, 6, 1)), "2030-2031");

        let blank = school(Some("  "));
        assert_eq!(blank.school_year_for(date(2024, 6, 1)), "2024-2025");
    }

    #[test]
    fn test_esc_by_school_type() {
        let cfg = school(None);
        assert_eq!(cfg.esc_for("Private"), 14000.0);
        assert_eq!(cfg.esc_for("public"), 17500.0);
        assert_eq!(cfg.esc_for(""), 17500.0);
    }
}
