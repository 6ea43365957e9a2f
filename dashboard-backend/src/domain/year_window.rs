// src/domain/year_window.rs

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

/// 暦年の集計期間 `[YYYY-01-01T00:00:00Z, YYYY-12-31T23:59:59Z]`（UNIX秒、両端を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearWindow {
    pub year: i32,
    pub start: i64,
    pub end: i64,
}

impl YearWindow {
    pub fn for_year(year: i32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)?
            .and_hms_opt(0, 0, 0)?
            .and_utc()
            .timestamp();
        let end = NaiveDate::from_ymd_opt(year, 12, 31)?
            .and_hms_opt(23, 59, 59)?
            .and_utc()
            .timestamp();

        Some(Self { year, start, end })
    }

    pub fn current() -> Self {
        let year = Utc::now().year();
        // 現在の年は常に表現可能
        Self::for_year(year).unwrap_or(Self {
            year,
            start: 0,
            end: 0,
        })
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        timestamp >= self.start && timestamp <= self.end
    }
}
