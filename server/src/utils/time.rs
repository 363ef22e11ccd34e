//! 时间工具函数
//!
//! 时间戳统一使用 `i64` Unix millis，
//! repository 层写入时间全部经由这里取值。

use chrono::{Duration, Utc};

/// 当前时间 → Unix millis
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// 当前时间 + N 天 → Unix millis
///
/// 用于试用期等相对到期时间的计算。
pub fn days_from_now_millis(days: i64) -> i64 {
    (Utc::now() + Duration::days(days)).timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_offset_is_additive() {
        let now = now_millis();
        let later = days_from_now_millis(30);
        let thirty_days = 30 * 24 * 60 * 60 * 1000;
        assert!(later - now >= thirty_days - 1000);
        assert!(later - now <= thirty_days + 1000);
    }
}
