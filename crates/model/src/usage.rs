//! Usage history and chat-log queries

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use plugindesk_core::{AppId, DeskError, DeskResult};
use serde::{Deserialize, Serialize};

use crate::paging::RequestPaging;

/// Days before "now" covered by the usage window
pub const USAGE_DAYS_BEFORE: i64 = 13;

/// Days after "now" covered by the usage window
pub const USAGE_DAYS_AFTER: i64 = 1;

// ============================================================================
// Usage
// ============================================================================

/// One day of usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsagePoint {
    pub date: String,
    pub total: f64,
}

impl UsagePoint {
    /// Zero usage stamped at `now`
    pub fn zero_at(now: DateTime<Utc>) -> Self {
        Self {
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            total: 0.0,
        }
    }
}

/// Body of `POST /app/data/totalUsage`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalUsageQuery {
    pub app_id: AppId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TotalUsageQuery {
    /// Query covering the trailing window around `now`
    pub fn trailing(app_id: AppId, now: DateTime<Utc>) -> Self {
        Self {
            app_id,
            start: now - Duration::days(USAGE_DAYS_BEFORE),
            end: now + Duration::days(USAGE_DAYS_AFTER),
        }
    }
}

/// Make sure a usage series has at least one point
///
/// Charts cannot render an empty series, so an empty response becomes a
/// single zero point at `now`.
pub fn non_empty_series(points: Vec<UsagePoint>, now: DateTime<Utc>) -> Vec<UsagePoint> {
    if points.is_empty() {
        vec![UsagePoint::zero_at(now)]
    } else {
        points
    }
}

// ============================================================================
// Chat Logs
// ============================================================================

/// Body of `POST /app/getChatLogs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatLogQuery {
    pub app_id: AppId,
    pub date_start: DateTime<Utc>,
    pub date_end: DateTime<Utc>,
    #[serde(flatten)]
    pub paging: RequestPaging,
}

impl ChatLogQuery {
    /// Logs of the last `days` days up to `now`
    ///
    /// Negative `days` count as zero. A window reaching past the earliest
    /// representable date is rejected.
    pub fn last_days(
        app_id: AppId,
        days: i64,
        now: DateTime<Utc>,
        paging: RequestPaging,
    ) -> DeskResult<Self> {
        let date_start = Duration::try_days(days.max(0))
            .and_then(|span| now.checked_sub_signed(span))
            .ok_or_else(|| {
                DeskError::field_validation("days", format!("{} days is out of range", days))
            })?;
        Ok(Self {
            app_id,
            date_start,
            date_end: now,
            paging,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_trailing_window_is_fourteen_days() {
        let query = TotalUsageQuery::trailing(AppId::from("a1"), fixed_now());
        assert_eq!(query.start, Utc.with_ymd_and_hms(2026, 10, 6, 12, 0, 0).unwrap());
        assert_eq!(query.end, Utc.with_ymd_and_hms(2026, 10, 20, 12, 0, 0).unwrap());
        assert_eq!((query.end - query.start).num_days(), 14);

        let body = serde_json::to_value(&query).unwrap();
        assert_eq!(body["appId"], json!("a1"));
        assert_eq!(body["start"], json!("2026-10-06T12:00:00Z"));
    }

    #[test]
    fn test_empty_series_gets_zero_point() {
        let series = non_empty_series(Vec::new(), fixed_now());
        assert_eq!(
            series,
            vec![UsagePoint {
                date: "2026-10-19T12:00:00.000Z".to_string(),
                total: 0.0
            }]
        );
    }

    #[test]
    fn test_non_empty_series_is_untouched() {
        let points = vec![UsagePoint {
            date: "2026-10-18".to_string(),
            total: 3.5,
        }];
        assert_eq!(non_empty_series(points.clone(), fixed_now()), points);
    }

    #[test]
    fn test_chat_log_query_body() {
        let query = ChatLogQuery::last_days(
            AppId::from("a1"),
            7,
            fixed_now(),
            RequestPaging::new(1, 50),
        )
        .unwrap();
        let body = serde_json::to_value(&query).unwrap();
        assert_eq!(body["dateStart"], json!("2026-10-12T12:00:00Z"));
        assert_eq!(body["dateEnd"], json!("2026-10-19T12:00:00Z"));
        assert_eq!(body["pageNum"], json!(1));
        assert_eq!(body["pageSize"], json!(50));
    }

    #[test]
    fn test_chat_log_window_out_of_range() {
        let err = ChatLogQuery::last_days(
            AppId::from("a1"),
            100_000_000,
            fixed_now(),
            RequestPaging::default(),
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.display_text(), "100000000 days is out of range");

        let overflow =
            ChatLogQuery::last_days(AppId::from("a1"), i64::MAX, fixed_now(), RequestPaging::default());
        assert!(overflow.is_err());
    }

    #[test]
    fn test_negative_days_is_an_empty_window() {
        let query =
            ChatLogQuery::last_days(AppId::from("a1"), -3, fixed_now(), RequestPaging::default())
                .unwrap();
        assert_eq!(query.date_start, query.date_end);
    }
}
