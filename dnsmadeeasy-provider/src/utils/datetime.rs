//! 日期时间序列化/反序列化工具
//!
//! DNS Made Easy 以 Unix 毫秒时间戳表示 `created` / `updated`：
//! - 序列化: `DateTime`<Utc> -> Unix 毫秒时间戳（与 API 一致）
//! - 反序列化: Unix 时间戳（秒/毫秒自动识别）或 RFC3339 字符串 -> `DateTime`<Utc>

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// 序列化 Option<`DateTime`<Utc>> 为 Option<毫秒时间戳>
#[allow(clippy::ref_option)]
pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&dt.timestamp_millis()),
        None => serializer.serialize_none(),
    }
}

/// 反序列化：支持 Unix 时间戳（秒/毫秒自动识别）或 RFC3339 字符串
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OptionalTimestamp {
        I64(i64),
        String(String),
    }

    match Option::<OptionalTimestamp>::deserialize(deserializer)? {
        Some(OptionalTimestamp::I64(ts)) => parse_unix_timestamp(ts)
            .map(Some)
            .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
        Some(OptionalTimestamp::String(s)) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        None => Ok(None),
    }
}

/// 解析 Unix 时间戳（自动判断秒/毫秒）
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // > 10^11 视为毫秒
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize)]
    struct Stamped {
        #[serde(default, with = "super")]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn millis_round_trip() {
        let parsed: Stamped = serde_json::from_str(r#"{"at":1480464000000}"#).unwrap();
        assert_eq!(parsed.at.unwrap().timestamp(), 1_480_464_000);
        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(json, r#"{"at":1480464000000}"#);
    }

    #[test]
    fn seconds_are_detected() {
        let parsed: Stamped = serde_json::from_str(r#"{"at":1480464000}"#).unwrap();
        assert_eq!(parsed.at.unwrap().timestamp_millis(), 1_480_464_000_000);
    }

    #[test]
    fn rfc3339_is_accepted() {
        let parsed: Stamped = serde_json::from_str(r#"{"at":"2016-11-30T00:00:00Z"}"#).unwrap();
        assert_eq!(parsed.at.unwrap().timestamp(), 1_480_464_000);
    }

    #[test]
    fn null_and_missing_are_none() {
        let parsed: Stamped = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert!(parsed.at.is_none());
        let parsed: Stamped = serde_json::from_str("{}").unwrap();
        assert!(parsed.at.is_none());
    }
}
