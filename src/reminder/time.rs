use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};

// 不带时区的时间按 UTC 解释
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// 调用方提供的计划时间。
///
/// 原始 JSON 值原样保存并在序列化时原样返回；`at` 是插入时换算出的时刻，
/// 无法换算时为 `None`，这样的提醒永远不会到期。
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledTime {
    raw: Option<Value>,
    at: Option<DateTime<Utc>>,
}

impl ScheduledTime {
    pub fn new(raw: Option<Value>) -> Self {
        let at = raw.as_ref().and_then(to_instant);
        Self { raw, at }
    }

    pub fn raw(&self) -> Option<&Value> {
        self.raw.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.at.is_some()
    }

    pub fn is_absent(&self) -> bool {
        self.raw.is_none()
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.at.is_some_and(|at| at <= now)
    }
}

impl From<DateTime<Utc>> for ScheduledTime {
    fn from(at: DateTime<Utc>) -> Self {
        Self::new(Some(Value::from(at.timestamp_millis())))
    }
}

impl Serialize for ScheduledTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// 把任意 JSON 值换算为时刻，换算失败返回 `None`
pub fn to_instant(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Null => DateTime::from_timestamp_millis(0),
        Value::Bool(flag) => DateTime::from_timestamp_millis(i64::from(*flag)),
        Value::Number(number) => from_millis(number),
        Value::String(text) => parse_str(text.trim()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn from_millis(number: &Number) -> Option<DateTime<Utc>> {
    if let Some(millis) = number.as_i64() {
        return DateTime::from_timestamp_millis(millis);
    }
    let millis = number.as_f64()?.trunc();
    if !millis.is_finite() || millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

fn parse_str(text: &str) -> Option<DateTime<Utc>> {
    if text.is_empty() {
        return None;
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Some(naive.and_utc());
    }
    parse_date(text)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// `YYYY-MM-DD`、`YYYY-MM` 或四位年份，缺省的月、日取 1
fn parse_date(text: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    let mut parts = text.split('-');
    let year = parts.next().filter(|y| is_digits(y, 4))?.parse().ok()?;
    let month = match parts.next() {
        Some(m) if is_digits(m, 2) => m.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn is_digits(text: &str, len: usize) -> bool {
    text.len() == len && text.bytes().all(|b| b.is_ascii_digit())
}
