use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::time::ScheduledTime;

/// 内存中等待投递的提醒
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    #[serde(skip_serializing_if = "ScheduledTime::is_absent")]
    pub scheduled_time: ScheduledTime,
    pub created_at: DateTime<Utc>,
}

impl Reminder {
    pub fn new(user_id: Option<Value>, message: Option<Value>, time: Option<Value>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            message,
            scheduled_time: ScheduledTime::new(time),
            created_at: Utc::now(),
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.scheduled_time.is_due(now)
    }

    pub fn message_text(&self) -> String {
        display_opaque(self.message.as_ref())
    }

    pub fn user_text(&self) -> String {
        display_opaque(self.user_id.as_ref())
    }

    pub fn time_text(&self) -> String {
        display_opaque(self.scheduled_time.raw())
    }
}

/// 日志中展示调用方传入的原始值：字符串不加引号，缺失的字段显示为 `undefined`
pub fn display_opaque(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_camel_case_and_skips_absent_fields() {
        let reminder = Reminder::new(Some(json!("u1")), None, Some(json!(0)));
        let value = serde_json::to_value(&reminder).unwrap();

        assert_eq!(value["userId"], json!("u1"));
        assert_eq!(value["scheduledTime"], json!(0));
        assert!(value.get("message").is_none());
        assert!(value["id"].is_string());
        assert!(value["createdAt"].is_string());
    }

    #[test]
    fn explicit_null_is_kept() {
        let reminder = Reminder::new(Some(Value::Null), Some(json!("hi")), Some(Value::Null));
        let value = serde_json::to_value(&reminder).unwrap();

        assert_eq!(value["userId"], Value::Null);
        assert!(value.as_object().unwrap().contains_key("userId"));
        assert!(value.as_object().unwrap().contains_key("scheduledTime"));
    }

    #[test]
    fn display_opaque_values() {
        assert_eq!(display_opaque(None), "undefined");
        assert_eq!(display_opaque(Some(&json!("drink water"))), "drink water");
        assert_eq!(display_opaque(Some(&json!(42))), "42");
        assert_eq!(display_opaque(Some(&Value::Null)), "null");
    }
}
