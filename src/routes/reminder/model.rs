use serde::Serialize;
use serde_json::Value;

use crate::{error::AppError, reminder::Reminder};

/// 创建提醒请求，字段均为调用方原样传入的值，不做校验
#[derive(Debug, Default, PartialEq)]
pub struct CreateReminderRequest {
    pub user_id: Option<Value>,
    pub message: Option<Value>,
    pub time: Option<Value>,
}

impl CreateReminderRequest {
    /// 解析请求体。只要求是合法 JSON；`null` 无法读取字段，同样视为无效。
    /// 非对象的 JSON 值被接受，所有字段缺失。
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            tracing::debug!("Rejecting reminder body: {}", e);
            AppError::InvalidJson
        })?;

        match value {
            Value::Null => Err(AppError::InvalidJson),
            Value::Object(mut fields) => Ok(Self {
                user_id: fields.remove("userId"),
                message: fields.remove("message"),
                time: fields.remove("time"),
            }),
            _ => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateReminderResponse {
    pub success: bool,
    pub reminder: Reminder,
}

#[derive(Debug, Serialize)]
pub struct ListRemindersResponse {
    pub reminders: Vec<Reminder>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_known_fields() {
        let req = CreateReminderRequest::from_body(
            br#"{"userId":"u1","message":"stretch","time":"2030-01-01T00:00:00Z","extra":1}"#,
        )
        .unwrap();

        assert_eq!(req.user_id, Some(json!("u1")));
        assert_eq!(req.message, Some(json!("stretch")));
        assert_eq!(req.time, Some(json!("2030-01-01T00:00:00Z")));
    }

    #[test]
    fn rejects_unparseable_and_null() {
        assert_eq!(
            CreateReminderRequest::from_body(b"not json"),
            Err(AppError::InvalidJson)
        );
        assert_eq!(CreateReminderRequest::from_body(b""), Err(AppError::InvalidJson));
        assert_eq!(CreateReminderRequest::from_body(b"null"), Err(AppError::InvalidJson));
    }

    #[test]
    fn accepts_non_object_json() {
        assert_eq!(
            CreateReminderRequest::from_body(b"42"),
            Ok(CreateReminderRequest::default())
        );
        assert_eq!(
            CreateReminderRequest::from_body(br#""hello""#),
            Ok(CreateReminderRequest::default())
        );
    }
}
