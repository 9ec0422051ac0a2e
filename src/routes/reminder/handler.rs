use axum::{Json, body::Bytes, extract::State, http::StatusCode};

use crate::{AppState, error::AppError};

use super::model::{CreateReminderRequest, CreateReminderResponse, ListRemindersResponse};

// 获取所有待投递的提醒
pub async fn list_reminders(State(state): State<AppState>) -> Json<ListRemindersResponse> {
    Json(ListRemindersResponse {
        reminders: state.reminders.list(),
    })
}

// 创建提醒。请求体不依赖 Content-Type，直接按 JSON 解析
pub async fn create_reminder(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateReminderResponse>), AppError> {
    let req = CreateReminderRequest::from_body(&body)?;
    let reminder = state.reminders.add(req.user_id, req.message, req.time);

    Ok((
        StatusCode::CREATED,
        Json(CreateReminderResponse {
            success: true,
            reminder,
        }),
    ))
}
