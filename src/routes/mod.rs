pub mod health;
pub mod reminder;

use crate::error::AppError;

// 未匹配的路径或方法
pub async fn not_found() -> AppError {
    AppError::NotFound
}
