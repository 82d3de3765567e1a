use crate::api::error::ApiError;
use serde::{Deserialize, Serialize};

// ==========================================
// Общие утилиты: преобразование ошибок для фронтенда
// ==========================================

/// Ответ с ошибкой (для фронтенда)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct ErrorResponse {
    /// Код ошибки
    pub code: String,

    /// Сообщение
    pub message: String,
}

/// Преобразовать ApiError в JSON-строку (требование Tauri)
pub(super) fn map_api_error(err: ApiError) -> String {
    let error_response = ErrorResponse {
        code: match &err {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BusinessRuleViolation(_) => "BUSINESS_RULE_VIOLATION",
            ApiError::DatabaseError(_) => "DATABASE_ERROR",
            ApiError::DatabaseConnectionError(_) => "DATABASE_CONNECTION_ERROR",
            ApiError::ImportError(_) => "IMPORT_ERROR",
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
        .to_string(),
        message: err.to_string(),
    };

    serde_json::to_string(&error_response).unwrap_or_else(|_| err.to_string())
}
