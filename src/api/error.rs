// ==========================================
// Учётная система БД мебельной компании - ошибки API слоя
// ==========================================
// Назначение: ошибки бизнес-интерфейсов, преобразование ошибок
// слоя хранилищ в понятные вызывающей стороне сообщения
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// Ошибки API слоя
///
/// Ошибки клиентского ввода сообщаются до начала вычислений;
/// отсутствие справочной записи в расчёте сырья сообщается
/// мягким результатом, а не этим типом (см. EstimatorApi).
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Ошибки бизнес-правил =====
    #[error("Некорректный ввод: {0}")]
    InvalidInput(String),

    #[error("Ресурс не найден: {0}")]
    NotFound(String),

    #[error("Нарушение бизнес-правила: {0}")]
    BusinessRuleViolation(String),

    // ===== Ошибки доступа к данным =====
    #[error("Ошибка базы данных: {0}")]
    DatabaseError(String),

    #[error("Не удалось подключиться к базе данных: {0}")]
    DatabaseConnectionError(String),

    // ===== Ошибки импорта =====
    #[error("Ошибка импорта файла: {0}")]
    ImportError(String),

    #[error("Ошибка валидации данных: {0}")]
    ValidationError(String),

    // ===== Общие ошибки =====
    #[error("Внутренняя ошибка: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// Преобразование из RepositoryError
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} (id={}) не существует", entity, id))
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::LockError(msg) => ApiError::DatabaseConnectionError(format!(
                "Не удалось получить блокировку базы данных: {}",
                msg
            )),
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("Нарушение уникальности: {}", msg))
            }
            RepositoryError::ForeignKeyViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("Нарушение внешнего ключа: {}", msg))
            }
            RepositoryError::ValidationError(msg) => ApiError::ValidationError(msg),
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

/// Псевдоним Result
pub type ApiResult<T> = Result<T, ApiError>;
