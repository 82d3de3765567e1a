// ==========================================
// Учётная система БД мебельной компании - ошибки слоя хранилищ
// ==========================================
// Инструмент: макрос thiserror
// ==========================================

use thiserror::Error;

/// Ошибки слоя хранилищ
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== Ошибки базы данных =====
    #[error("Запись не найдена: {entity} с id={id}")]
    NotFound { entity: String, id: String },

    #[error("Не удалось подключиться к базе данных: {0}")]
    DatabaseConnectionError(String),

    #[error("Не удалось получить блокировку базы данных: {0}")]
    LockError(String),

    #[error("Ошибка запроса к базе данных: {0}")]
    DatabaseQueryError(String),

    #[error("Нарушение уникальности: {0}")]
    UniqueConstraintViolation(String),

    #[error("Нарушение внешнего ключа: {0}")]
    ForeignKeyViolation(String),

    // ===== Ошибки качества данных =====
    #[error("Ошибка валидации данных: {0}")]
    ValidationError(String),

    // ===== Общие ошибки =====
    #[error("Внутренняя ошибка: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// Преобразование из rusqlite::Error
impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    RepositoryError::UniqueConstraintViolation(msg)
                } else if msg.contains("FOREIGN KEY") {
                    RepositoryError::ForeignKeyViolation(msg)
                } else {
                    RepositoryError::DatabaseQueryError(msg)
                }
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "Unknown".to_string(),
                id: "Unknown".to_string(),
            },
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Псевдоним Result
pub type RepositoryResult<T> = Result<T, RepositoryError>;
