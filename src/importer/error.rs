// ==========================================
// Учётная система БД мебельной компании - ошибки импорта
// ==========================================

use thiserror::Error;

/// Ошибки импорта справочных данных
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Файл не существует: {0}")]
    FileNotFound(String),

    #[error("Неподдерживаемый формат файла: {0}")]
    UnsupportedFormat(String),

    #[error("Ошибка разбора Excel: {0}")]
    ExcelParseError(String),

    #[error("Ошибка разбора CSV: {0}")]
    CsvParseError(String),

    #[error("Ошибка чтения файла: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Ошибка записи в базу данных: {0}")]
    DatabaseError(String),
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}
