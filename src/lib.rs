// ==========================================
// Учётная система БД мебельной компании - ядро
// ==========================================
// Технологии: Rust + SQLite
// Назначение: учёт продукции, цехов и расчёт потребности в сырье
// ==========================================

// Инициализация системы интернационализации
rust_i18n::i18n!("locales", fallback = "ru");

// ==========================================
// Объявление модулей
// ==========================================

// Доменный слой - сущности и типы
pub mod domain;

// Слой хранилищ - доступ к данным
pub mod repository;

// Движки - бизнес-правила (расчёт сырья, время производства)
pub mod engine;

// Импорт справочных данных
pub mod importer;

// Конфигурация
pub mod config;

// Инфраструктура SQLite (единые PRAGMA при открытии соединения)
pub mod db;

// Логирование
pub mod logging;

// Интернационализация
pub mod i18n;

// API слой - бизнес-интерфейсы
pub mod api;

// Прикладной слой - сборка приложения
pub mod app;

// ==========================================
// Реэкспорт основных типов
// ==========================================

// Доменные сущности
pub use domain::{
    MaterialType, Product, ProductListItem, ProductType, ProductWorkshop, Workshop,
};

// Движки
pub use engine::{MaterialCalculator, MaterialRequirement, ProductionTimeCalculator};

// API
pub use api::{AnalyticsApi, EstimatorApi, ProductApi, WorkshopApi};

// ==========================================
// Константы
// ==========================================

// Версия системы
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Название системы
pub const APP_NAME: &str = "БД мебельной компании";

// Версия схемы БД
pub const DB_VERSION: &str = "v0.1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
