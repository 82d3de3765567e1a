// ==========================================
// Учётная система БД мебельной компании - менеджер конфигурации
// ==========================================
// Назначение: чтение и запись настроек приложения
// Хранение: таблица app_config (key-value)
// ==========================================

use crate::db::open_sqlite_connection;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

// Ключи конфигурации
pub const KEY_LOCALE: &str = "ui.locale";
pub const KEY_TOP_PRODUCTS_LIMIT: &str = "analytics.top_products_limit";

// Значения по умолчанию
const DEFAULT_LOCALE: &str = "ru";
const DEFAULT_TOP_PRODUCTS_LIMIT: i64 = 10;

// ==========================================
// ConfigManager - менеджер конфигурации
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        let manager = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        manager.ensure_table()?;
        Ok(manager)
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let manager = Self { conn };
        manager.ensure_table()?;
        Ok(manager)
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn ensure_table(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS app_config (
              key TEXT PRIMARY KEY,
              value TEXT NOT NULL,
              updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            "#,
        )?;
        Ok(())
    }

    /// Значение настройки по ключу
    pub fn get_value(&self, key: &str) -> RepositoryResult<Option<String>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            "SELECT value FROM app_config WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Записать значение настройки
    pub fn set_value(&self, key: &str, value: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO app_config (key, value, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value],
        )?;
        Ok(())
    }

    // ==========================================
    // Типизированные настройки
    // ==========================================

    /// Язык интерфейса (по умолчанию "ru")
    pub fn locale(&self) -> String {
        self.get_value(KEY_LOCALE)
            .ok()
            .flatten()
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }

    /// Размер рейтинга самой дорогой продукции (по умолчанию 10)
    ///
    /// Некорректное сохранённое значение игнорируется.
    pub fn top_products_limit(&self) -> i64 {
        self.get_value(KEY_TOP_PRODUCTS_LIMIT)
            .ok()
            .flatten()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|n| (1..=100).contains(n))
            .unwrap_or(DEFAULT_TOP_PRODUCTS_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_manager() -> ConfigManager {
        ConfigManager::new(":memory:").expect("не удалось создать менеджер конфигурации")
    }

    #[test]
    fn test_get_set_roundtrip() {
        let manager = setup_manager();
        assert_eq!(manager.get_value("нет.такого").unwrap(), None);

        manager.set_value("ui.locale", "en").unwrap();
        assert_eq!(manager.get_value("ui.locale").unwrap().as_deref(), Some("en"));

        manager.set_value("ui.locale", "ru").unwrap();
        assert_eq!(manager.get_value("ui.locale").unwrap().as_deref(), Some("ru"));
    }

    #[test]
    fn test_defaults() {
        let manager = setup_manager();
        assert_eq!(manager.locale(), "ru");
        assert_eq!(manager.top_products_limit(), 10);
    }

    #[test]
    fn test_top_products_limit_ignores_garbage() {
        let manager = setup_manager();

        manager.set_value(KEY_TOP_PRODUCTS_LIMIT, "25").unwrap();
        assert_eq!(manager.top_products_limit(), 25);

        manager.set_value(KEY_TOP_PRODUCTS_LIMIT, "не число").unwrap();
        assert_eq!(manager.top_products_limit(), 10);

        manager.set_value(KEY_TOP_PRODUCTS_LIMIT, "100500").unwrap();
        assert_eq!(manager.top_products_limit(), 10);
    }
}
