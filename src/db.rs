// ==========================================
// Учётная система БД мебельной компании - инициализация SQLite
// ==========================================
// Цели:
// - единое поведение PRAGMA для всех Connection::open (внешние ключи везде включены)
// - единый busy_timeout, чтобы конкурирующие записи не падали со случайным busy
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::time::Duration;

/// busy_timeout по умолчанию (миллисекунды)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Версия схемы, которую ожидает текущий код
///
/// Номер используется для предупреждения при запуске на устаревшей базе,
/// автоматическая миграция не выполняется.
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// Единая настройка PRAGMA для соединения SQLite
///
/// foreign_keys и busy_timeout действуют на уровне соединения,
/// поэтому применяются при каждом открытии.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Открыть соединение SQLite и применить единые настройки
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Прочитать версию схемы (None, если таблица отсутствует)
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}

/// Зафиксировать текущую версию схемы (идемпотентно)
pub fn write_schema_version(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        "#,
    )?;
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [CURRENT_SCHEMA_VERSION],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_version_roundtrip() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(read_schema_version(&conn).unwrap(), None);

        write_schema_version(&conn).unwrap();
        assert_eq!(
            read_schema_version(&conn).unwrap(),
            Some(CURRENT_SCHEMA_VERSION)
        );
    }
}
