// ==========================================
// Учётная система БД мебельной компании - хранилище типов материалов
// ==========================================
// Назначение: таблица Material_types (справочник процентов потерь)
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::reference::MaterialType;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

pub struct MaterialTypeRepository {
    conn: Arc<Mutex<Connection>>,
}

impl MaterialTypeRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        let repo = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        repo.ensure_table()?;
        Ok(repo)
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let repo = Self { conn };
        repo.ensure_table()?;
        Ok(repo)
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
            CREATE TABLE IF NOT EXISTS Material_types (
              material_type_id INTEGER PRIMARY KEY AUTOINCREMENT,
              material_type_name TEXT NOT NULL UNIQUE,
              waste_percentage REAL NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Список типов материалов (по названию)
    pub fn list_all(&self) -> RepositoryResult<Vec<MaterialType>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT material_type_id, material_type_name, waste_percentage
            FROM Material_types
            ORDER BY material_type_name
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(MaterialType {
                    material_type_id: row.get(0)?,
                    material_type_name: row.get(1)?,
                    waste_percentage: row.get(2)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }

    /// Найти тип материала по идентификатору
    pub fn find_by_id(&self, material_type_id: i64) -> RepositoryResult<Option<MaterialType>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            r#"
            SELECT material_type_id, material_type_name, waste_percentage
            FROM Material_types
            WHERE material_type_id = ?1
            "#,
            params![material_type_id],
            |row| {
                Ok(MaterialType {
                    material_type_id: row.get(0)?,
                    material_type_name: row.get(1)?,
                    waste_percentage: row.get(2)?,
                })
            },
        );

        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Найти тип материала по названию (используется импортом)
    pub fn find_by_name(&self, name: &str) -> RepositoryResult<Option<MaterialType>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            r#"
            SELECT material_type_id, material_type_name, waste_percentage
            FROM Material_types
            WHERE material_type_name = ?1
            "#,
            params![name],
            |row| {
                Ok(MaterialType {
                    material_type_id: row.get(0)?,
                    material_type_name: row.get(1)?,
                    waste_percentage: row.get(2)?,
                })
            },
        );

        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Вставить или обновить тип по названию (импорт справочника)
    pub fn upsert(&self, name: &str, waste_percentage: f64) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO Material_types (material_type_name, waste_percentage)
            VALUES (?1, ?2)
            ON CONFLICT(material_type_name) DO UPDATE SET
                waste_percentage = excluded.waste_percentage
            "#,
            params![name, waste_percentage],
        )?;

        let id: i64 = conn.query_row(
            "SELECT material_type_id FROM Material_types WHERE material_type_name = ?1",
            params![name],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    /// Количество записей
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM Material_types", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_repo() -> MaterialTypeRepository {
        MaterialTypeRepository::new(":memory:").expect("не удалось создать тестовое хранилище")
    }

    #[test]
    fn test_upsert_and_find() {
        let repo = setup_test_repo();

        let id = repo.upsert("ЛДСП", 0.1).expect("upsert");
        let found = repo.find_by_id(id).expect("find").expect("тип не найден");

        assert_eq!(found.material_type_name, "ЛДСП");
        assert_eq!(found.waste_percentage, 0.1);
    }

    #[test]
    fn test_find_by_name() {
        let repo = setup_test_repo();
        repo.upsert("Массив дуба", 0.25).unwrap();

        let found = repo.find_by_name("Массив дуба").expect("find").unwrap();
        assert_eq!(found.waste_percentage, 0.25);

        assert!(repo.find_by_name("Сталь").expect("find").is_none());
    }

    #[test]
    fn test_list_all_sorted_by_name() {
        let repo = setup_test_repo();
        repo.upsert("Фанера", 0.12).unwrap();
        repo.upsert("ДВП", 0.08).unwrap();

        let types = repo.list_all().expect("list");
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].material_type_name, "ДВП");
    }
}
