// ==========================================
// Учётная система БД мебельной компании - хранилище типов продукции
// ==========================================
// Назначение: таблица Product_types (справочник, читается расчётом сырья)
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::reference::ProductType;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

pub struct ProductTypeRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ProductTypeRepository {
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

    /// Создать таблицу, если её ещё нет
    fn ensure_table(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS Product_types (
              product_type_id INTEGER PRIMARY KEY AUTOINCREMENT,
              product_type_name TEXT NOT NULL UNIQUE,
              type_coefficient REAL NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Список типов продукции (по названию)
    pub fn list_all(&self) -> RepositoryResult<Vec<ProductType>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT product_type_id, product_type_name, type_coefficient
            FROM Product_types
            ORDER BY product_type_name
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ProductType {
                    product_type_id: row.get(0)?,
                    product_type_name: row.get(1)?,
                    type_coefficient: row.get(2)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }

    /// Найти тип продукции по идентификатору
    pub fn find_by_id(&self, product_type_id: i64) -> RepositoryResult<Option<ProductType>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            r#"
            SELECT product_type_id, product_type_name, type_coefficient
            FROM Product_types
            WHERE product_type_id = ?1
            "#,
            params![product_type_id],
            |row| {
                Ok(ProductType {
                    product_type_id: row.get(0)?,
                    product_type_name: row.get(1)?,
                    type_coefficient: row.get(2)?,
                })
            },
        );

        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Найти тип продукции по названию (используется импортом)
    pub fn find_by_name(&self, name: &str) -> RepositoryResult<Option<ProductType>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            r#"
            SELECT product_type_id, product_type_name, type_coefficient
            FROM Product_types
            WHERE product_type_name = ?1
            "#,
            params![name],
            |row| {
                Ok(ProductType {
                    product_type_id: row.get(0)?,
                    product_type_name: row.get(1)?,
                    type_coefficient: row.get(2)?,
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
    ///
    /// # Возврат
    /// Идентификатор строки
    pub fn upsert(&self, name: &str, type_coefficient: f64) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO Product_types (product_type_name, type_coefficient)
            VALUES (?1, ?2)
            ON CONFLICT(product_type_name) DO UPDATE SET
                type_coefficient = excluded.type_coefficient
            "#,
            params![name, type_coefficient],
        )?;

        let id: i64 = conn.query_row(
            "SELECT product_type_id FROM Product_types WHERE product_type_name = ?1",
            params![name],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    /// Количество записей
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM Product_types", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_repo() -> ProductTypeRepository {
        ProductTypeRepository::new(":memory:").expect("не удалось создать тестовое хранилище")
    }

    #[test]
    fn test_upsert_and_find() {
        let repo = setup_test_repo();

        let id = repo.upsert("Корпусная мебель", 1.5).expect("upsert");
        let found = repo.find_by_id(id).expect("find").expect("тип не найден");

        assert_eq!(found.product_type_name, "Корпусная мебель");
        assert_eq!(found.type_coefficient, 1.5);
    }

    #[test]
    fn test_upsert_conflict_updates_coefficient() {
        let repo = setup_test_repo();

        let id1 = repo.upsert("Мягкая мебель", 2.0).expect("upsert 1");
        let id2 = repo.upsert("Мягкая мебель", 2.5).expect("upsert 2");

        assert_eq!(id1, id2, "повторный upsert не должен создавать новую строку");
        let found = repo.find_by_id(id1).expect("find").unwrap();
        assert_eq!(found.type_coefficient, 2.5);
    }

    #[test]
    fn test_find_by_id_missing() {
        let repo = setup_test_repo();
        let found = repo.find_by_id(999).expect("find");
        assert!(found.is_none());
    }

    #[test]
    fn test_list_all_sorted_by_name() {
        let repo = setup_test_repo();
        repo.upsert("Шкафы", 3.5).unwrap();
        repo.upsert("Кровати", 4.2).unwrap();
        repo.upsert("Детская мебель", 1.2).unwrap();

        let types = repo.list_all().expect("list");
        assert_eq!(types.len(), 3);
        assert_eq!(types[0].product_type_name, "Детская мебель");
        assert_eq!(types[2].product_type_name, "Шкафы");
        assert_eq!(repo.count().unwrap(), 3);
    }
}
