// ==========================================
// Учётная система БД мебельной компании - хранилище цехов
// ==========================================
// Назначение: таблицы Workshops и Product_workshops
// (маршрут изготовления продукции по цехам)
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::workshop::{ProductWorkshop, Workshop, WorkshopStage};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

// ==========================================
// WorkshopRepository - справочник цехов
// ==========================================

pub struct WorkshopRepository {
    conn: Arc<Mutex<Connection>>,
}

impl WorkshopRepository {
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
            CREATE TABLE IF NOT EXISTS Workshops (
              workshop_id INTEGER PRIMARY KEY AUTOINCREMENT,
              workshop_name TEXT NOT NULL UNIQUE,
              workshop_type TEXT NOT NULL,
              staff_count INTEGER NOT NULL DEFAULT 0,
              is_active INTEGER NOT NULL DEFAULT 1
            );
            "#,
        )?;
        Ok(())
    }

    /// Список цехов (по типу, затем по названию)
    pub fn list_all(&self) -> RepositoryResult<Vec<Workshop>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT workshop_id, workshop_name, workshop_type, staff_count, is_active
            FROM Workshops
            ORDER BY workshop_type, workshop_name
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Workshop {
                    workshop_id: row.get(0)?,
                    workshop_name: row.get(1)?,
                    workshop_type: row.get(2)?,
                    staff_count: row.get(3)?,
                    is_active: row.get::<_, i64>(4)? != 0,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }

    /// Найти цех по названию (используется импортом связей)
    pub fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Workshop>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            r#"
            SELECT workshop_id, workshop_name, workshop_type, staff_count, is_active
            FROM Workshops
            WHERE workshop_name = ?1
            "#,
            params![name],
            |row| {
                Ok(Workshop {
                    workshop_id: row.get(0)?,
                    workshop_name: row.get(1)?,
                    workshop_type: row.get(2)?,
                    staff_count: row.get(3)?,
                    is_active: row.get::<_, i64>(4)? != 0,
                })
            },
        );

        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Вставить или обновить цех по названию (импорт справочника)
    pub fn upsert(
        &self,
        name: &str,
        workshop_type: &str,
        staff_count: i64,
    ) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO Workshops (workshop_name, workshop_type, staff_count)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(workshop_name) DO UPDATE SET
                workshop_type = excluded.workshop_type,
                staff_count = excluded.staff_count
            "#,
            params![name, workshop_type, staff_count],
        )?;

        let id: i64 = conn.query_row(
            "SELECT workshop_id FROM Workshops WHERE workshop_name = ?1",
            params![name],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    /// Количество записей
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM Workshops", [], |row| row.get(0))?;
        Ok(count)
    }
}

// ==========================================
// ProductWorkshopRepository - связи продукции с цехами
// ==========================================

pub struct ProductWorkshopRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ProductWorkshopRepository {
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
            CREATE TABLE IF NOT EXISTS Product_workshops (
              product_id INTEGER NOT NULL
                REFERENCES Products(product_id) ON DELETE CASCADE,
              workshop_id INTEGER NOT NULL
                REFERENCES Workshops(workshop_id),
              production_time_hours REAL NOT NULL,
              PRIMARY KEY (product_id, workshop_id)
            );

            CREATE INDEX IF NOT EXISTS idx_product_workshops_workshop
              ON Product_workshops(workshop_id);
            "#,
        )?;
        Ok(())
    }

    /// Связать продукцию с цехом (или обновить время этапа)
    pub fn upsert(
        &self,
        product_id: i64,
        workshop_id: i64,
        production_time_hours: f64,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO Product_workshops (product_id, workshop_id, production_time_hours)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(product_id, workshop_id) DO UPDATE SET
                production_time_hours = excluded.production_time_hours
            "#,
            params![product_id, workshop_id, production_time_hours],
        )?;
        Ok(())
    }

    /// Цеха продукции с полными сведениями (по убыванию времени этапа)
    pub fn list_by_product(&self, product_id: i64) -> RepositoryResult<Vec<ProductWorkshop>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT
                w.workshop_id,
                w.workshop_name,
                w.workshop_type,
                w.staff_count,
                pw.production_time_hours
            FROM Product_workshops pw
            JOIN Workshops w ON pw.workshop_id = w.workshop_id
            WHERE pw.product_id = ?1
            ORDER BY pw.production_time_hours DESC
            "#,
        )?;

        let rows = stmt
            .query_map(params![product_id], |row| {
                Ok(ProductWorkshop {
                    workshop_id: row.get(0)?,
                    workshop_name: row.get(1)?,
                    workshop_type: row.get(2)?,
                    staff_count: row.get(3)?,
                    production_time_hours: row.get(4)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }

    /// Этапы изготовления продукции (название цеха + часы)
    ///
    /// Порядок чтения стабилен, итог от него не зависит.
    pub fn list_stages(&self, product_id: i64) -> RepositoryResult<Vec<WorkshopStage>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT w.workshop_name, pw.production_time_hours
            FROM Product_workshops pw
            JOIN Workshops w ON pw.workshop_id = w.workshop_id
            WHERE pw.product_id = ?1
            ORDER BY w.workshop_name
            "#,
        )?;

        let rows = stmt
            .query_map(params![product_id], |row| {
                Ok(WorkshopStage {
                    workshop_name: row.get(0)?,
                    production_time_hours: row.get(1)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }

    /// Количество связей
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM Product_workshops", [], |row| row.get(0))?;
        Ok(count)
    }
}
