// ==========================================
// Учётная система БД мебельной компании - хранилище агрегатов
// ==========================================
// Назначение: готовые агрегирующие запросы для аналитики
// (счётчики таблиц, распределение по типам, средние цены, топ по цене)
// ==========================================

use crate::db::open_sqlite_connection;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Количество продукции по типу
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductTypeCount {
    pub product_type_name: String,
    pub count: i64,
}

/// Средняя цена по типу продукции
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductTypeAvgPrice {
    pub product_type_name: String,
    pub avg_price: f64,
}

/// Позиция рейтинга самой дорогой продукции
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProduct {
    pub product_name: String,
    pub min_partner_price: f64,
}

pub struct StatsRepository {
    conn: Arc<Mutex<Connection>>,
}

impl StatsRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Число строк одной из таблиц системы
    ///
    /// Имя таблицы проверяется по белому списку: подстановка имени таблицы
    /// параметром в SQLite невозможна.
    pub fn count_table(&self, table: &str) -> RepositoryResult<i64> {
        const KNOWN_TABLES: [&str; 5] = [
            "Material_types",
            "Product_types",
            "Workshops",
            "Products",
            "Product_workshops",
        ];

        if !KNOWN_TABLES.contains(&table) {
            return Err(RepositoryError::ValidationError(format!(
                "Неизвестная таблица: {}",
                table
            )));
        }

        let conn = self.get_conn()?;
        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", table),
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Количество продукции по типам (по убыванию количества)
    pub fn products_by_type(&self) -> RepositoryResult<Vec<ProductTypeCount>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT
                pt.product_type_name,
                COUNT(*) as count
            FROM Products p
            JOIN Product_types pt ON p.product_type_id = pt.product_type_id
            GROUP BY pt.product_type_name
            ORDER BY count DESC
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ProductTypeCount {
                    product_type_name: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }

    /// Средняя цена по типам продукции (по убыванию цены)
    pub fn average_price_by_type(&self) -> RepositoryResult<Vec<ProductTypeAvgPrice>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT
                pt.product_type_name,
                AVG(p.min_partner_price) as avg_price
            FROM Products p
            JOIN Product_types pt ON p.product_type_id = pt.product_type_id
            GROUP BY pt.product_type_name
            ORDER BY avg_price DESC
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(ProductTypeAvgPrice {
                    product_type_name: row.get(0)?,
                    avg_price: row.get(1)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }

    /// Самая дорогая продукция (по убыванию цены)
    pub fn top_expensive_products(&self, limit: i64) -> RepositoryResult<Vec<TopProduct>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT product_name, min_partner_price
            FROM Products
            ORDER BY min_partner_price DESC
            LIMIT ?1
            "#,
        )?;

        let rows = stmt
            .query_map(params![limit], |row| {
                Ok(TopProduct {
                    product_name: row.get(0)?,
                    min_partner_price: row.get(1)?,
                })
            })?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }
}
