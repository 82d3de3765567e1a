// ==========================================
// Учётная система БД мебельной компании - хранилище продукции
// ==========================================
// Назначение: таблица Products + соединение со справочниками
// для списков и поиска
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::product::{Product, ProductListItem};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

/// Данные новой продукции (форма добавления)
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub product_name: String,
    pub article_number: String,
    pub product_type_id: i64,
    pub material_type_id: i64,
    pub min_partner_price: f64,
}

/// Изменяемые поля продукции (форма редактирования)
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub product_name: String,
    pub min_partner_price: f64,
    pub is_available: bool,
}

pub struct ProductRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ProductRepository {
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
            CREATE TABLE IF NOT EXISTS Products (
              product_id INTEGER PRIMARY KEY AUTOINCREMENT,
              product_name TEXT NOT NULL,
              article_number TEXT NOT NULL UNIQUE,
              product_type_id INTEGER NOT NULL
                REFERENCES Product_types(product_type_id),
              material_type_id INTEGER NOT NULL
                REFERENCES Material_types(material_type_id),
              min_partner_price REAL NOT NULL DEFAULT 0,
              is_available INTEGER NOT NULL DEFAULT 1
            );

            CREATE INDEX IF NOT EXISTS idx_products_name
              ON Products(product_name);
            CREATE INDEX IF NOT EXISTS idx_products_type
              ON Products(product_type_id);
            CREATE INDEX IF NOT EXISTS idx_products_material
              ON Products(material_type_id);
            "#,
        )?;
        Ok(())
    }

    fn map_list_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProductListItem> {
        Ok(ProductListItem {
            product_id: row.get(0)?,
            product_name: row.get(1)?,
            article_number: row.get(2)?,
            product_type_name: row.get(3)?,
            material_type_name: row.get(4)?,
            min_partner_price: row.get(5)?,
            is_available: row.get::<_, i64>(6)? != 0,
        })
    }

    /// Список продукции с названиями типа и материала (по наименованию)
    pub fn list_joined(&self) -> RepositoryResult<Vec<ProductListItem>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT
                p.product_id,
                p.product_name,
                p.article_number,
                pt.product_type_name,
                mt.material_type_name,
                p.min_partner_price,
                p.is_available
            FROM Products p
            JOIN Product_types pt ON p.product_type_id = pt.product_type_id
            JOIN Material_types mt ON p.material_type_id = mt.material_type_id
            ORDER BY p.product_name
            "#,
        )?;

        let rows = stmt
            .query_map([], Self::map_list_item)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }

    /// Поиск продукции по наименованию или артикулу (подстрока)
    pub fn search_joined(&self, search_term: &str) -> RepositoryResult<Vec<ProductListItem>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT
                p.product_id,
                p.product_name,
                p.article_number,
                pt.product_type_name,
                mt.material_type_name,
                p.min_partner_price,
                p.is_available
            FROM Products p
            JOIN Product_types pt ON p.product_type_id = pt.product_type_id
            JOIN Material_types mt ON p.material_type_id = mt.material_type_id
            WHERE p.product_name LIKE ?1 OR p.article_number LIKE ?1
            ORDER BY p.product_name
            "#,
        )?;

        let pattern = format!("%{}%", search_term);
        let rows = stmt
            .query_map(params![pattern], Self::map_list_item)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(rows)
    }

    /// Найти продукцию по идентификатору
    pub fn find_by_id(&self, product_id: i64) -> RepositoryResult<Option<Product>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            r#"
            SELECT
                product_id,
                product_name,
                article_number,
                product_type_id,
                material_type_id,
                min_partner_price,
                is_available
            FROM Products
            WHERE product_id = ?1
            "#,
            params![product_id],
            |row| {
                Ok(Product {
                    product_id: row.get(0)?,
                    product_name: row.get(1)?,
                    article_number: row.get(2)?,
                    product_type_id: row.get(3)?,
                    material_type_id: row.get(4)?,
                    min_partner_price: row.get(5)?,
                    is_available: row.get::<_, i64>(6)? != 0,
                })
            },
        );

        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Найти продукцию по наименованию (используется импортом связей с цехами)
    pub fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Product>> {
        let conn = self.get_conn()?;
        let result = conn.query_row(
            r#"
            SELECT
                product_id,
                product_name,
                article_number,
                product_type_id,
                material_type_id,
                min_partner_price,
                is_available
            FROM Products
            WHERE product_name = ?1
            "#,
            params![name],
            |row| {
                Ok(Product {
                    product_id: row.get(0)?,
                    product_name: row.get(1)?,
                    article_number: row.get(2)?,
                    product_type_id: row.get(3)?,
                    material_type_id: row.get(4)?,
                    min_partner_price: row.get(5)?,
                    is_available: row.get::<_, i64>(6)? != 0,
                })
            },
        );

        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Добавить продукцию
    ///
    /// # Возврат
    /// Идентификатор новой строки
    pub fn insert(&self, new_product: &NewProduct) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO Products
                (product_name, article_number, product_type_id, material_type_id, min_partner_price)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                new_product.product_name,
                new_product.article_number,
                new_product.product_type_id,
                new_product.material_type_id,
                new_product.min_partner_price,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Обновить редактируемые поля продукции
    ///
    /// # Возврат
    /// Число изменённых строк (0, если продукция не найдена)
    pub fn update(&self, product_id: i64, update: &ProductUpdate) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            r#"
            UPDATE Products
            SET product_name = ?1, min_partner_price = ?2, is_available = ?3
            WHERE product_id = ?4
            "#,
            params![
                update.product_name,
                update.min_partner_price,
                update.is_available as i64,
                product_id,
            ],
        )?;
        Ok(affected)
    }

    /// Удалить продукцию (связи с цехами удаляются каскадно)
    pub fn delete(&self, product_id: i64) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "DELETE FROM Products WHERE product_id = ?1",
            params![product_id],
        )?;
        Ok(affected)
    }

    /// Количество записей
    pub fn count(&self) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM Products", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::material_type_repo::MaterialTypeRepository;
    use crate::repository::product_type_repo::ProductTypeRepository;

    struct TestEnv {
        product_repo: ProductRepository,
        type_id: i64,
        material_id: i64,
    }

    fn setup_test_env() -> TestEnv {
        let conn = open_sqlite_connection(":memory:").expect("не удалось открыть БД");
        let conn = Arc::new(Mutex::new(conn));

        let type_repo =
            ProductTypeRepository::from_connection(conn.clone()).expect("хранилище типов");
        let material_repo =
            MaterialTypeRepository::from_connection(conn.clone()).expect("хранилище материалов");
        let product_repo = ProductRepository::from_connection(conn).expect("хранилище продукции");

        let type_id = type_repo.upsert("Корпусная мебель", 1.5).unwrap();
        let material_id = material_repo.upsert("ЛДСП", 0.1).unwrap();

        TestEnv {
            product_repo,
            type_id,
            material_id,
        }
    }

    fn sample_product(env: &TestEnv, name: &str, article: &str, price: f64) -> NewProduct {
        NewProduct {
            product_name: name.to_string(),
            article_number: article.to_string(),
            product_type_id: env.type_id,
            material_type_id: env.material_id,
            min_partner_price: price,
        }
    }

    #[test]
    fn test_insert_and_find() {
        let env = setup_test_env();

        let id = env
            .product_repo
            .insert(&sample_product(&env, "Комод Верона", "1021876", 12500.0))
            .expect("insert");

        let found = env
            .product_repo
            .find_by_id(id)
            .expect("find")
            .expect("продукция не найдена");
        assert_eq!(found.product_name, "Комод Верона");
        assert_eq!(found.article_number, "1021876");
        assert!(found.is_available);
    }

    #[test]
    fn test_list_joined_sorted_by_name() {
        let env = setup_test_env();
        env.product_repo
            .insert(&sample_product(&env, "Шкаф-купе", "300101", 32000.0))
            .unwrap();
        env.product_repo
            .insert(&sample_product(&env, "Комод", "300102", 12000.0))
            .unwrap();

        let items = env.product_repo.list_joined().expect("list");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product_name, "Комод");
        assert_eq!(items[0].product_type_name, "Корпусная мебель");
        assert_eq!(items[0].material_type_name, "ЛДСП");
    }

    #[test]
    fn test_search_by_name_and_article() {
        let env = setup_test_env();
        env.product_repo
            .insert(&sample_product(&env, "Стол письменный", "450001", 8000.0))
            .unwrap();
        env.product_repo
            .insert(&sample_product(&env, "Стул офисный", "450777", 3500.0))
            .unwrap();

        // поиск по подстроке наименования
        let found = env.product_repo.search_joined("Стол").expect("search");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].product_name, "Стол письменный");

        // поиск по подстроке артикула
        let found = env.product_repo.search_joined("777").expect("search");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].article_number, "450777");

        // ничего не найдено
        let found = env.product_repo.search_joined("Диван").expect("search");
        assert!(found.is_empty());
    }

    #[test]
    fn test_update_editable_fields() {
        let env = setup_test_env();
        let id = env
            .product_repo
            .insert(&sample_product(&env, "Тумба", "500001", 4000.0))
            .unwrap();

        let affected = env
            .product_repo
            .update(
                id,
                &ProductUpdate {
                    product_name: "Тумба прикроватная".to_string(),
                    min_partner_price: 4500.0,
                    is_available: false,
                },
            )
            .expect("update");
        assert_eq!(affected, 1);

        let found = env.product_repo.find_by_id(id).unwrap().unwrap();
        assert_eq!(found.product_name, "Тумба прикроватная");
        assert_eq!(found.min_partner_price, 4500.0);
        assert!(!found.is_available);
        // артикул форма редактирования не меняет
        assert_eq!(found.article_number, "500001");
    }

    #[test]
    fn test_update_missing_product() {
        let env = setup_test_env();
        let affected = env
            .product_repo
            .update(
                999,
                &ProductUpdate {
                    product_name: "Нет такой".to_string(),
                    min_partner_price: 1.0,
                    is_available: true,
                },
            )
            .expect("update");
        assert_eq!(affected, 0);
    }

    #[test]
    fn test_delete() {
        let env = setup_test_env();
        let id = env
            .product_repo
            .insert(&sample_product(&env, "Полка", "600001", 900.0))
            .unwrap();

        assert_eq!(env.product_repo.delete(id).expect("delete"), 1);
        assert!(env.product_repo.find_by_id(id).unwrap().is_none());
        assert_eq!(env.product_repo.count().unwrap(), 0);
    }

    #[test]
    fn test_insert_unknown_type_violates_fk() {
        let env = setup_test_env();
        let mut bad = sample_product(&env, "Кресло", "700001", 9000.0);
        bad.product_type_id = 999;

        let result = env.product_repo.insert(&bad);
        assert!(result.is_err(), "вставка с неизвестным типом должна падать");
    }

    #[test]
    fn test_duplicate_article_rejected() {
        let env = setup_test_env();
        env.product_repo
            .insert(&sample_product(&env, "Диван", "800001", 25000.0))
            .unwrap();

        let result = env
            .product_repo
            .insert(&sample_product(&env, "Диван угловой", "800001", 40000.0));
        assert!(result.is_err(), "артикул должен быть уникальным");
    }
}
