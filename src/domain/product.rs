// ==========================================
// Учётная система БД мебельной компании - продукция
// ==========================================
// Соответствует таблице Products и её соединению
// со справочниками типов продукции и материалов
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Product - строка таблицы Products
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,          // Идентификатор продукции
    pub product_name: String,     // Наименование
    pub article_number: String,   // Артикул
    pub product_type_id: i64,     // Тип продукции (FK)
    pub material_type_id: i64,    // Основной материал (FK)
    pub min_partner_price: f64,   // Минимальная цена для партнёра
    pub is_available: bool,       // Доступность для заказа
}

// ==========================================
// ProductListItem - строка списка продукции
// ==========================================
// Соединение с названиями типа и материала,
// используется списком продукции и JSON-выдачей
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListItem {
    pub product_id: i64,
    pub product_name: String,
    pub article_number: String,
    pub product_type_name: String,
    pub material_type_name: String,
    pub min_partner_price: f64,
    pub is_available: bool,
}
