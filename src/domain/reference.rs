// ==========================================
// Учётная система БД мебельной компании - справочники
// ==========================================
// Таблицы Product_types и Material_types.
// Оба справочника читаются расчётом сырья и формами продукции,
// записываются только импортом.
// ==========================================

use serde::{Deserialize, Serialize};

/// Тип продукции
///
/// type_coefficient - положительный множитель, учитывающий форму
/// и сложность изделия при расчёте расхода сырья.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductType {
    pub product_type_id: i64,
    pub product_type_name: String,
    pub type_coefficient: f64,
}

/// Тип материала
///
/// waste_percentage - доля потерь сырья в диапазоне [0, 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialType {
    pub material_type_id: i64,
    pub material_type_name: String,
    pub waste_percentage: f64,
}
