// ==========================================
// Учётная система БД мебельной компании - цеха
// ==========================================
// Таблицы Workshops и Product_workshops
// ==========================================

use serde::{Deserialize, Serialize};

/// Цех
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workshop {
    pub workshop_id: i64,
    pub workshop_name: String,
    pub workshop_type: String, // Тип цеха (сборочный, покрасочный, ...)
    pub staff_count: i64,      // Количество человек для производства
    pub is_active: bool,
}

/// Связь продукции с цехом (полные сведения о цехе + время этапа)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductWorkshop {
    pub workshop_id: i64,
    pub workshop_name: String,
    pub workshop_type: String,
    pub staff_count: i64,
    pub production_time_hours: f64,
}

/// Этап производства продукции (для отчёта о времени изготовления)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkshopStage {
    pub workshop_name: String,
    pub production_time_hours: f64,
}
