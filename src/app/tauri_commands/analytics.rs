use crate::app::state::AppState;

use super::common::map_api_error;

// ==========================================
// Команды аналитики
// ==========================================

/// Счётчики таблиц системы
#[tauri::command(rename_all = "snake_case")]
pub async fn get_statistics(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .analytics_api
        .get_statistics()
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("ошибка сериализации: {}", e))
}

/// Количество продукции по типам
#[tauri::command(rename_all = "snake_case")]
pub async fn get_products_by_type(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .analytics_api
        .products_by_type()
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("ошибка сериализации: {}", e))
}

/// Средняя цена по типам продукции
#[tauri::command(rename_all = "snake_case")]
pub async fn get_average_price_by_type(
    state: tauri::State<'_, AppState>,
) -> Result<String, String> {
    let result = state
        .analytics_api
        .average_price_by_type()
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("ошибка сериализации: {}", e))
}

/// Рейтинг самой дорогой продукции
#[tauri::command(rename_all = "snake_case")]
pub async fn get_top_expensive_products(
    state: tauri::State<'_, AppState>,
    limit: Option<i64>,
) -> Result<String, String> {
    let result = state
        .analytics_api
        .top_expensive_products(limit)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("ошибка сериализации: {}", e))
}
