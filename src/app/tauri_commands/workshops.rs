use crate::app::state::AppState;

use super::common::map_api_error;

// ==========================================
// Команды цехов
// ==========================================

/// Список цехов
#[tauri::command(rename_all = "snake_case")]
pub async fn list_workshops(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .workshop_api
        .list_workshops()
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("ошибка сериализации: {}", e))
}

/// Цеха, задействованные в изготовлении продукции
#[tauri::command(rename_all = "snake_case")]
pub async fn list_product_workshops(
    state: tauri::State<'_, AppState>,
    product_id: i64,
) -> Result<String, String> {
    let result = state
        .workshop_api
        .list_product_workshops(product_id)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("ошибка сериализации: {}", e))
}

/// Суммарное время изготовления продукции
#[tauri::command(rename_all = "snake_case")]
pub async fn get_production_time(
    state: tauri::State<'_, AppState>,
    product_id: i64,
) -> Result<String, String> {
    let result = state
        .workshop_api
        .get_production_time(product_id)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("ошибка сериализации: {}", e))
}
