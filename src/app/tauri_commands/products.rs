use crate::api::{NewProductRequest, ProductUpdateRequest};
use crate::app::state::AppState;

use super::common::map_api_error;

// ==========================================
// Команды продукции
// ==========================================

/// Список продукции (с необязательной строкой поиска)
#[tauri::command(rename_all = "snake_case")]
pub async fn list_products(
    state: tauri::State<'_, AppState>,
    search: Option<String>,
) -> Result<String, String> {
    let result = state
        .product_api
        .list_products(search.as_deref())
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("ошибка сериализации: {}", e))
}

/// Продукция по идентификатору
#[tauri::command(rename_all = "snake_case")]
pub async fn get_product(
    state: tauri::State<'_, AppState>,
    product_id: i64,
) -> Result<String, String> {
    let result = state
        .product_api
        .get_product(product_id)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("ошибка сериализации: {}", e))
}

/// Добавить продукцию
#[tauri::command(rename_all = "snake_case")]
pub async fn create_product(
    state: tauri::State<'_, AppState>,
    request: NewProductRequest,
) -> Result<String, String> {
    let id = state
        .product_api
        .create_product(&request)
        .map_err(map_api_error)?;

    serde_json::to_string(&serde_json::json!({ "product_id": id }))
        .map_err(|e| format!("ошибка сериализации: {}", e))
}

/// Изменить продукцию
#[tauri::command(rename_all = "snake_case")]
pub async fn update_product(
    state: tauri::State<'_, AppState>,
    product_id: i64,
    request: ProductUpdateRequest,
) -> Result<String, String> {
    state
        .product_api
        .update_product(product_id, &request)
        .map_err(map_api_error)?;

    Ok("{}".to_string())
}

/// Удалить продукцию
#[tauri::command(rename_all = "snake_case")]
pub async fn delete_product(
    state: tauri::State<'_, AppState>,
    product_id: i64,
) -> Result<String, String> {
    state
        .product_api
        .delete_product(product_id)
        .map_err(map_api_error)?;

    Ok("{}".to_string())
}

/// Справочник типов продукции (форма добавления)
#[tauri::command(rename_all = "snake_case")]
pub async fn list_product_types(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .product_api
        .list_product_types()
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("ошибка сериализации: {}", e))
}

/// Справочник типов материалов (форма добавления)
#[tauri::command(rename_all = "snake_case")]
pub async fn list_material_types(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .product_api
        .list_material_types()
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("ошибка сериализации: {}", e))
}
