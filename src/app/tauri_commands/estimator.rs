use crate::api::MaterialEstimateRequest;
use crate::app::state::AppState;

use super::common::map_api_error;

// ==========================================
// Команда расчёта сырья
// ==========================================

/// Рассчитать количество сырья для партии продукции
///
/// Неизвестный тип продукции или материала возвращается
/// успешным ответом { material_needed: -1, error },
/// некорректный ввод - ошибкой команды.
#[tauri::command(rename_all = "snake_case")]
pub async fn calculate_material(
    state: tauri::State<'_, AppState>,
    request: MaterialEstimateRequest,
) -> Result<String, String> {
    let result = state
        .estimator_api
        .calculate_material(&request)
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("ошибка сериализации: {}", e))
}
