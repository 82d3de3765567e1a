use std::path::Path;

use crate::app::state::AppState;

// ==========================================
// Команды импорта справочников
// ==========================================

/// Импортировать файл справочных данных
///
/// # Параметры
/// - table: целевая таблица (material_types / product_types /
///   workshops / products / product_workshops)
/// - file_path: путь к файлу CSV или Excel
#[tauri::command(rename_all = "snake_case")]
pub async fn import_reference_file(
    state: tauri::State<'_, AppState>,
    table: String,
    file_path: String,
) -> Result<String, String> {
    let path = Path::new(&file_path);

    let report = match table.as_str() {
        "material_types" => state.importer.import_material_types(path),
        "product_types" => state.importer.import_product_types(path),
        "workshops" => state.importer.import_workshops(path),
        "products" => state.importer.import_products(path),
        "product_workshops" => state.importer.import_product_workshops(path),
        other => return Err(format!("неизвестная таблица импорта: {}", other)),
    }
    .map_err(|e| e.to_string())?;

    serde_json::to_string(&report).map_err(|e| format!("ошибка сериализации: {}", e))
}
