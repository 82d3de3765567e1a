// ==========================================
// Учётная система БД мебельной компании - главная точка входа
// ==========================================
// Технологии: Rust + SQLite (+ Tauri при включённой особенности)
// ==========================================

// Без окна консоли (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use furniture_inventory::app::{get_default_db_path, AppState};

#[cfg(feature = "tauri-app")]
fn main() {
    use furniture_inventory::app::tauri_commands::*;

    furniture_inventory::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", furniture_inventory::APP_NAME);
    tracing::info!("версия: {}", furniture_inventory::VERSION);
    tracing::info!("==================================================");

    let db_path = get_default_db_path();
    tracing::info!("база данных: {}", db_path);

    let app_state = AppState::new(db_path).expect("не удалось инициализировать AppState");

    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // Продукция (7 команд)
            // ==========================================
            list_products,
            get_product,
            create_product,
            update_product,
            delete_product,
            list_product_types,
            list_material_types,
            // ==========================================
            // Цеха (3 команды)
            // ==========================================
            list_workshops,
            list_product_workshops,
            get_production_time,
            // ==========================================
            // Аналитика (4 команды)
            // ==========================================
            get_statistics,
            get_products_by_type,
            get_average_price_by_type,
            get_top_expensive_products,
            // ==========================================
            // Расчёт сырья (1 команда)
            // ==========================================
            calculate_material,
            // ==========================================
            // Импорт справочников (1 команда)
            // ==========================================
            import_reference_file,
        ])
        .run(tauri::generate_context!())
        .expect("не удалось запустить приложение Tauri");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    furniture_inventory::logging::init();

    println!("{}", "=".repeat(60));
    println!("  {}", furniture_inventory::APP_NAME);
    println!("  версия: {}", furniture_inventory::VERSION);
    println!("{}", "=".repeat(60));
    println!();

    let db_path = get_default_db_path();
    println!("  База данных: {}", db_path);
    println!();

    let app_state = match AppState::new(db_path) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Ошибка инициализации: {}", e);
            std::process::exit(1);
        }
    };

    // краткая сводка по содержимому базы
    match app_state.analytics_api.get_statistics() {
        Ok(stats) => {
            println!("  Статистика БД:");
            println!("    Типы материалов:        {}", stats.material_types);
            println!("    Типы продукции:         {}", stats.product_types);
            println!("    Цеха:                   {}", stats.workshops);
            println!("    Продукция:              {}", stats.products);
            println!("    Связи продукция-цех:    {}", stats.product_workshops);
        }
        Err(e) => eprintln!("Не удалось получить статистику: {}", e),
    }

    println!();
    println!("  Графический интерфейс требует особенности tauri-app:");
    println!("  cargo run --features tauri-app");
    println!();
    println!("  Начальные данные: cargo run --bin seed_demo_db");
}
