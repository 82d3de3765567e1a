// ==========================================
// Учётная система БД мебельной компании - наполнение демо-данными
// ==========================================
// Назначение: создать схему и загрузить демонстрационный набор
// (справочники, цеха, продукция, маршруты по цехам)
// Запуск: cargo run --bin seed_demo_db [путь_к_бд]
// ==========================================

use std::collections::HashMap;

use furniture_inventory::api::NewProductRequest;
use furniture_inventory::app::{get_default_db_path, AppState};

fn main() {
    furniture_inventory::logging::init();

    let db_path = std::env::args().nth(1).unwrap_or_else(get_default_db_path);

    println!("Наполнение базы данных: {}", db_path);

    let state = match AppState::new(db_path) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Ошибка инициализации: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = seed(&state) {
        eprintln!("Ошибка наполнения: {}", e);
        std::process::exit(1);
    }

    match state.analytics_api.get_statistics() {
        Ok(stats) => {
            println!("Готово:");
            println!("  Типы материалов:     {}", stats.material_types);
            println!("  Типы продукции:      {}", stats.product_types);
            println!("  Цеха:                {}", stats.workshops);
            println!("  Продукция:           {}", stats.products);
            println!("  Связи продукция-цех: {}", stats.product_workshops);
        }
        Err(e) => eprintln!("Не удалось получить статистику: {}", e),
    }
}

fn seed(state: &AppState) -> Result<(), String> {
    let material_types = [
        ("ЛДСП", 0.10),
        ("Массив дуба", 0.25),
        ("Массив берёзы", 0.15),
        ("МДФ", 0.08),
    ];

    let product_types = [
        ("Корпусная мебель", 1.5),
        ("Мягкая мебель", 2.0),
        ("Шкафы", 3.5),
        ("Кровати", 4.2),
    ];

    let workshops = [
        ("Цех раскроя", "Заготовительный", 8),
        ("Цех сборки", "Сборочный", 12),
        ("Цех покраски", "Отделочный", 5),
        ("Цех упаковки", "Упаковочный", 4),
    ];

    // продукция: наименование, артикул, тип, материал, цена
    let products = [
        ("Комод Верона", "1021876", "Корпусная мебель", "ЛДСП", 12500.0),
        ("Шкаф-купе Оптима", "1127045", "Шкафы", "ЛДСП", 32400.0),
        ("Кровать Венеция", "1319820", "Кровати", "Массив дуба", 54800.0),
        ("Диван Неаполь", "1418533", "Мягкая мебель", "МДФ", 41200.0),
        ("Тумба прикроватная", "1520991", "Корпусная мебель", "Массив берёзы", 6900.0),
    ];

    // маршруты: продукция, цех, часы
    let routes = [
        ("Комод Верона", "Цех раскроя", 2.0),
        ("Комод Верона", "Цех сборки", 3.5),
        ("Комод Верона", "Цех покраски", 1.0),
        ("Шкаф-купе Оптима", "Цех раскроя", 4.0),
        ("Шкаф-купе Оптима", "Цех сборки", 6.5),
        ("Кровать Венеция", "Цех раскроя", 5.0),
        ("Кровать Венеция", "Цех сборки", 8.0),
        ("Кровать Венеция", "Цех покраски", 2.5),
        ("Диван Неаполь", "Цех сборки", 7.0),
        ("Диван Неаполь", "Цех упаковки", 0.5),
    ];

    // справочники пишутся напрямую через хранилища (upsert - повторный
    // запуск не плодит дубликатов), продукция - через API с валидацией

    let mut seeded_materials = HashMap::new();
    for (name, waste) in material_types {
        let id = state
            .material_type_repo
            .upsert(name, waste)
            .map_err(|e| e.to_string())?;
        seeded_materials.insert(name, id);
    }

    let mut seeded_types = HashMap::new();
    for (name, coefficient) in product_types {
        let id = state
            .product_type_repo
            .upsert(name, coefficient)
            .map_err(|e| e.to_string())?;
        seeded_types.insert(name, id);
    }

    let mut seeded_workshops = HashMap::new();
    for (name, workshop_type, staff) in workshops {
        let id = state
            .workshop_repo
            .upsert(name, workshop_type, staff)
            .map_err(|e| e.to_string())?;
        seeded_workshops.insert(name, id);
    }

    let mut seeded_products = HashMap::new();
    for (name, article, type_name, material_name, price) in products {
        let request = NewProductRequest {
            name: name.to_string(),
            article: article.to_string(),
            product_type_id: seeded_types[type_name],
            material_type_id: seeded_materials[material_name],
            price,
        };
        match state.product_api.create_product(&request) {
            Ok(id) => {
                seeded_products.insert(name, id);
            }
            Err(e) => {
                // повторный запуск: артикул уже существует
                tracing::warn!("продукция «{}» не добавлена: {}", name, e);
            }
        }
    }

    for (product_name, workshop_name, hours) in routes {
        if let Some(product_id) = seeded_products.get(product_name) {
            state
                .product_workshop_repo
                .upsert(*product_id, seeded_workshops[workshop_name], hours)
                .map_err(|e| e.to_string())?;
        }
    }

    Ok(())
}
