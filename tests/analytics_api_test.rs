// ==========================================
// AnalyticsApi - интеграционные тесты
// ==========================================
// Проверяется:
// 1. счётчики таблиц и исторические имена полей JSON
// 2. агрегаты по типам продукции
// 3. рейтинг самой дорогой продукции
// ==========================================


use furniture_inventory::api::{ApiError, NewProductRequest};
use test_helpers::ApiTestEnv;

fn seed_analytics_env() -> ApiTestEnv {
    let env = ApiTestEnv::new().expect("не удалось создать тестовое окружение");

    let cabinets = env.state.product_type_repo.upsert("Шкафы", 3.5).unwrap();
    let beds = env.state.product_type_repo.upsert("Кровати", 4.2).unwrap();
    let ldsp = env.state.material_type_repo.upsert("ЛДСП", 0.1).unwrap();
    env.state.workshop_repo.upsert("Цех сборки", "Сборочный", 12).unwrap();

    for (name, article, type_id, price) in [
        ("Шкаф-купе", "100001", cabinets, 32000.0),
        ("Шкаф книжный", "100002", cabinets, 18000.0),
        ("Кровать односпальная", "100003", beds, 20000.0),
    ] {
        env.state
            .product_api
            .create_product(&NewProductRequest {
                name: name.to_string(),
                article: article.to_string(),
                product_type_id: type_id,
                material_type_id: ldsp,
                price,
            })
            .unwrap();
    }

    env
}

#[test]
fn test_статистика_счётчики() {
    let env = seed_analytics_env();

    let stats = env.state.analytics_api.get_statistics().expect("статистика");
    assert_eq!(stats.material_types, 1);
    assert_eq!(stats.product_types, 2);
    assert_eq!(stats.workshops, 1);
    assert_eq!(stats.products, 3);
    assert_eq!(stats.product_workshops, 0);
}

#[test]
fn test_статистика_имена_полей_json() {
    // имена полей повторяют имена таблиц - исторический формат /api/stats
    let env = seed_analytics_env();

    let stats = env.state.analytics_api.get_statistics().unwrap();
    let value = serde_json::to_value(&stats).unwrap();

    assert_eq!(value["Material_types"], 1);
    assert_eq!(value["Product_types"], 2);
    assert_eq!(value["Workshops"], 1);
    assert_eq!(value["Products"], 3);
    assert_eq!(value["Product_workshops"], 0);
}

#[test]
fn test_продукция_по_типам() {
    let env = seed_analytics_env();

    let by_type = env.state.analytics_api.products_by_type().expect("агрегат");
    assert_eq!(by_type.len(), 2);
    assert_eq!(by_type[0].product_type_name, "Шкафы");
    assert_eq!(by_type[0].count, 2);
    assert_eq!(by_type[1].count, 1);
}

#[test]
fn test_средняя_цена_по_типам() {
    let env = seed_analytics_env();

    let avg = env
        .state
        .analytics_api
        .average_price_by_type()
        .expect("агрегат");
    assert_eq!(avg.len(), 2);
    // (32000 + 18000) / 2 = 25000 > 20000
    assert_eq!(avg[0].product_type_name, "Шкафы");
    assert_eq!(avg[0].avg_price, 25000.0);
    assert_eq!(avg[1].avg_price, 20000.0);
}

#[test]
fn test_рейтинг_дорогой_продукции() {
    let env = seed_analytics_env();

    let top = env
        .state
        .analytics_api
        .top_expensive_products(Some(2))
        .expect("рейтинг");
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].product_name, "Шкаф-купе");
    assert!(top[0].min_partner_price >= top[1].min_partner_price);

    // None - размер из конфигурации (по умолчанию 10)
    let top = env
        .state
        .analytics_api
        .top_expensive_products(None)
        .expect("рейтинг");
    assert_eq!(top.len(), 3);
}

#[test]
fn test_рейтинг_некорректный_размер() {
    let env = seed_analytics_env();

    for limit in [0, -5, 101] {
        let result = env.state.analytics_api.top_expensive_products(Some(limit));
        assert!(
            matches!(result, Err(ApiError::InvalidInput(_))),
            "размер {} должен быть отклонён",
            limit
        );
    }
}
