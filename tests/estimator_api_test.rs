// ==========================================
// EstimatorApi - интеграционные тесты
// ==========================================
// Проверяется:
// 1. формула расчёта и формат выдачи
// 2. контракт ошибок: нехватка/некорректность параметров
// 3. мягкий отказ { material_needed: -1, error } для неизвестных
//    справочных записей
// ==========================================


use furniture_inventory::api::{ApiError, MaterialEstimateOutcome, MaterialEstimateRequest};
use serde_json::json;
use test_helpers::ApiTestEnv;

fn request(
    product_type_id: Option<i64>,
    material_type_id: Option<i64>,
    quantity: Option<f64>,
    param1: Option<f64>,
    param2: Option<f64>,
) -> MaterialEstimateRequest {
    MaterialEstimateRequest {
        product_type_id,
        material_type_id,
        quantity,
        param1,
        param2,
    }
}

// ==========================================
// Успешный расчёт
// ==========================================

#[test]
fn test_расчёт_эталонный_сценарий() {
    let env = ApiTestEnv::new().expect("не удалось создать тестовое окружение");
    let (type_id, material_id) = env.seed_reference();

    // c=1.5, w=0.1, q=10, p1=2, p2=3
    let outcome = env
        .state
        .estimator_api
        .calculate_material(&request(
            Some(type_id),
            Some(material_id),
            Some(10.0),
            Some(2.0),
            Some(3.0),
        ))
        .expect("расчёт не должен падать");

    match outcome {
        MaterialEstimateOutcome::Calculated(result) => {
            assert_eq!(result.product_type_id, type_id);
            assert_eq!(result.material_type_id, material_id);
            assert_eq!(result.quantity, 10.0);
            assert_eq!(result.param1, 2.0);
            assert_eq!(result.param2, 3.0);
            assert_eq!(result.type_coefficient, 1.5);
            assert_eq!(result.waste_percentage, 0.1);
            assert_eq!(result.material_per_unit, "9.00");
            assert_eq!(result.material_with_waste, "9.90");
            assert_eq!(result.material_needed, 99);
        }
        other => panic!("ожидался Calculated, получено: {:?}", other),
    }
}

#[test]
fn test_расчёт_округление_вверх() {
    let env = ApiTestEnv::new().expect("не удалось создать тестовое окружение");
    let (type_id, material_id) = env.seed_reference();

    // 9.9 * 11 = 108.9 -> 109
    let outcome = env
        .state
        .estimator_api
        .calculate_material(&request(
            Some(type_id),
            Some(material_id),
            Some(11.0),
            Some(2.0),
            Some(3.0),
        ))
        .expect("расчёт не должен падать");

    assert_eq!(outcome.material_needed(), 109);
}

#[test]
fn test_расчёт_детерминирован() {
    let env = ApiTestEnv::new().expect("не удалось создать тестовое окружение");
    let (type_id, material_id) = env.seed_reference();

    let req = request(Some(type_id), Some(material_id), Some(7.0), Some(1.2), Some(0.8));
    let first = env.state.estimator_api.calculate_material(&req).unwrap();
    let second = env.state.estimator_api.calculate_material(&req).unwrap();

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn test_расчёт_монотонен_по_количеству() {
    let env = ApiTestEnv::new().expect("не удалось создать тестовое окружение");
    let (type_id, material_id) = env.seed_reference();

    let mut prev = 0;
    for quantity in [1.0, 2.0, 5.0, 10.0, 50.0] {
        let outcome = env
            .state
            .estimator_api
            .calculate_material(&request(
                Some(type_id),
                Some(material_id),
                Some(quantity),
                Some(2.0),
                Some(3.0),
            ))
            .unwrap();
        let needed = outcome.material_needed();
        assert!(needed >= prev, "итог не должен убывать с ростом количества");
        prev = needed;
    }
}

#[test]
fn test_расчёт_json_формат_успеха() {
    let env = ApiTestEnv::new().expect("не удалось создать тестовое окружение");
    let (type_id, material_id) = env.seed_reference();

    let outcome = env
        .state
        .estimator_api
        .calculate_material(&request(
            Some(type_id),
            Some(material_id),
            Some(10.0),
            Some(2.0),
            Some(3.0),
        ))
        .unwrap();

    let value = serde_json::to_value(&outcome).unwrap();
    // промежуточные значения - строки с двумя знаками
    assert_eq!(value["material_per_unit"], json!("9.00"));
    assert_eq!(value["material_with_waste"], json!("9.90"));
    assert_eq!(value["material_needed"], json!(99));
    assert_eq!(value["type_coefficient"], json!(1.5));
}

// ==========================================
// Ошибки клиентского ввода
// ==========================================

#[test]
fn test_нехватка_каждого_из_пяти_параметров() {
    let env = ApiTestEnv::new().expect("не удалось создать тестовое окружение");
    let (type_id, material_id) = env.seed_reference();

    let incomplete = [
        request(None, Some(material_id), Some(10.0), Some(2.0), Some(3.0)),
        request(Some(type_id), None, Some(10.0), Some(2.0), Some(3.0)),
        request(Some(type_id), Some(material_id), None, Some(2.0), Some(3.0)),
        request(Some(type_id), Some(material_id), Some(10.0), None, Some(3.0)),
        request(Some(type_id), Some(material_id), Some(10.0), Some(2.0), None),
    ];

    for req in incomplete {
        let result = env.state.estimator_api.calculate_material(&req);
        match result {
            Err(ApiError::InvalidInput(msg)) => {
                assert_eq!(msg, "Недостаточно параметров");
            }
            other => panic!("ожидался InvalidInput, получено: {:?}", other.map(|_| ())),
        }
    }
}

#[test]
fn test_нулевой_идентификатор_считается_отсутствующим() {
    let env = ApiTestEnv::new().expect("не удалось создать тестовое окружение");
    let (_, material_id) = env.seed_reference();

    let result = env.state.estimator_api.calculate_material(&request(
        Some(0),
        Some(material_id),
        Some(10.0),
        Some(2.0),
        Some(3.0),
    ));

    match result {
        Err(ApiError::InvalidInput(msg)) => assert_eq!(msg, "Недостаточно параметров"),
        other => panic!("ожидался InvalidInput, получено: {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_неположительные_параметры() {
    let env = ApiTestEnv::new().expect("не удалось создать тестовое окружение");
    let (type_id, material_id) = env.seed_reference();

    let invalid = [
        request(Some(type_id), Some(material_id), Some(-1.0), Some(2.0), Some(3.0)),
        request(Some(type_id), Some(material_id), Some(0.0), Some(2.0), Some(3.0)),
        request(Some(type_id), Some(material_id), Some(10.0), Some(-2.0), Some(3.0)),
        request(Some(type_id), Some(material_id), Some(10.0), Some(2.0), Some(0.0)),
    ];

    for req in invalid {
        let result = env.state.estimator_api.calculate_material(&req);
        match result {
            Err(ApiError::InvalidInput(msg)) => {
                assert_eq!(msg, "Параметры должны быть положительными");
            }
            other => panic!("ожидался InvalidInput, получено: {:?}", other.map(|_| ())),
        }
    }
}

// ==========================================
// Мягкий отказ: справочная запись не найдена
// ==========================================

#[test]
fn test_неизвестный_тип_продукции() {
    let env = ApiTestEnv::new().expect("не удалось создать тестовое окружение");
    let (_, material_id) = env.seed_reference();

    let outcome = env
        .state
        .estimator_api
        .calculate_material(&request(
            Some(777),
            Some(material_id),
            Some(10.0),
            Some(2.0),
            Some(3.0),
        ))
        .expect("неизвестный справочник - не ошибка вызова");

    match outcome {
        MaterialEstimateOutcome::ReferenceMissing(miss) => {
            assert_eq!(miss.material_needed, -1);
            assert_eq!(miss.error, "Тип продукции не найден");
        }
        other => panic!("ожидался ReferenceMissing, получено: {:?}", other),
    }
}

#[test]
fn test_неизвестный_тип_продукции_важнее_материала() {
    // проверка типа продукции выполняется первой и не зависит
    // от корректности идентификатора материала
    let env = ApiTestEnv::new().expect("не удалось создать тестовое окружение");
    env.seed_reference();

    let outcome = env
        .state
        .estimator_api
        .calculate_material(&request(
            Some(777),
            Some(888),
            Some(10.0),
            Some(2.0),
            Some(3.0),
        ))
        .unwrap();

    match outcome {
        MaterialEstimateOutcome::ReferenceMissing(miss) => {
            assert_eq!(miss.error, "Тип продукции не найден");
        }
        other => panic!("ожидался ReferenceMissing, получено: {:?}", other),
    }
}

#[test]
fn test_неизвестный_тип_материала() {
    let env = ApiTestEnv::new().expect("не удалось создать тестовое окружение");
    let (type_id, _) = env.seed_reference();

    let outcome = env
        .state
        .estimator_api
        .calculate_material(&request(
            Some(type_id),
            Some(888),
            Some(10.0),
            Some(2.0),
            Some(3.0),
        ))
        .unwrap();

    match outcome {
        MaterialEstimateOutcome::ReferenceMissing(miss) => {
            assert_eq!(miss.material_needed, -1);
            assert_eq!(miss.error, "Тип материала не найден");
        }
        other => panic!("ожидался ReferenceMissing, получено: {:?}", other),
    }
}

#[test]
fn test_мягкий_отказ_json_формат() {
    let env = ApiTestEnv::new().expect("не удалось создать тестовое окружение");
    env.seed_reference();

    let outcome = env
        .state
        .estimator_api
        .calculate_material(&request(
            Some(777),
            Some(888),
            Some(10.0),
            Some(2.0),
            Some(3.0),
        ))
        .unwrap();

    // исторический формат выдачи: ровно два поля
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(
        value,
        json!({
            "material_needed": -1,
            "error": "Тип продукции не найден"
        })
    );
}
