// ==========================================
// Учётная система БД мебельной компании - API расчёта сырья
// ==========================================
// Назначение: расчёт количества сырья для производства партии продукции
// с учётом коэффициента типа и потерь материала
// ==========================================
// Контракт ошибок:
// - нехватка/некорректность параметров -> ApiError::InvalidInput
//   (расчёт не начинается)
// - неизвестный тип продукции/материала -> мягкий результат
//   { material_needed: -1, error } на канале успеха; вызывающая
//   сторона ветвится по полю, а не по ошибке
// - отказ хранилища -> ApiError::DatabaseError
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::error::{ApiError, ApiResult};
use crate::engine::material_calc::MaterialCalculator;
use crate::i18n::t;
use crate::repository::material_type_repo::MaterialTypeRepository;
use crate::repository::product_type_repo::ProductTypeRepository;

// ==========================================
// DTO
// ==========================================

/// Запрос расчёта сырья
///
/// Все поля опциональны на уровне запроса: отсутствие любого из пяти
/// значений - ошибка клиентского ввода, а не ошибка десериализации.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialEstimateRequest {
    pub product_type_id: Option<i64>,
    pub material_type_id: Option<i64>,
    pub quantity: Option<f64>,
    pub param1: Option<f64>,
    pub param2: Option<f64>,
}

/// Успешный результат расчёта
///
/// Промежуточные значения отдаются строками с двумя знаками
/// после запятой - формат отображения.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialEstimateResponse {
    pub product_type_id: i64,
    pub material_type_id: i64,
    pub quantity: f64,
    pub param1: f64,
    pub param2: f64,
    pub type_coefficient: f64,
    pub waste_percentage: f64,
    pub material_per_unit: String,
    pub material_with_waste: String,
    pub material_needed: i64,
}

/// Мягкий отказ: справочная запись не найдена
///
/// material_needed всегда равен -1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialEstimateMiss {
    pub material_needed: i64,
    pub error: String,
}

/// Исход расчёта сырья
///
/// Сериализуется без тега: либо полный результат, либо
/// { "material_needed": -1, "error": "..." }.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MaterialEstimateOutcome {
    Calculated(MaterialEstimateResponse),
    ReferenceMissing(MaterialEstimateMiss),
}

impl MaterialEstimateOutcome {
    fn missing(message: String) -> Self {
        MaterialEstimateOutcome::ReferenceMissing(MaterialEstimateMiss {
            material_needed: -1,
            error: message,
        })
    }

    /// Итоговое количество сырья (-1 для мягкого отказа)
    pub fn material_needed(&self) -> i64 {
        match self {
            MaterialEstimateOutcome::Calculated(r) => r.material_needed,
            MaterialEstimateOutcome::ReferenceMissing(m) => m.material_needed,
        }
    }
}

// ==========================================
// EstimatorApi - API расчёта сырья
// ==========================================

/// API расчёта потребности в сырье
///
/// Детерминированная функция запроса и двух справочных значений:
/// побочных эффектов нет, повторный вызов с теми же данными
/// даёт тот же результат.
pub struct EstimatorApi {
    product_type_repo: Arc<ProductTypeRepository>,
    material_type_repo: Arc<MaterialTypeRepository>,
    calculator: MaterialCalculator,
}

impl EstimatorApi {
    pub fn new(
        product_type_repo: Arc<ProductTypeRepository>,
        material_type_repo: Arc<MaterialTypeRepository>,
    ) -> Self {
        Self {
            product_type_repo,
            material_type_repo,
            calculator: MaterialCalculator::new(),
        }
    }

    /// Рассчитать количество сырья для партии продукции
    ///
    /// # Параметры
    /// - request: пять входных значений (тип продукции, материал,
    ///   количество, два габарита)
    ///
    /// # Возврат
    /// - Ok(MaterialEstimateOutcome::Calculated): полный результат
    /// - Ok(MaterialEstimateOutcome::ReferenceMissing): неизвестный
    ///   тип продукции или материала, material_needed = -1
    /// - Err(ApiError::InvalidInput): нехватка или неположительность
    ///   параметров
    pub fn calculate_material(
        &self,
        request: &MaterialEstimateRequest,
    ) -> ApiResult<MaterialEstimateOutcome> {
        // 1. Полнота входных данных; нулевой идентификатор
        //    приравнивается к отсутствующему
        let (product_type_id, material_type_id, quantity, param1, param2) = match (
            request.product_type_id,
            request.material_type_id,
            request.quantity,
            request.param1,
            request.param2,
        ) {
            (Some(pt), Some(mt), Some(q), Some(p1), Some(p2)) if pt != 0 && mt != 0 => {
                (pt, mt, q, p1, p2)
            }
            _ => return Err(ApiError::InvalidInput(t("estimator.missing_parameters"))),
        };

        // 2. Положительность числовых параметров
        if quantity <= 0.0 || param1 <= 0.0 || param2 <= 0.0 {
            return Err(ApiError::InvalidInput(t("estimator.invalid_parameters")));
        }

        // 3. Коэффициент типа продукции
        let product_type = match self.product_type_repo.find_by_id(product_type_id) {
            Ok(Some(pt)) => pt,
            Ok(None) => {
                return Ok(MaterialEstimateOutcome::missing(t(
                    "estimator.product_type_not_found",
                )))
            }
            Err(e) => return Err(ApiError::DatabaseError(e.to_string())),
        };

        // 4. Процент потерь материала
        let material_type = match self.material_type_repo.find_by_id(material_type_id) {
            Ok(Some(mt)) => mt,
            Ok(None) => {
                return Ok(MaterialEstimateOutcome::missing(t(
                    "estimator.material_type_not_found",
                )))
            }
            Err(e) => return Err(ApiError::DatabaseError(e.to_string())),
        };

        // 5. Чистый расчёт
        let requirement = self.calculator.calculate(
            product_type.type_coefficient,
            material_type.waste_percentage,
            quantity,
            param1,
            param2,
        );

        debug!(
            product_type_id,
            material_type_id,
            material_needed = requirement.material_needed,
            "расчёт сырья выполнен"
        );

        Ok(MaterialEstimateOutcome::Calculated(
            MaterialEstimateResponse {
                product_type_id,
                material_type_id,
                quantity,
                param1,
                param2,
                type_coefficient: product_type.type_coefficient,
                waste_percentage: material_type.waste_percentage,
                material_per_unit: format!("{:.2}", requirement.material_per_unit),
                material_with_waste: format!("{:.2}", requirement.material_with_waste),
                material_needed: requirement.material_needed,
            },
        ))
    }
}
