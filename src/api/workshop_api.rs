// ==========================================
// Учётная система БД мебельной компании - API цехов
// ==========================================
// Назначение: список цехов, маршрут продукции по цехам,
// суммарное время изготовления
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::ApiResult;
use crate::domain::workshop::{ProductWorkshop, Workshop, WorkshopStage};
use crate::engine::production_time::ProductionTimeCalculator;
use crate::repository::workshop_repo::{ProductWorkshopRepository, WorkshopRepository};

// ==========================================
// DTO
// ==========================================

/// Отчёт о времени изготовления продукции
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionTimeResponse {
    pub product_id: i64,
    pub workshops: Vec<WorkshopStage>,
    /// Сумма часов по всем цехам, округлённая вверх до целого часа
    pub total_production_time: i64,
}

// ==========================================
// WorkshopApi - API цехов
// ==========================================

pub struct WorkshopApi {
    workshop_repo: Arc<WorkshopRepository>,
    product_workshop_repo: Arc<ProductWorkshopRepository>,
    time_calculator: ProductionTimeCalculator,
}

impl WorkshopApi {
    pub fn new(
        workshop_repo: Arc<WorkshopRepository>,
        product_workshop_repo: Arc<ProductWorkshopRepository>,
    ) -> Self {
        Self {
            workshop_repo,
            product_workshop_repo,
            time_calculator: ProductionTimeCalculator::new(),
        }
    }

    /// Список цехов (по типу, затем по названию)
    pub fn list_workshops(&self) -> ApiResult<Vec<Workshop>> {
        Ok(self.workshop_repo.list_all()?)
    }

    /// Цеха, задействованные в изготовлении продукции
    /// (по убыванию времени этапа)
    pub fn list_product_workshops(&self, product_id: i64) -> ApiResult<Vec<ProductWorkshop>> {
        Ok(self.product_workshop_repo.list_by_product(product_id)?)
    }

    /// Суммарное время изготовления продукции
    ///
    /// Продукция без этапов даёт пустой список и итог 0.
    pub fn get_production_time(&self, product_id: i64) -> ApiResult<ProductionTimeResponse> {
        let stages = self.product_workshop_repo.list_stages(product_id)?;
        let total = self.time_calculator.total_hours(&stages);

        Ok(ProductionTimeResponse {
            product_id,
            workshops: stages,
            total_production_time: total,
        })
    }
}
