// ==========================================
// Учётная система БД мебельной компании - API аналитики
// ==========================================
// Назначение: счётчики таблиц и агрегаты для страницы аналитики
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::config::config_manager::ConfigManager;
use crate::repository::stats_repo::{
    ProductTypeAvgPrice, ProductTypeCount, StatsRepository, TopProduct,
};

// ==========================================
// DTO
// ==========================================

/// Счётчики таблиц системы
///
/// Имена полей в JSON повторяют имена таблиц - исторический
/// формат выдачи /api/stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseStatistics {
    #[serde(rename = "Material_types")]
    pub material_types: i64,
    #[serde(rename = "Product_types")]
    pub product_types: i64,
    #[serde(rename = "Workshops")]
    pub workshops: i64,
    #[serde(rename = "Products")]
    pub products: i64,
    #[serde(rename = "Product_workshops")]
    pub product_workshops: i64,
}

// ==========================================
// AnalyticsApi - API аналитики
// ==========================================

pub struct AnalyticsApi {
    stats_repo: Arc<StatsRepository>,
    config: Arc<ConfigManager>,
}

impl AnalyticsApi {
    pub fn new(stats_repo: Arc<StatsRepository>, config: Arc<ConfigManager>) -> Self {
        Self { stats_repo, config }
    }

    /// Счётчики всех таблиц системы
    pub fn get_statistics(&self) -> ApiResult<DatabaseStatistics> {
        Ok(DatabaseStatistics {
            material_types: self.stats_repo.count_table("Material_types")?,
            product_types: self.stats_repo.count_table("Product_types")?,
            workshops: self.stats_repo.count_table("Workshops")?,
            products: self.stats_repo.count_table("Products")?,
            product_workshops: self.stats_repo.count_table("Product_workshops")?,
        })
    }

    /// Количество продукции по типам (по убыванию)
    pub fn products_by_type(&self) -> ApiResult<Vec<ProductTypeCount>> {
        Ok(self.stats_repo.products_by_type()?)
    }

    /// Средняя цена по типам продукции (по убыванию)
    pub fn average_price_by_type(&self) -> ApiResult<Vec<ProductTypeAvgPrice>> {
        Ok(self.stats_repo.average_price_by_type()?)
    }

    /// Самая дорогая продукция
    ///
    /// # Параметры
    /// - limit: размер рейтинга; None - значение из конфигурации
    pub fn top_expensive_products(&self, limit: Option<i64>) -> ApiResult<Vec<TopProduct>> {
        let limit = match limit {
            Some(n) => n,
            None => self.config.top_products_limit(),
        };

        if !(1..=100).contains(&limit) {
            return Err(ApiError::InvalidInput(
                "Размер рейтинга должен быть от 1 до 100".to_string(),
            ));
        }

        Ok(self.stats_repo.top_expensive_products(limit)?)
    }
}
