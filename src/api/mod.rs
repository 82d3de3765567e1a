// ==========================================
// Учётная система БД мебельной компании - API слой
// ==========================================
// Назначение: бизнес-интерфейсы поверх хранилищ и движков,
// структурированный вход и структурированный результат
// ==========================================

pub mod analytics_api;
pub mod error;
pub mod estimator_api;
pub mod product_api;
pub mod workshop_api;

// Реэкспорт основных типов
pub use analytics_api::{AnalyticsApi, DatabaseStatistics};
pub use error::{ApiError, ApiResult};
pub use estimator_api::{
    EstimatorApi, MaterialEstimateMiss, MaterialEstimateOutcome, MaterialEstimateRequest,
    MaterialEstimateResponse,
};
pub use product_api::{NewProductRequest, ProductApi, ProductUpdateRequest};
pub use workshop_api::{ProductionTimeResponse, WorkshopApi};
