// ==========================================
// Учётная система БД мебельной компании - слой хранилищ
// ==========================================
// Назначение: доступ к данным, изоляция деталей SQLite
// Ограничения: Repository не содержит бизнес-логики,
// все запросы параметризованы (защита от SQL-инъекций)
// ==========================================

pub mod error;
pub mod material_type_repo;
pub mod product_repo;
pub mod product_type_repo;
pub mod stats_repo;
pub mod workshop_repo;

// Реэкспорт хранилищ
pub use error::{RepositoryError, RepositoryResult};
pub use material_type_repo::MaterialTypeRepository;
pub use product_repo::{NewProduct, ProductRepository, ProductUpdate};
pub use product_type_repo::ProductTypeRepository;
pub use stats_repo::{ProductTypeAvgPrice, ProductTypeCount, StatsRepository, TopProduct};
pub use workshop_repo::{ProductWorkshopRepository, WorkshopRepository};
