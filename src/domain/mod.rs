// ==========================================
// Учётная система БД мебельной компании - доменный слой
// ==========================================
// Назначение: доменные сущности и типы
// Ограничение: без доступа к данным, без бизнес-правил
// ==========================================

pub mod product;
pub mod reference;
pub mod workshop;

// Реэкспорт основных типов
pub use product::{Product, ProductListItem};
pub use reference::{MaterialType, ProductType};
pub use workshop::{ProductWorkshop, Workshop, WorkshopStage};
