// ==========================================
// Учётная система БД мебельной компании - движки
// ==========================================
// Назначение: детерминированные бизнес-правила без SQL
// (расчёт потребности в сырье, время изготовления)
// ==========================================

pub mod material_calc;
pub mod production_time;

// Реэкспорт
pub use material_calc::{MaterialCalculator, MaterialRequirement};
pub use production_time::ProductionTimeCalculator;
