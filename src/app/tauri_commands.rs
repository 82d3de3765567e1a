// ==========================================
// Учётная система БД мебельной компании - команды Tauri (по доменам)
// ==========================================
// Назначение: определение команд, связывающих фронтенд с API слоем
// ==========================================

#![cfg(feature = "tauri-app")]

mod analytics;
mod common;
mod estimator;
mod import;
mod products;
mod workshops;

pub use analytics::*;
pub use estimator::*;
pub use import::*;
pub use products::*;
pub use workshops::*;
