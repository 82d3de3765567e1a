// ==========================================
// Учётная система БД мебельной компании - прикладной слой
// ==========================================
// Назначение: сборка приложения, мост к фронтенду
// ==========================================

pub mod state;
pub mod tauri_commands;

// Реэкспорт
pub use state::{get_default_db_path, AppState};

#[cfg(feature = "tauri-app")]
pub use tauri_commands::*;
