// ==========================================
// Учётная система БД мебельной компании - состояние приложения
// ==========================================
// Назначение: общий корень сборки - соединение, хранилища, API
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::{AnalyticsApi, EstimatorApi, ProductApi, WorkshopApi};
use crate::config::config_manager::ConfigManager;
use crate::db;
use crate::importer::reference_importer::ReferenceDataImporter;
use crate::repository::material_type_repo::MaterialTypeRepository;
use crate::repository::product_repo::ProductRepository;
use crate::repository::product_type_repo::ProductTypeRepository;
use crate::repository::stats_repo::StatsRepository;
use crate::repository::workshop_repo::{ProductWorkshopRepository, WorkshopRepository};

/// Состояние приложения
///
/// Содержит все API и общие ресурсы; в Tauri-приложении
/// управляется как глобальное состояние.
pub struct AppState {
    /// Путь к файлу базы данных
    pub db_path: String,

    /// API продукции
    pub product_api: Arc<ProductApi>,

    /// API цехов
    pub workshop_api: Arc<WorkshopApi>,

    /// API аналитики
    pub analytics_api: Arc<AnalyticsApi>,

    /// API расчёта сырья
    pub estimator_api: Arc<EstimatorApi>,

    /// Импортёр справочников
    pub importer: Arc<ReferenceDataImporter>,

    /// Менеджер конфигурации
    pub config: Arc<ConfigManager>,

    /// Хранилища справочников (используются наполнением данных)
    pub product_type_repo: Arc<ProductTypeRepository>,
    pub material_type_repo: Arc<MaterialTypeRepository>,
    pub workshop_repo: Arc<WorkshopRepository>,
    pub product_workshop_repo: Arc<ProductWorkshopRepository>,
}

impl AppState {
    /// Создать состояние приложения
    ///
    /// # Параметры
    /// - db_path: путь к файлу базы данных
    ///
    /// # Возврат
    /// - Ok(AppState): собранное приложение
    /// - Err(String): ошибка инициализации
    ///
    /// Последовательность: соединение -> хранилища (создают свои
    /// таблицы) -> конфигурация -> API.
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("инициализация AppState, база данных: {}", db_path);

        let conn = db::open_sqlite_connection(&db_path)
            .map_err(|e| format!("не удалось открыть базу данных: {}", e))?;

        // предупреждение о несовпадении версии схемы, без автомиграции
        match db::read_schema_version(&conn) {
            Ok(Some(v)) if v != db::CURRENT_SCHEMA_VERSION => {
                tracing::warn!(
                    "версия схемы БД {} отличается от ожидаемой {}",
                    v,
                    db::CURRENT_SCHEMA_VERSION
                );
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("не удалось прочитать версию схемы: {}", e),
        }
        if let Err(e) = db::write_schema_version(&conn) {
            tracing::warn!("не удалось зафиксировать версию схемы: {}", e);
        }

        let conn = Arc::new(Mutex::new(conn));

        // ==========================================
        // Слой хранилищ
        // ==========================================

        let product_type_repo = Arc::new(
            ProductTypeRepository::from_connection(conn.clone())
                .map_err(|e| format!("не удалось создать ProductTypeRepository: {}", e))?,
        );
        let material_type_repo = Arc::new(
            MaterialTypeRepository::from_connection(conn.clone())
                .map_err(|e| format!("не удалось создать MaterialTypeRepository: {}", e))?,
        );
        let workshop_repo = Arc::new(
            WorkshopRepository::from_connection(conn.clone())
                .map_err(|e| format!("не удалось создать WorkshopRepository: {}", e))?,
        );
        let product_repo = Arc::new(
            ProductRepository::from_connection(conn.clone())
                .map_err(|e| format!("не удалось создать ProductRepository: {}", e))?,
        );
        let product_workshop_repo = Arc::new(
            ProductWorkshopRepository::from_connection(conn.clone())
                .map_err(|e| format!("не удалось создать ProductWorkshopRepository: {}", e))?,
        );
        let stats_repo = Arc::new(StatsRepository::from_connection(conn.clone()));

        // ==========================================
        // Конфигурация
        // ==========================================

        let config = Arc::new(
            ConfigManager::from_connection(conn)
                .map_err(|e| format!("не удалось создать ConfigManager: {}", e))?,
        );

        // язык сообщений берётся из конфигурации
        crate::i18n::set_locale(&config.locale());

        // ==========================================
        // API слой
        // ==========================================

        let product_api = Arc::new(ProductApi::new(
            product_repo.clone(),
            product_type_repo.clone(),
            material_type_repo.clone(),
        ));

        let workshop_api = Arc::new(WorkshopApi::new(
            workshop_repo.clone(),
            product_workshop_repo.clone(),
        ));

        let analytics_api = Arc::new(AnalyticsApi::new(stats_repo, config.clone()));

        let estimator_api = Arc::new(EstimatorApi::new(
            product_type_repo.clone(),
            material_type_repo.clone(),
        ));

        let importer = Arc::new(ReferenceDataImporter::new(
            product_type_repo.clone(),
            material_type_repo.clone(),
            workshop_repo.clone(),
            product_repo,
            product_workshop_repo.clone(),
        ));

        tracing::info!("AppState инициализирован");

        Ok(Self {
            db_path,
            product_api,
            workshop_api,
            analytics_api,
            estimator_api,
            importer,
            config,
            product_type_repo,
            material_type_repo,
            workshop_repo,
            product_workshop_repo,
        })
    }

    /// Путь к файлу базы данных
    pub fn get_db_path(&self) -> &str {
        &self.db_path
    }
}

// ==========================================
// Путь к базе данных по умолчанию
// ==========================================

/// Путь к базе данных по умолчанию
///
/// # Возврат
/// - значение переменной окружения FURNITURE_DB_PATH, если задана
/// - иначе каталог данных пользователя:
///   furniture-inventory-dev (отладка) / furniture-inventory (выпуск)
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    if let Ok(path) = std::env::var("FURNITURE_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    // запасной вариант - файл рядом с рабочим каталогом
    let mut path = PathBuf::from("./furniture_company.db");

    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("furniture-inventory-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("furniture-inventory");
        }

        std::fs::create_dir_all(&path).ok();
        path = path.join("furniture_company.db");
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_default_db_path() {
        let path = get_default_db_path();
        assert!(!path.is_empty());
        assert!(path.ends_with(".db"));
    }

    // AppState::new() меняет глобальную локаль и требует файла БД,
    // поэтому проверяется интеграционными тестами (tests/)
}
