// ==========================================
// Учётная система БД мебельной компании - импорт справочников
// ==========================================
// Назначение: загрузка пяти файлов импорта в базу данных.
// Колонки соответствуют исходным книгам импорта:
// - Material_type_import:   «Тип материала», «Процент потерь сырья»
// - Product_type_import:    «Тип продукции», «Коэффициент типа продукции»
// - Workshops_import:       «Название цеха», «Тип цеха»,
//                           «Количество человек для производства»
// - Products_import:        «Наименование продукции», «Артикул»,
//                           «Тип продукции», «Основной материал»,
//                           «Минимальная стоимость для партнера»
// - Product_workshops_import: «Наименование продукции», «Название цеха»,
//                           «Время изготовления, ч»
// Ошибочные строки попадают в отчёт и не прерывают импорт.
// ==========================================

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::importer::error::ImportError;
use crate::importer::file_parser::parse_records;
use crate::repository::material_type_repo::MaterialTypeRepository;
use crate::repository::product_repo::{NewProduct, ProductRepository};
use crate::repository::product_type_repo::ProductTypeRepository;
use crate::repository::workshop_repo::{ProductWorkshopRepository, WorkshopRepository};

// ==========================================
// ImportReport - отчёт об импорте
// ==========================================

/// Отчёт об импорте одного файла
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    /// Идентификатор партии импорта
    pub batch_id: String,
    /// Целевая таблица
    pub table: String,
    /// Время запуска импорта
    pub started_at: String,
    /// Загружено строк
    pub imported: usize,
    /// Пропущено строк (дубликаты, ошибки полей)
    pub skipped: usize,
    /// Построчные ошибки
    pub errors: Vec<String>,
}

impl ImportReport {
    fn new(table: &str) -> Self {
        Self {
            batch_id: Uuid::new_v4().to_string(),
            table: table.to_string(),
            started_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            imported: 0,
            skipped: 0,
            errors: Vec::new(),
        }
    }

    fn row_error(&mut self, row_no: usize, message: String) {
        self.skipped += 1;
        self.errors.push(format!("строка {}: {}", row_no, message));
    }
}

type RawRecord = HashMap<String, String>;

fn require_field(record: &RawRecord, column: &str) -> Result<String, String> {
    match record.get(column) {
        Some(v) if !v.is_empty() => Ok(v.clone()),
        _ => Err(format!("отсутствует значение колонки «{}»", column)),
    }
}

fn require_f64(record: &RawRecord, column: &str) -> Result<f64, String> {
    let raw = require_field(record, column)?;
    // в выгрузках дробная часть бывает отделена запятой
    raw.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| format!("колонка «{}»: «{}» не является числом", column, raw))
}

fn require_i64(record: &RawRecord, column: &str) -> Result<i64, String> {
    let raw = require_field(record, column)?;
    // Excel отдаёт целые как "12.0"
    raw.replace(',', ".")
        .parse::<f64>()
        .map(|v| v as i64)
        .map_err(|_| format!("колонка «{}»: «{}» не является числом", column, raw))
}

// ==========================================
// ReferenceDataImporter - импортёр справочников
// ==========================================

pub struct ReferenceDataImporter {
    product_type_repo: Arc<ProductTypeRepository>,
    material_type_repo: Arc<MaterialTypeRepository>,
    workshop_repo: Arc<WorkshopRepository>,
    product_repo: Arc<ProductRepository>,
    product_workshop_repo: Arc<ProductWorkshopRepository>,
}

impl ReferenceDataImporter {
    pub fn new(
        product_type_repo: Arc<ProductTypeRepository>,
        material_type_repo: Arc<MaterialTypeRepository>,
        workshop_repo: Arc<WorkshopRepository>,
        product_repo: Arc<ProductRepository>,
        product_workshop_repo: Arc<ProductWorkshopRepository>,
    ) -> Self {
        Self {
            product_type_repo,
            material_type_repo,
            workshop_repo,
            product_repo,
            product_workshop_repo,
        }
    }

    /// Импорт типов материалов
    pub fn import_material_types(&self, path: &Path) -> Result<ImportReport, ImportError> {
        let records = parse_records(path)?;
        let mut report = ImportReport::new("Material_types");

        for (idx, record) in records.iter().enumerate() {
            let row_no = idx + 2; // первая строка файла - заголовок
            let parsed = (|| -> Result<(String, f64), String> {
                let name = require_field(record, "Тип материала")?;
                let waste = require_f64(record, "Процент потерь сырья")?;
                Ok((name, waste))
            })();

            match parsed {
                Ok((name, waste)) => match self.material_type_repo.upsert(&name, waste) {
                    Ok(_) => report.imported += 1,
                    Err(e) => report.row_error(row_no, e.to_string()),
                },
                Err(msg) => report.row_error(row_no, msg),
            }
        }

        self.log_report(&report);
        Ok(report)
    }

    /// Импорт типов продукции
    pub fn import_product_types(&self, path: &Path) -> Result<ImportReport, ImportError> {
        let records = parse_records(path)?;
        let mut report = ImportReport::new("Product_types");

        for (idx, record) in records.iter().enumerate() {
            let row_no = idx + 2;
            let parsed = (|| -> Result<(String, f64), String> {
                let name = require_field(record, "Тип продукции")?;
                let coefficient = require_f64(record, "Коэффициент типа продукции")?;
                Ok((name, coefficient))
            })();

            match parsed {
                Ok((name, coefficient)) => {
                    match self.product_type_repo.upsert(&name, coefficient) {
                        Ok(_) => report.imported += 1,
                        Err(e) => report.row_error(row_no, e.to_string()),
                    }
                }
                Err(msg) => report.row_error(row_no, msg),
            }
        }

        self.log_report(&report);
        Ok(report)
    }

    /// Импорт цехов
    pub fn import_workshops(&self, path: &Path) -> Result<ImportReport, ImportError> {
        let records = parse_records(path)?;
        let mut report = ImportReport::new("Workshops");

        for (idx, record) in records.iter().enumerate() {
            let row_no = idx + 2;
            let parsed = (|| -> Result<(String, String, i64), String> {
                let name = require_field(record, "Название цеха")?;
                let workshop_type = require_field(record, "Тип цеха")?;
                let staff = require_i64(record, "Количество человек для производства")?;
                Ok((name, workshop_type, staff))
            })();

            match parsed {
                Ok((name, workshop_type, staff)) => {
                    match self.workshop_repo.upsert(&name, &workshop_type, staff) {
                        Ok(_) => report.imported += 1,
                        Err(e) => report.row_error(row_no, e.to_string()),
                    }
                }
                Err(msg) => report.row_error(row_no, msg),
            }
        }

        self.log_report(&report);
        Ok(report)
    }

    /// Импорт продукции
    ///
    /// Тип продукции и основной материал разрешаются по названию,
    /// продукция с уже существующим артикулом пропускается.
    pub fn import_products(&self, path: &Path) -> Result<ImportReport, ImportError> {
        let records = parse_records(path)?;
        let mut report = ImportReport::new("Products");

        for (idx, record) in records.iter().enumerate() {
            let row_no = idx + 2;
            let parsed = (|| -> Result<NewProduct, String> {
                let name = require_field(record, "Наименование продукции")?;
                let article = require_field(record, "Артикул")?;
                let type_name = require_field(record, "Тип продукции")?;
                let material_name = require_field(record, "Основной материал")?;
                let price = require_f64(record, "Минимальная стоимость для партнера")?;

                let product_type = self
                    .product_type_repo
                    .find_by_name(&type_name)
                    .map_err(|e| e.to_string())?
                    .ok_or_else(|| format!("неизвестный тип продукции «{}»", type_name))?;

                let material_type = self
                    .material_type_repo
                    .find_by_name(&material_name)
                    .map_err(|e| e.to_string())?
                    .ok_or_else(|| format!("неизвестный материал «{}»", material_name))?;

                Ok(NewProduct {
                    product_name: name,
                    article_number: article,
                    product_type_id: product_type.product_type_id,
                    material_type_id: material_type.material_type_id,
                    min_partner_price: price,
                })
            })();

            match parsed {
                Ok(new_product) => match self.product_repo.insert(&new_product) {
                    Ok(_) => report.imported += 1,
                    Err(e) => report.row_error(row_no, e.to_string()),
                },
                Err(msg) => report.row_error(row_no, msg),
            }
        }

        self.log_report(&report);
        Ok(report)
    }

    /// Импорт связей продукции с цехами
    ///
    /// Продукция и цех разрешаются по названию.
    pub fn import_product_workshops(&self, path: &Path) -> Result<ImportReport, ImportError> {
        let records = parse_records(path)?;
        let mut report = ImportReport::new("Product_workshops");

        for (idx, record) in records.iter().enumerate() {
            let row_no = idx + 2;
            let parsed = (|| -> Result<(i64, i64, f64), String> {
                let product_name = require_field(record, "Наименование продукции")?;
                let workshop_name = require_field(record, "Название цеха")?;
                let hours = require_f64(record, "Время изготовления, ч")?;

                let product = self
                    .product_repo
                    .find_by_name(&product_name)
                    .map_err(|e| e.to_string())?
                    .ok_or_else(|| format!("неизвестная продукция «{}»", product_name))?;

                let workshop = self
                    .workshop_repo
                    .find_by_name(&workshop_name)
                    .map_err(|e| e.to_string())?
                    .ok_or_else(|| format!("неизвестный цех «{}»", workshop_name))?;

                Ok((product.product_id, workshop.workshop_id, hours))
            })();

            match parsed {
                Ok((product_id, workshop_id, hours)) => {
                    match self
                        .product_workshop_repo
                        .upsert(product_id, workshop_id, hours)
                    {
                        Ok(()) => report.imported += 1,
                        Err(e) => report.row_error(row_no, e.to_string()),
                    }
                }
                Err(msg) => report.row_error(row_no, msg),
            }
        }

        self.log_report(&report);
        Ok(report)
    }

    fn log_report(&self, report: &ImportReport) {
        if report.errors.is_empty() {
            info!(
                table = %report.table,
                imported = report.imported,
                "импорт завершён"
            );
        } else {
            warn!(
                table = %report.table,
                imported = report.imported,
                skipped = report.skipped,
                "импорт завершён с ошибками"
            );
        }
    }
}
