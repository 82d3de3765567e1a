// ==========================================
// Учётная система БД мебельной компании - API продукции
// ==========================================
// Назначение: просмотр, поиск и редактирование продукции,
// выдача справочников для форм добавления
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::product::{Product, ProductListItem};
use crate::domain::reference::{MaterialType, ProductType};
use crate::i18n::t;
use crate::repository::material_type_repo::MaterialTypeRepository;
use crate::repository::product_repo::{NewProduct, ProductRepository, ProductUpdate};
use crate::repository::product_type_repo::ProductTypeRepository;

// ==========================================
// DTO
// ==========================================

/// Запрос добавления продукции (форма добавления)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductRequest {
    pub name: String,
    pub article: String,
    pub product_type_id: i64,
    pub material_type_id: i64,
    pub price: f64,
}

/// Запрос редактирования продукции (форма редактирования)
///
/// Форма меняет только наименование, цену и доступность.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdateRequest {
    pub name: String,
    pub price: f64,
    pub is_available: bool,
}

// ==========================================
// ProductApi - API продукции
// ==========================================

pub struct ProductApi {
    product_repo: Arc<ProductRepository>,
    product_type_repo: Arc<ProductTypeRepository>,
    material_type_repo: Arc<MaterialTypeRepository>,
}

impl ProductApi {
    pub fn new(
        product_repo: Arc<ProductRepository>,
        product_type_repo: Arc<ProductTypeRepository>,
        material_type_repo: Arc<MaterialTypeRepository>,
    ) -> Self {
        Self {
            product_repo,
            product_type_repo,
            material_type_repo,
        }
    }

    // ==========================================
    // Запросы
    // ==========================================

    /// Список продукции, при наличии строки поиска - фильтрация
    /// по подстроке наименования или артикула
    pub fn list_products(&self, search: Option<&str>) -> ApiResult<Vec<ProductListItem>> {
        let items = match search {
            Some(term) if !term.trim().is_empty() => {
                self.product_repo.search_joined(term.trim())?
            }
            _ => self.product_repo.list_joined()?,
        };
        Ok(items)
    }

    /// Продукция по идентификатору
    pub fn get_product(&self, product_id: i64) -> ApiResult<Option<Product>> {
        Ok(self.product_repo.find_by_id(product_id)?)
    }

    /// Справочник типов продукции (для формы добавления)
    pub fn list_product_types(&self) -> ApiResult<Vec<ProductType>> {
        Ok(self.product_type_repo.list_all()?)
    }

    /// Справочник типов материалов (для формы добавления)
    pub fn list_material_types(&self) -> ApiResult<Vec<MaterialType>> {
        Ok(self.material_type_repo.list_all()?)
    }

    // ==========================================
    // Изменения
    // ==========================================

    /// Добавить продукцию
    ///
    /// # Возврат
    /// Идентификатор новой записи
    pub fn create_product(&self, request: &NewProductRequest) -> ApiResult<i64> {
        if request.name.trim().is_empty() {
            return Err(ApiError::InvalidInput(t("product.name_empty")));
        }
        if request.article.trim().is_empty() {
            return Err(ApiError::InvalidInput(t("product.article_empty")));
        }
        if request.price < 0.0 {
            return Err(ApiError::InvalidInput(t("product.price_negative")));
        }

        let id = self.product_repo.insert(&NewProduct {
            product_name: request.name.trim().to_string(),
            article_number: request.article.trim().to_string(),
            product_type_id: request.product_type_id,
            material_type_id: request.material_type_id,
            min_partner_price: request.price,
        })?;

        info!(product_id = id, name = %request.name, "продукция добавлена");
        Ok(id)
    }

    /// Изменить продукцию (наименование, цена, доступность)
    pub fn update_product(
        &self,
        product_id: i64,
        request: &ProductUpdateRequest,
    ) -> ApiResult<()> {
        if request.name.trim().is_empty() {
            return Err(ApiError::InvalidInput(t("product.name_empty")));
        }
        if request.price < 0.0 {
            return Err(ApiError::InvalidInput(t("product.price_negative")));
        }

        let affected = self.product_repo.update(
            product_id,
            &ProductUpdate {
                product_name: request.name.trim().to_string(),
                min_partner_price: request.price,
                is_available: request.is_available,
            },
        )?;

        if affected == 0 {
            return Err(ApiError::NotFound(t("product.not_found")));
        }

        info!(product_id, "продукция изменена");
        Ok(())
    }

    /// Удалить продукцию (связи с цехами удаляются каскадно)
    pub fn delete_product(&self, product_id: i64) -> ApiResult<()> {
        let affected = self.product_repo.delete(product_id)?;
        if affected == 0 {
            return Err(ApiError::NotFound(t("product.not_found")));
        }

        info!(product_id, "продукция удалена");
        Ok(())
    }
}
