//! [`StoreEntity`] implementation for [`Category`].

use crate::error::CatalogError;
use crate::model::{Category, CategoryCode, CategoryCreate};
use store_actor::StoreEntity;

impl StoreEntity for Category {
    type Id = CategoryCode;
    type Create = CategoryCreate;
    type Context = ();
    type Error = CatalogError;
    const TABLE: &'static str = "category";

    fn assign_id(params: &CategoryCreate, _next: u32) -> CategoryCode {
        CategoryCode(params.code.clone())
    }

    fn from_create_params(id: CategoryCode, params: CategoryCreate) -> Result<Self, CatalogError> {
        Ok(Category::new(id.0, params.label)?)
    }
}
