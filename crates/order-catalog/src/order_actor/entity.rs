use crate::error::CatalogError;
use crate::model::{Order, OrderCreate, OrderId};
use store_actor::StoreEntity;

impl StoreEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Context = ();
    type Error = CatalogError;
    const TABLE: &'static str = "order";

    fn assign_id(_params: &OrderCreate, next: u32) -> OrderId {
        OrderId(next)
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, CatalogError> {
        Ok(Order::new(id, params.date))
    }
}
