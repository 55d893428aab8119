use super::errors::DomainError;
use super::order::{ListResult, NewOrder, Order};

pub trait OrderRepository: Send + Sync + 'static {
    fn list(&self) -> Result<ListResult, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<Order>, DomainError>;
    fn create(&self, order: NewOrder) -> Result<i32, DomainError>;
    /// Replaces the order's fields and its whole item set.
    /// Fails with `DomainError::NotFound` when no live order has this id.
    fn replace(&self, id: i32, order: NewOrder) -> Result<Order, DomainError>;
    /// Soft-deletes the order and its items. Returns `false` when no live order matched.
    fn soft_delete(&self, id: i32) -> Result<bool, DomainError>;
}

/// Repository handle shared through the actix app data.
pub type DynOrderRepository = Box<dyn OrderRepository>;

impl<R: OrderRepository + ?Sized> OrderRepository for Box<R> {
    fn list(&self) -> Result<ListResult, DomainError> {
        (**self).list()
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Order>, DomainError> {
        (**self).find_by_id(id)
    }

    fn create(&self, order: NewOrder) -> Result<i32, DomainError> {
        (**self).create(order)
    }

    fn replace(&self, id: i32, order: NewOrder) -> Result<Order, DomainError> {
        (**self).replace(id, order)
    }

    fn soft_delete(&self, id: i32) -> Result<bool, DomainError> {
        (**self).soft_delete(id)
    }
}
