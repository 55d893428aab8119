use crate::domain::errors::DomainError;
use crate::domain::order::{ListResult, NewOrder, Order};
use crate::domain::ports::{DynOrderRepository, OrderRepository};

/// The service as registered in the actix app data.
pub type AppOrderService = OrderService<DynOrderRepository>;

pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_orders(&self) -> Result<ListResult, DomainError> {
        self.repo.list()
    }

    pub fn get_order(&self, id: i32) -> Result<Order, DomainError> {
        self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)
    }

    pub fn create_order(&self, order: NewOrder) -> Result<i32, DomainError> {
        self.repo.create(order)
    }

    pub fn update_order(&self, id: i32, order: NewOrder) -> Result<Order, DomainError> {
        self.repo.replace(id, order)
    }

    /// Returns the id of the deleted order.
    pub fn delete_order(&self, id: i32) -> Result<i32, DomainError> {
        if self.repo.soft_delete(id)? {
            Ok(id)
        } else {
            Err(DomainError::NotFound)
        }
    }
}
