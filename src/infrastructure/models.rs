use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::order::{Item, Order};
use crate::schema::{items, orders};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i32,
    pub ordered_at: DateTime<Utc>,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow<'a> {
    pub ordered_at: DateTime<Utc>,
    pub customer_name: &'a str,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = orders)]
pub struct OrderChangeset<'a> {
    pub ordered_at: DateTime<Utc>,
    pub customer_name: &'a str,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = items)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ItemRow {
    pub id: i32,
    pub order_id: i32,
    pub item_code: String,
    pub description: String,
    pub quantity: i32,
    pub line_item_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = items)]
pub struct NewItemRow<'a> {
    pub order_id: i32,
    pub item_code: &'a str,
    pub description: &'a str,
    pub quantity: i32,
    pub line_item_id: Option<i32>,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            order_id: row.order_id,
            item_code: row.item_code,
            description: row.description,
            quantity: row.quantity,
            line_item_id: row.line_item_id,
        }
    }
}

impl OrderRow {
    pub fn into_order(self, items: Vec<ItemRow>) -> Order {
        Order {
            id: self.id,
            ordered_at: self.ordered_at,
            customer_name: self.customer_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
            items: items.into_iter().map(Item::from).collect(),
        }
    }
}
