use chrono::{DateTime, Utc};

/// A single line of an order as supplied by a client, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub item_code: String,
    pub description: String,
    pub quantity: i32,
    pub line_item_id: Option<i32>,
}

/// Write-side input for creating an order or replacing its contents.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub ordered_at: DateTime<Utc>,
    pub customer_name: String,
    pub items: Vec<NewItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,
    pub order_id: i32,
    pub item_code: String,
    pub description: String,
    pub quantity: i32,
    pub line_item_id: Option<i32>,
}

/// An order together with the items it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub ordered_at: DateTime<Utc>,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone)]
pub struct ListResult {
    pub orders: Vec<Order>,
    pub count: usize,
}
