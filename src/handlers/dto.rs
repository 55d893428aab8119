use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::order::{Item, NewItem, NewOrder, Order};
use crate::domain::validation::{validate_order, ItemDraft, ValidationError};

// ── Requests ─────────────────────────────────────────────────────────────────
//
// Missing and `null` fields fall back to their zero value so that the
// validation rules, not the deserializer, decide what counts as absent.

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// RFC3339 timestamp, e.g. "2024-03-01T10:00:00Z"
    #[serde(default, deserialize_with = "null_as_default")]
    pub ordered_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<CreateItemRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: i64,
    #[serde(default, rename = "lineItemID")]
    pub line_item_id: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ordered_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub customer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<UpdateItemRequest>,
}

/// Item fields shared by create and update payloads, before validation.
struct RequestedItem {
    item_code: String,
    description: Option<String>,
    quantity: i64,
    line_item_id: Option<i32>,
}

fn validated_order(
    ordered_at: &str,
    customer_name: String,
    items: Vec<RequestedItem>,
) -> Result<NewOrder, ValidationError> {
    let ordered_at = {
        let drafts: Vec<ItemDraft> = items
            .iter()
            .map(|i| ItemDraft {
                item_code: &i.item_code,
                quantity: i.quantity,
            })
            .collect();
        validate_order(ordered_at, &customer_name, &drafts)?
    };

    Ok(NewOrder {
        ordered_at,
        customer_name,
        items: items
            .into_iter()
            .map(|i| NewItem {
                item_code: i.item_code,
                description: i.description.unwrap_or_default(),
                // range checked by validate_order
                quantity: i.quantity as i32,
                line_item_id: i.line_item_id,
            })
            .collect(),
    })
}

impl CreateOrderRequest {
    /// Validates the payload and maps it onto a `NewOrder`.
    pub fn into_new_order(self) -> Result<NewOrder, ValidationError> {
        let items = self
            .items
            .into_iter()
            .map(|i| RequestedItem {
                item_code: i.item_code,
                description: i.description,
                quantity: i.quantity,
                line_item_id: None,
            })
            .collect();
        validated_order(&self.ordered_at, self.customer_name, items)
    }
}

impl UpdateOrderRequest {
    /// Validates the payload and maps it onto a `NewOrder`, keeping each
    /// item's `lineItemID`. The target order id comes from the path.
    pub fn into_new_order(self) -> Result<NewOrder, ValidationError> {
        let items = self
            .items
            .into_iter()
            .map(|i| RequestedItem {
                item_code: i.item_code,
                description: i.description,
                quantity: i.quantity,
                line_item_id: i.line_item_id,
            })
            .collect();
        validated_order(&self.ordered_at, self.customer_name, items)
    }
}

// ── Responses ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub item_code: String,
    pub description: String,
    pub quantity: i32,
    #[serde(rename = "lineItemID", skip_serializing_if = "Option::is_none")]
    pub line_item_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub ordered_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    pub customer_name: String,
    #[serde(rename = "orderID")]
    pub order_id: i32,
    pub items: Vec<ItemResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListOrdersResponse {
    pub orders: Vec<OrderResponse>,
    pub count: usize,
}

/// Acknowledges a create or delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderIdResponse {
    pub success: bool,
    pub order_id: i32,
}

pub fn format_timestamp(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        ItemResponse {
            item_code: item.item_code.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            line_item_id: item.line_item_id.filter(|id| *id != 0),
        }
    }
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        OrderResponse {
            ordered_at: format_timestamp(&order.ordered_at),
            updated_at: None,
            customer_name: order.customer_name.clone(),
            order_id: order.id,
            items: order.items.iter().map(ItemResponse::from).collect(),
        }
    }
}

impl OrderResponse {
    /// Response shape used after an update, which also reports `updatedAt`.
    pub fn updated(order: &Order) -> Self {
        OrderResponse {
            updated_at: Some(format_timestamp(&order.updated_at)),
            ..OrderResponse::from(order)
        }
    }
}
