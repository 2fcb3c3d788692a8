//! Order Model
//!
//! Field names on the wire (`userId`, `items`, `menuId`, `totalPrice`,
//! `status`, `createdAt`) are part of the external contract and must not
//! change.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::orders::OrderStatus;

// =============================================================================
// Order
// =============================================================================

/// A reference to a menu catalog entry
///
/// Clients may submit either the raw catalog identifier or an expanded
/// catalog record. The lifecycle engine only ever looks at the identifier;
/// the display label is for the presentation boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CatalogRef {
    Id(String),
    Expanded {
        #[serde(rename = "_id")]
        id: String,
        name: String,
    },
}

impl CatalogRef {
    /// The catalog identifier, regardless of representation
    pub fn id(&self) -> &str {
        match self {
            CatalogRef::Id(id) => id,
            CatalogRef::Expanded { id, .. } => id,
        }
    }

    /// Display label, if the client supplied the expanded form
    pub fn label(&self) -> Option<&str> {
        match self {
            CatalogRef::Id(_) => None,
            CatalogRef::Expanded { name, .. } => Some(name),
        }
    }
}

/// One normalized order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub menu_id: CatalogRef,
    pub quantity: u32,
}

/// Persisted order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier, assigned at creation, immutable
    pub id: String,
    /// Owner (the customer who placed the order), immutable
    pub user_id: String,
    /// Normalized line items, never empty
    pub items: Vec<LineItem>,
    /// Non-negative total, supplied by the caller at creation
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    /// Preparation lifecycle status
    pub status: OrderStatus,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// API Request Types
// =============================================================================

/// One submitted cart line, before normalization
///
/// Both fields are optional on purpose: entries with a missing catalog
/// reference or a non-positive quantity are dropped, not rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInput {
    #[serde(default)]
    pub menu_id: Option<CatalogRef>,
    #[serde(default)]
    pub quantity: Option<i64>,
}

/// Place order payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub items: Vec<LineItemInput>,
    #[serde(default)]
    pub total_price: Option<f64>,
    /// Initial status; only honored for administrators
    #[serde(default)]
    pub status: Option<String>,
}

// =============================================================================
// Store DTO
// =============================================================================

/// A fully validated order, ready to persist
///
/// The store assigns `id` and `createdAt`.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: String,
    pub items: Vec<LineItem>,
    pub total_price: Decimal,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ref_accepts_raw_id() {
        let r: CatalogRef = serde_json::from_str(r#""m1""#).unwrap();
        assert_eq!(r.id(), "m1");
        assert_eq!(r.label(), None);
    }

    #[test]
    fn test_catalog_ref_accepts_expanded_record() {
        let r: CatalogRef =
            serde_json::from_str(r#"{"_id": "m2", "name": "Fried Rice"}"#).unwrap();
        assert_eq!(r.id(), "m2");
        assert_eq!(r.label(), Some("Fried Rice"));
    }

    #[test]
    fn test_order_wire_field_names() {
        let order = Order {
            id: "o1".to_string(),
            user_id: "u1".to_string(),
            items: vec![LineItem {
                menu_id: CatalogRef::Id("m1".to_string()),
                quantity: 2,
            }],
            total_price: Decimal::new(240, 0),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["items"][0]["menuId"], "m1");
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["totalPrice"], 240.0);
        assert_eq!(json["status"], "Pending");
        assert!(json["createdAt"].is_string());
    }
}
