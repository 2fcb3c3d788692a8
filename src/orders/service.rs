//! Order lifecycle engine
//!
//! Validates and creates orders, enforces status transitions, and applies
//! the role-based access rules. Claims arrive as an explicit
//! [`CurrentUser`] parameter on every operation; nothing here reads
//! ambient request state.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::auth::CurrentUser;
use crate::db::models::{LineItem, LineItemInput, NewOrder, Order, PlaceOrderRequest};
use crate::db::repository::OrderStore;
use crate::orders::{OrderStatus, policy};
use crate::utils::{AppError, AppResult};

/// Order lifecycle service
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Place a new order for the authenticated customer
    ///
    /// The owner is always the caller's subject; a caller-supplied owner is
    /// never trusted. Administrators may pre-set the initial status; an
    /// unrecognized admin-supplied status falls back to `Pending` rather
    /// than failing the request.
    pub async fn place_order(
        &self,
        user: &CurrentUser,
        payload: PlaceOrderRequest,
    ) -> AppResult<Order> {
        if payload.items.is_empty() {
            return Err(AppError::invalid_order("Order items are required"));
        }

        let items = normalize_items(payload.items);
        if items.is_empty() {
            return Err(AppError::invalid_order("Order items are invalid"));
        }

        let total_price = payload
            .total_price
            .and_then(Decimal::from_f64_retain)
            .filter(|total| *total >= Decimal::ZERO)
            .ok_or_else(|| AppError::invalid_order("Total price is invalid"))?;

        let status = match payload.status.as_deref() {
            Some(raw) if user.is_admin() => OrderStatus::parse(raw).unwrap_or_default(),
            _ => OrderStatus::default(),
        };

        let order = self
            .store
            .create(NewOrder {
                user_id: user.id.clone(),
                items,
                total_price,
                status,
            })
            .await?;

        tracing::info!(order_id = %order.id, user_id = %order.user_id, "Order placed");
        Ok(order)
    }

    /// All orders of one owner, newest first
    ///
    /// Customers may only query their own orders; administrators any.
    pub async fn list_user_orders(
        &self,
        user: &CurrentUser,
        owner_id: &str,
    ) -> AppResult<Vec<Order>> {
        if !policy::can_read_orders_of(user, owner_id) {
            return Err(AppError::forbidden("Access denied"));
        }

        Ok(self.store.find_by_owner(owner_id).await?)
    }

    /// Every order in the system, newest first (admin only)
    pub async fn list_all_orders(&self, user: &CurrentUser) -> AppResult<Vec<Order>> {
        if !policy::can_list_all(user) {
            return Err(AppError::forbidden("Admin access required"));
        }

        Ok(self.store.find_all().await?)
    }

    /// Set an order's status (admin only)
    ///
    /// The requested value is normalized against the closed status set and
    /// validated for membership only. Setting the status an order already
    /// has is an idempotent no-op: the unchanged order comes back without a
    /// write.
    pub async fn update_status(
        &self,
        user: &CurrentUser,
        order_id: &str,
        requested_status: &str,
    ) -> AppResult<Order> {
        if !policy::can_mutate_status(user) {
            return Err(AppError::forbidden("Admin access required"));
        }

        let status = OrderStatus::parse(requested_status)
            .ok_or_else(|| AppError::invalid_status(requested_status.trim()))?;

        let current = self
            .store
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;

        if current.status == status {
            return Ok(current);
        }

        let updated = self
            .store
            .update_status(order_id, status)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {} not found", order_id)))?;

        tracing::info!(order_id = %updated.id, status = %updated.status, "Order status updated");
        Ok(updated)
    }
}

/// Normalize submitted cart lines
///
/// Keeps exactly the entries with a catalog reference and a positive
/// quantity; everything else is dropped, never clamped.
fn normalize_items(items: Vec<LineItemInput>) -> Vec<LineItem> {
    items
        .into_iter()
        .filter_map(|item| {
            let menu_id = item.menu_id?;
            let quantity = u32::try_from(item.quantity.unwrap_or(0)).ok()?;
            (quantity > 0).then_some(LineItem { menu_id, quantity })
        })
        .collect()
}
