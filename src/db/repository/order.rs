//! In-process order store
//!
//! `DashMap`-backed reference implementation of [`OrderStore`]. A shard
//! write lock is held for the whole read-modify-write in `update_status`,
//! which linearizes concurrent updates on the same order id while leaving
//! operations on other ids free to proceed.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use super::{OrderStore, StoreError, StoreResult};
use crate::db::models::{NewOrder, Order};
use crate::orders::OrderStatus;

/// In-memory order store
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    orders: DashMap<String, Order>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted orders
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn sorted_newest_first(mut orders: Vec<Order>) -> Vec<Order> {
        orders.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        orders
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn create(&self, order: NewOrder) -> StoreResult<Order> {
        let order = Order {
            id: Uuid::new_v4().to_string(),
            user_id: order.user_id,
            items: order.items,
            total_price: order.total_price,
            status: order.status,
            created_at: Utc::now(),
        };

        match self.orders.entry(order.id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(order.clone());
                Ok(order)
            }
            Entry::Occupied(_) => Err(StoreError::Duplicate(order.id)),
        }
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Order>> {
        Ok(self.orders.get(id).map(|entry| entry.clone()))
    }

    async fn find_by_owner(&self, owner_id: &str) -> StoreResult<Vec<Order>> {
        let orders = self
            .orders
            .iter()
            .filter(|entry| entry.user_id == owner_id)
            .map(|entry| entry.clone())
            .collect();
        Ok(Self::sorted_newest_first(orders))
    }

    async fn find_all(&self) -> StoreResult<Vec<Order>> {
        let orders = self.orders.iter().map(|entry| entry.clone()).collect();
        Ok(Self::sorted_newest_first(orders))
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> StoreResult<Option<Order>> {
        // get_mut holds the shard write lock across the mutation
        match self.orders.get_mut(id) {
            Some(mut entry) => {
                entry.status = status;
                Ok(Some(entry.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{CatalogRef, LineItem};
    use rust_decimal::Decimal;

    fn new_order(user_id: &str, menu_id: &str) -> NewOrder {
        NewOrder {
            user_id: user_id.to_string(),
            items: vec![LineItem {
                menu_id: CatalogRef::Id(menu_id.to_string()),
                quantity: 1,
            }],
            total_price: Decimal::new(100, 0),
            status: OrderStatus::Pending,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_identity() {
        let store = MemoryOrderStore::new();
        let a = store.create(new_order("u1", "m1")).await.unwrap();
        let b = store.create(new_order("u1", "m2")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id(&a.id).await.unwrap().unwrap().id, a.id);
    }

    #[tokio::test]
    async fn test_find_by_owner_filters_and_sorts_newest_first() {
        let store = MemoryOrderStore::new();
        let first = store.create(new_order("u1", "m1")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = store.create(new_order("u1", "m2")).await.unwrap();
        store.create(new_order("u2", "m3")).await.unwrap();

        let orders = store.find_by_owner("u1").await.unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, second.id);
        assert_eq!(orders[1].id, first.id);

        assert_eq!(store.find_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_status_missing_order() {
        let store = MemoryOrderStore::new();
        let updated = store
            .update_status("missing", OrderStatus::Preparing)
            .await
            .unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_update_status_persists() {
        let store = MemoryOrderStore::new();
        let order = store.create(new_order("u1", "m1")).await.unwrap();

        let updated = store
            .update_status(&order.id, OrderStatus::Preparing)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Preparing);

        let reloaded = store.find_by_id(&order.id).await.unwrap().unwrap();
        assert_eq!(reloaded.status, OrderStatus::Preparing);
        // Identity fields untouched
        assert_eq!(reloaded.user_id, order.user_id);
        assert_eq!(reloaded.created_at, order.created_at);
    }
}
