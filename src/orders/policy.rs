//! Access policy
//!
//! Pure capability predicates over `(user, owner)`. No hidden state: every
//! decision is a function of the verified claims and the order's owner id.

use crate::auth::CurrentUser;

/// May this user read the orders of `owner_id`?
///
/// Administrators read everything; customers read only their own.
pub fn can_read_orders_of(user: &CurrentUser, owner_id: &str) -> bool {
    user.is_admin() || user.id == owner_id
}

/// May this user change an order's status?
pub fn can_mutate_status(user: &CurrentUser) -> bool {
    user.is_admin()
}

/// May this user list every order in the system?
pub fn can_list_all(user: &CurrentUser) -> bool {
    user.is_admin()
}
