//! Per-user session: `LoggedOut → LoggedIn { Owner | Customer } → LoggedOut`.
//!
//! Every store operation goes through a permission check against the role of
//! the logged-in user. Nothing here is persisted.

use bazaar_auth::{Permission, UserRole};
use bazaar_core::{DomainError, DomainResult, Money};
use bazaar_inventory::InventoryReport;
use bazaar_sales::{CartLine, CartSummary};

use crate::store::Store;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn { username: String, role: UserRole },
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticate against `store`. On failure the current state is kept.
    pub fn login(&mut self, store: &Store, username: &str, password: &str) -> DomainResult<UserRole> {
        let user = match store.login(username, password) {
            Ok(user) => user,
            Err(err) => {
                tracing::info!(username, "login failed");
                return Err(err);
            }
        };
        let role = user.role();
        *self = Session::LoggedIn {
            username: user.username().to_string(),
            role,
        };
        tracing::info!(username, %role, "logged in");
        Ok(role)
    }

    pub fn logout(&mut self) {
        if let Session::LoggedIn { username, .. } = self {
            tracing::info!(username = username.as_str(), "logged out");
        }
        *self = Session::LoggedOut;
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }

    pub fn current_user(&self) -> Option<&str> {
        match self {
            Session::LoggedIn { username, .. } => Some(username.as_str()),
            Session::LoggedOut => None,
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        match self {
            Session::LoggedIn { role, .. } => Some(*role),
            Session::LoggedOut => None,
        }
    }

    /// Username of the session if its role grants `permission`.
    pub fn authorize(&self, permission: Permission) -> DomainResult<&str> {
        match self {
            Session::LoggedIn { username, role } if role.permits(permission) => Ok(username.as_str()),
            _ => Err(DomainError::Unauthorized),
        }
    }

    pub fn view_inventory(&self, store: &Store) -> DomainResult<InventoryReport> {
        self.authorize(Permission::ViewInventory)?;
        Ok(store.display_inventory())
    }

    pub fn add_item(&self, store: &mut Store, name: &str, price: Money, quantity: u32) -> DomainResult<()> {
        self.authorize(Permission::ManageInventory)?;
        store.add_item(name, price, quantity)
    }

    pub fn update_inventory(&self, store: &mut Store, name: &str, delta: i64) -> DomainResult<u32> {
        self.authorize(Permission::ManageInventory)?;
        store.update_inventory(name, delta)
    }

    pub fn buy_item(&self, store: &mut Store, name: &str, quantity: u32) -> DomainResult<CartLine> {
        let username = self.authorize(Permission::Purchase)?;
        store.buy_item(username, name, quantity)
    }

    pub fn view_cart(&self, store: &Store) -> DomainResult<CartSummary> {
        let username = self.authorize(Permission::Purchase)?;
        store.view_cart(username)
    }

    pub fn checkout(&self, store: &mut Store) -> DomainResult<CartSummary> {
        let username = self.authorize(Permission::Purchase)?;
        store.checkout(username)
    }
}
