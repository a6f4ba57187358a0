//! The store: inventory, users and every operation over them.

use bazaar_auth::{User, UserRole};
use bazaar_core::{DomainError, DomainResult, Money, position_by_id};
use bazaar_inventory::{Inventory, InventoryReport, Item};
use bazaar_sales::{CartLine, CartSummary};

use crate::persistence::{PersistenceError, SnapshotStore, StoreSnapshot};

/// In-process store state.
///
/// # Invariants
/// - Item names and usernames are unique.
/// - Stock never goes below zero.
/// - A purchase moves stock into a cart entirely or not at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    inventory: Inventory,
    users: Vec<User>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from persisted state. Records whose key was already seen
    /// are dropped (first one wins).
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let mut store = Self::new();
        for item in snapshot.items {
            let name = item.name().to_string();
            if let Err(err) = store.inventory.add(item) {
                tracing::warn!(item = %name, error = %err, "dropping duplicate item record");
            }
        }
        for user in snapshot.users {
            let username = user.username().to_string();
            if let Err(err) = store.insert_user(user) {
                tracing::warn!(username = %username, error = %err, "dropping duplicate user record");
            }
        }
        store
    }

    /// Persistable view of the store. Carts are left out.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            items: self.inventory.iter().cloned().collect(),
            users: self
                .users
                .iter()
                .map(|user| {
                    let mut user = user.clone();
                    user.clear_cart();
                    user
                })
                .collect(),
        }
    }

    pub fn load<S: SnapshotStore + ?Sized>(backend: &S) -> Result<Self, PersistenceError> {
        Ok(Self::from_snapshot(backend.load()?))
    }

    pub fn save<S: SnapshotStore + ?Sized>(&self, backend: &S) -> Result<(), PersistenceError> {
        backend.save(&self.snapshot())
    }

    /// Save at shutdown: a failure is logged and reported as `false`, never
    /// raised.
    pub fn save_best_effort<S: SnapshotStore + ?Sized>(&self, backend: &S) -> bool {
        match self.save(backend) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "error saving store data");
                false
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Users
    // ─────────────────────────────────────────────────────────────────────────

    pub fn add_user(&mut self, username: &str, password: &str, role: UserRole) -> DomainResult<()> {
        self.insert_user(User::new(username, password, role)?)?;
        tracing::debug!(username, %role, "user registered");
        Ok(())
    }

    fn insert_user(&mut self, user: User) -> DomainResult<()> {
        if self.user(user.username()).is_some() {
            return Err(DomainError::duplicate(format!("user {}", user.username())));
        }
        self.users.push(user);
        Ok(())
    }

    /// Exact match on both username and password.
    pub fn login(&self, username: &str, password: &str) -> DomainResult<&User> {
        self.users
            .iter()
            .find(|u| u.username() == username && u.verify_password(password))
            .ok_or(DomainError::InvalidCredentials)
    }

    pub fn user(&self, username: &str) -> Option<&User> {
        position_by_id(&self.users, username).map(|i| &self.users[i])
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    fn user_index(&self, username: &str) -> DomainResult<usize> {
        position_by_id(&self.users, username)
            .ok_or_else(|| DomainError::not_found(format!("user {username}")))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inventory
    // ─────────────────────────────────────────────────────────────────────────

    pub fn add_item(&mut self, name: &str, price: Money, quantity: u32) -> DomainResult<()> {
        self.inventory.add(Item::new(name, price, quantity)?)?;
        tracing::debug!(item = name, %price, quantity, "item added");
        Ok(())
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn display_inventory(&self) -> InventoryReport {
        self.inventory.report()
    }

    /// Apply a signed stock change; returns the new quantity.
    pub fn update_inventory(&mut self, name: &str, delta: i64) -> DomainResult<u32> {
        let quantity = self.inventory.adjust(name, delta)?;
        tracing::debug!(item = name, delta, quantity, "inventory updated");
        Ok(quantity)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Purchasing
    // ─────────────────────────────────────────────────────────────────────────

    /// Move `quantity` units of `name` from stock into the user's cart at the
    /// current price. Returns the resulting cart line.
    pub fn buy_item(&mut self, username: &str, name: &str, quantity: u32) -> DomainResult<CartLine> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        let user_idx = self.user_index(username)?;
        let item = self
            .inventory
            .get_mut(name)
            .ok_or_else(|| DomainError::not_found(format!("item {name}")))?;

        if let Err(err) = item.withdraw(quantity) {
            tracing::warn!(username, item = name, quantity, error = %err, "purchase rejected");
            return Err(err);
        }
        let line = self.users[user_idx].add_to_cart(item, quantity).clone();

        tracing::debug!(username, item = name, quantity, "item added to cart");
        Ok(line)
    }

    pub fn view_cart(&self, username: &str) -> DomainResult<CartSummary> {
        let idx = self.user_index(username)?;
        Ok(self.users[idx].view_cart())
    }

    /// Summarise and empty the user's cart. Stock was already taken at
    /// purchase time, so nothing flows back to the inventory.
    pub fn checkout(&mut self, username: &str) -> DomainResult<CartSummary> {
        let idx = self.user_index(username)?;
        let user = &mut self.users[idx];
        if user.cart().is_empty() {
            return Err(DomainError::EmptyCart);
        }
        let summary = user.view_cart();
        user.clear_cart();

        tracing::info!(username, lines = summary.lines.len(), total = %summary.total, "checkout complete");
        Ok(summary)
    }
}
