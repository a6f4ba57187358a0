//! Store user: identity, role and personal cart.

use bazaar_core::{DomainError, DomainResult, Entity};
use bazaar_inventory::{Item, validate_field};
use bazaar_sales::{Cart, CartLine, CartSummary};

use crate::UserRole;

/// A registered user.
///
/// # Invariants
/// - `username` is non-blank; neither it nor the password holds `,` or line
///   breaks.
/// - The cart is never persisted; it lives for the process only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    password: String,
    role: UserRole,
    cart: Cart,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: UserRole,
    ) -> DomainResult<Self> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() {
            return Err(DomainError::validation("username cannot be empty"));
        }
        validate_field("username", &username)?;
        validate_field("password", &password)?;
        Ok(Self {
            username,
            password,
            role,
            cart: Cart::new(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn is_owner(&self) -> bool {
        self.role.is_owner()
    }

    /// Plaintext, exact comparison.
    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Put `quantity` units of `item` in the cart at the item's current price.
    pub fn add_to_cart(&mut self, item: &Item, quantity: u32) -> &CartLine {
        self.cart.add(item.name(), item.price(), quantity)
    }

    pub fn view_cart(&self) -> CartSummary {
        self.cart.summary()
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }
}

impl Entity for User {
    type Id = str;

    fn id(&self) -> &str {
        &self.username
    }
}
