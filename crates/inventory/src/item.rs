use bazaar_core::{DomainError, DomainResult, Entity, Money};

/// Stock-keeping record: name, unit price, quantity on hand.
///
/// # Invariants
/// - `name` is non-blank and carries no `,`, `\r` or `\n` (the data file has no
///   escaping).
/// - `quantity` never goes below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    price: Money,
    quantity: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Money, quantity: u32) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        validate_field("name", &name)?;
        Ok(Self {
            name,
            price,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Take `quantity` units out of stock, or leave stock untouched.
    pub fn withdraw(&mut self, quantity: u32) -> DomainResult<()> {
        if quantity > self.quantity {
            return Err(DomainError::InsufficientStock {
                name: self.name.clone(),
                requested: quantity,
                available: self.quantity,
            });
        }
        self.quantity -= quantity;
        Ok(())
    }

    /// Apply a signed stock delta and return the new quantity.
    ///
    /// A delta that would take stock below zero is rejected and nothing changes.
    pub fn adjust(&mut self, delta: i64) -> DomainResult<u32> {
        let new_stock = i64::from(self.quantity) + delta;
        if new_stock < 0 {
            return Err(DomainError::invariant("stock cannot go negative"));
        }
        self.quantity = u32::try_from(new_stock)
            .map_err(|_| DomainError::validation(format!("stock out of range: {new_stock}")))?;
        Ok(self.quantity)
    }
}

impl Entity for Item {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}

/// Reject values the comma-delimited data file cannot represent.
pub fn validate_field(field: &str, value: &str) -> DomainResult<()> {
    if value.contains([',', '\r', '\n']) {
        return Err(DomainError::validation(format!(
            "{field} cannot contain commas or line breaks"
        )));
    }
    Ok(())
}
