//! Ordered, name-keyed collection of stock items.

use core::fmt;

use serde::Serialize;

use bazaar_core::{DomainError, DomainResult, Money, position_by_id};

use crate::item::Item;

/// Inventory of the store, in insertion order.
///
/// # Invariants
/// - No two items share a name (exact, case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: Item) -> DomainResult<()> {
        if self.contains(item.name()) {
            return Err(DomainError::duplicate(format!("item {}", item.name())));
        }
        self.items.push(item);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        position_by_id(&self.items, name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        position_by_id(&self.items, name).map(|i| &self.items[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Item> {
        position_by_id(&self.items, name).map(move |i| &mut self.items[i])
    }

    /// Apply a signed stock delta to the named item; returns the new quantity.
    pub fn adjust(&mut self, name: &str, delta: i64) -> DomainResult<u32> {
        self.get_mut(name)
            .ok_or_else(|| DomainError::not_found(format!("item {name}")))?
            .adjust(delta)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only snapshot of every item, for display.
    pub fn report(&self) -> InventoryReport {
        InventoryReport {
            rows: self
                .items
                .iter()
                .map(|item| InventoryRow {
                    name: item.name().to_string(),
                    price: item.price(),
                    quantity: item.quantity(),
                })
                .collect(),
        }
    }
}

/// One line of an [`InventoryReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryRow {
    pub name: String,
    pub price: Money,
    pub quantity: u32,
}

/// Point-in-time listing of the inventory.
///
/// `Display` renders the bordered console table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryReport {
    pub rows: Vec<InventoryRow>,
}

const BORDER: &str = "+-------------------+------------+----------+";

impl fmt::Display for InventoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BORDER}")?;
        writeln!(f, "| {:<17} | {:<10} | {:<8} |", "Item Name", "Price", "Quantity")?;
        writeln!(f, "{BORDER}")?;
        for row in &self.rows {
            let name: String = row.name.chars().take(17).collect();
            writeln!(f, "| {name:<17} | {:>10} | {:>8} |", row.price, row.quantity)?;
        }
        write!(f, "{BORDER}")
    }
}
