//! Inventory domain module.
//!
//! This crate contains business rules for stock on hand, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod inventory;
pub mod item;

pub use inventory::{Inventory, InventoryReport};
pub use item::{Item, validate_field};
