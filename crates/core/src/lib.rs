//! `bazaar-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no storage).

pub mod entity;
pub mod error;
pub mod money;
pub mod value_object;

pub use entity::{Entity, position_by_id};
pub use error::{DomainError, DomainResult};
pub use money::Money;
pub use value_object::ValueObject;
