//! Sales domain module: per-customer shopping carts.

pub mod cart;

pub use cart::{Cart, CartLine, CartSummary, CartSummaryLine};
