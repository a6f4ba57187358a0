//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two values with the same attributes are
/// equal. They are immutable; "changing" one means building a new value.
///
/// - **Value Object**: `Money(999)` equals any other `Money(999)`
/// - **Entity**: an `Item` named `"Widget"` is the same item whatever its stock
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
