//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Natural key of the entity (e.g. an item name or a username).
    type Id: Eq + core::hash::Hash + core::fmt::Debug + ?Sized;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Linear scan for the entity whose identifier equals `id`.
///
/// Collections in this workspace are small, ordered `Vec`s; insertion order is
/// part of their contract (it is the order they are persisted in), so lookups
/// stay a scan rather than a hashed index.
pub fn position_by_id<E: Entity>(entities: &[E], id: &E::Id) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(String);

    impl Entity for Named {
        type Id = str;

        fn id(&self) -> &str {
            &self.0
        }
    }

    #[test]
    fn position_by_id_is_exact_and_case_sensitive() {
        let all = vec![Named("Widget".into()), Named("widget".into())];
        assert_eq!(position_by_id(&all, "widget"), Some(1));
        assert_eq!(position_by_id(&all, "Widget"), Some(0));
        assert_eq!(position_by_id(&all, "WIDGET"), None);
    }
}
