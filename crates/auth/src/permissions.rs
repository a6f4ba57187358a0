use serde::{Deserialize, Serialize};

/// Capability checked before a store operation runs on behalf of a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Browse the inventory listing.
    ViewInventory,
    /// Add items and change stock levels.
    ManageInventory,
    /// Buy items, view the cart and check out.
    Purchase,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewInventory => "inventory.view",
            Permission::ManageInventory => "inventory.manage",
            Permission::Purchase => "sales.purchase",
        }
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
