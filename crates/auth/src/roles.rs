use core::str::FromStr;

use serde::{Deserialize, Serialize};

use bazaar_core::DomainError;

use crate::Permission;

/// Role of a store user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Manages the inventory.
    Owner,
    /// Browses, buys and checks out.
    #[default]
    Customer,
}

impl UserRole {
    pub fn is_owner(self) -> bool {
        matches!(self, UserRole::Owner)
    }

    pub fn permits(self, permission: Permission) -> bool {
        match (self, permission) {
            (_, Permission::ViewInventory) => true,
            (UserRole::Owner, Permission::ManageInventory) => true,
            (UserRole::Customer, Permission::Purchase) => true,
            _ => false,
        }
    }

    /// Role picked at sign-up: `O`/`o` registers an owner, anything else a
    /// customer.
    pub fn from_signup_choice(choice: char) -> Self {
        if choice.eq_ignore_ascii_case(&'o') {
            UserRole::Owner
        } else {
            UserRole::Customer
        }
    }

    /// Owner flag as written to the data file.
    pub fn as_flag(self) -> &'static str {
        if self.is_owner() { "1" } else { "0" }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    /// Parses the persisted owner flag (`1`/`0`, `true`/`false`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "true" => Ok(UserRole::Owner),
            "0" | "false" => Ok(UserRole::Customer),
            other => Err(DomainError::validation(format!("invalid owner flag: {other}"))),
        }
    }
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UserRole::Owner => write!(f, "Owner"),
            UserRole::Customer => write!(f, "Customer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_manages_customer_purchases() {
        assert!(UserRole::Owner.permits(Permission::ViewInventory));
        assert!(UserRole::Owner.permits(Permission::ManageInventory));
        assert!(!UserRole::Owner.permits(Permission::Purchase));

        assert!(UserRole::Customer.permits(Permission::ViewInventory));
        assert!(UserRole::Customer.permits(Permission::Purchase));
        assert!(!UserRole::Customer.permits(Permission::ManageInventory));
    }

    #[test]
    fn signup_choice() {
        assert_eq!(UserRole::from_signup_choice('O'), UserRole::Owner);
        assert_eq!(UserRole::from_signup_choice('o'), UserRole::Owner);
        assert_eq!(UserRole::from_signup_choice('C'), UserRole::Customer);
        assert_eq!(UserRole::from_signup_choice('x'), UserRole::Customer);
    }

    #[test]
    fn flag_parsing() {
        assert_eq!("1".parse::<UserRole>().unwrap(), UserRole::Owner);
        assert_eq!("true".parse::<UserRole>().unwrap(), UserRole::Owner);
        assert_eq!("0".parse::<UserRole>().unwrap(), UserRole::Customer);
        assert_eq!("false".parse::<UserRole>().unwrap(), UserRole::Customer);
        assert!("yes".parse::<UserRole>().is_err());
        assert_eq!(UserRole::Owner.as_flag(), "1");
        assert_eq!(UserRole::Customer.as_flag(), "0");
    }
}
