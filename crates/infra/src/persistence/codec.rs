//! Line format of the store data file.
//!
//! ```text
//! I,<name>,<price>,<quantity>
//! U,<username>,<password>,<1|0>
//! ```
//!
//! Fields are not escaped, which is why domain constructors refuse values that
//! contain commas or line breaks.

use thiserror::Error;

use bazaar_auth::{User, UserRole};
use bazaar_core::{DomainError, Money};
use bazaar_inventory::Item;

use super::StoreSnapshot;

const ITEM_TAG: &str = "I";
const USER_TAG: &str = "U";
const FIELDS_PER_RECORD: usize = 4;

/// One decoded line of the data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Item(Item),
    User(User),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unknown record tag {0:?}")]
    UnknownTag(String),

    #[error("expected 4 fields in {tag} record, found {found}")]
    FieldCount { tag: &'static str, found: usize },

    #[error("invalid quantity {0:?}")]
    Quantity(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub fn encode_item(item: &Item) -> String {
    format!(
        "{ITEM_TAG},{},{},{}",
        item.name(),
        item.price(),
        item.quantity()
    )
}

pub fn encode_user(user: &User) -> String {
    format!(
        "{USER_TAG},{},{},{}",
        user.username(),
        user.password(),
        user.role().as_flag()
    )
}

/// Render a full data file: items first, then users, one record per line.
pub fn encode_snapshot(snapshot: &StoreSnapshot) -> String {
    let mut out = String::new();
    for line in snapshot
        .items
        .iter()
        .map(encode_item)
        .chain(snapshot.users.iter().map(encode_user))
    {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn decode_line(line: &str) -> Result<Record, DecodeError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(',').collect();

    match fields[0] {
        ITEM_TAG => {
            let [_, name, price, quantity] = expect_fields(ITEM_TAG, &fields)?;
            let price: Money = price.parse()?;
            let quantity = decode_quantity(name, quantity)?;
            Ok(Record::Item(Item::new(name, price, quantity)?))
        }
        USER_TAG => {
            let [_, username, password, flag] = expect_fields(USER_TAG, &fields)?;
            let role: UserRole = flag.parse()?;
            Ok(Record::User(User::new(username, password, role)?))
        }
        other => Err(DecodeError::UnknownTag(other.to_string())),
    }
}

/// Older data files may hold negative stock; such records are kept at zero
/// rather than dropped.
fn decode_quantity(name: &str, raw: &str) -> Result<u32, DecodeError> {
    let quantity: i64 = raw
        .trim()
        .parse()
        .map_err(|_| DecodeError::Quantity(raw.to_string()))?;
    if quantity < 0 {
        tracing::warn!(item = name, quantity, "negative stock in data file; clamping to 0");
        return Ok(0);
    }
    u32::try_from(quantity).map_err(|_| DecodeError::Quantity(raw.to_string()))
}

fn expect_fields<'a>(
    tag: &'static str,
    fields: &[&'a str],
) -> Result<[&'a str; FIELDS_PER_RECORD], DecodeError> {
    <[&str; FIELDS_PER_RECORD]>::try_from(fields).map_err(|_| DecodeError::FieldCount {
        tag,
        found: fields.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, cents: u64, quantity: u32) -> Item {
        Item::new(name, Money::from_cents(cents), quantity).unwrap()
    }

    #[test]
    fn encodes_records() {
        assert_eq!(encode_item(&item("Widget", 999, 10)), "I,Widget,9.99,10");
        let owner = User::new("alice", "secret", UserRole::Owner).unwrap();
        assert_eq!(encode_user(&owner), "U,alice,secret,1");
        let customer = User::new("bob", "pw", UserRole::Customer).unwrap();
        assert_eq!(encode_user(&customer), "U,bob,pw,0");
    }

    #[test]
    fn snapshot_puts_items_before_users() {
        let snapshot = StoreSnapshot {
            items: vec![item("Widget", 999, 10), item("Gadget", 2500, 1)],
            users: vec![User::new("bob", "pw", UserRole::Customer).unwrap()],
        };
        assert_eq!(
            encode_snapshot(&snapshot),
            "I,Widget,9.99,10\nI,Gadget,25.00,1\nU,bob,pw,0\n"
        );
        assert_eq!(encode_snapshot(&StoreSnapshot::default()), "");
    }

    #[test]
    fn decodes_item_lines() {
        assert_eq!(decode_line("I,Widget,9.99,10").unwrap(), Record::Item(item("Widget", 999, 10)));
        // Written by a 6-significant-digit stream.
        assert_eq!(decode_line("I,Lamp,25,3\r").unwrap(), Record::Item(item("Lamp", 2500, 3)));
    }

    #[test]
    fn decodes_user_lines() {
        let Record::User(user) = decode_line("U,alice,secret,1").unwrap() else {
            panic!("expected user record");
        };
        assert_eq!(user.username(), "alice");
        assert_eq!(user.password(), "secret");
        assert!(user.is_owner());

        let Record::User(user) = decode_line("U,bob,,0").unwrap() else {
            panic!("expected user record");
        };
        assert_eq!(user.password(), "");
        assert!(!user.is_owner());
    }

    #[test]
    fn negative_quantity_is_clamped_to_zero() {
        assert_eq!(decode_line("I,Widget,9.99,-95").unwrap(), Record::Item(item("Widget", 999, 0)));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(decode_line("X,foo").unwrap_err(), DecodeError::UnknownTag("X".into()));
        assert_eq!(decode_line("").unwrap_err(), DecodeError::UnknownTag(String::new()));
        assert_eq!(
            decode_line("I,Widget,9.99").unwrap_err(),
            DecodeError::FieldCount { tag: "I", found: 3 }
        );
        assert_eq!(
            decode_line("I,Big, Bad,1.00,2").unwrap_err(),
            DecodeError::FieldCount { tag: "I", found: 5 }
        );
        assert_eq!(
            decode_line("I,Widget,9.99,many").unwrap_err(),
            DecodeError::Quantity("many".into())
        );
        assert_eq!(
            decode_line("I,Widget,9.99,4294967296").unwrap_err(),
            DecodeError::Quantity("4294967296".into())
        );
        assert!(matches!(
            decode_line("I,Widget,cheap,5").unwrap_err(),
            DecodeError::Domain(DomainError::Validation(_))
        ));
        assert!(matches!(
            decode_line("U,bob,pw,maybe").unwrap_err(),
            DecodeError::Domain(DomainError::Validation(_))
        ));
        assert!(matches!(
            decode_line("I, ,1.00,2").unwrap_err(),
            DecodeError::Domain(DomainError::Validation(_))
        ));
    }
}
