use core::fmt;

use serde::Serialize;

use bazaar_core::{Entity, Money, position_by_id};

/// Cart line: item name, unit price captured when added, quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl CartLine {
    pub fn total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

impl Entity for CartLine {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}

/// A customer's cart.
///
/// # Invariants
/// - At most one line per item name.
/// - A line keeps the price of its first addition; later additions only bump
///   the quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `name`, merging with an existing line.
    pub fn add(&mut self, name: &str, unit_price: Money, quantity: u32) -> &CartLine {
        let idx = match position_by_id(&self.lines, name) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                line.quantity = line.quantity.saturating_add(quantity);
                idx
            }
            None => {
                self.lines.push(CartLine {
                    name: name.to_string(),
                    unit_price,
                    quantity,
                });
                self.lines.len() - 1
            }
        };
        &self.lines[idx]
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, name: &str) -> Option<&CartLine> {
        position_by_id(&self.lines, name).map(|i| &self.lines[i])
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::total).sum()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self
                .lines
                .iter()
                .map(|line| CartSummaryLine {
                    name: line.name.clone(),
                    unit_price: line.unit_price,
                    quantity: line.quantity,
                    total: line.total(),
                })
                .collect(),
            total: self.total(),
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummaryLine {
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub total: Money,
}

/// Priced view of a cart: lines, per-line totals and the grand total.
///
/// `Display` renders the console table, or a one-line notice when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<CartSummaryLine>,
    pub total: Money,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

const BORDER: &str = "+-------------------+------------+----------+------------+";

impl fmt::Display for CartSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Your cart is empty.");
        }

        writeln!(f, "{BORDER}")?;
        writeln!(
            f,
            "| {:<17} | {:<10} | {:<8} | {:<10} |",
            "Item Name", "Price", "Quantity", "Total"
        )?;
        writeln!(f, "{BORDER}")?;
        for line in &self.lines {
            let name: String = line.name.chars().take(17).collect();
            writeln!(
                f,
                "| {name:<17} | {:>10} | {:>8} | {:>10} |",
                line.unit_price, line.quantity, line.total
            )?;
        }
        writeln!(f, "{BORDER}")?;
        writeln!(f, "| {:<41} | {:>10} |", "Total", self.total)?;
        write!(f, "{BORDER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn price(cents: u64) -> Money {
        Money::from_cents(cents)
    }

    #[test]
    fn add_appends_new_line_with_price_snapshot() {
        let mut cart = Cart::new();
        let line = cart.add("Widget", price(999), 3);
        assert_eq!(line.quantity, 3);
        assert_eq!(line.unit_price, price(999));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn add_merges_and_keeps_first_price() {
        let mut cart = Cart::new();
        cart.add("Widget", price(999), 3);
        cart.add("Widget", price(1299), 2);

        assert_eq!(cart.lines().len(), 1);
        let line = cart.line("Widget").unwrap();
        assert_eq!(line.quantity, 5);
        assert_eq!(line.unit_price, price(999));
    }

    #[test]
    fn summary_totals_lines() {
        let mut cart = Cart::new();
        cart.add("Widget", price(999), 3);
        cart.add("Gadget", price(250), 2);

        let summary = cart.summary();
        assert_eq!(summary.lines[0].total, price(2997));
        assert_eq!(summary.lines[1].total, price(500));
        assert_eq!(summary.total, price(3497));
    }

    #[test]
    fn clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add("Widget", price(999), 3);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
    }

    #[test]
    fn empty_summary_renders_notice() {
        assert_eq!(Cart::new().summary().to_string(), "Your cart is empty.");
    }

    #[test]
    fn summary_renders_table_with_total() {
        let mut cart = Cart::new();
        cart.add("Widget", price(999), 3);

        let rendered = cart.summary().to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[3], "| Widget            |       9.99 |        3 |      29.97 |");
        assert_eq!(lines[5], "| Total                                     |      29.97 |");
        assert_eq!(lines.len(), 7);
        for line in &lines {
            assert_eq!(line.len(), BORDER.len());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: repeated additions of one name collapse into a single line
        /// whose quantity is the sum of the additions.
        #[test]
        fn repeated_adds_accumulate_into_one_line(
            quantities in prop::collection::vec(1u32..1_000u32, 1..20)
        ) {
            let mut cart = Cart::new();
            for q in &quantities {
                cart.add("Widget", price(999), *q);
            }

            prop_assert_eq!(cart.lines().len(), 1);
            let expected: u32 = quantities.iter().sum();
            prop_assert_eq!(cart.line("Widget").unwrap().quantity, expected);
        }
    }
}
