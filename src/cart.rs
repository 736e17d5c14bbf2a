//! Cart engine.
//!
//! A `Cart` is an explicitly owned value the session layer passes around; all
//! mutations go through the reducer-style methods below, which recompute the
//! aggregate totals before returning. Aggregates are never left stale — every
//! observable snapshot satisfies the invariants:
//!
//! - `subtotal = Σ line_subtotal`
//! - `tax = subtotal * TAX_RATE`
//! - `total = subtotal + tax`
//! - `item_count = Σ quantity`
//!
//! Invalid inputs (unknown product id, zero quantity) are no-ops, not errors.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// Flat sales tax rate applied to the cart subtotal.
pub const TAX_RATE: f64 = 0.10;

/// One product-and-quantity entry within a cart. The product is a frozen copy
/// taken at add time; lines are unique per product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    pub line_subtotal: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub lines: Vec<CartLine>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub item_count: u32,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `product`. If a line for the product already exists its
    /// quantity is incremented; otherwise a new line is appended.
    pub fn add_item(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => {
                line.quantity += 1;
                line.line_subtotal = line.product.unit_price * f64::from(line.quantity);
            }
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
                line_subtotal: product.unit_price,
            }),
        }
        self.recompute();
    }

    /// Set the quantity of an existing line. A zero quantity is a no-op —
    /// removal goes through [`Cart::remove_item`], never through this path.
    /// Unknown product ids are ignored.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
            line.line_subtotal = line.product.unit_price * f64::from(quantity);
            self.recompute();
        }
    }

    /// Drop the line for `product_id` entirely. Unknown ids are ignored.
    pub fn remove_item(&mut self, product_id: &str) {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        if self.lines.len() != before {
            self.recompute();
        }
    }

    /// Drop all lines and reset the aggregates to zero.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.subtotal = self.lines.iter().map(|l| l.line_subtotal).sum();
        self.tax = self.subtotal * TAX_RATE;
        self.total = self.subtotal + self.tax;
        self.item_count = self.lines.iter().map(|l| l.quantity).sum();
    }
}
