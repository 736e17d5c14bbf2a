//! Invoice builder.
//!
//! An `Invoice` is an immutable snapshot of a cart taken at checkout. Building
//! one deep-copies the cart's lines and totals, so later cart mutations never
//! affect an already-built invoice. Aside from reading the clock and the
//! random source the builder is pure; it performs no I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::{Cart, CartLine};
use crate::error::CheckoutError;
use crate::i18n::{Currency, Language};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub display_number: String,
    pub issued_at: DateTime<Utc>,
    pub lines: Vec<CartLine>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub language: Language,
    pub currency: Currency,
}

impl Invoice {
    /// Snapshot `cart` into a new invoice.
    ///
    /// Refuses an empty cart — the caller surfaces this as "cannot checkout
    /// an empty cart". The `id` and `display_number` are two independently
    /// generated unique tokens; uniqueness only needs to hold within a
    /// session.
    pub fn build(cart: &Cart, language: Language, currency: Currency) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(Invoice {
            id: Uuid::new_v4().to_string(),
            display_number: display_number(),
            issued_at: Utc::now(),
            lines: cart.lines.clone(),
            subtotal: cart.subtotal,
            tax: cart.tax,
            total: cart.total,
            language,
            currency,
        })
    }
}

/// Human-readable invoice token: `INV-<base36 millis>-<random suffix>`.
fn display_number() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(6).collect();
    format!("INV-{}-{}", to_base36(millis), suffix).to_uppercase()
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    out.iter().rev().collect()
}
