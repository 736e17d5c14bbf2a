//! Append-only sales history sink.
//!
//! After checkout the surrounding application records the built invoice; the
//! core only needs the `record(invoice)` shape. Entries are stored as
//! serialized JSON so the host can persist them wherever it likes. Reading
//! the list back beyond a count is out of scope.

use tracing::info;

use crate::error::HistoryError;
use crate::invoice::Invoice;

pub trait SalesHistory {
    fn record(&mut self, invoice: &Invoice) -> Result<(), HistoryError>;
}

/// In-memory append-only history, one JSON document per invoice.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<String>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl SalesHistory for MemoryHistory {
    fn record(&mut self, invoice: &Invoice) -> Result<(), HistoryError> {
        let entry = serde_json::to_string(invoice)?;
        self.entries.push(entry);
        info!(
            invoice = %invoice.display_number,
            transactions = self.entries.len(),
            "invoice recorded in sales history"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::sample_products;
    use crate::i18n::{currency_for, Language};

    fn invoice() -> Invoice {
        let products = sample_products();
        let mut cart = Cart::new();
        cart.add_item(&products[0]);
        Invoice::build(&cart, Language::En, currency_for(Language::En)).unwrap()
    }

    #[test]
    fn records_are_appended_in_order() {
        let mut history = MemoryHistory::new();
        let first = invoice();
        let second = invoice();
        history.record(&first).unwrap();
        history.record(&second).unwrap();

        assert_eq!(history.len(), 2);
        assert!(history.entries()[0].contains(&first.display_number));
        assert!(history.entries()[1].contains(&second.display_number));
    }

    #[test]
    fn entries_round_trip_as_json() {
        let mut history = MemoryHistory::new();
        let inv = invoice();
        history.record(&inv).unwrap();
        let parsed: Invoice = serde_json::from_str(&history.entries()[0]).unwrap();
        assert_eq!(parsed, inv);
    }
}
