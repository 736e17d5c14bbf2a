//! Modern POS core.
//!
//! Bilingual (English/Arabic) point-of-sale backbone: a static product
//! catalog, a cart engine with atomic total recomputation, an immutable
//! invoice snapshot built at checkout, a deterministic receipt renderer
//! (ESC/POS bytes for thermal printers, self-contained HTML for the browser
//! fallback), and a print dispatcher that prefers an optional native print
//! bridge and always completes. UI rendering, theme/language toggles, and
//! durable storage are the host application's concern.
//!
//! Typical flow:
//!
//! ```rust
//! use modern_pos::{catalog, Cart, Invoice, Language};
//!
//! let products = catalog::sample_products();
//! let mut cart = Cart::new();
//! cart.add_item(&products[0]);
//! cart.add_item(&products[0]);
//!
//! let currency = modern_pos::i18n::currency_for(Language::En);
//! let invoice = Invoice::build(&cart, Language::En, currency).unwrap();
//! assert_eq!(invoice.lines[0].quantity, 2);
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod bridge;
pub mod cart;
pub mod catalog;
pub mod dispatch;
pub mod error;
pub mod escpos;
pub mod history;
pub mod i18n;
pub mod invoice;
pub mod receipt;

pub use bridge::{NullBridge, PrintBridge};
pub use cart::{Cart, CartLine, TAX_RATE};
pub use catalog::Product;
pub use dispatch::{BrowserPrintSurface, PrintConfig, PrintDispatcher, PrintOutcome};
pub use error::{BridgeError, CheckoutError, HistoryError, PrintError};
pub use history::{MemoryHistory, SalesHistory};
pub use i18n::{Currency, Language};
pub use invoice::Invoice;

/// Initialize structured logging for a host binary.
///
/// Honors `RUST_LOG`, defaulting to `info` with debug output for this crate.
/// Call once at startup; library code only emits `tracing` events.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,modern_pos=debug"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
