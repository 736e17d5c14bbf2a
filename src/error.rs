//! Typed errors for the POS core.
//!
//! Cart operations never fail — invalid inputs are no-ops. Everything that can
//! fail is grouped here by boundary: checkout, the print bridge, the browser
//! print surface, and the sales history sink. Bridge errors are absorbed by
//! the dispatcher and converted into the HTML fallback path; they never reach
//! the caller directly.

use thiserror::Error;

/// Checkout-time rejections. The caller surfaces these to the user and takes
/// no further action; no invoice is created.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cannot checkout an empty cart")]
    EmptyCart,
}

/// Failures while talking to the native print bridge. All variants trigger
/// the browser fallback; the cause is logged for diagnostics only.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("print bridge is not available")]
    Unavailable,

    #[error("print bridge call timed out after {0} ms")]
    Timeout(u128),

    #[error("print bridge reported no printers")]
    NoPrinters,

    #[error("printer rejected the job: {0}")]
    Printer(String),
}

/// Failure of the browser-level fallback itself. This is the only print error
/// a caller ever sees; it maps to a generic "print failed" notice and leaves
/// the cart untouched so the user may retry.
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("browser print surface failed: {0}")]
    Surface(String),
}

/// Failures while appending to the sales history sink.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to serialize invoice: {0}")]
    Serialize(#[from] serde_json::Error),
}
