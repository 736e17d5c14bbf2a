//! Print-bridge capability interface.
//!
//! The native bridge is an optional collaborator: a local service that owns
//! the physical thermal printer. The dispatcher only ever talks to it through
//! this trait, so a real websocket adapter, a test double, or [`NullBridge`]
//! (no bridge installed) are interchangeable.

use async_trait::async_trait;

use crate::error::BridgeError;

#[async_trait]
pub trait PrintBridge: Send + Sync {
    /// Capability check. `false` means the bridge is not installed or not
    /// reachable; the dispatcher then goes straight to the browser fallback.
    async fn connect(&self) -> bool;

    /// Names of the printers the bridge can reach.
    async fn list_printers(&self) -> Result<Vec<String>, BridgeError>;

    /// Submit a raw ESC/POS payload to the named printer.
    async fn submit(&self, printer: &str, payload: &[u8]) -> Result<(), BridgeError>;
}

/// Stand-in for "no bridge installed". Every print request falls back to the
/// browser path.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBridge;

#[async_trait]
impl PrintBridge for NullBridge {
    async fn connect(&self) -> bool {
        false
    }

    async fn list_printers(&self) -> Result<Vec<String>, BridgeError> {
        Err(BridgeError::Unavailable)
    }

    async fn submit(&self, _printer: &str, _payload: &[u8]) -> Result<(), BridgeError> {
        Err(BridgeError::Unavailable)
    }
}
