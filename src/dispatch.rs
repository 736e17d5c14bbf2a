//! Print dispatcher.
//!
//! Orchestrates one print request end to end: reach the native print bridge,
//! pick a printer, submit the rendered ESC/POS payload, and on any failure
//! along the way fall back to rendering HTML into a browser print surface.
//! The dispatcher always completes — every bridge or printer error is
//! absorbed here, logged, and converted into the fallback path. The caller
//! uses the returned [`PrintOutcome`] only to pick a notification message,
//! never to retry.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::bridge::PrintBridge;
use crate::error::{BridgeError, PrintError};
use crate::invoice::Invoice;
use crate::receipt;

/// How a print request was ultimately served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrintOutcome {
    /// Payload was accepted by a bridge printer.
    BridgeSuccess,
    /// Bridge was unreachable or refused the job; the receipt went to the
    /// browser print dialog instead.
    BridgeUnavailable,
}

/// Browser-level print flow driven by the fallback path, in exactly this
/// order: open a new view, write the document, invoke print, close the view.
pub trait BrowserPrintSurface {
    fn open(&mut self) -> Result<(), PrintError>;
    fn write_document(&mut self, html: &str) -> Result<(), PrintError>;
    fn print(&mut self) -> Result<(), PrintError>;
    fn close(&mut self) -> Result<(), PrintError>;
}

#[derive(Debug, Clone)]
pub struct PrintConfig {
    /// Preferred printer, matched case-insensitively against the names the
    /// bridge enumerates. No match falls back to the first enumerated printer.
    pub preferred_printer: String,
    /// Upper bound for each individual bridge call (connect, enumerate,
    /// submit). An unresponsive bridge must not suspend checkout forever.
    pub bridge_timeout: Duration,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            preferred_printer: "tow pilots demo printer".to_string(),
            bridge_timeout: Duration::from_secs(5),
        }
    }
}

pub struct PrintDispatcher<B: PrintBridge> {
    bridge: B,
    config: PrintConfig,
}

impl<B: PrintBridge> PrintDispatcher<B> {
    pub fn new(bridge: B) -> Self {
        Self::with_config(bridge, PrintConfig::default())
    }

    pub fn with_config(bridge: B, config: PrintConfig) -> Self {
        Self { bridge, config }
    }

    /// Print `invoice`, preferring the bridge and falling back to the browser
    /// surface. Only a failure of the fallback itself surfaces as an error;
    /// the caller shows a generic print-error notice and leaves the cart
    /// untouched so the user may retry.
    pub async fn print(
        &self,
        invoice: &Invoice,
        surface: &mut dyn BrowserPrintSurface,
    ) -> Result<PrintOutcome, PrintError> {
        match self.submit_via_bridge(invoice).await {
            Ok(printer) => {
                info!(
                    invoice = %invoice.display_number,
                    printer = %printer,
                    "receipt submitted to bridge printer"
                );
                Ok(PrintOutcome::BridgeSuccess)
            }
            Err(err) => {
                warn!(
                    invoice = %invoice.display_number,
                    error = %err,
                    "print bridge unavailable; falling back to browser print"
                );
                self.print_via_browser(invoice, surface)?;
                Ok(PrintOutcome::BridgeUnavailable)
            }
        }
    }

    /// Bridge path: connect, enumerate, select, submit. Returns the printer
    /// name the payload was sent to.
    async fn submit_via_bridge(&self, invoice: &Invoice) -> Result<String, BridgeError> {
        let connected = self.bounded(self.bridge.connect()).await?;
        if !connected {
            return Err(BridgeError::Unavailable);
        }

        let printers = self.bounded(self.bridge.list_printers()).await??;
        let printer = select_printer(&printers, &self.config.preferred_printer)
            .ok_or(BridgeError::NoPrinters)?
            .to_string();

        let payload = receipt::render_escpos(invoice);
        self.bounded(self.bridge.submit(&printer, &payload)).await??;
        Ok(printer)
    }

    fn print_via_browser(
        &self,
        invoice: &Invoice,
        surface: &mut dyn BrowserPrintSurface,
    ) -> Result<(), PrintError> {
        let html = receipt::render_html(invoice);
        surface.open()?;
        surface.write_document(&html)?;
        surface.print()?;
        surface.close()?;
        Ok(())
    }

    async fn bounded<T>(&self, call: impl Future<Output = T>) -> Result<T, BridgeError> {
        tokio::time::timeout(self.config.bridge_timeout, call)
            .await
            .map_err(|_| BridgeError::Timeout(self.config.bridge_timeout.as_millis()))
    }
}

/// Case-insensitive substring match against the preference; no match falls
/// back to the first enumerated printer, if any.
fn select_printer<'a>(printers: &'a [String], preferred: &str) -> Option<&'a str> {
    let needle = preferred.trim().to_lowercase();
    printers
        .iter()
        .find(|name| name.to_lowercase().contains(&needle))
        .or_else(|| printers.first())
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use crate::bridge::NullBridge;
    use crate::cart::Cart;
    use crate::catalog::sample_products;
    use crate::i18n::{currency_for, Language};

    fn fixture_invoice() -> Invoice {
        let products = sample_products();
        let mut cart = Cart::new();
        cart.add_item(&products[0]);
        cart.add_item(&products[2]);
        Invoice {
            id: "dispatch-test-id".to_string(),
            display_number: "INV-DISPATCH-01".to_string(),
            issued_at: Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap(),
            lines: cart.lines.clone(),
            subtotal: cart.subtotal,
            tax: cart.tax,
            total: cart.total,
            language: Language::En,
            currency: currency_for(Language::En),
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<&'static str>,
        document: Option<String>,
    }

    impl BrowserPrintSurface for RecordingSurface {
        fn open(&mut self) -> Result<(), PrintError> {
            self.calls.push("open");
            Ok(())
        }

        fn write_document(&mut self, html: &str) -> Result<(), PrintError> {
            self.calls.push("write");
            self.document = Some(html.to_string());
            Ok(())
        }

        fn print(&mut self) -> Result<(), PrintError> {
            self.calls.push("print");
            Ok(())
        }

        fn close(&mut self) -> Result<(), PrintError> {
            self.calls.push("close");
            Ok(())
        }
    }

    struct StubBridge {
        printers: Vec<String>,
        fail_submit: bool,
        submissions: Mutex<Vec<(String, Vec<u8>)>>,
    }

    impl StubBridge {
        fn with_printers(printers: &[&str]) -> Self {
            Self {
                printers: printers.iter().map(|s| s.to_string()).collect(),
                fail_submit: false,
                submissions: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PrintBridge for StubBridge {
        async fn connect(&self) -> bool {
            true
        }

        async fn list_printers(&self) -> Result<Vec<String>, BridgeError> {
            Ok(self.printers.clone())
        }

        async fn submit(&self, printer: &str, payload: &[u8]) -> Result<(), BridgeError> {
            if self.fail_submit {
                return Err(BridgeError::Printer("out of paper".to_string()));
            }
            self.submissions
                .lock()
                .unwrap()
                .push((printer.to_string(), payload.to_vec()));
            Ok(())
        }
    }

    /// Bridge whose connect call never returns.
    struct HangingBridge;

    #[async_trait]
    impl PrintBridge for HangingBridge {
        async fn connect(&self) -> bool {
            std::future::pending::<()>().await;
            unreachable!()
        }

        async fn list_printers(&self) -> Result<Vec<String>, BridgeError> {
            Err(BridgeError::Unavailable)
        }

        async fn submit(&self, _printer: &str, _payload: &[u8]) -> Result<(), BridgeError> {
            Err(BridgeError::Unavailable)
        }
    }

    #[tokio::test]
    async fn no_bridge_falls_back_to_browser_with_display_number() {
        let dispatcher = PrintDispatcher::new(NullBridge);
        let mut surface = RecordingSurface::default();
        let outcome = dispatcher.print(&fixture_invoice(), &mut surface).await.unwrap();

        assert_eq!(outcome, PrintOutcome::BridgeUnavailable);
        assert_eq!(surface.calls, vec!["open", "write", "print", "close"]);
        assert!(surface.document.unwrap().contains("INV-DISPATCH-01"));
    }

    #[tokio::test]
    async fn preferred_printer_wins_over_first() {
        let bridge = StubBridge::with_printers(&["Office Laser", "Tow Pilots Demo Printer"]);
        let dispatcher = PrintDispatcher::new(bridge);
        let mut surface = RecordingSurface::default();
        let outcome = dispatcher.print(&fixture_invoice(), &mut surface).await.unwrap();

        assert_eq!(outcome, PrintOutcome::BridgeSuccess);
        assert!(surface.calls.is_empty());
        let submissions = dispatcher.bridge.submissions.lock().unwrap();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].0, "Tow Pilots Demo Printer");
        // payload starts with ESC @ and ends with the cut command
        assert_eq!(&submissions[0].1[..2], &[0x1B, 0x40]);
        assert_eq!(&submissions[0].1[submissions[0].1.len() - 4..], &[0x1D, 0x56, 0x42, 0x00]);
    }

    #[tokio::test]
    async fn unmatched_preference_falls_back_to_first_printer() {
        let bridge = StubBridge::with_printers(&["Kitchen Thermal", "Bar Thermal"]);
        let dispatcher = PrintDispatcher::new(bridge);
        let mut surface = RecordingSurface::default();
        let outcome = dispatcher.print(&fixture_invoice(), &mut surface).await.unwrap();

        assert_eq!(outcome, PrintOutcome::BridgeSuccess);
        let submissions = dispatcher.bridge.submissions.lock().unwrap();
        assert_eq!(submissions[0].0, "Kitchen Thermal");
    }

    #[tokio::test]
    async fn empty_printer_list_falls_back_to_browser() {
        let bridge = StubBridge::with_printers(&[]);
        let dispatcher = PrintDispatcher::new(bridge);
        let mut surface = RecordingSurface::default();
        let outcome = dispatcher.print(&fixture_invoice(), &mut surface).await.unwrap();

        assert_eq!(outcome, PrintOutcome::BridgeUnavailable);
        assert_eq!(surface.calls, vec!["open", "write", "print", "close"]);
    }

    #[tokio::test]
    async fn submit_failure_falls_back_to_browser() {
        let mut bridge = StubBridge::with_printers(&["Tow Pilots Demo Printer"]);
        bridge.fail_submit = true;
        let dispatcher = PrintDispatcher::new(bridge);
        let mut surface = RecordingSurface::default();
        let outcome = dispatcher.print(&fixture_invoice(), &mut surface).await.unwrap();

        assert_eq!(outcome, PrintOutcome::BridgeUnavailable);
        assert!(surface.document.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn hanging_bridge_times_out_into_fallback() {
        let dispatcher = PrintDispatcher::with_config(
            HangingBridge,
            PrintConfig {
                bridge_timeout: Duration::from_millis(200),
                ..PrintConfig::default()
            },
        );
        let mut surface = RecordingSurface::default();
        let outcome = dispatcher.print(&fixture_invoice(), &mut surface).await.unwrap();

        assert_eq!(outcome, PrintOutcome::BridgeUnavailable);
        assert_eq!(surface.calls, vec!["open", "write", "print", "close"]);
    }

    #[tokio::test]
    async fn surface_failure_surfaces_as_print_error() {
        struct BrokenSurface;
        impl BrowserPrintSurface for BrokenSurface {
            fn open(&mut self) -> Result<(), PrintError> {
                Err(PrintError::Surface("window blocked".to_string()))
            }
            fn write_document(&mut self, _html: &str) -> Result<(), PrintError> {
                Ok(())
            }
            fn print(&mut self) -> Result<(), PrintError> {
                Ok(())
            }
            fn close(&mut self) -> Result<(), PrintError> {
                Ok(())
            }
        }

        let dispatcher = PrintDispatcher::new(NullBridge);
        let err = dispatcher
            .print(&fixture_invoice(), &mut BrokenSurface)
            .await
            .unwrap_err();
        assert!(matches!(err, PrintError::Surface(_)));
    }

    #[test]
    fn printer_selection_is_case_insensitive() {
        let printers = vec!["EPSON TM-T20".to_string(), "TOW PILOTS DEMO PRINTER".to_string()];
        assert_eq!(
            select_printer(&printers, "tow pilots demo printer"),
            Some("TOW PILOTS DEMO PRINTER")
        );
        assert_eq!(select_printer(&printers, "no such"), Some("EPSON TM-T20"));
        assert_eq!(select_printer(&[], "anything"), None);
    }
}
