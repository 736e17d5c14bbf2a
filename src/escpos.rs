//! Minimal ESC/POS binary command builder for thermal receipt printers.
//!
//! Generates the raw byte stream the print bridge submits to a printer as an
//! opaque payload. Text is emitted as UTF-8 (the bridge configures the
//! printer for UTF-8 encoding), so Arabic passes through unchanged.

// ESC/POS command bytes
const ESC: u8 = 0x1B;
const GS: u8 = 0x1D;
const LF: u8 = 0x0A;

/// Character width of the divider line on 58 mm paper.
const DIVIDER_CHARS: usize = 32;

/// ESC ! print modes used on receipts.
pub mod mode {
    /// Normal 1x size.
    pub const NORMAL: u8 = 0x00;
    /// Emphasized (bold) weight.
    pub const EMPHASIZED: u8 = 0x10;
    /// Double width and double height.
    pub const DOUBLE: u8 = 0x30;
}

/// Builder for generating ESC/POS binary command buffers.
///
/// ```rust
/// use modern_pos::escpos::{mode, EscPosBuilder};
///
/// let mut b = EscPosBuilder::new();
/// b.init()
///     .center()
///     .print_mode(mode::DOUBLE)
///     .text("RECEIPT")
///     .lf()
///     .print_mode(mode::NORMAL)
///     .full_cut();
/// let payload = b.build();
/// assert_eq!(&payload[..2], &[0x1B, 0x40]);
/// ```
pub struct EscPosBuilder {
    buffer: Vec<u8>,
}

impl Default for EscPosBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EscPosBuilder {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(512),
        }
    }

    // -----------------------------------------------------------------------
    // Initialization
    // -----------------------------------------------------------------------

    /// ESC @ — Initialize printer, reset to defaults.
    pub fn init(&mut self) -> &mut Self {
        self.buffer.extend_from_slice(&[ESC, 0x40]);
        self
    }

    /// ESC t n — Select character code page.
    pub fn code_page(&mut self, page: u8) -> &mut Self {
        self.buffer.extend_from_slice(&[ESC, 0x74, page]);
        self
    }

    /// Select the Arabic character set (page 6).
    pub fn arabic_code_page(&mut self) -> &mut Self {
        self.code_page(6)
    }

    /// Select the standard character set (page 0).
    pub fn standard_code_page(&mut self) -> &mut Self {
        self.code_page(0)
    }

    // -----------------------------------------------------------------------
    // Formatting
    // -----------------------------------------------------------------------

    /// ESC ! n — Select print mode (see [`mode`]).
    pub fn print_mode(&mut self, n: u8) -> &mut Self {
        self.buffer.extend_from_slice(&[ESC, 0x21, n]);
        self
    }

    /// ESC a 0 — Left-align.
    pub fn left(&mut self) -> &mut Self {
        self.buffer.extend_from_slice(&[ESC, 0x61, 0]);
        self
    }

    /// ESC a 1 — Centre-align.
    pub fn center(&mut self) -> &mut Self {
        self.buffer.extend_from_slice(&[ESC, 0x61, 1]);
        self
    }

    /// ESC a 2 — Right-align (used as the RTL block alignment).
    pub fn right(&mut self) -> &mut Self {
        self.buffer.extend_from_slice(&[ESC, 0x61, 2]);
        self
    }

    // -----------------------------------------------------------------------
    // Text output
    // -----------------------------------------------------------------------

    /// Append text as UTF-8 bytes.
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.buffer.extend_from_slice(s.as_bytes());
        self
    }

    /// Append a line-feed.
    pub fn lf(&mut self) -> &mut Self {
        self.buffer.push(LF);
        self
    }

    /// Print a horizontal divider of dashes followed by a line-feed.
    pub fn separator(&mut self) -> &mut Self {
        for _ in 0..DIVIDER_CHARS {
            self.buffer.push(b'-');
        }
        self.buffer.push(LF);
        self
    }

    // -----------------------------------------------------------------------
    // Cut
    // -----------------------------------------------------------------------

    /// GS V B 0 — Full cut.
    pub fn full_cut(&mut self) -> &mut Self {
        self.buffer.extend_from_slice(&[GS, 0x56, 0x42, 0x00]);
        self
    }

    /// Consume the builder and return the binary ESC/POS payload.
    pub fn build(self) -> Vec<u8> {
        self.buffer
    }
}
