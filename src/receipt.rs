//! Receipt renderer.
//!
//! Two independent rendering targets, both pure and deterministic functions
//! of an [`Invoice`]: the ESC/POS payload submitted to a thermal printer via
//! the bridge, and a self-contained HTML document for the browser-print
//! fallback. The bilingual differences (text direction, charset, label text,
//! amount formatting, item-name lookup) are concentrated in a small layout
//! strategy selected once by the invoice's language, so the rendering
//! sequences themselves stay branch-free.

use crate::cart::CartLine;
use crate::escpos::{mode, EscPosBuilder};
use crate::i18n::{self, Currency, Language, ReceiptLabel};
use crate::invoice::Invoice;

// ---------------------------------------------------------------------------
// Layout strategy
// ---------------------------------------------------------------------------

/// Per-language rendering contract: everything that differs between the
/// English and Arabic receipts.
trait LocaleLayout {
    fn language(&self) -> Language;

    /// Emit the charset and block-alignment commands for the language's text
    /// direction (right-aligned block for Arabic, left-aligned otherwise).
    fn select_direction(&self, b: &mut EscPosBuilder);

    fn label(&self, label: ReceiptLabel) -> &'static str {
        i18n::label(self.language(), label)
    }

    fn amount(&self, currency: &Currency, value: f64) -> String {
        i18n::format_amount(self.language(), currency, value)
    }

    fn item_name(&self, line: &CartLine) -> String {
        i18n::localized_product_name(self.language(), &line.product.display_key, &line.product.name)
    }
}

struct EnglishLayout;

impl LocaleLayout for EnglishLayout {
    fn language(&self) -> Language {
        Language::En
    }

    fn select_direction(&self, b: &mut EscPosBuilder) {
        b.standard_code_page().left();
    }
}

struct ArabicLayout;

impl LocaleLayout for ArabicLayout {
    fn language(&self) -> Language {
        Language::Ar
    }

    fn select_direction(&self, b: &mut EscPosBuilder) {
        b.arabic_code_page().right();
    }
}

fn layout_for(language: Language) -> &'static dyn LocaleLayout {
    match language {
        Language::En => &EnglishLayout,
        Language::Ar => &ArabicLayout,
    }
}

// ---------------------------------------------------------------------------
// ESC/POS rendering
// ---------------------------------------------------------------------------

/// Render the printer-command payload for an invoice.
///
/// Command order: init, charset + direction, centered double-size store
/// banner, left-aligned metadata block, divider, one block per line item,
/// divider, subtotal/tax, divider, emphasized total, centered footer, cut.
pub fn render_escpos(invoice: &Invoice) -> Vec<u8> {
    let layout = layout_for(invoice.language);
    let currency = &invoice.currency;
    let mut b = EscPosBuilder::new();

    b.init();
    layout.select_direction(&mut b);

    // Store banner
    b.center()
        .print_mode(mode::DOUBLE)
        .text(layout.label(ReceiptLabel::StoreName))
        .lf()
        .lf()
        .print_mode(mode::NORMAL);

    // Invoice metadata
    b.left();
    b.text(&format!(
        "{}: {}",
        layout.label(ReceiptLabel::InvoiceNumber),
        invoice.display_number
    ))
    .lf();
    b.text(&format!(
        "{}: {}",
        layout.label(ReceiptLabel::Date),
        invoice.issued_at.format("%Y-%m-%d")
    ))
    .lf();
    b.text(&format!(
        "{}: {}",
        layout.label(ReceiptLabel::Time),
        invoice.issued_at.format("%H:%M:%S")
    ))
    .lf();
    b.separator();

    // Line items
    for line in &invoice.lines {
        b.text(&layout.item_name(line)).lf();
        b.text(&format!(
            "{} x {} = {}",
            layout.amount(currency, line.product.unit_price),
            line.quantity,
            layout.amount(currency, line.line_subtotal)
        ))
        .lf();
    }
    b.separator();

    // Totals
    b.text(&format!(
        "{}: {}",
        layout.label(ReceiptLabel::Subtotal),
        layout.amount(currency, invoice.subtotal)
    ))
    .lf();
    b.text(&format!(
        "{}: {}",
        layout.label(ReceiptLabel::Tax),
        layout.amount(currency, invoice.tax)
    ))
    .lf();
    b.separator();
    b.print_mode(mode::EMPHASIZED)
        .text(&format!(
            "{}: {}",
            layout.label(ReceiptLabel::Total),
            layout.amount(currency, invoice.total)
        ))
        .lf()
        .print_mode(mode::NORMAL);

    // Footer
    b.lf();
    b.center()
        .text(layout.label(ReceiptLabel::ThankYou))
        .lf()
        .text(layout.label(ReceiptLabel::VisitAgain))
        .lf()
        .lf()
        .lf();
    b.full_cut();

    b.build()
}

// ---------------------------------------------------------------------------
// HTML rendering
// ---------------------------------------------------------------------------

fn esc(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn html_shell(language: Language, title: &str, body: &str) -> String {
    let font_stack = if language.is_rtl() {
        "Arial, \"Traditional Arabic\", sans-serif"
    } else {
        "Arial, sans-serif"
    };
    format!(
        r#"<!DOCTYPE html>
<html dir="{}" lang="{}">
<head>
<meta charset="UTF-8"/>
<title>{}</title>
<style>
body {{ font-family: {}; max-width: 300px; margin: 0 auto; padding: 20px; font-size: 14px; background: #fff; color: #111; }}
.header {{ text-align: center; margin-bottom: 20px; }}
.title {{ font-size: 18px; font-weight: bold; margin-bottom: 10px; }}
.line {{ display: flex; justify-content: space-between; gap: 8px; }}
.rule {{ border-top: 1px dashed #000; margin: 10px 0; }}
.total {{ font-weight: bold; font-size: 16px; }}
.footer {{ text-align: center; margin-top: 20px; }}
</style>
</head>
<body>{}</body>
</html>"#,
        language.dir(),
        language.code(),
        esc(title),
        font_stack,
        body
    )
}

/// Render a complete, self-contained HTML receipt for the browser print
/// dialog. Same content as the printer payload, formatted as markup.
pub fn render_html(invoice: &Invoice) -> String {
    let layout = layout_for(invoice.language);
    let currency = &invoice.currency;

    let mut body = format!(
        "<div class=\"header\"><div class=\"title\">{}</div>\
         <div>{}: {}</div><div>{}: {}</div><div>{}: {}</div></div>",
        esc(layout.label(ReceiptLabel::StoreName)),
        esc(layout.label(ReceiptLabel::InvoiceNumber)),
        esc(&invoice.display_number),
        esc(layout.label(ReceiptLabel::Date)),
        invoice.issued_at.format("%Y-%m-%d"),
        esc(layout.label(ReceiptLabel::Time)),
        invoice.issued_at.format("%H:%M:%S"),
    );

    body.push_str("<div class=\"rule\"></div>");
    for line in &invoice.lines {
        body.push_str(&format!(
            "<div><strong>{}</strong></div><div class=\"line\"><span>{} \u{00D7} {}</span><span>{}</span></div>",
            esc(&layout.item_name(line)),
            esc(&layout.amount(currency, line.product.unit_price)),
            line.quantity,
            esc(&layout.amount(currency, line.line_subtotal)),
        ));
    }
    body.push_str("<div class=\"rule\"></div>");

    body.push_str(&format!(
        "<div class=\"line\"><span>{}</span><span>{}</span></div>\
         <div class=\"line\"><span>{}</span><span>{}</span></div>\
         <div class=\"rule\"></div>\
         <div class=\"line total\"><span>{}</span><span>{}</span></div>",
        esc(layout.label(ReceiptLabel::Subtotal)),
        esc(&layout.amount(currency, invoice.subtotal)),
        esc(layout.label(ReceiptLabel::Tax)),
        esc(&layout.amount(currency, invoice.tax)),
        esc(layout.label(ReceiptLabel::Total)),
        esc(&layout.amount(currency, invoice.total)),
    ));

    body.push_str(&format!(
        "<div class=\"footer\"><div><strong>{}</strong></div><div>{}</div></div>",
        esc(layout.label(ReceiptLabel::ThankYou)),
        esc(layout.label(ReceiptLabel::VisitAgain)),
    ));

    let title = format!(
        "{} {}",
        layout.label(ReceiptLabel::InvoiceNumber),
        invoice.display_number
    );
    html_shell(invoice.language, &title, &body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
