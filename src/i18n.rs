//! Localization provider for receipt rendering.
//!
//! Owns the small fixed surface the core needs: the language code, the
//! bilingual receipt label table, the per-language currency, and the Arabic
//! product-name table keyed by catalog display key. The full UI string tables
//! live with the front end; only what ends up on paper is duplicated here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

impl Language {
    /// Parse a BCP-47-ish code. Unknown codes fall back to English, matching
    /// the front end's fallback language.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "ar" => Language::Ar,
            _ => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Value for an HTML `dir` attribute.
    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }
}

/// Currency descriptor captured on each invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub symbol: String,
    pub code: String,
}

/// Currency associated with a display language.
pub fn currency_for(language: Language) -> Currency {
    match language {
        Language::En => Currency {
            symbol: "$".to_string(),
            code: "USD".to_string(),
        },
        Language::Ar => Currency {
            symbol: "\u{FDFC}".to_string(), // ﷼
            code: "SAR".to_string(),
        },
    }
}

/// Strings that appear on a printed receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptLabel {
    StoreName,
    InvoiceNumber,
    Date,
    Time,
    Subtotal,
    Tax,
    Total,
    ThankYou,
    VisitAgain,
}

/// Resolve a receipt label for a language.
pub fn label(language: Language, label: ReceiptLabel) -> &'static str {
    use ReceiptLabel::*;
    match language {
        Language::En => match label {
            StoreName => "Modern POS Store",
            InvoiceNumber => "Invoice",
            Date => "Date",
            Time => "Time",
            Subtotal => "Subtotal",
            Tax => "Tax",
            Total => "Total",
            ThankYou => "Thank you for your purchase!",
            VisitAgain => "Please visit us again",
        },
        Language::Ar => match label {
            StoreName => "متجر نقطة البيع الحديث",
            InvoiceNumber => "رقم الفاتورة",
            Date => "التاريخ",
            Time => "الوقت",
            Subtotal => "المجموع الفرعي",
            Tax => "الضريبة",
            Total => "المجموع",
            ThankYou => "شكراً لشرائكم!",
            VisitAgain => "نرجو زيارتكم لنا مرة أخرى",
        },
    }
}

/// Resolve the display name printed for a catalog item.
///
/// English receipts use the product's own name. Arabic receipts go through a
/// fixed translation table keyed by the product's display key; a key with no
/// entry falls back to the key itself.
pub fn localized_product_name(language: Language, display_key: &str, fallback_name: &str) -> String {
    match language {
        Language::En => fallback_name.to_string(),
        Language::Ar => arabic_product_name(display_key)
            .unwrap_or(display_key)
            .to_string(),
    }
}

fn arabic_product_name(display_key: &str) -> Option<&'static str> {
    match display_key {
        "products.coffee" => Some("قهوة"),
        "products.tea" => Some("شاي"),
        "products.sandwich" => Some("ساندويتش"),
        "products.pastry" => Some("معجنات"),
        "products.juice" => Some("عصير طازج"),
        "products.water" => Some("ماء"),
        "products.cake" => Some("كيك"),
        "products.cookie" => Some("بسكويت"),
        _ => None,
    }
}

/// Format an amount with two decimals and the currency symbol placed before
/// the amount for left-to-right languages and after it for right-to-left.
pub fn format_amount(language: Language, currency: &Currency, amount: f64) -> String {
    if language.is_rtl() {
        format!("{amount:.2} {}", currency.symbol)
    } else {
        format!("{}{amount:.2}", currency.symbol)
    }
}
