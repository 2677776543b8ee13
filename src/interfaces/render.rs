use crate::domain::order::NormalizedOrder;
use rust_decimal::Decimal;
use std::fmt::Write;

/// Locale-aware amount formatting, supplied by the host application.
pub trait CurrencyFormatter {
    fn format(&self, amount: Decimal) -> String;
}

/// Plain `$`-prefixed formatting with two decimal places.
pub struct UsdFormatter;

impl CurrencyFormatter for UsdFormatter {
    fn format(&self, amount: Decimal) -> String {
        format!("${:.2}", amount)
    }
}

/// Renders the order for display.
///
/// Each item renders one line with its formatted line total (price times
/// quantity), with special instructions indented below when present, then
/// the formatted order total.
pub fn render_receipt(order: &NormalizedOrder, currency: &dyn CurrencyFormatter) -> String {
    let mut out = String::new();
    for item in &order.items {
        let _ = writeln!(
            out,
            "{} x{} {}",
            item.name,
            item.quantity,
            currency.format(item.line_total())
        );
        if let Some(note) = &item.special_instructions {
            let _ = writeln!(out, "  note: {note}");
        }
    }
    let _ = writeln!(out, "Total: {}", currency.format(order.total_amount));
    out
}
