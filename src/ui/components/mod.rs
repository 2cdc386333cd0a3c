mod popup;

pub use popup::PopupDialog;

use rust_decimal::Decimal;

/// Prices are shown in dollars with two decimals.
pub fn price_label(price: Decimal) -> String {
    format!("${:.2}", price)
}
