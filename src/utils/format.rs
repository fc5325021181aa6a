use crate::database::models::BetEntry;

const BIG_UNIT_PRICE: f64 = 0.8;
const SMALL_UNIT_PRICE: f64 = 0.7;

/// Price per multiplier unit. Only "b" selects the big tier; every other
/// value falls through to the small tier (matches the established pricing
/// behavior, see DESIGN.md).
fn unit_price(entry_size: &str) -> f64 {
    if entry_size == "b" {
        BIG_UNIT_PRICE
    } else {
        SMALL_UNIT_PRICE
    }
}

/// Renders the confirmation line for a recorded entry.
///
/// Deterministic: the same entry always produces the same string. The
/// timestamp is rendered in whatever timezone the store returned, with no
/// conversion.
pub fn confirmation(entry: &BetEntry) -> String {
    let total_amount = unit_price(&entry.entry_size) * entry.multiplier as f64;

    format!(
        "Entry: {}; Amount: {:.2}; Time: {}",
        entry.entry,
        total_amount,
        entry.added_on.format("%d/%m/%Y %H:%M:%S")
    )
}
