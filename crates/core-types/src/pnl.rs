use crate::enums::Direction;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Leveraged percentage return of a single trade.
///
/// Long: `((exit - entry) / entry) * 100 * leverage`. Short inverts the sign
/// of the price delta before scaling. Returns zero when `entry` is zero or
/// the result does not fit in a `Decimal`.
pub fn leveraged_pnl_percent(
    direction: Direction,
    entry: Decimal,
    exit: Decimal,
    leverage: Decimal,
) -> Decimal {
    let delta = match direction {
        Direction::Long => exit.checked_sub(entry),
        Direction::Short => entry.checked_sub(exit),
    };

    delta
        .and_then(|delta| delta.checked_div(entry))
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .and_then(|pct| pct.checked_mul(leverage))
        .unwrap_or(Decimal::ZERO)
}
