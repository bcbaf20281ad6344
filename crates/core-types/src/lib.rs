pub mod enums;
pub mod error;
pub mod normalize;
pub mod pnl;
pub mod snapshot;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Direction, RecentPeriod, Timeframe, TradeResult};
pub use error::CoreError;
pub use normalize::{normalize, normalize_all, parse_trade_timestamp};
pub use pnl::leveraged_pnl_percent;
pub use snapshot::{decode_snapshot, read_snapshot};
pub use structs::{RawTradeRecord, TradeRecord};
