mod date;
mod series;
mod symbol;

pub use date::{parse_trading_date, MonthKey};
pub use series::{PricePoint, PriceSeries};
pub use symbol::Symbol;
