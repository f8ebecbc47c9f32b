use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display and monetary output
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Classical nisab weight in grams of gold
pub const GOLD_NISAB_GRAMS: Decimal = dec!(85);

/// Classical nisab weight in grams of silver
pub const SILVER_NISAB_GRAMS: Decimal = dec!(595);

/// Fixed zakat rate (2.5%)
pub const ZAKAT_RATE: Decimal = dec!(0.025);

/// Months used for the dashboard income/expense window
pub const DASHBOARD_WINDOW_MONTHS: i64 = 1;

/// Number of transactions shown on the dashboard
pub const RECENT_TRANSACTIONS_LIMIT: usize = 5;
