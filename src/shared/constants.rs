use rust_decimal::Decimal;

/// API prefix shared by every catalog route
pub const API_PREFIX: &str = "/api/v1";

/// Fractional digits stored for prices (`NUMERIC(19, 2)`)
pub const PRICE_SCALE: u32 = 2;

/// Exclusive upper bound of a price: 10^17, the first value `NUMERIC(19, 2)`
/// cannot hold
pub const PRICE_MAX: Decimal = Decimal::from_parts(1_569_325_056, 23_283_064, 0, false, 0);
