/// Promotional year for the club-store sale; all arrival dates fall in it
pub const PROMO_YEAR: u16 = 2022;

/// Coupon code granting free Standard shipping (exact, case-sensitive match)
pub const COUPON_CODE: &str = "PACK2022";

/// Month number for October, when the order window opens
pub const OCTOBER: u8 = 10;
/// Month number for November, when the order window closes
pub const NOVEMBER: u8 = 11;
/// Month number for December, only reachable as a rolled-over arrival month
pub const DECEMBER: u8 = 12;

/// First day of October on which orders are accepted
pub const WINDOW_OPEN_DAY: u8 = 15;
/// Day count used when rolling an arrival date out of October
pub const DAYS_IN_OCTOBER: u8 = 31;
/// Day count used when rolling an arrival date out of November
pub const DAYS_IN_NOVEMBER: u8 = 30;

/// Unit price of a water bottle, in whole dollars
pub const BOTTLE_PRICE: i64 = 10;
/// Unit price of a coffee mug, in whole dollars
pub const MUG_PRICE: i64 = 12;
/// Unit price of a tote bag, in whole dollars
pub const BAG_PRICE: i64 = 18;

/// Calendar days from order to arrival for Standard shipping
pub const STANDARD_LEAD_DAYS: u8 = 5;
/// Calendar days from order to arrival for Two-day shipping
pub const TWO_DAY_LEAD_DAYS: u8 = 2;
/// Smallest lead time the arrival-date calculator accepts
pub const MIN_LEAD_DAYS: u8 = 1;
/// Largest lead time the arrival-date calculator accepts; together with the
/// order window this keeps the arrival within one month rollover
pub const MAX_LEAD_DAYS: u8 = 5;

/// Flat charge for Standard shipping, in whole dollars
pub const STANDARD_SHIPPING_COST: i64 = 3;
/// Flat charge for Two-day shipping, never discounted
pub const TWO_DAY_SHIPPING_COST: i64 = 5;
/// Subtotal at or above which Standard shipping is free
pub const FREE_SHIPPING_THRESHOLD: i64 = 25;

/// Days in a week, modulus of the weekday computation
pub(crate) const DAYS_IN_WEEK: i32 = 7;
/// Months in a year, used by the weekday formula's month shift
pub(crate) const MONTHS_IN_YEAR: i32 = 12;
/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
/// Coefficient of the month term in the weekday formula
pub(crate) const ZELLER_MONTH_COEFFICIENT: i32 = 31;
