mod consts;
mod order;
mod prelude;
mod types;

pub use consts::*;
pub use order::{Order, Receipt, coupon_is_valid, shipping_cost, subtotal};
pub use types::{ItemCounts, OrderDate, ShippingMethod, Weekday, is_valid_date};

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A computed arrival date inside the promotional year, with its weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{weekday}, {month}/{day}/{year}")]
pub struct ArrivalDate {
    weekday: Weekday,
    month:   u8,
    day:     u8,
    year:    u16,
}

impl ArrivalDate {
    /// Day of the week the order arrives on
    pub const fn weekday(self) -> Weekday {
        self.weekday
    }

    /// Arrival month; may be one past the order month after rollover
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Arrival day of month
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Always the promotional year
    pub const fn year(self) -> u16 {
        self.year
    }
}

/// Validation failures surfaced by the order calculator.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum OrderError {
    /// Order date outside the October 15 - November 30 window.
    #[display(fmt = "Invalid date: {month}/{day} (orders accepted 10/15 through 11/30)")]
    InvalidDate { month: u8, day: u8 },
    /// Shipping lead time outside the supported range.
    #[display(fmt = "Invalid days: {} (lead time must be {}-{})", "_0", MIN_LEAD_DAYS, MAX_LEAD_DAYS)]
    InvalidLeadTime(u8),
    /// An item quantity was negative.
    #[display(fmt = "Invalid number: {_0}")]
    NegativeQuantity(i64),
    /// A negative subtotal reached the shipping calculator.
    #[display(fmt = "Invalid subtotal: {_0}")]
    NegativeSubtotal(i64),
    /// Shipping selector other than s/S/t/T.
    #[display(fmt = "Invalid shipping: {_0}")]
    InvalidShipping(char),
}

impl std::error::Error for OrderError {}

/// Computes the arrival date for an order placed on `order_month`/`order_day`
/// with the given shipping lead time.
///
/// Rolls the arrival day into the next month at most once; the order window
/// plus the lead-time bound of `MAX_LEAD_DAYS` guarantees a single step is
/// enough. The weekday comes from a Zeller's-congruence variant fixed to
/// `PROMO_YEAR`, evaluated with the post-rollover month. That coupling is
/// preserved from the original rule set; do not swap in the order month.
///
/// # Errors
/// Returns `OrderError::InvalidDate` for dates outside the order window and
/// `OrderError::InvalidLeadTime` for lead times outside
/// `MIN_LEAD_DAYS..=MAX_LEAD_DAYS`.
pub fn arrival_date(
    order_month: u8,
    order_day: u8,
    lead_days: u8,
) -> Result<ArrivalDate, OrderError> {
    if !is_valid_date(order_month, order_day) {
        return Err(OrderError::InvalidDate {
            month: order_month,
            day:   order_day,
        });
    }
    if !(MIN_LEAD_DAYS..=MAX_LEAD_DAYS).contains(&lead_days) {
        return Err(OrderError::InvalidLeadTime(lead_days));
    }

    let mut month = order_month;
    let mut day = order_day + lead_days;
    if month == OCTOBER && day > DAYS_IN_OCTOBER {
        month = NOVEMBER;
        day -= DAYS_IN_OCTOBER;
    }
    if month == NOVEMBER && day > DAYS_IN_NOVEMBER {
        month = DECEMBER;
        day -= DAYS_IN_NOVEMBER;
    }

    let year = i32::from(PROMO_YEAR);
    let m = i32::from(month);
    let month_shift = (MONTHS_IN_YEAR + 2 - m) / MONTHS_IN_YEAR;
    let p1 = year - month_shift;
    let p2 = p1 + p1 / LEAP_YEAR_CYCLE - p1 / CENTURY_CYCLE + p1 / GREGORIAN_CYCLE;
    let p3 = m + MONTHS_IN_YEAR * month_shift - 2;
    let index = (i32::from(day) + p2 + (ZELLER_MONTH_COEFFICIENT * p3) / MONTHS_IN_YEAR)
        % DAYS_IN_WEEK;

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let weekday = Weekday::from_index(index as u8);

    Ok(ArrivalDate {
        weekday,
        month,
        day,
        year: PROMO_YEAR,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrival_no_rollover() {
        // 11/9 + 5 days lands on 11/14/2022, a Monday
        let arrival = arrival_date(11, 9, 5).unwrap();
        assert_eq!(arrival.month(), 11);
        assert_eq!(arrival.day(), 14);
        assert_eq!(arrival.weekday(), Weekday::Mon);
        assert_eq!(arrival.year(), 2022);
    }

    #[test]
    fn test_arrival_october_rollover() {
        // 10/29 + 5 days raw is 10/34, rolls to 11/3
        let arrival = arrival_date(10, 29, 5).unwrap();
        assert_eq!(arrival.month(), 11);
        assert_eq!(arrival.day(), 3);
        assert_eq!(arrival.weekday(), Weekday::Thu);
    }

    #[test]
    fn test_arrival_november_rollover() {
        // 11/28 + 5 days raw is 11/33, rolls to 12/3
        let arrival = arrival_date(11, 28, 5).unwrap();
        assert_eq!(arrival.month(), 12);
        assert_eq!(arrival.day(), 3);
        assert_eq!(arrival.weekday(), Weekday::Sat);
    }

    #[test]
    fn test_arrival_two_day_lead() {
        // 10/20 + 2 days is 10/22/2022, a Saturday
        let arrival = arrival_date(10, 20, 2).unwrap();
        assert_eq!(arrival.month(), 10);
        assert_eq!(arrival.day(), 22);
        assert_eq!(arrival.weekday(), Weekday::Sat);
    }

    #[test]
    fn test_arrival_rejects_invalid_date() {
        let result = arrival_date(10, 14, 5);
        assert!(matches!(
            result,
            Err(OrderError::InvalidDate { month: 10, day: 14 })
        ));

        let result = arrival_date(12, 1, 2);
        assert!(matches!(result, Err(OrderError::InvalidDate { .. })));
    }

    #[test]
    fn test_arrival_rejects_invalid_lead_time() {
        let result = arrival_date(11, 9, 0);
        assert!(matches!(result, Err(OrderError::InvalidLeadTime(0))));

        let result = arrival_date(11, 9, 6);
        assert!(matches!(result, Err(OrderError::InvalidLeadTime(6))));
    }

    #[test]
    fn test_arrival_display_no_zero_padding() {
        let arrival = arrival_date(10, 29, 5).unwrap();
        assert_eq!(arrival.to_string(), "Thu, 11/3/2022");

        let arrival = arrival_date(11, 9, 5).unwrap();
        assert_eq!(arrival.to_string(), "Mon, 11/14/2022");
    }

    #[test]
    fn test_arrival_window_edges() {
        // Earliest possible order date
        let arrival = arrival_date(10, 15, 5).unwrap();
        assert_eq!((arrival.month(), arrival.day()), (10, 20));

        // Latest possible order date rolls into December
        let arrival = arrival_date(11, 30, 5).unwrap();
        assert_eq!((arrival.month(), arrival.day()), (12, 5));
    }

    #[test]
    fn test_error_display() {
        let err = OrderError::InvalidDate { month: 9, day: 30 };
        assert_eq!(
            err.to_string(),
            "Invalid date: 9/30 (orders accepted 10/15 through 11/30)"
        );

        let err = OrderError::InvalidLeadTime(7);
        assert_eq!(err.to_string(), "Invalid days: 7 (lead time must be 1-5)");

        let err = OrderError::NegativeQuantity(-4);
        assert_eq!(err.to_string(), "Invalid number: -4");

        let err = OrderError::InvalidShipping('q');
        assert_eq!(err.to_string(), "Invalid shipping: q");
    }

    #[test]
    fn test_arrival_serde() {
        let arrival = arrival_date(11, 9, 5).unwrap();
        let json = serde_json::to_string(&arrival).unwrap();
        let parsed: ArrivalDate = serde_json::from_str(&json).unwrap();
        assert_eq!(arrival, parsed);
    }
}
