use serde::{Deserialize, Serialize};

use crate::consts::{
    BAG_PRICE, BOTTLE_PRICE, COUPON_CODE, FREE_SHIPPING_THRESHOLD, MUG_PRICE,
    STANDARD_SHIPPING_COST, TWO_DAY_SHIPPING_COST,
};
use crate::{ArrivalDate, ItemCounts, OrderDate, OrderError, ShippingMethod, arrival_date};

/// Order subtotal in whole dollars for the given item counts.
///
/// # Errors
/// Returns `OrderError::NegativeQuantity` if any count is negative.
pub const fn subtotal(bottles: i64, mugs: i64, bags: i64) -> Result<i64, OrderError> {
    if bottles < 0 {
        return Err(OrderError::NegativeQuantity(bottles));
    }
    if mugs < 0 {
        return Err(OrderError::NegativeQuantity(mugs));
    }
    if bags < 0 {
        return Err(OrderError::NegativeQuantity(bags));
    }
    Ok(bottles * BOTTLE_PRICE + mugs * MUG_PRICE + bags * BAG_PRICE)
}

/// Shipping cost in whole dollars. Rules apply in order: an empty order ships
/// for free, Two-day shipping is a flat charge with no discounts, then a valid
/// coupon or a subtotal at the free-shipping threshold waives the Standard
/// charge.
///
/// # Errors
/// Returns `OrderError::NegativeSubtotal` if the subtotal is negative.
pub const fn shipping_cost(
    subtotal: i64,
    is_two_day: bool,
    has_valid_coupon: bool,
) -> Result<i64, OrderError> {
    if subtotal < 0 {
        return Err(OrderError::NegativeSubtotal(subtotal));
    }
    let cost = if subtotal == 0 {
        0
    } else if is_two_day {
        TWO_DAY_SHIPPING_COST
    } else if has_valid_coupon || subtotal >= FREE_SHIPPING_THRESHOLD {
        0
    } else {
        STANDARD_SHIPPING_COST
    };
    Ok(cost)
}

/// True iff the supplied code matches `COUPON_CODE` exactly, case-sensitive.
/// A wrong code is not an error; the order simply gets no discount.
pub fn coupon_is_valid(code: &str) -> bool {
    code == COUPON_CODE
}

/// A validated order: a date inside the promotional window plus non-negative
/// item counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    date:   OrderDate,
    counts: ItemCounts,
}

impl Order {
    /// Creates a new order from already-validated parts
    pub const fn new(date: OrderDate, counts: ItemCounts) -> Self {
        Self { date, counts }
    }

    /// The date the order was placed
    pub const fn date(&self) -> OrderDate {
        self.date
    }

    /// The ordered item counts
    pub const fn counts(&self) -> ItemCounts {
        self.counts
    }

    /// True when nothing was ordered; such orders need no shipping choice
    pub const fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// True when the session should offer a coupon: Standard shipping chosen
    /// and the subtotal below the free-shipping threshold.
    pub const fn coupon_applies(&self, method: ShippingMethod) -> bool {
        !method.is_two_day() && self.counts.subtotal() < FREE_SHIPPING_THRESHOLD
    }

    /// Computes the full receipt for this order. An empty order short-circuits
    /// to `Receipt::empty()`; the shipping method and coupon are ignored and
    /// no arrival date is reported.
    ///
    /// # Errors
    /// Propagates `OrderError` from the shipping and arrival-date
    /// calculators. Unreachable for orders built through `Order::new` with
    /// validated parts.
    pub fn checkout(
        &self,
        method: ShippingMethod,
        has_valid_coupon: bool,
    ) -> Result<Receipt, OrderError> {
        if self.is_empty() {
            return Ok(Receipt::empty());
        }
        let subtotal = self.counts.subtotal();
        let shipping = shipping_cost(subtotal, method.is_two_day(), has_valid_coupon)?;
        let arrival = arrival_date(self.date.month(), self.date.day(), method.lead_days())?;
        Ok(Receipt {
            subtotal,
            shipping,
            total: subtotal + shipping,
            arrival: Some(arrival),
        })
    }
}

/// The final order receipt: currency amounts in whole dollars and, for
/// non-empty orders, the computed arrival date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    subtotal: i64,
    shipping: i64,
    total:    i64,
    arrival:  Option<ArrivalDate>,
}

impl Receipt {
    /// Receipt for an order with no items: all amounts zero, no arrival date
    pub const fn empty() -> Self {
        Self {
            subtotal: 0,
            shipping: 0,
            total:    0,
            arrival:  None,
        }
    }

    /// Subtotal of the ordered items, in whole dollars
    pub const fn subtotal(&self) -> i64 {
        self.subtotal
    }

    /// Shipping charge, in whole dollars
    pub const fn shipping(&self) -> i64 {
        self.shipping
    }

    /// Grand total, in whole dollars
    pub const fn total(&self) -> i64 {
        self.total
    }

    /// Arrival date, present only when at least one item was ordered
    pub const fn arrival(&self) -> Option<ArrivalDate> {
        self.arrival
    }
}
