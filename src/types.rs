use crate::OrderError;
use crate::consts::{
    BAG_PRICE, BOTTLE_PRICE, DAYS_IN_NOVEMBER, DAYS_IN_OCTOBER, MUG_PRICE, NOVEMBER, OCTOBER,
    PROMO_YEAR, STANDARD_LEAD_DAYS, TWO_DAY_LEAD_DAYS, WINDOW_OPEN_DAY,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returns true iff the given month/day falls inside the promotional order
/// window: October 15 through November 30.
pub const fn is_valid_date(month: u8, day: u8) -> bool {
    match month {
        OCTOBER => day >= WINDOW_OPEN_DAY && day <= DAYS_IN_OCTOBER,
        NOVEMBER => day >= 1 && day <= DAYS_IN_NOVEMBER,
        _ => false,
    }
}

/// An order date guaranteed to fall inside the promotional window
/// (October 15 through November 30 of `PROMO_YEAR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct OrderDate {
    month: u8,
    day:   u8,
}

impl OrderDate {
    /// Creates a new `OrderDate`, validating it against the order window.
    ///
    /// # Errors
    /// Returns `OrderError::InvalidDate` if the date is outside
    /// October 15 - November 30.
    pub const fn new(month: u8, day: u8) -> Result<Self, OrderError> {
        if is_valid_date(month, day) {
            Ok(Self { month, day })
        } else {
            Err(OrderError::InvalidDate { month, day })
        }
    }

    /// Returns the month component (10 or 11)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day component
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }
}

impl TryFrom<(u8, u8)> for OrderDate {
    type Error = OrderError;

    fn try_from(value: (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl From<OrderDate> for (u8, u8) {
    fn from(date: OrderDate) -> Self {
        (date.month, date.day)
    }
}

impl fmt::Display for OrderDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.month, self.day, PROMO_YEAR)
    }
}

/// Shipping options offered during the promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShippingMethod {
    /// Five-day shipping, $3 unless discounted
    Standard,
    /// Two-day shipping, $5 with no discounts
    TwoDay,
}

impl ShippingMethod {
    /// Calendar days from order to arrival for this method
    #[inline]
    pub const fn lead_days(self) -> u8 {
        match self {
            Self::Standard => STANDARD_LEAD_DAYS,
            Self::TwoDay => TWO_DAY_LEAD_DAYS,
        }
    }

    /// True for Two-day shipping, whose charge is never discounted
    #[inline]
    pub const fn is_two_day(self) -> bool {
        matches!(self, Self::TwoDay)
    }
}

impl TryFrom<char> for ShippingMethod {
    type Error = OrderError;

    fn try_from(selector: char) -> Result<Self, Self::Error> {
        match selector {
            's' | 'S' => Ok(Self::Standard),
            't' | 'T' => Ok(Self::TwoDay),
            other => Err(OrderError::InvalidShipping(other)),
        }
    }
}

impl FromStr for ShippingMethod {
    type Err = OrderError;

    /// Parses from the first character of the trimmed input, so "S", "s",
    /// and "standard" all select Standard shipping.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s
            .trim()
            .chars()
            .next()
            .ok_or(OrderError::InvalidShipping(' '))?;
        Self::try_from(selector)
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "Standard"),
            Self::TwoDay => write!(f, "Two-day"),
        }
    }
}

/// Day of the week, displayed in three-letter form on receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    /// Maps a weekday index from the day-of-week formula: 0 is Sunday,
    /// 6 is Saturday.
    pub(crate) const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Sun,
            1 => Self::Mon,
            2 => Self::Tue,
            3 => Self::Wed,
            4 => Self::Thu,
            5 => Self::Fri,
            _ => Self::Sat,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sun => "Sun",
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
        };
        write!(f, "{name}")
    }
}

/// Item quantities for a single order, guaranteed non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i64, i64, i64)", into = "(i64, i64, i64)")]
pub struct ItemCounts {
    bottles: i64,
    mugs:    i64,
    bags:    i64,
}

impl ItemCounts {
    /// Creates new item counts, validating that each is non-negative.
    ///
    /// # Errors
    /// Returns `OrderError::NegativeQuantity` with the offending count.
    pub const fn new(bottles: i64, mugs: i64, bags: i64) -> Result<Self, OrderError> {
        if bottles < 0 {
            return Err(OrderError::NegativeQuantity(bottles));
        }
        if mugs < 0 {
            return Err(OrderError::NegativeQuantity(mugs));
        }
        if bags < 0 {
            return Err(OrderError::NegativeQuantity(bags));
        }
        Ok(Self {
            bottles,
            mugs,
            bags,
        })
    }

    /// Number of water bottles ordered
    #[inline]
    pub const fn bottles(self) -> i64 {
        self.bottles
    }

    /// Number of coffee mugs ordered
    #[inline]
    pub const fn mugs(self) -> i64 {
        self.mugs
    }

    /// Number of tote bags ordered
    #[inline]
    pub const fn bags(self) -> i64 {
        self.bags
    }

    /// Order subtotal in whole dollars. Infallible because the counts were
    /// validated at construction.
    pub const fn subtotal(self) -> i64 {
        self.bottles * BOTTLE_PRICE + self.mugs * MUG_PRICE + self.bags * BAG_PRICE
    }

    /// Total number of items across all three products
    pub const fn total_ordered(self) -> i64 {
        self.bottles + self.mugs + self.bags
    }

    /// True when nothing was ordered at all
    pub const fn is_empty(self) -> bool {
        self.total_ordered() == 0
    }
}

impl TryFrom<(i64, i64, i64)> for ItemCounts {
    type Error = OrderError;

    fn try_from(value: (i64, i64, i64)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<ItemCounts> for (i64, i64, i64) {
    fn from(counts: ItemCounts) -> Self {
        (counts.bottles, counts.mugs, counts.bags)
    }
}
