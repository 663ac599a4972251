//! Interactive session driver for the club-store order calculator.
//!
//! Prompts for an order date, item quantities, a shipping choice, and an
//! optional coupon, then prints the receipt and arrival date. Any fatal
//! validation failure prints its diagnostic and exits with status 1; a wrong
//! coupon code only forfeits the discount.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::process::ExitCode;

use club_store::{
    ItemCounts, Order, OrderDate, OrderError, Receipt, ShippingMethod, coupon_is_valid,
};

#[derive(Debug, thiserror::Error)]
enum SessionError {
    #[error("Input error: {0}")]
    Io(#[from] io::Error),

    #[error("Unexpected end of input")]
    UnexpectedEof,

    #[error("Invalid number: {0}")]
    NotANumber(String),

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Whitespace-delimited token reader; tokens may span lines, so
/// "11 9" on one line and "11\n9" on two read the same.
struct Tokens<R> {
    reader:  R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next(&mut self) -> Result<String, SessionError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(SessionError::UnexpectedEof);
            }
            self.pending
                .extend(line.split_whitespace().map(ToOwned::to_owned));
        }
    }

    fn next_i64(&mut self) -> Result<i64, SessionError> {
        let token = self.next()?;
        token
            .parse()
            .map_err(|_| SessionError::NotANumber(token))
    }
}

fn print_banner() {
    println!("                    Welcome to our Club Store!");
    println!("All orders must be placed between October 15 and November 30, 2022.");
    println!("When prompted, please enter today's date and the number of each");
    println!("item you would like to purchase. Please enter S to choose Standard");
    println!("(five-day) shipping or T to choose Two-day shipping. Orders of");
    println!("$25.00 or more receive free Standard shipping. Entering the correct");
    println!("coupon code also entitles you to free Standard shipping! A receipt");
    println!("and the arrival date of your order will be displayed.");
}

/// Clamps out-of-range date components to 0, which can never form a valid
/// order date and so surfaces as an invalid-date error.
const fn date_component(value: i64) -> u8 {
    if value < 0 || value > u8::MAX as i64 {
        0
    } else {
        value as u8
    }
}

fn read_date<R: BufRead>(tokens: &mut Tokens<R>) -> Result<OrderDate, SessionError> {
    println!("Month Day (e.g., 11 9): ");
    let month = tokens.next_i64()?;
    let day = tokens.next_i64()?;
    Ok(OrderDate::new(date_component(month), date_component(day))?)
}

fn read_quantity<R: BufRead>(tokens: &mut Tokens<R>, prompt: &str) -> Result<i64, SessionError> {
    println!("{prompt}");
    let count = tokens.next_i64()?;
    if count < 0 {
        return Err(OrderError::NegativeQuantity(count).into());
    }
    Ok(count)
}

fn read_shipping<R: BufRead>(tokens: &mut Tokens<R>) -> Result<ShippingMethod, SessionError> {
    println!("Shipping (S-tandard, T-wo Day): ");
    Ok(tokens.next()?.parse()?)
}

/// Offers the coupon prompt and returns whether a valid code was entered.
/// A wrong code is reported but the session continues without a discount.
fn read_coupon<R: BufRead>(tokens: &mut Tokens<R>) -> Result<bool, SessionError> {
    println!("Coupon (y,n): ");
    let answer = tokens.next()?;
    if !answer.starts_with(['y', 'Y']) {
        return Ok(false);
    }
    println!("Coupon Code: ");
    let code = tokens.next()?;
    let valid = coupon_is_valid(&code);
    if !valid {
        println!("Invalid code");
    }
    Ok(valid)
}

#[allow(clippy::cast_precision_loss)]
fn dollars(amount: i64) -> String {
    format!("{:.2}", amount as f64)
}

fn run<R: BufRead>(tokens: &mut Tokens<R>) -> Result<(), SessionError> {
    print_banner();

    let date = read_date(tokens)?;
    let bottles = read_quantity(tokens, "Number of Water Bottles($10.00 each): ")?;
    let mugs = read_quantity(tokens, "Number of Coffee Mugs($12.00 each): ")?;
    let bags = read_quantity(tokens, "Number of Tote Bags($18.00 each): ")?;

    let order = Order::new(date, ItemCounts::new(bottles, mugs, bags)?);

    let receipt = if order.is_empty() {
        Receipt::empty()
    } else {
        let method = read_shipping(tokens)?;
        let coupon_valid = if order.coupon_applies(method) {
            read_coupon(tokens)?
        } else {
            false
        };
        order.checkout(method, coupon_valid)?
    };

    println!("Subtotal: $ {}", dollars(receipt.subtotal()));
    println!("Shipping: $ {}", dollars(receipt.shipping()));
    println!("Total: $ {}", dollars(receipt.total()));
    if let Some(arrival) = receipt.arrival() {
        println!("Arrival date: {arrival}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let stdin = io::stdin();
    let mut tokens = Tokens::new(stdin.lock());
    match run(&mut tokens) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Tokens<&[u8]> {
        Tokens::new(input.as_bytes())
    }

    #[test]
    fn test_tokens_span_lines() {
        let mut t = tokens("11 9\n2\n");
        assert_eq!(t.next().unwrap(), "11");
        assert_eq!(t.next().unwrap(), "9");
        assert_eq!(t.next_i64().unwrap(), 2);
        assert!(matches!(t.next(), Err(SessionError::UnexpectedEof)));
    }

    #[test]
    fn test_tokens_reject_non_numeric() {
        let mut t = tokens("abc\n");
        assert!(matches!(t.next_i64(), Err(SessionError::NotANumber(_))));
    }

    #[test]
    fn test_date_component_clamps_out_of_range() {
        assert_eq!(date_component(-5), 0);
        assert_eq!(date_component(300), 0);
        assert_eq!(date_component(11), 11);
    }

    #[test]
    fn test_read_date_valid() {
        let mut t = tokens("11 9\n");
        let date = read_date(&mut t).unwrap();
        assert_eq!((date.month(), date.day()), (11, 9));
    }

    #[test]
    fn test_read_date_invalid() {
        let mut t = tokens("12 1\n");
        let result = read_date(&mut t);
        assert!(matches!(
            result,
            Err(SessionError::Order(OrderError::InvalidDate { .. }))
        ));
    }

    #[test]
    fn test_read_quantity_rejects_negative() {
        let mut t = tokens("-2\n");
        let result = read_quantity(&mut t, "count: ");
        assert!(matches!(
            result,
            Err(SessionError::Order(OrderError::NegativeQuantity(-2)))
        ));
    }

    #[test]
    fn test_read_coupon_paths() {
        // Declined
        let mut t = tokens("n\n");
        assert!(!read_coupon(&mut t).unwrap());

        // Accepted with the right code
        let mut t = tokens("y PACK2022\n");
        assert!(read_coupon(&mut t).unwrap());

        // Accepted with a wrong code: reported, not fatal
        let mut t = tokens("yes pack2022\n");
        assert!(!read_coupon(&mut t).unwrap());
    }

    #[test]
    fn test_dollars_formatting() {
        assert_eq!(dollars(0), "0.00");
        assert_eq!(dollars(13), "13.00");
    }

    #[test]
    fn test_run_empty_order() {
        let mut t = tokens("11 9\n0\n0\n0\n");
        assert!(run(&mut t).is_ok());
    }

    #[test]
    fn test_run_full_session_with_coupon() {
        let mut t = tokens("10 20\n1\n0\n0\ns\ny\nPACK2022\n");
        assert!(run(&mut t).is_ok());
    }

    #[test]
    fn test_run_two_day_skips_coupon_prompt() {
        // No coupon tokens supplied; two-day must not ask for one
        let mut t = tokens("11 9\n1\n0\n0\nT\n");
        assert!(run(&mut t).is_ok());
    }

    #[test]
    fn test_run_invalid_shipping_selector() {
        let mut t = tokens("11 9\n1\n0\n0\nq\n");
        assert!(matches!(
            run(&mut t),
            Err(SessionError::Order(OrderError::InvalidShipping('q')))
        ));
    }
}
