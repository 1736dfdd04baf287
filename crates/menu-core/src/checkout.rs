//! Checkout Formatter
//!
//! Turns the cart into an order message and a WhatsApp deep link.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::cart::Cart;
use crate::config::MenuConfig;
use crate::domain::{DomainError, DomainResult};

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const PHONE_DIGITS: usize = 10;
const INVALID_PHONE: &str = "Please enter a valid 10-digit mobile number.";

/// Percent-encode a value for use inside a URL query
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Format a rupee amount the way it is printed on the bill: no decimals
/// when whole, otherwise at most two.
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        let text = format!("{:.2}", rounded);
        text.trim_end_matches('0').to_string()
    }
}

/// A customer's 10-digit mobile number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl FromStr for PhoneNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == PHONE_DIGITS && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(DomainError::InvalidInput(INVALID_PHONE.to_string()))
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the order text sent to the café
pub fn order_message(cart: &Cart, customer: &PhoneNumber) -> String {
    let mut message = String::from("*New Order from Cafe App*\n");
    let _ = writeln!(message, "Customer Mobile: {}\n", customer);
    message.push_str("*Order Details:*\n");
    for line in cart.lines() {
        let _ = writeln!(
            message,
            "• {} x {} (₹{})",
            line.quantity,
            line.item.name,
            format_amount(line.line_total())
        );
    }
    let _ = write!(message, "\n*Total Bill: ₹{}*\n\n", format_amount(cart.total()));
    message.push_str("Please confirm this order.");
    message
}

/// Deep link that opens a chat with `recipient` prefilled with `message`
pub fn whatsapp_link(base_url: &str, recipient: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        base_url.trim_end_matches('/'),
        recipient,
        encode_uri_component(message)
    )
}

/// Validate the customer's number and build the link for the current cart
pub fn checkout_url(config: &MenuConfig, cart: &Cart, phone: &str) -> DomainResult<String> {
    if cart.is_empty() {
        return Err(DomainError::InvalidInput("Your cart is empty.".to_string()));
    }
    let customer: PhoneNumber = phone.parse()?;
    let message = order_message(cart, &customer);
    Ok(whatsapp_link(&config.messaging_base_url, &config.whatsapp_number, &message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MenuItem;

    fn item(id: &str, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            category: "Cafe".to_string(),
            image: String::new(),
        }
    }

    fn latte_and_brownie() -> Cart {
        let latte = item("1", "Latte", 150.0);
        let mut cart = Cart::new();
        cart.add_item(&latte);
        cart.add_item(&latte);
        cart.add_item(&item("2", "Brownie", 120.0));
        cart
    }

    #[test]
    fn test_phone_validation() {
        assert!("9876543210".parse::<PhoneNumber>().is_ok());
        for bad in ["", "987654321", "98765432100", "98765x3210", "+987654321", "９８７６５４３２１０"] {
            let err = bad.parse::<PhoneNumber>().unwrap_err();
            assert_eq!(err, DomainError::InvalidInput(INVALID_PHONE.to_string()), "{bad}");
        }
    }

    #[test]
    fn test_order_message() {
        let cart = latte_and_brownie();
        let phone: PhoneNumber = "9876543210".parse().unwrap();
        let message = order_message(&cart, &phone);

        assert_eq!(cart.total(), 420.0);
        assert_eq!(
            message,
            "*New Order from Cafe App*\n\
             Customer Mobile: 9876543210\n\n\
             *Order Details:*\n\
             • 2 x Latte (₹300)\n\
             • 1 x Brownie (₹120)\n\n\
             *Total Bill: ₹420*\n\n\
             Please confirm this order."
        );
    }

    #[test]
    fn test_checkout_url() {
        let config = MenuConfig::default();
        let url = checkout_url(&config, &latte_and_brownie(), "9876543210").unwrap();

        assert!(url.starts_with("https://wa.me/918600135430?text="));
        assert!(url.contains("2%20x%20Latte%20(%E2%82%B9300)"));
        assert!(url.contains("Total%20Bill%3A%20%E2%82%B9420"));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn test_checkout_rejects_bad_input() {
        let config = MenuConfig::default();
        assert!(checkout_url(&config, &latte_and_brownie(), "12345").is_err());
        assert!(checkout_url(&config, &Cart::new(), "9876543210").is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(420.0), "420");
        assert_eq!(format_amount(199.5), "199.5");
        assert_eq!(format_amount(3.333), "3.33");
        assert_eq!(format_amount(2.999), "3");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("*bold*"), "*bold*");
        assert_eq!(encode_uri_component("line\nbreak"), "line%0Abreak");
    }
}
