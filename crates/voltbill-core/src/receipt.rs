//! Fixed-layout text receipt.

use std::fmt::Write;

use crate::bill::Bill;
use crate::customer::Customer;

/// Currency symbol used when none is configured.
pub const DEFAULT_CURRENCY: &str = "₹";

/// `dd-MM-yyyy HH:mm:ss`, 24-hour clock.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

const BANNER: &str = "========= ELECTRICITY BILL =========";
const SEPARATOR: &str = "------------------------------------";
const FOOTER: &str = "====================================";
const THANKS: &str = "Thank you for using our service!";

/// Render the receipt with the default currency symbol.
pub fn render(customer: &Customer, bill: &Bill) -> String {
    render_with_currency(customer, bill, DEFAULT_CURRENCY)
}

/// Render the receipt, prefixing money with `currency`.
pub fn render_with_currency(customer: &Customer, bill: &Bill, currency: &str) -> String {
    let mut out = String::new();
    let time = bill.timestamp.format(TIMESTAMP_FORMAT);
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "Date & Time     : {time}");
    let _ = writeln!(out, "Customer Name   : {}", customer.name);
    let _ = writeln!(out, "Customer ID     : {}", customer.id);
    let _ = writeln!(out, "Customer Type   : {}", customer.class);
    let _ = writeln!(out, "Units Consumed  : {} units", customer.units);
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(out, "Bill Amount     : {currency} {:.2}", bill.amount);
    let _ = writeln!(out, "Tax (5%)        : {currency} {:.2}", bill.tax);
    let _ = writeln!(out, "Total Payable   : {currency} {:.2}", bill.total);
    let _ = writeln!(out, "{FOOTER}");
    let _ = writeln!(out, "{THANKS}");
    out
}
