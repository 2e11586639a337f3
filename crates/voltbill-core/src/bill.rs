use chrono::{DateTime, Local};
use serde::Serialize;

use crate::customer::Customer;
use crate::rate::calculate_bill;

/// Flat tax applied on top of the tiered amount.
pub const TAX_RATE: f64 = 0.05;

/// A computed bill. Values are kept unrounded; rounding happens only when
/// the receipt is formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bill {
    pub amount: f64,
    pub tax: f64,
    pub total: f64,
    pub timestamp: DateTime<Local>,
}

impl Bill {
    /// Compute the bill for `customer`, stamped with the current local time.
    pub fn generate(customer: &Customer) -> Self {
        Self::generate_at(customer, Local::now())
    }

    /// Compute the bill for `customer` with an explicit timestamp.
    pub fn generate_at(customer: &Customer, timestamp: DateTime<Local>) -> Self {
        let amount = calculate_bill(customer.class, customer.units);
        let tax = amount * TAX_RATE;
        Bill {
            amount,
            tax,
            total: amount + tax,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate::CustomerClass;

    fn customer(units: u64, class: CustomerClass) -> Customer {
        Customer {
            name: "Asha".into(),
            id: "C001".into(),
            units,
            class,
        }
    }

    #[test]
    fn domestic_250() {
        let bill = Bill::generate(&customer(250, CustomerClass::Domestic));
        assert!((bill.amount - 420.0).abs() < 1e-9);
        assert!((bill.tax - 21.0).abs() < 1e-9);
        assert!((bill.total - 441.0).abs() < 1e-9);
    }

    #[test]
    fn commercial_350() {
        let bill = Bill::generate(&customer(350, CustomerClass::Commercial));
        assert!((bill.amount - 1000.0).abs() < 1e-9);
        assert!((bill.tax - 50.0).abs() < 1e-9);
        assert!((bill.total - 1050.0).abs() < 1e-9);
    }

    #[test]
    fn tax_and_total_relations_hold() {
        for class in CustomerClass::ALL {
            for units in [0, 1, 7, 99, 100, 101, 250, 300, 301, 777, 10_000] {
                let bill = Bill::generate(&customer(units, class));
                assert_eq!(bill.tax, bill.amount * TAX_RATE);
                assert_eq!(bill.total, bill.amount + bill.tax);
            }
        }
    }

    #[test]
    fn timestamp_is_fixed_at_creation() {
        let ts = Local::now();
        let bill = Bill::generate_at(&customer(10, CustomerClass::Domestic), ts);
        assert_eq!(bill.timestamp, ts);
    }

    #[test]
    fn serializes_to_json() {
        let bill = Bill::generate(&customer(250, CustomerClass::Domestic));
        let v = serde_json::to_value(&bill).unwrap();
        assert_eq!(v["amount"], serde_json::json!(420.0));
        assert!(v["timestamp"].is_string());
    }
}
