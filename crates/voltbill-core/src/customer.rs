use serde::Serialize;

use crate::error::{BillingError, Field};
use crate::rate::CustomerClass;

/// A validated customer, built fresh for each billing action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub name: String,
    pub id: String,
    pub units: u64,
    pub class: CustomerClass,
}

/// Validate raw form values into a [`Customer`].
///
/// Emptiness is checked for all three text fields before the units are
/// parsed, so a form with an empty name and `"abc"` units reports the
/// missing field.
pub fn validate_and_collect(
    name: &str,
    id: &str,
    units_text: &str,
    class: CustomerClass,
) -> Result<Customer, BillingError> {
    let name = name.trim();
    let id = id.trim();
    let units_text = units_text.trim();

    let missing: Vec<Field> = [
        (Field::Name, name),
        (Field::Id, id),
        (Field::Units, units_text),
    ]
    .into_iter()
    .filter(|(_, v)| v.is_empty())
    .map(|(f, _)| f)
    .collect();
    if !missing.is_empty() {
        return Err(BillingError::MissingField(missing));
    }

    let units = parse_units(units_text)?;

    Ok(Customer {
        name: name.to_string(),
        id: id.to_string(),
        units,
        class,
    })
}

fn parse_units(text: &str) -> Result<u64, BillingError> {
    let invalid = |reason| BillingError::InvalidUnits {
        input: text.to_string(),
        reason,
    };
    let value: i64 = text.parse().map_err(|_| invalid("not an integer"))?;
    u64::try_from(value).map_err(|_| invalid("must not be negative"))
}
