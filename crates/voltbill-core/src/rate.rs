//! Per-class tiered tariff.
//!
//! Every class shares the same two breakpoints (100 and 300 units) and
//! differs only in its three per-unit rates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of the first tier.
pub const FIRST_BREAKPOINT: u64 = 100;

/// Upper bound (inclusive) of the second tier.
pub const SECOND_BREAKPOINT: u64 = 300;

/// Customer tariff class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CustomerClass {
    #[default]
    Domestic,
    Commercial,
    Industrial,
}

impl CustomerClass {
    pub const ALL: [CustomerClass; 3] = [
        CustomerClass::Domestic,
        CustomerClass::Commercial,
        CustomerClass::Industrial,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CustomerClass::Domestic => "Domestic",
            CustomerClass::Commercial => "Commercial",
            CustomerClass::Industrial => "Industrial",
        }
    }

    pub fn next(self) -> Self {
        match self {
            CustomerClass::Domestic => CustomerClass::Commercial,
            CustomerClass::Commercial => CustomerClass::Industrial,
            CustomerClass::Industrial => CustomerClass::Domestic,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            CustomerClass::Domestic => CustomerClass::Industrial,
            CustomerClass::Commercial => CustomerClass::Domestic,
            CustomerClass::Industrial => CustomerClass::Commercial,
        }
    }

    pub fn schedule(self) -> RateSchedule {
        RateSchedule::for_class(self)
    }
}

impl fmt::Display for CustomerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown customer class {0:?} (expected domestic, commercial, or industrial)")]
pub struct UnknownClass(pub String);

impl FromStr for CustomerClass {
    type Err = UnknownClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CustomerClass::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownClass(s.to_string()))
    }
}

/// Per-unit rates for the three tiers of one class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSchedule {
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
}

/// Units billed within one tier and what they cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierCharge {
    pub tier: u8,
    pub units: u64,
    pub rate: f64,
    pub charge: f64,
}

impl RateSchedule {
    pub const fn for_class(class: CustomerClass) -> Self {
        match class {
            CustomerClass::Domestic => RateSchedule {
                r1: 1.20,
                r2: 2.00,
                r3: 3.00,
            },
            CustomerClass::Commercial => RateSchedule {
                r1: 2.00,
                r2: 3.00,
                r3: 4.00,
            },
            CustomerClass::Industrial => RateSchedule {
                r1: 3.50,
                r2: 5.00,
                r3: 6.00,
            },
        }
    }

    /// Charge for `units` under this schedule.
    pub fn amount(&self, units: u64) -> f64 {
        let first = FIRST_BREAKPOINT as f64;
        let second_span = (SECOND_BREAKPOINT - FIRST_BREAKPOINT) as f64;
        if units <= FIRST_BREAKPOINT {
            units as f64 * self.r1
        } else if units <= SECOND_BREAKPOINT {
            first * self.r1 + (units - FIRST_BREAKPOINT) as f64 * self.r2
        } else {
            first * self.r1 + second_span * self.r2 + (units - SECOND_BREAKPOINT) as f64 * self.r3
        }
    }

    /// Split `units` across the three tiers.
    pub fn breakdown(&self, units: u64) -> [TierCharge; 3] {
        let t1 = units.min(FIRST_BREAKPOINT);
        let t2 = units.clamp(FIRST_BREAKPOINT, SECOND_BREAKPOINT) - FIRST_BREAKPOINT;
        let t3 = units.saturating_sub(SECOND_BREAKPOINT);
        let tier = |tier: u8, units: u64, rate: f64| TierCharge {
            tier,
            units,
            rate,
            charge: units as f64 * rate,
        };
        [tier(1, t1, self.r1), tier(2, t2, self.r2), tier(3, t3, self.r3)]
    }
}

/// Tiered charge for `units` consumed by a customer of `class`.
pub fn calculate_bill(class: CustomerClass, units: u64) -> f64 {
    class.schedule().amount(units)
}
