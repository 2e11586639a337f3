use serde::Serialize;
use voltbill_core::rate::{FIRST_BREAKPOINT, SECOND_BREAKPOINT};
use voltbill_core::{calculate_bill, CustomerClass, TierCharge};

#[derive(Serialize)]
struct RateRow {
    class: CustomerClass,
    rates: [f64; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<[TierCharge; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<f64>,
}

fn rows(units: Option<u64>) -> Vec<RateRow> {
    CustomerClass::ALL
        .into_iter()
        .map(|class| {
            let s = class.schedule();
            RateRow {
                class,
                rates: [s.r1, s.r2, s.r3],
                breakdown: units.map(|u| s.breakdown(u)),
                amount: units.map(|u| calculate_bill(class, u)),
            }
        })
        .collect()
}

/// Print the tariff table, optionally with a per-tier breakdown.
pub fn execute(units: Option<u64>, json: bool) -> anyhow::Result<()> {
    let rows = rows(units);
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    print!("{}", format_table(&rows, units));
    Ok(())
}

fn format_table(rows: &[RateRow], units: Option<u64>) -> String {
    let mut out = String::new();
    let low = format!("1-{FIRST_BREAKPOINT}");
    let mid = format!("{}-{SECOND_BREAKPOINT}", FIRST_BREAKPOINT + 1);
    let high = format!("{}+", SECOND_BREAKPOINT + 1);
    out.push_str(&format!(
        "{:<12} {:>8} {:>8} {:>8}\n",
        "Class", low, mid, high
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<12} {:>8.2} {:>8.2} {:>8.2}\n",
            row.class.label(),
            row.rates[0],
            row.rates[1],
            row.rates[2]
        ));
    }

    if let Some(units) = units {
        out.push_str(&format!("\nBreakdown for {units} units:\n"));
        for row in rows {
            let (Some(parts), Some(amount)) = (row.breakdown, row.amount) else {
                continue;
            };
            out.push_str(&format!("  {}\n", row.class.label()));
            for t in parts.iter().filter(|t| t.units > 0) {
                out.push_str(&format!(
                    "    tier {}: {:>6} x {:.2} = {:>10.2}\n",
                    t.tier, t.units, t.rate, t.charge
                ));
            }
            out.push_str(&format!("    amount:{:>25.2}\n", amount));
        }
    }
    out
}
