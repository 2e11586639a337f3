use serde::Serialize;
use voltbill_core::{Bill, BillingError, Customer, CustomerClass, FormInput, Session, Settings};

pub struct BillParams<'a> {
    pub settings: &'a Settings,
    pub name: &'a str,
    pub id: &'a str,
    pub units: &'a str,
    pub class: CustomerClass,
    pub save: bool,
    pub json: bool,
}

#[derive(Serialize)]
struct BillJson<'a> {
    customer: &'a Customer,
    bill: &'a Bill,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_to: Option<String>,
}

/// Run one generate (and optional save) cycle from command-line values.
pub fn execute(p: &BillParams<'_>) -> anyhow::Result<()> {
    tracing::debug!(out_dir = %p.settings.out_dir.display(), save = p.save, "one-shot bill");
    let mut session = Session::new(p.settings.clone());
    session.input = FormInput::new(p.name, p.id, p.units, p.class);
    let receipt = session.generate().map_err(user_error)?.clone();

    let saved_to = if p.save {
        Some(session.save().map_err(user_error)?)
    } else {
        None
    };

    if p.json {
        let out = BillJson {
            customer: &receipt.customer,
            bill: &receipt.bill,
            saved_to: saved_to.as_ref().map(|path| path.display().to_string()),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", receipt.text);
        if let Some(path) = saved_to {
            println!();
            println!("Bill saved successfully! ({})", path.display());
        }
    }
    Ok(())
}

fn user_error(e: BillingError) -> anyhow::Error {
    anyhow::anyhow!("{} ({e})", e.user_message())
}
