//! One interactive billing cycle: collect, validate, generate, save, clear.
//!
//! A [`Session`] owns the form input and the last generated receipt. It is
//! either `Idle` (no receipt) or `BillReady`. Failed actions never change
//! the state, so a ready bill survives a later validation or save error.

use std::path::{Path, PathBuf};

use crate::bill::Bill;
use crate::customer::{validate_and_collect, Customer};
use crate::error::BillingError;
use crate::rate::CustomerClass;
use crate::receipt::render_with_currency;
use crate::settings::Settings;

/// Raw, unvalidated form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub id: String,
    pub units: String,
    pub class: CustomerClass,
}

impl FormInput {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        units: impl Into<String>,
        class: CustomerClass,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            units: units.into(),
            class,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.id.is_empty() && self.units.is_empty()
    }
}

/// A generated bill together with its rendered text.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub customer: Customer,
    pub bill: Bill,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    BillReady,
}

/// Outcome of an exit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDecision {
    Quit,
    Stay,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub input: FormInput,
    receipt: Option<Receipt>,
    settings: Settings,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            input: FormInput::default(),
            receipt: None,
            settings,
        }
    }

    pub fn state(&self) -> SessionState {
        match self.receipt {
            Some(_) => SessionState::BillReady,
            None => SessionState::Idle,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == SessionState::BillReady
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    /// Rendered receipt text, empty while idle.
    pub fn receipt_text(&self) -> &str {
        self.receipt().map(|r| r.text.as_str()).unwrap_or("")
    }

    /// Validate the current input and produce a fresh receipt.
    ///
    /// On error the previous state is kept as is.
    pub fn generate(&mut self) -> Result<&Receipt, BillingError> {
        let FormInput {
            name,
            id,
            units,
            class,
        } = &self.input;
        let customer = validate_and_collect(name, id, units, *class).inspect_err(|e| {
            tracing::debug!(error = %e, "bill input rejected");
        })?;
        let bill = Bill::generate(&customer);
        let text = render_with_currency(&customer, &bill, &self.settings.currency);
        tracing::info!(
            customer_id = %customer.id,
            class = %customer.class,
            units = customer.units,
            total = bill.total,
            "bill generated"
        );
        Ok(&*self.receipt.insert(Receipt {
            customer,
            bill,
            text,
        }))
    }

    /// Save the current receipt to `ElectricityBill_<id>.txt` in the
    /// configured output directory.
    ///
    /// The file is named from the id field as it reads now, trimmed.
    pub fn save(&self) -> Result<PathBuf, BillingError> {
        let receipt = self.receipt().ok_or(BillingError::NothingToSave)?;
        save(&self.settings.out_dir, &receipt.text, self.input.id.trim())
    }

    /// Empty the text fields and drop the receipt. The class selector keeps
    /// its value.
    pub fn clear(&mut self) {
        self.input = FormInput {
            class: self.input.class,
            ..FormInput::default()
        };
        self.receipt = None;
        tracing::debug!("session cleared");
    }

    pub fn exit(&self, confirmed: bool) -> ExitDecision {
        if confirmed {
            tracing::info!("exit confirmed");
            ExitDecision::Quit
        } else {
            ExitDecision::Stay
        }
    }
}

/// Write `receipt_text` verbatim to `ElectricityBill_<id>.txt` under `out_dir`.
pub fn save(out_dir: &Path, receipt_text: &str, id: &str) -> Result<PathBuf, BillingError> {
    match voltbill_store::save_receipt(out_dir, id, receipt_text) {
        Ok(path) => {
            tracing::info!(path = %path.display(), "receipt saved");
            Ok(path)
        }
        Err(e) => {
            tracing::warn!(error = %e, customer_id = %id, "receipt save failed");
            Err(e.into())
        }
    }
}
