use std::fmt;

use voltbill_store::StoreError;

/// A required form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Id,
    Units,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Customer Name",
            Field::Id => "Customer ID",
            Field::Units => "Units Consumed",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every way a billing action can fail.
///
/// None of these end the session: the front-end shows
/// [`BillingError::user_message`] and waits for the next action.
#[derive(Debug, thiserror::Error)]
pub enum BillingError {
    #[error("missing required field(s): {}", join_fields(.0))]
    MissingField(Vec<Field>),

    #[error("invalid units {input:?}: {reason}")]
    InvalidUnits { input: String, reason: &'static str },

    #[error("no bill has been generated yet")]
    NothingToSave,

    #[error("could not save receipt: {0}")]
    Io(#[from] StoreError),
}

impl BillingError {
    /// Prompt text shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            BillingError::MissingField(_) => "Please fill all fields!",
            BillingError::InvalidUnits { .. } => "Units must be a valid number!",
            BillingError::NothingToSave => "Generate a bill first!",
            BillingError::Io(_) => "Error saving file!",
        }
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
