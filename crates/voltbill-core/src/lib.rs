pub mod bill;
pub mod customer;
pub mod error;
pub mod rate;
pub mod receipt;
pub mod session;
pub mod settings;

pub use bill::{Bill, TAX_RATE};
pub use customer::{validate_and_collect, Customer};
pub use error::{BillingError, Field};
pub use rate::{calculate_bill, CustomerClass, RateSchedule, TierCharge};
pub use receipt::{render, render_with_currency};
pub use session::{ExitDecision, FormInput, Receipt, Session, SessionState};
pub use settings::Settings;
