use std::path::PathBuf;

use crate::receipt::DEFAULT_CURRENCY;

/// Environment variable overriding the receipt output directory.
pub const ENV_OUT_DIR: &str = "VOLTBILL_OUT_DIR";

/// Environment variable overriding the currency symbol.
pub const ENV_CURRENCY: &str = "VOLTBILL_CURRENCY";

/// Runtime settings for a billing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory receipts are saved into.
    pub out_dir: PathBuf,
    /// Symbol prefixed to monetary values on the receipt.
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Settings {
    /// Defaults, with `VOLTBILL_OUT_DIR` / `VOLTBILL_CURRENCY` overrides.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(dir) = lookup(ENV_OUT_DIR).filter(|v| !v.trim().is_empty()) {
            settings.out_dir = PathBuf::from(dir);
        }
        if let Some(cur) = lookup(ENV_CURRENCY).filter(|v| !v.trim().is_empty()) {
            settings.currency = cur;
        }
        settings
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }
}
