//! System configuration.
//!
//! Defaults suit the demo; each field can be overridden from the environment:
//!
//! | Variable | Field | Default |
//! |---|---|---|
//! | `PLATTER_TAX_RATE` | `tax_rate` | `0.05` |
//! | `PLATTER_CURRENCY` | `currency` | `INR` |
//! | `PLATTER_MAILBOX` | `mailbox_size` | `32` |
//! | `PLATTER_DB` | `database_path` | unset (in-memory store) |

use crate::cart_actor::DEFAULT_TAX_RATE;
use crate::order_actor::CheckoutTerms;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    pub tax_rate: f64,
    pub currency: String,
    /// Channel capacity of every actor.
    pub mailbox_size: usize,
    /// SQLite file backing the store; `None` keeps everything in memory.
    pub database_path: Option<PathBuf>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            currency: "INR".to_string(),
            mailbox_size: 32,
            database_path: None,
        }
    }
}

impl SystemConfig {
    /// Defaults overridden by `PLATTER_*` variables. Unparseable values are logged and
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(rate) = parse::<f64>(&lookup, "PLATTER_TAX_RATE") {
            if rate.is_finite() && rate >= 0.0 {
                config.tax_rate = rate;
            } else {
                warn!(rate, "Ignoring invalid tax rate");
            }
        }
        if let Some(currency) = lookup("PLATTER_CURRENCY").filter(|c| !c.trim().is_empty()) {
            config.currency = currency.trim().to_uppercase();
        }
        if let Some(size) = parse::<usize>(&lookup, "PLATTER_MAILBOX") {
            if size > 0 {
                config.mailbox_size = size;
            } else {
                warn!("Ignoring zero mailbox size");
            }
        }
        if let Some(path) = lookup("PLATTER_DB").filter(|p| !p.trim().is_empty()) {
            config.database_path = Some(PathBuf::from(path));
        }
        config
    }

    pub fn checkout_terms(&self) -> CheckoutTerms {
        CheckoutTerms {
            tax_rate: self.tax_rate,
            currency: self.currency.clone(),
        }
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = name, value = %raw, "Ignoring unparseable setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_overrides() {
        let config = SystemConfig::from_lookup(lookup(&[
            ("PLATTER_TAX_RATE", "0.18"),
            ("PLATTER_CURRENCY", "usd"),
            ("PLATTER_MAILBOX", "8"),
            ("PLATTER_DB", "/tmp/platter.db"),
        ]));
        assert_eq!(config.tax_rate, 0.18);
        assert_eq!(config.currency, "USD");
        assert_eq!(config.mailbox_size, 8);
        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/platter.db")));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = SystemConfig::from_lookup(lookup(&[
            ("PLATTER_TAX_RATE", "five percent"),
            ("PLATTER_MAILBOX", "0"),
            ("PLATTER_DB", " "),
        ]));
        assert_eq!(config, SystemConfig::default());
    }
}
