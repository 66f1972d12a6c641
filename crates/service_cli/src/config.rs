//! Scenario file loading.
//!
//! Scenario files are TOML:
//!
//! ```toml
//! shift_ratio = 0.5
//! apply_direct_fee_zero = true
//! apply_direct_price_policy = true
//!
//! [reduction_rates]
//! musinsa = 0.5
//! coupang = 0.2
//! ```
//!
//! Missing fields take the prototype's defaults: shift ratio 0.35 and both
//! policy flags enabled. Channel keys may use any casing; they are
//! normalised when the kernel configuration is built.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use cannibal_scenario::ScenarioConfig;
use serde::Deserialize;

use crate::{CliError, Result};

/// Default external-to-direct shift ratio when the file omits it.
const DEFAULT_SHIFT_RATIO: f64 = 0.35;

/// On-disk scenario file schema.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScenarioFile {
    /// Fraction of reduced external demand recaptured by the direct channel
    pub shift_ratio: f64,
    /// Force zero fees on direct-channel rows
    pub apply_direct_fee_zero: bool,
    /// Reserved direct price policy flag (no-op)
    pub apply_direct_price_policy: bool,
    /// Reduction fraction per non-direct channel
    pub reduction_rates: HashMap<String, f64>,
}

impl Default for ScenarioFile {
    fn default() -> Self {
        Self {
            shift_ratio: DEFAULT_SHIFT_RATIO,
            apply_direct_fee_zero: true,
            apply_direct_price_policy: true,
            reduction_rates: HashMap::new(),
        }
    }
}

impl ScenarioFile {
    /// Load and parse a scenario TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Build the kernel configuration from this file.
    pub fn into_config(self) -> ScenarioConfig {
        ScenarioConfig::new()
            .with_reductions(self.reduction_rates)
            .with_shift_ratio(self.shift_ratio)
            .with_direct_fee_zero(self.apply_direct_fee_zero)
            .with_direct_price_policy(self.apply_direct_price_policy)
    }
}
