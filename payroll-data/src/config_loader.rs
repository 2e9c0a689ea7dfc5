//! Loader for the social insurance configuration file.
//!
//! ## File format
//!
//! One `key = value` pair per line. Whitespace around keys and values is
//! ignored, as are blank lines and lines starting with `#`.
//!
//! | Key | Meaning |
//! |-------------|------------------------------------|
//! | `JiShuL` | Contribution base lower limit |
//! | `JiShuH` | Contribution base upper limit |
//! | `YangLao` | Pension rate |
//! | `YiLiao` | Medical insurance rate |
//! | `ShiYe` | Unemployment insurance rate |
//! | `GongShang` | Work-injury insurance rate |
//! | `ShengYu` | Maternity insurance rate |
//! | `GongJiJin` | Housing fund rate |
//!
//! All eight keys are required. Other keys are accepted and ignored.
//!
//! ```text
//! JiShuL = 2193.00
//! JiShuH = 16446.00
//! YangLao = 0.08
//! YiLiao = 0.02
//! ShiYe = 0.005
//! GongShang = 0
//! ShengYu = 0
//! GongJiJin = 0.06
//! ```

use std::collections::BTreeMap;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use payroll_core::{ContributionRates, SocialInsuranceConfig, SocialInsuranceConfigError};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::ErrorKind;

pub const KEY_BASE_LOW: &str = "JiShuL";
pub const KEY_BASE_HIGH: &str = "JiShuH";
pub const KEY_PENSION: &str = "YangLao";
pub const KEY_MEDICAL: &str = "YiLiao";
pub const KEY_UNEMPLOYMENT: &str = "ShiYe";
pub const KEY_WORK_INJURY: &str = "GongShang";
pub const KEY_MATERNITY: &str = "ShengYu";
pub const KEY_HOUSING_FUND: &str = "GongJiJin";

/// Every key a configuration file must provide.
pub const REQUIRED_KEYS: [&str; 8] = [
    KEY_BASE_LOW,
    KEY_BASE_HIGH,
    KEY_PENSION,
    KEY_MEDICAL,
    KEY_UNEMPLOYMENT,
    KEY_WORK_INJURY,
    KEY_MATERNITY,
    KEY_HOUSING_FUND,
];

/// Errors that can occur when loading the social insurance configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("config line {line}: expected 'key = value', got '{content}'")]
    MalformedLine { line: usize, content: String },

    #[error("config line {line}: value '{value}' for '{key}' is not a number")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },

    #[error("required key '{0}' is missing")]
    MissingKey(&'static str),

    #[error("invalid social insurance settings: {0}")]
    Invalid(#[from] SocialInsuranceConfigError),
}

impl ConfigLoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingKey(_) => ErrorKind::Config,
            _ => ErrorKind::Parameter,
        }
    }
}

/// Raw numeric entries read from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigValues {
    values: BTreeMap<String, Decimal>,
}

impl ConfigValues {
    /// Returns the value for `key`, or [`ConfigLoadError::MissingKey`].
    pub fn get(
        &self,
        key: &'static str,
    ) -> Result<Decimal, ConfigLoadError> {
        self.values
            .get(key)
            .copied()
            .ok_or(ConfigLoadError::MissingKey(key))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Resolves the required keys into a validated configuration.
    ///
    /// Keys are checked in [`REQUIRED_KEYS`] order, so the first missing one
    /// is reported.
    pub fn to_social_insurance_config(&self) -> Result<SocialInsuranceConfig, ConfigLoadError> {
        let base_low = self.get(KEY_BASE_LOW)?;
        let base_high = self.get(KEY_BASE_HIGH)?;
        let rates = ContributionRates {
            pension: self.get(KEY_PENSION)?,
            medical: self.get(KEY_MEDICAL)?,
            unemployment: self.get(KEY_UNEMPLOYMENT)?,
            work_injury: self.get(KEY_WORK_INJURY)?,
            maternity: self.get(KEY_MATERNITY)?,
            housing_fund: self.get(KEY_HOUSING_FUND)?,
        };

        for key in self.values.keys() {
            if !REQUIRED_KEYS.contains(&key.as_str()) {
                debug!(key = %key, "ignoring unknown config key");
            }
        }

        Ok(SocialInsuranceConfig::from_rates(
            base_low, base_high, &rates,
        )?)
    }
}

/// Accepts plain decimals and exponent notation such as `5e-3`.
fn parse_value(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Loader for `key = value` social insurance configuration files.
pub struct SocialInsuranceConfigLoader;

impl SocialInsuranceConfigLoader {
    /// Parse every entry from a reader without checking for required keys.
    pub fn parse<R: Read>(reader: R) -> Result<ConfigValues, ConfigLoadError> {
        let mut values = BTreeMap::new();

        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line_number = idx + 1;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut parts = trimmed.split('=');
            let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
                return Err(ConfigLoadError::MalformedLine {
                    line: line_number,
                    content: trimmed.to_string(),
                });
            };
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() {
                return Err(ConfigLoadError::MalformedLine {
                    line: line_number,
                    content: trimmed.to_string(),
                });
            }

            let number = parse_value(value).ok_or_else(|| ConfigLoadError::InvalidValue {
                line: line_number,
                key: key.to_string(),
                value: value.to_string(),
            })?;

            if let Some(previous) = values.insert(key.to_string(), number) {
                warn!(
                    key = %key,
                    previous = %previous,
                    value = %number,
                    line = line_number,
                    "config key repeated; later value wins"
                );
            }
        }

        Ok(ConfigValues { values })
    }

    /// Parse a reader and resolve it into a validated configuration.
    pub fn load<R: Read>(reader: R) -> Result<SocialInsuranceConfig, ConfigLoadError> {
        Self::parse(reader)?.to_social_insurance_config()
    }

    /// Read a configuration file from disk and delegate to [`Self::load`].
    pub fn load_from_file(path: &Path) -> Result<SocialInsuranceConfig, ConfigLoadError> {
        let file = std::fs::File::open(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(file)
    }
}
