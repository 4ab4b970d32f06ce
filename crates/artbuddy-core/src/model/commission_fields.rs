//! Value types carried by a [`Commission`](super::Commission)

use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::value::{starts_non_blank, validated_string};
use crate::errors::{ModelError, Result};

/// Input format accepted for dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

validated_string!(
    /// A commission's title; its identity within the owning customer
    Title,
    field = "title",
    constraints = "Titles can take any values, and it should not be blank",
    validator = starts_non_blank,
);

validated_string!(
    /// Free-form notes on a commission
    Description,
    field = "description",
    constraints = "Descriptions can take any values",
    validator = |_| true,
);

/// The agreed price of a commission
///
/// Always finite and non-negative. Compared bit-for-bit so it can take part
/// in `Eq` and `Hash`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Fee(f64);

impl Fee {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Fees should be non-negative numbers";

    /// # Errors
    /// * `InvalidValue` - if `amount` is negative, NaN or infinite
    pub fn new(amount: f64) -> Result<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ModelError::InvalidValue {
                field: "fee",
                reason: Self::MESSAGE_CONSTRAINTS.to_string(),
            });
        }
        // Normalise -0.0 so equal fees hash equally
        Ok(Self(amount + 0.0))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Fee {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Fee {}

impl Hash for Fee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl TryFrom<f64> for Fee {
    type Error = ModelError;

    fn try_from(amount: f64) -> Result<Self> {
        Self::new(amount)
    }
}

impl From<Fee> for f64 {
    fn from(fee: Fee) -> f64 {
        fee.0
    }
}

impl FromStr for Fee {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self> {
        let amount = raw.trim().parse::<f64>().map_err(|_| ModelError::InvalidValue {
            field: "fee",
            reason: Self::MESSAGE_CONSTRAINTS.to_string(),
        })?;
        Self::new(amount)
    }
}

impl std::fmt::Display for Fee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// The date a commission is due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(NaiveDate);

impl Deadline {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Deadlines should be valid dates in the format YYYY-MM-DD";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for Deadline {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self> {
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| ModelError::InvalidValue {
                field: "deadline",
                reason: Self::MESSAGE_CONSTRAINTS.to_string(),
            })
    }
}

impl std::fmt::Display for Deadline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Whether the work on a commission is finished
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionStatus(bool);

impl CompletionStatus {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Completion status should be one of: true, false, yes, no, y, n";

    pub const COMPLETED: CompletionStatus = CompletionStatus(true);
    pub const IN_PROGRESS: CompletionStatus = CompletionStatus(false);

    pub fn new(completed: bool) -> Self {
        Self(completed)
    }

    pub fn is_completed(&self) -> bool {
        self.0
    }
}

impl FromStr for CompletionStatus {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" => Ok(Self::COMPLETED),
            "false" | "no" | "n" => Ok(Self::IN_PROGRESS),
            _ => Err(ModelError::InvalidValue {
                field: "completion status",
                reason: Self::MESSAGE_CONSTRAINTS.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.0 { "Completed" } else { "In progress" })
    }
}
