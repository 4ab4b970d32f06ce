use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::commission_fields::DATE_FORMAT;
use super::unique_list::{EntityKind, SameIdentity};
use super::value::{starts_non_blank, validated_string};
use crate::errors::{ModelError, Result};

/// The date a piece of work-in-progress was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IterationDate(NaiveDate);

impl IterationDate {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Dates should be valid dates in the format YYYY-MM-DD";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for IterationDate {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self> {
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| ModelError::InvalidValue {
                field: "date",
                reason: Self::MESSAGE_CONSTRAINTS.to_string(),
            })
    }
}

impl std::fmt::Display for IterationDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

validated_string!(
    /// What changed in this iteration
    IterationDescription,
    field = "iteration description",
    constraints = "Iteration descriptions can take any values, and it should not be blank",
    validator = starts_non_blank,
);

validated_string!(
    /// Location of the image file produced by this iteration
    ImagePath,
    field = "image path",
    constraints = "Image paths can take any values, and it should not be blank",
    validator = starts_non_blank,
);

validated_string!(
    /// The customer's reaction to this iteration
    Feedback,
    field = "feedback",
    constraints = "Feedback can take any values",
    validator = |_| true,
);

/// One round of work on a commission
///
/// Identity is the (date, description) pair: two iterations logged on the
/// same day with the same description are the same iteration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Iteration {
    pub date: IterationDate,
    pub description: IterationDescription,
    pub image_path: ImagePath,
    pub feedback: Feedback,
}

impl Iteration {
    pub fn new(
        date: IterationDate,
        description: IterationDescription,
        image_path: ImagePath,
        feedback: Feedback,
    ) -> Self {
        Self {
            date,
            description,
            image_path,
            feedback,
        }
    }
}

impl SameIdentity for Iteration {
    const KIND: EntityKind = EntityKind::Iteration;

    fn is_same(&self, other: &Self) -> bool {
        self.date == other.date && self.description == other.description
    }

    fn identity_key(&self) -> String {
        format!("{} ({})", self.description, self.date)
    }
}

impl std::fmt::Display for Iteration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Date: {}; Image: {}",
            self.description, self.date, self.image_path
        )?;
        if !self.feedback.as_str().is_empty() {
            write!(f, "; Feedback: {}", self.feedback)?;
        }
        Ok(())
    }
}
