//! Weighted grade averages and "what if" predictions.
//!
//! A grade is `100 * round(summative * 0.6 + formative * 0.4, 4)`, where each category
//! average is points earned over points possible.

use crate::constants::{
    DEFAULT_FORMATIVE, DEFAULT_SUBJECT, DEFAULT_SUMMATIVE, FORMATIVE_WEIGHT, GRADE_PRECISION,
    SUMMATIVE_WEIGHT,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod input;
pub mod session;

/// Problems with grade data that are reported to the user rather than aborting
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GradeError {
    /// The assignment type was neither summative nor formative
    #[error("wrong assignment type! needs to be either summative or formative")]
    UnknownCategory(String),
    /// A category has no possible points, so it has no average
    #[error("no points possible for {0} assignments")]
    NoPointsPossible(Category),
    /// Adding an assignment would make a category's sums too large to count
    #[error("too many points for {0} assignments")]
    PointsOverflow(Category),
}

/// Assignment category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Practice work
    Formative,
    /// Tests and projects
    Summative,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Formative => write!(f, "formative"),
            Category::Summative => write!(f, "summative"),
        }
    }
}

impl FromStr for Category {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "formative" => Ok(Category::Formative),
            "summative" => Ok(Category::Summative),
            _ => Err(GradeError::UnknownCategory(s.to_string())),
        }
    }
}

/// Round half away from zero to `places` decimal places
///
/// ```
/// use pacwalk::grade::round_to;
///
/// assert_eq!(round_to(0.96673921, 4), 0.9667);
/// assert_eq!(round_to(0.12345, 2), 0.12);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

/// Running (earned, possible) sums for one category
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointTotals {
    /// Points earned
    pub earned: u32,
    /// Points possible
    pub possible: u32,
}

impl PointTotals {
    /// Create a new PointTotals
    pub fn new(earned: u32, possible: u32) -> Self {
        Self { earned, possible }
    }

    /// Earned over possible, for the given category
    pub fn ratio(&self, category: Category) -> Result<f64, GradeError> {
        if self.possible == 0 {
            return Err(GradeError::NoPointsPossible(category));
        }
        Ok(self.earned as f64 / self.possible as f64)
    }

    /// These totals with one more assignment added to `category`
    pub fn add(&self, category: Category, earned: u32, possible: u32) -> Result<Self, GradeError> {
        let overflow = || GradeError::PointsOverflow(category);
        Ok(Self {
            earned: self.earned.checked_add(earned).ok_or_else(overflow)?,
            possible: self.possible.checked_add(possible).ok_or_else(overflow)?,
        })
    }
}

/// How much each category contributes to the overall grade
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Weight of the summative average
    pub summative: f64,
    /// Weight of the formative average
    pub formative: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            summative: SUMMATIVE_WEIGHT,
            formative: FORMATIVE_WEIGHT,
        }
    }
}

/// Everything needed to compute a grade for one subject
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeRecord {
    /// Name shown to the user
    pub subject: String,
    /// Formative sums
    pub formative: PointTotals,
    /// Summative sums
    pub summative: PointTotals,
    /// Category weights
    pub weights: Weights,
}

impl Default for GradeRecord {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            formative: PointTotals::new(DEFAULT_FORMATIVE.0, DEFAULT_FORMATIVE.1),
            summative: PointTotals::new(DEFAULT_SUMMATIVE.0, DEFAULT_SUMMATIVE.1),
            weights: Weights::default(),
        }
    }
}

/// A new assignment as typed in by the user
///
/// The type is kept as text so that a bad type can be reported after all input is read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentEntry {
    /// Assignment type, expected to be `summative` or `formative`
    pub kind: String,
    /// Points earned
    pub earned: u32,
    /// Points possible
    pub possible: u32,
}

/// The outcome of adding one assignment to a [`GradeRecord`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    /// Category the assignment was added to
    pub category: Category,
    /// New average of that category, as a rounded percentage
    pub category_average: f64,
    /// New overall grade, as a rounded percentage
    pub grade: f64,
}

impl GradeRecord {
    /// Sums for a category
    pub fn totals(&self, category: Category) -> PointTotals {
        match category {
            Category::Formative => self.formative,
            Category::Summative => self.summative,
        }
    }

    /// The overall grade as a rounded percentage
    ///
    /// ```
    /// use pacwalk::grade::GradeRecord;
    ///
    /// let grade = GradeRecord::default().current_grade().unwrap();
    /// assert!((grade - 96.67).abs() < 1e-9);
    /// ```
    pub fn current_grade(&self) -> Result<f64, GradeError> {
        let summative = self.summative.ratio(Category::Summative)?;
        let formative = self.formative.ratio(Category::Formative)?;
        let weighted = summative * self.weights.summative + formative * self.weights.formative;
        Ok(round_to(weighted, GRADE_PRECISION) * 100.0)
    }

    /// A copy of this record with one assignment added to `category`
    pub fn with_entry(
        &self,
        category: Category,
        earned: u32,
        possible: u32,
    ) -> Result<Self, GradeError> {
        let mut record = self.clone();
        let totals = self.totals(category).add(category, earned, possible)?;
        match category {
            Category::Formative => record.formative = totals,
            Category::Summative => record.summative = totals,
        }
        Ok(record)
    }

    /// Predict the category average and grade after adding `entry`
    pub fn predict(&self, entry: &AssignmentEntry) -> Result<Prediction, GradeError> {
        let category: Category = entry.kind.parse()?;
        let updated = self.with_entry(category, entry.earned, entry.possible)?;
        let ratio = updated.totals(category).ratio(category)?;
        Ok(Prediction {
            category,
            category_average: round_to(ratio, GRADE_PRECISION) * 100.0,
            grade: updated.current_grade()?,
        })
    }
}
