//! The interactive grade checker.

use crate::grade::input::{read_assignment_entry, InputProvider};
use crate::grade::{GradeError, GradeRecord, Prediction};
use anyhow::Result;
use log::warn;
use std::io::Write;

const RULE: &str = "===============================================";

/// Print the current grade, ask for one new assignment and print the prediction
///
/// An unknown assignment type, or points too large to add up, is reported on `out`
/// and gives `Ok(None)`.
pub fn run_session<I, W>(
    record: &GradeRecord,
    input: &mut I,
    out: &mut W,
) -> Result<Option<Prediction>>
where
    I: InputProvider + ?Sized,
    W: Write,
{
    writeln!(out, "{} Grade Calculator!", record.subject)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "Current Grade is {:.2}", record.current_grade()?)?;
    writeln!(out, "{RULE}")?;

    let entry = read_assignment_entry(input)?;
    writeln!(out, "New assignment type is {}", entry.kind)?;
    writeln!(out, "New Points Earned is {}", entry.earned)?;
    writeln!(out, "New Points Possible is {}", entry.possible)?;

    match record.predict(&entry) {
        Ok(prediction) => {
            writeln!(out, "Average prediction is {:.2}", prediction.category_average)?;
            writeln!(out, "Predicted grade is {:.2}", prediction.grade)?;
            Ok(Some(prediction))
        }
        Err(e @ (GradeError::UnknownCategory(_) | GradeError::PointsOverflow(_))) => {
            warn!("rejected assignment {:?}: {e}", entry);
            writeln!(out, "{e}")?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
