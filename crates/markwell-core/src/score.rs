//! Percentage and letter-grade arithmetic.
//!
//! Letter boundaries are policy, not engine logic: a [`GradingScale`] is a
//! band list that callers may load from configuration. The engine only
//! guarantees that a completed evaluation always maps to a real letter —
//! the `"N/A"` sentinel is reserved for records that were never scored.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Display form of a record that has not been scored yet. Never produced
/// by [`GradingScale::grade`].
pub const UNSCORED_GRADE: &str = "N/A";

/// Convert a raw score into a percentage of the declared total.
///
/// A zero total is a configuration fault; this never returns NaN.
pub fn percentage(score: u32, total_marks: u32) -> Result<f64, Error> {
    if total_marks == 0 {
        return Err(Error::ZeroTotalMarks);
    }
    Ok(f64::from(score) / f64::from(total_marks) * 100.0)
}

/// One letter band: awarded when the percentage is at least `min_percentage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeBand {
    pub letter: String,
    pub min_percentage: f64,
}

/// An ordered set of grade bands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingScale {
    bands: Vec<GradeBand>,
}

impl GradingScale {
    /// Build a scale from bands in any order; they are kept sorted from
    /// highest floor to lowest.
    pub fn new(mut bands: Vec<GradeBand>) -> Self {
        bands.sort_by(|a, b| {
            b.min_percentage
                .partial_cmp(&a.min_percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        GradingScale { bands }
    }

    /// Map a percentage to a letter: the first band whose floor is met.
    /// Percentages below every floor fall into the lowest band.
    pub fn grade(&self, percentage: f64) -> &str {
        self.bands
            .iter()
            .find(|band| percentage >= band.min_percentage)
            .or_else(|| self.bands.last())
            .map(|band| band.letter.as_str())
            .unwrap_or(UNSCORED_GRADE)
    }
}

impl Default for GradingScale {
    /// Conventional five-letter scale: A >= 80, B >= 70, C >= 60, D >= 50,
    /// F below.
    fn default() -> Self {
        GradingScale::new(
            [("A", 80.0), ("B", 70.0), ("C", 60.0), ("D", 50.0), ("F", 0.0)]
                .into_iter()
                .map(|(letter, min_percentage)| GradeBand {
                    letter: letter.to_string(),
                    min_percentage,
                })
                .collect(),
        )
    }
}

/// Render a possibly-unscored grade for display.
pub fn display_grade(grade: Option<&str>) -> &str {
    grade.unwrap_or(UNSCORED_GRADE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_total() {
        assert_eq!(percentage(10, 20).unwrap(), 50.0);
        assert_eq!(percentage(0, 20).unwrap(), 0.0);
        assert_eq!(percentage(20, 20).unwrap(), 100.0);
    }

    #[test]
    fn zero_total_marks_is_an_error() {
        let err = percentage(5, 0).unwrap_err();
        assert!(matches!(err, Error::ZeroTotalMarks));
        assert!(err.is_configuration());
    }

    #[test]
    fn default_scale_boundaries() {
        let scale = GradingScale::default();
        assert_eq!(scale.grade(100.0), "A");
        assert_eq!(scale.grade(80.0), "A");
        assert_eq!(scale.grade(79.9), "B");
        assert_eq!(scale.grade(65.0), "C");
        assert_eq!(scale.grade(50.0), "D");
        assert_eq!(scale.grade(49.9), "F");
        assert_eq!(scale.grade(0.0), "F");
    }

    #[test]
    fn graded_percentage_is_never_the_sentinel() {
        let scale = GradingScale::default();
        let pct = percentage(10, 20).unwrap();
        assert_ne!(scale.grade(pct), UNSCORED_GRADE);
    }

    #[test]
    fn unsorted_bands_are_normalized() {
        let scale = GradingScale::new(vec![
            GradeBand {
                letter: "pass".into(),
                min_percentage: 40.0,
            },
            GradeBand {
                letter: "distinction".into(),
                min_percentage: 75.0,
            },
            GradeBand {
                letter: "fail".into(),
                min_percentage: 0.0,
            },
        ]);
        assert_eq!(scale.grade(90.0), "distinction");
        assert_eq!(scale.grade(60.0), "pass");
        assert_eq!(scale.grade(10.0), "fail");
    }

    #[test]
    fn display_grade_sentinel_only_for_unscored() {
        assert_eq!(display_grade(None), "N/A");
        assert_eq!(display_grade(Some("B")), "B");
    }
}
