//! Per-response grading rules.
//!
//! One evaluation strategy per [`QuestionType`] variant, selected by
//! pattern match. Textual types grade on exact normalized equality;
//! list-based answers earn proportional partial credit per correct item.

use crate::distance::edit_distance;
use crate::error::Error;
use crate::model::QuestionType;
use crate::normalize::normalize;

/// The outcome of grading one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Evaluation {
    /// Whether the response earned full marks.
    pub is_correct: bool,
    /// Marks awarded, always within `[0, max_marks]`.
    pub marks_awarded: u32,
    /// Levenshtein distance between normalized response and model answer.
    /// Diagnostic only; `None` for list-based and absent answers.
    pub edit_distance: Option<usize>,
}

impl Evaluation {
    fn incorrect() -> Self {
        Evaluation {
            is_correct: false,
            marks_awarded: 0,
            edit_distance: None,
        }
    }
}

/// Grade a single response against a question's accepted answers.
///
/// A `None` response, or an empty accepted set for a textual question,
/// grades as incorrect with zero marks. A list-based question with no
/// accepted items is a configuration fault and returns
/// [`Error::EmptyAcceptedAnswers`] instead of dividing by zero.
pub fn evaluate(
    response: Option<&str>,
    accepted: &[String],
    question_type: QuestionType,
    max_marks: u32,
) -> Result<Evaluation, Error> {
    match question_type {
        QuestionType::MultipleChoice | QuestionType::ShortAnswer | QuestionType::TrueFalse => {
            Ok(evaluate_textual(response, accepted, max_marks))
        }
        QuestionType::ListBased => evaluate_list(response, accepted, max_marks),
    }
}

/// Exact-match grading for single-answer textual types.
fn evaluate_textual(response: Option<&str>, accepted: &[String], max_marks: u32) -> Evaluation {
    let (Some(response), Some(expected)) = (response, accepted.first()) else {
        return Evaluation::incorrect();
    };

    let given = normalize(response);
    let wanted = normalize(expected);
    // Computed for diagnostics only; the verdict is equality of the
    // normalized forms.
    let distance = edit_distance(&given, &wanted);
    tracing::debug!(%given, %wanted, distance, "textual comparison");

    let is_correct = given == wanted;
    Evaluation {
        is_correct,
        marks_awarded: if is_correct { max_marks } else { 0 },
        edit_distance: Some(distance),
    }
}

/// Proportional partial credit for comma-separated list answers.
///
/// Each response item counts if any accepted item matches it after trim and
/// case-fold (first-match scan). Response duplicates are not deduplicated,
/// so awarded marks are clamped to `max_marks`.
fn evaluate_list(
    response: Option<&str>,
    accepted: &[String],
    max_marks: u32,
) -> Result<Evaluation, Error> {
    let accepted_items: Vec<String> = accepted
        .iter()
        .flat_map(|entry| entry.split(','))
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect();
    if accepted_items.is_empty() {
        return Err(Error::EmptyAcceptedAnswers);
    }

    let Some(response) = response else {
        return Ok(Evaluation::incorrect());
    };

    let correct_count = response
        .split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| accepted_items.iter().any(|acc| acc == item))
        .count();

    let ratio = correct_count as f64 / accepted_items.len() as f64;
    // Round half-up, then clamp so duplicate items cannot exceed the
    // question's maximum.
    let marks_awarded = ((ratio * f64::from(max_marks)).round() as u32).min(max_marks);

    Ok(Evaluation {
        is_correct: marks_awarded == max_marks,
        marks_awarded,
        edit_distance: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn short_answer_exact_normalized_match() {
        let result = evaluate(
            Some("Paris"),
            &accepted(&["paris"]),
            QuestionType::ShortAnswer,
            5,
        )
        .unwrap();
        assert!(result.is_correct);
        assert_eq!(result.marks_awarded, 5);
        assert_eq!(result.edit_distance, Some(0));
    }

    #[test]
    fn short_answer_near_miss_earns_nothing() {
        // Edit distance 1, but exact equality is the only verdict input.
        let result = evaluate(
            Some("pariss"),
            &accepted(&["paris"]),
            QuestionType::ShortAnswer,
            5,
        )
        .unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.marks_awarded, 0);
        assert_eq!(result.edit_distance, Some(1));
    }

    #[test]
    fn short_answer_normalizes_punctuation_and_case() {
        let result = evaluate(
            Some("  PARIS. "),
            &accepted(&["Paris"]),
            QuestionType::ShortAnswer,
            3,
        )
        .unwrap();
        assert!(result.is_correct);
        assert_eq!(result.marks_awarded, 3);
    }

    #[test]
    fn multiple_choice_uses_first_accepted_answer() {
        let result = evaluate(
            Some("b"),
            &accepted(&["B", "also-right-but-ignored"]),
            QuestionType::MultipleChoice,
            2,
        )
        .unwrap();
        assert!(result.is_correct);
        assert_eq!(result.marks_awarded, 2);
    }

    #[test]
    fn true_false_grades_like_short_answer() {
        let yes = evaluate(Some("TRUE"), &accepted(&["true"]), QuestionType::TrueFalse, 1).unwrap();
        assert!(yes.is_correct);
        let no = evaluate(Some("false"), &accepted(&["true"]), QuestionType::TrueFalse, 1).unwrap();
        assert!(!no.is_correct);
        assert_eq!(no.marks_awarded, 0);
    }

    #[test]
    fn absent_response_is_incorrect_not_an_error() {
        let result = evaluate(None, &accepted(&["paris"]), QuestionType::ShortAnswer, 5).unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.marks_awarded, 0);
        assert_eq!(result.edit_distance, None);
    }

    #[test]
    fn empty_accepted_set_is_incorrect_for_textual_types() {
        let result = evaluate(Some("paris"), &[], QuestionType::ShortAnswer, 5).unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.marks_awarded, 0);
    }

    #[test]
    fn list_partial_credit_rounds_half_up() {
        // 2 of 3 correct: round(2/3 * 9) = 6.
        let result = evaluate(
            Some("beta, alpha"),
            &accepted(&["Alpha", "Beta", "Gamma"]),
            QuestionType::ListBased,
            9,
        )
        .unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.marks_awarded, 6);
    }

    #[test]
    fn list_full_match_earns_full_marks() {
        let result = evaluate(
            Some("A,B"),
            &accepted(&["A", "B"]),
            QuestionType::ListBased,
            10,
        )
        .unwrap();
        assert!(result.is_correct);
        assert_eq!(result.marks_awarded, 10);
    }

    #[test]
    fn list_accepts_comma_joined_canonical_string() {
        let result = evaluate(
            Some("red, blue"),
            &accepted(&["red,yellow,blue"]),
            QuestionType::ListBased,
            6,
        )
        .unwrap();
        assert_eq!(result.marks_awarded, 4);
        assert!(!result.is_correct);
    }

    #[test]
    fn list_duplicates_inflate_but_marks_are_clamped() {
        // "a,a" matches twice against a single accepted item; the ratio
        // exceeds 1 but marks never exceed the maximum.
        let result = evaluate(
            Some("a,a"),
            &accepted(&["a"]),
            QuestionType::ListBased,
            4,
        )
        .unwrap();
        assert_eq!(result.marks_awarded, 4);
        assert!(result.is_correct);
    }

    #[test]
    fn list_wrong_items_earn_nothing() {
        let result = evaluate(
            Some("delta, epsilon"),
            &accepted(&["Alpha", "Beta"]),
            QuestionType::ListBased,
            8,
        )
        .unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.marks_awarded, 0);
    }

    #[test]
    fn list_empty_accepted_set_is_a_configuration_error() {
        let err = evaluate(Some("a"), &[], QuestionType::ListBased, 5).unwrap_err();
        assert!(matches!(err, Error::EmptyAcceptedAnswers));
        assert!(err.is_configuration());
    }

    #[test]
    fn list_absent_response_is_incorrect() {
        let result = evaluate(None, &accepted(&["a", "b"]), QuestionType::ListBased, 4).unwrap();
        assert!(!result.is_correct);
        assert_eq!(result.marks_awarded, 0);
    }
}
