// Quiz table building
//
// The question generator answers with a JSON object whose values are
// question records:
//
//   {"1": {"mcq": "2+2?", "options": {"a": "3", "b": "4"}, "correct": "b"}}
//
// `build_table` flattens that into one `QuizRow` per record, keeping the
// document's key order. Fields are best-effort: anything missing becomes an
// empty string.

pub mod render;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::error;

/// Joins the formatted options of one question
pub const CHOICE_SEPARATOR: &str = " || ";
/// Sits between an option's label and its text
pub const LABEL_SEPARATOR: &str = "-> ";

/// One display row per question record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRow {
    #[serde(rename = "MCQ")]
    pub mcq: String,
    #[serde(rename = "Choices")]
    pub choices: String,
    #[serde(rename = "Correct")]
    pub correct: String,
}

impl QuizRow {
    /// Column headers, in field order
    pub const HEADERS: [&'static str; 3] = ["MCQ", "Choices", "Correct"];

    /// Best-effort extraction from a single question record
    pub fn from_record(record: &Value) -> Self {
        let Some(record) = record.as_object() else {
            return Self::empty();
        };

        let mcq = record
            .get("mcq")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let choices = record
            .get("options")
            .and_then(Value::as_object)
            .map(format_choices)
            .unwrap_or_default();

        let correct = record.get("correct").map(display_value).unwrap_or_default();

        Self {
            mcq,
            choices,
            correct,
        }
    }

    fn empty() -> Self {
        Self {
            mcq: String::new(),
            choices: String::new(),
            correct: String::new(),
        }
    }

    pub fn cells(&self) -> [&str; 3] {
        [&self.mcq, &self.choices, &self.correct]
    }
}

/// The quiz JSON could not be turned into a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("invalid quiz JSON: {message}")]
pub struct ParseFailure {
    pub message: String,
    /// 1-based; 0 when the failure is not tied to a position
    pub line: usize,
    pub column: usize,
}

impl From<serde_json::Error> for ParseFailure {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Flatten a quiz JSON document into display rows.
///
/// Malformed input never panics: it comes back as `Err(ParseFailure)` and an
/// error event is logged with the parse position. `"{}"` is a valid quiz with
/// no rows.
pub fn build_table(quiz_json: &str) -> Result<Vec<QuizRow>, ParseFailure> {
    let questions = parse_questions(quiz_json).map_err(|failure| {
        error!(
            line = failure.line,
            column = failure.column,
            error = %failure.message,
            "failed to parse quiz JSON"
        );
        failure
    })?;

    Ok(questions.values().map(QuizRow::from_record).collect())
}

fn parse_questions(quiz_json: &str) -> Result<Map<String, Value>, ParseFailure> {
    match serde_json::from_str(quiz_json)? {
        Value::Object(questions) => Ok(questions),
        other => Err(ParseFailure {
            message: format!(
                "expected an object of question records, found {}",
                json_type_name(&other)
            ),
            line: 0,
            column: 0,
        }),
    }
}

fn format_choices(options: &Map<String, Value>) -> String {
    options
        .iter()
        .map(|(label, text)| format!("{label}{LABEL_SEPARATOR}{}", display_value(text)))
        .collect::<Vec<_>>()
        .join(CHOICE_SEPARATOR)
}

// Strings verbatim, null as empty, anything else as its JSON text
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_empty_table() {
        assert_eq!(build_table("{}"), Ok(vec![]));
    }

    #[test]
    fn test_single_question() {
        let rows = build_table(
            r#"{"1": {"mcq": "2+2?", "options": {"a": "3", "b": "4"}, "correct": "b"}}"#,
        )
        .unwrap();

        assert_eq!(
            rows,
            vec![QuizRow {
                mcq: "2+2?".to_string(),
                choices: "a-> 3 || b-> 4".to_string(),
                correct: "b".to_string(),
            }]
        );
    }

    #[test]
    fn test_malformed_json_is_failure() {
        let failure = build_table("{bad json").unwrap_err();
        assert_eq!(failure.line, 1);
        assert!(failure.column > 0);
        assert!(failure.to_string().starts_with("invalid quiz JSON: "));
    }

    #[test]
    fn test_empty_input_is_failure() {
        assert!(build_table("").is_err());
        assert!(build_table("   ").is_err());
    }

    #[test]
    fn test_non_object_top_level_is_failure() {
        let failure = build_table(r#"[{"mcq": "x"}]"#).unwrap_err();
        assert_eq!(failure.line, 0);
        assert!(failure.message.contains("an array"));
    }

    #[test]
    fn test_rows_follow_document_order() {
        let quiz = r#"{
            "3": {"mcq": "third", "options": {"z": "last", "a": "first"}},
            "1": {"mcq": "first"},
            "2": {"mcq": "second"}
        }"#;

        let rows = build_table(quiz).unwrap();
        let questions: Vec<_> = rows.iter().map(|r| r.mcq.as_str()).collect();
        assert_eq!(questions, vec!["third", "first", "second"]);
        assert_eq!(rows[0].choices, "z-> last || a-> first");

        assert_eq!(build_table(quiz).unwrap(), rows);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let rows = build_table(r#"{"q": {}, "r": {"options": {}}}"#).unwrap();
        assert_eq!(rows.len(), 2);
        for row in rows {
            assert_eq!(row.cells(), ["", "", ""]);
        }
    }

    #[test]
    fn test_loosely_typed_fields() {
        let rows = build_table(
            r#"{
                "1": {"mcq": 42, "options": {"a": 1, "b": true, "c": null}, "correct": 1},
                "2": {"options": ["a", "b"], "correct": null},
                "3": "not a record"
            }"#,
        )
        .unwrap();

        assert_eq!(rows[0].mcq, "");
        assert_eq!(rows[0].choices, "a-> 1 || b-> true || c-> ");
        assert_eq!(rows[0].correct, "1");
        assert_eq!(rows[1].cells(), ["", "", ""]);
        assert_eq!(rows[2].cells(), ["", "", ""]);
    }

    #[test]
    fn test_row_serializes_with_display_headers() -> anyhow::Result<()> {
        let row = QuizRow {
            mcq: "Capital of France?".to_string(),
            choices: "a-> Paris || b-> Rome".to_string(),
            correct: "a".to_string(),
        };

        let json = serde_json::to_string(&row)?;
        assert_eq!(
            json,
            r#"{"MCQ":"Capital of France?","Choices":"a-> Paris || b-> Rome","Correct":"a"}"#
        );
        Ok(())
    }
}
