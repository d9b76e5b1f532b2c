// Renderers for built quiz tables

use super::QuizRow;

/// Pretty JSON array of `{MCQ, Choices, Correct}` records
pub fn to_json(rows: &[QuizRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

/// One JSON record per line
pub fn to_jsonl(rows: &[QuizRow]) -> serde_json::Result<String> {
    let mut out = String::new();
    for row in rows {
        out.push_str(&serde_json::to_string(row)?);
        out.push('\n');
    }
    Ok(out)
}

/// Fixed-width plain text grid with a header row
///
/// Column widths are measured in chars. Line breaks inside a cell are
/// flattened to spaces so each question stays on one line.
pub fn to_text_table(rows: &[QuizRow]) -> String {
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|row| row.cells().map(|cell| cell.replace(['\r', '\n'], " ")))
        .collect();

    let mut widths = QuizRow::HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &QuizRow::HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S; 3], widths: &[usize; 3]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::build_table;

    fn sample_rows() -> Vec<QuizRow> {
        build_table(
            r#"{
                "1": {"mcq": "2+2?", "options": {"a": "3", "b": "4"}, "correct": "b"},
                "2": {"mcq": "Größte Stadt?", "options": {"a": "Berlin"}, "correct": "a"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_text_table_layout() {
        let table = to_text_table(&sample_rows());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "MCQ           | Choices        | Correct");
        assert_eq!(lines[1], "--------------+----------------+--------");
        assert_eq!(lines[2], "2+2?          | a-> 3 || b-> 4 | b");
        assert_eq!(lines[3], "Größte Stadt? | a-> Berlin     | a");
    }

    #[test]
    fn test_text_table_flattens_line_breaks() {
        let rows = vec![QuizRow {
            mcq: "line one\nline two".to_string(),
            choices: String::new(),
            correct: String::new(),
        }];

        let table = to_text_table(&rows);
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("line one line two"));
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let table = to_text_table(&[]);
        assert_eq!(table, "MCQ | Choices | Correct\n----+---------+--------\n");
    }

    #[test]
    fn test_jsonl_one_record_per_line() -> anyhow::Result<()> {
        let jsonl = to_jsonl(&sample_rows())?;
        let parsed: Vec<QuizRow> = jsonl
            .lines()
            .map(serde_json::from_str)
            .collect::<Result<_, _>>()?;
        assert_eq!(parsed, sample_rows());
        Ok(())
    }

    #[test]
    fn test_json_is_array_of_records() -> anyhow::Result<()> {
        let json = to_json(&sample_rows())?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(value[1]["MCQ"], "Größte Stadt?");
        assert_eq!(value[0]["Choices"], "a-> 3 || b-> 4");
        Ok(())
    }
}
