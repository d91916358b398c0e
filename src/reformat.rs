//! JSON re-serialization.
//!
//! Rewrites a JSON document pretty-printed with two-space indentation.
//! Non-ASCII text is written as-is rather than escaped, and object keys keep
//! their input order.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::{EngineError, EngineResult};

/// Pretty-prints JSON text.
///
/// # Examples
///
/// ```
/// use louvois_ledger::reformat::pretty_json;
///
/// let pretty = pretty_json(r#"{"name":"陳","id":"E001"}"#).unwrap();
/// assert_eq!(pretty, "{\n  \"name\": \"陳\",\n  \"id\": \"E001\"\n}");
/// ```
pub fn pretty_json(text: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    serde_json::to_string_pretty(&value)
}

/// Reads the JSON document at `input` and writes it pretty-printed to
/// `output`.
pub fn reformat_file(input: &Path, output: &Path) -> EngineResult<()> {
    let input_display = input.display().to_string();
    let text = fs::read_to_string(input).map_err(|_| EngineError::ConfigNotFound {
        path: input_display.clone(),
    })?;
    let pretty = pretty_json(&text).map_err(|e| EngineError::ConfigParseError {
        path: input_display.clone(),
        message: e.to_string(),
    })?;
    fs::write(output, pretty).map_err(|e| EngineError::Write {
        path: output.display().to_string(),
        message: e.to_string(),
    })?;

    info!(input = %input_display, output = %output.display(), "Reformatted JSON document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_nested_document_is_indented() {
        let pretty = pretty_json(r#"[{"id":"R001","tags":["pay"]}]"#).unwrap();
        let expected =
            "[\n  {\n    \"id\": \"R001\",\n    \"tags\": [\n      \"pay\"\n    ]\n  }\n]";
        assert_eq!(pretty, expected);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(pretty_json("{not json").is_err());
    }

    #[test]
    fn test_reformat_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("rules.json");
        let output = dir.path().join("rules_01.json");
        fs::write(&input, r#"[{"id":"R001","name":"基本薪資"}]"#).unwrap();

        reformat_file(&input, &output).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("基本薪資"));
        assert!(written.starts_with("[\n  {"));
    }

    #[test]
    fn test_missing_input_is_config_not_found() {
        let dir = TempDir::new().unwrap();
        let result = reformat_file(&dir.path().join("absent.json"), &dir.path().join("out.json"));
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_unwritable_output_is_write_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("rules.json");
        fs::write(&input, "[]").unwrap();
        let output = dir.path().join("missing").join("rules.json");

        match reformat_file(&input, &output) {
            Err(EngineError::Write { path, .. }) => assert_eq!(path, output.display().to_string()),
            other => panic!("Expected Write error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_input_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("bad.json");
        fs::write(&input, "[1,").unwrap();
        let result = reformat_file(&input, &dir.path().join("out.json"));
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }
}
