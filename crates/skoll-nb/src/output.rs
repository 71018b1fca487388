//! Cell output variants.
//!
//! nbformat v4 tags each output with `output_type`; the schema allows any
//! multiline text field to be encoded either as one string or as a list of
//! line fragments. [`MultilineText`] absorbs both encodings on read and
//! serializes back as a single string.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Multiline text as nbformat encodes it: a string, or a list of fragments
/// that concatenate to the full text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MultilineText(String);

impl MultilineText {
    /// View the joined text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the joined text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for MultilineText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::One(s) => MultilineText(s),
            Raw::Many(lines) => MultilineText(lines.concat()),
        })
    }
}

impl From<&str> for MultilineText {
    fn from(s: &str) -> Self {
        MultilineText(s.to_string())
    }
}

impl From<String> for MultilineText {
    fn from(s: String) -> Self {
        MultilineText(s)
    }
}

impl fmt::Display for MultilineText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which stream a `stream` output was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamName {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

/// One execution output attached to a code cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "output_type", rename_all = "snake_case")]
pub enum Output {
    /// Text written to stdout or stderr.
    Stream {
        /// Stream the text was written to.
        name: StreamName,
        /// The captured text.
        text: MultilineText,
    },

    /// Rich display payload (MIME bundle).
    DisplayData {
        /// MIME type to payload.
        #[serde(default)]
        data: Map<String, Value>,
        /// Display metadata.
        #[serde(default)]
        metadata: Map<String, Value>,
    },

    /// Value of the cell's final expression.
    ExecuteResult {
        /// MIME type to payload.
        #[serde(default)]
        data: Map<String, Value>,
        /// Display metadata.
        #[serde(default)]
        metadata: Map<String, Value>,
        /// Execution counter at the time the result was produced.
        #[serde(default)]
        execution_count: Option<u64>,
    },

    /// Runtime error raised by the cell.
    Error {
        /// Error kind (exception type name).
        ename: String,
        /// Human-readable message.
        evalue: String,
        /// Formatted traceback lines.
        #[serde(default)]
        traceback: Vec<String>,
    },
}

impl Output {
    /// Build a stream output on stdout. Handy for adapters and tests.
    pub fn stdout(text: impl Into<MultilineText>) -> Self {
        Output::Stream {
            name: StreamName::Stdout,
            text: text.into(),
        }
    }

    /// Build an error output.
    pub fn error(ename: impl Into<String>, evalue: impl Into<String>) -> Self {
        Output::Error {
            ename: ename.into(),
            evalue: evalue.into(),
            traceback: Vec::new(),
        }
    }

    /// True for the `error` variant.
    pub fn is_error(&self) -> bool {
        matches!(self, Output::Error { .. })
    }

    /// Extract the plain text of this output, if it carries any.
    ///
    /// Stream outputs yield their captured text; data-bundle outputs yield
    /// their `text/plain` entry (string or fragment-list encoding). Error
    /// outputs carry no plain text.
    pub fn text(&self) -> Option<String> {
        match self {
            Output::Stream { text, .. } => Some(text.as_str().to_string()),
            Output::DisplayData { data, .. } | Output::ExecuteResult { data, .. } => {
                bundle_text(data)
            }
            Output::Error { .. } => None,
        }
    }
}

/// `text/plain` entry of a MIME bundle, honoring both text encodings.
fn bundle_text(data: &Map<String, Value>) -> Option<String> {
    match data.get("text/plain")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(fragments) => Some(
            fragments
                .iter()
                .filter_map(Value::as_str)
                .collect::<String>(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiline_accepts_string_and_list() {
        let one: MultilineText = serde_json::from_str(r#""a\nb\n""#).unwrap();
        let many: MultilineText = serde_json::from_str(r#"["a\n", "b\n"]"#).unwrap();
        assert_eq!(one, many);
        assert_eq!(one.as_str(), "a\nb\n");
    }

    #[test]
    fn stream_output_roundtrips_through_schema() {
        let raw = r#"{"output_type": "stream", "name": "stdout", "text": ["-1.0", "\n"]}"#;
        let output: Output = serde_json::from_str(raw).unwrap();
        assert_eq!(output.text().as_deref(), Some("-1.0\n"));

        let back = serde_json::to_value(&output).unwrap();
        assert_eq!(back["output_type"], "stream");
        assert_eq!(back["text"], "-1.0\n");
    }

    #[test]
    fn execute_result_text_comes_from_text_plain() {
        let raw = r#"{
            "output_type": "execute_result",
            "data": {"text/plain": ["Sample(sample={0: -1}, energy=", "-1.0)"]},
            "metadata": {},
            "execution_count": 3
        }"#;
        let output: Output = serde_json::from_str(raw).unwrap();
        assert_eq!(
            output.text().as_deref(),
            Some("Sample(sample={0: -1}, energy=-1.0)")
        );
    }

    #[test]
    fn error_output_has_kind_and_message() {
        let raw = r#"{
            "output_type": "error",
            "ename": "ValueError",
            "evalue": "no embedding found",
            "traceback": ["Traceback (most recent call last):"]
        }"#;
        let output: Output = serde_json::from_str(raw).unwrap();
        assert!(output.is_error());
        assert_eq!(output.text(), None);
    }
}
