//! Completion and classification records

use crate::classification::nice::{ClassKind, NiceClass};
use crate::parsing::parse_classifications;
use serde::{Deserialize, Serialize};

/// Verbatim model output. Only the parser looks inside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCompletion {
    pub text: String,
}

impl RawCompletion {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// One class line extracted from a completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationRecord {
    /// Nice class number, always within 1-45
    pub class_number: u8,
    /// Class name as the model wrote it (may be empty)
    pub class_name: String,
    /// Confidence 0-100; 0 when the model gave none
    pub confidence: u8,
    /// Specification terms in model order, not deduplicated
    pub specifications: Vec<String>,
    /// The full source line, kept for audit
    pub raw_line: String,
}

impl ClassificationRecord {
    /// The Nice class this record refers to
    pub fn nice_class(&self) -> Option<NiceClass> {
        NiceClass::new(self.class_number)
    }

    pub fn kind(&self) -> Option<ClassKind> {
        self.nice_class().map(|c| c.kind())
    }

    /// The model's name, or the official heading when the model gave none
    pub fn display_name(&self) -> &str {
        if self.class_name.is_empty() {
            self.nice_class().map(|c| c.heading()).unwrap_or("")
        } else {
            &self.class_name
        }
    }
}

/// Output of one classification request
///
/// `raw` always carries the untouched completion, so callers can recover
/// anything the parser discarded. An empty `classifications` list is a
/// successful "no classes found", not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub source: String,
    pub classifications: Vec<ClassificationRecord>,
    pub raw: String,
}

impl ClassificationResult {
    pub fn new(
        source: impl Into<String>,
        classifications: Vec<ClassificationRecord>,
        raw: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            classifications,
            raw: raw.into(),
        }
    }

    /// Parse a completion into a result for `source`.
    pub fn from_completion(source: impl Into<String>, completion: &RawCompletion) -> Self {
        Self::new(
            source,
            parse_classifications(completion),
            completion.text.clone(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.classifications.is_empty()
    }

    /// Distinct class numbers in first-appearance order
    pub fn class_numbers(&self) -> Vec<u8> {
        let mut seen = Vec::new();
        for record in &self.classifications {
            if !seen.contains(&record.class_number) {
                seen.push(record.class_number);
            }
        }
        seen
    }
}
