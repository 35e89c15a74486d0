//! Classification parsing from model completions.
//!
//! Turns a free-text completion into [`ClassificationRecord`]s. This is pure
//! domain logic (no I/O, only line-oriented pattern matching) and it is
//! total: malformed text degrades to fewer (or zero) records, never an error.
//!
//! The expected line grammar is the one requested by
//! [`ClassificationPromptTemplate`](crate::prompt::ClassificationPromptTemplate):
//!
//! ```text
//! Class 25 – Clothing (90%), T-shirts; printed garments; casual wear
//! ```
//!
//! Each line runs through the [`stages`] left to right. A line survives only
//! if it has a class reference whose number is within 1-45; a missing name
//! or confidence never suppresses a correctly numbered line.

pub mod stages;

use crate::classification::nice;
use crate::classification::record::{ClassificationRecord, RawCompletion};
use stages::{scan_class_ref, scan_confidence, scan_name, specification_region, split_specifications};

/// Confidence reported when the model gave no numeric value
pub const NO_CONFIDENCE: u8 = 0;

/// Parse every class line of a completion, in order of appearance.
///
/// Duplicate class numbers are kept as separate records.
///
/// # Examples
///
/// ```
/// use tmclass_domain::{RawCompletion, parse_classifications};
///
/// let raw = RawCompletion::new("Class 25 – Clothing (90%), T-shirts; casual wear");
/// let records = parse_classifications(&raw);
/// assert_eq!(records[0].class_number, 25);
/// assert_eq!(records[0].specifications, vec!["T-shirts", "casual wear"]);
///
/// assert!(parse_classifications(&RawCompletion::new("no classes here")).is_empty());
/// ```
pub fn parse_classifications(raw: &RawCompletion) -> Vec<ClassificationRecord> {
    raw.as_str().lines().filter_map(parse_line).collect()
}

/// Parse a single line; `None` when it cannot be attributed to a Nice class.
pub fn parse_line(line: &str) -> Option<ClassificationRecord> {
    let text = line.trim();
    if text.is_empty() {
        return None;
    }

    let class_ref = scan_class_ref(text)?;
    if !nice::is_valid(class_ref.number) {
        return None;
    }
    let class_number = u8::try_from(class_ref.number).ok()?;

    let name = scan_name(text, class_ref.end);
    let marker = scan_confidence(text, &name);
    let specifications = split_specifications(&specification_region(text, &name, marker.as_ref()));

    Some(ClassificationRecord {
        class_number,
        class_name: name.name,
        confidence: marker.and_then(|m| m.value).unwrap_or(NO_CONFIDENCE),
        specifications,
        raw_line: text.to_string(),
    })
}
