//! Tagged extraction stages for class lines.
//!
//! Each stage takes the line plus the byte offset where the previous stage
//! stopped, so the stages compose left to right:
//!
//! | Stage | Function | Yields |
//! |-------|----------|--------|
//! | class-scan | [`scan_class_ref`] | class number + end offset |
//! | name-scan | [`scan_name`] | class name + delimiter |
//! | confidence-scan | [`scan_confidence`] | confidence marker span |
//! | list-split | [`specification_region`] + [`split_specifications`] | terms |
//!
//! All offsets are byte indices on `char` boundaries. No stage can fail;
//! absence is expressed with `Option` or empty values.

/// Class-indicator token, matched case-insensitively on a word boundary
const INDICATOR: &[u8] = b"class";

/// Optional words allowed between the indicator and the number ("Class No. 9")
const NUMBER_WORDS: [&str; 3] = ["number", "no", "nr"];

/// A class reference: indicator token followed by an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRef {
    /// The integer as written; may be outside 1-45
    pub number: u32,
    /// Offset of the indicator token
    pub start: usize,
    /// Offset just past the digits
    pub end: usize,
}

/// What ended the class name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `(` opening a confidence group
    Paren,
    /// `:`
    Colon,
    /// en/em dash, or a hyphen with whitespace on both sides
    Dash,
    /// an integer followed by `%`
    Percent,
}

/// Result of the name-scan stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameScan {
    /// Trimmed name; empty when the model gave none
    pub name: String,
    /// Offset of the delimiter, or the line length
    pub end: usize,
    pub delimiter: Option<Delimiter>,
}

/// Result of the confidence-scan stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceMarker {
    /// Clamped to 100; `None` for textual markers such as `(high)`
    pub value: Option<u8>,
    pub start: usize,
    pub end: usize,
    /// Marker sits directly after the name, so specifications follow it
    pub adjacent: bool,
    /// Offset past any integer-less groups (`(Software)`) trailing the name;
    /// specification text never starts before it
    pub lead_end: usize,
}

// ==================== class-scan ====================

/// Find the first class reference on the line.
///
/// Indicator occurrences that are not followed by a number (e.g. "Here are
/// the classes:") are skipped and the search continues.
pub fn scan_class_ref(line: &str) -> Option<ClassRef> {
    let mut from = 0;
    while let Some((start, token_end)) = find_indicator(line, from) {
        let digits_at = skip_number_prefix(line, token_end);
        if let Some((number, len)) = leading_integer(&line[digits_at..]) {
            return Some(ClassRef {
                number,
                start,
                end: digits_at + len,
            });
        }
        from = token_end;
    }
    None
}

fn find_indicator(line: &str, from: usize) -> Option<(usize, usize)> {
    let bytes = line.as_bytes();
    let mut i = from;
    while i + INDICATOR.len() <= bytes.len() {
        if bytes[i..i + INDICATOR.len()].eq_ignore_ascii_case(INDICATOR)
            && (i == 0 || !bytes[i - 1].is_ascii_alphanumeric())
        {
            let mut end = i + INDICATOR.len();
            if bytes.len() >= end + 2 && bytes[end..end + 2].eq_ignore_ascii_case(b"es") {
                end += 2;
            }
            if bytes.get(end).is_none_or(|b| !b.is_ascii_alphabetic()) {
                return Some((i, end));
            }
        }
        i += 1;
    }
    None
}

fn skip_number_prefix(line: &str, from: usize) -> usize {
    let is_filler = |c: char| c.is_whitespace() || matches!(c, '#' | ':' | '.');
    let idx = skip_while(line, from, is_filler);
    let rest = line[idx..].as_bytes();
    for word in NUMBER_WORDS {
        let word = word.as_bytes();
        if rest.len() >= word.len()
            && rest[..word.len()].eq_ignore_ascii_case(word)
            && rest.get(word.len()).is_none_or(|b| !b.is_ascii_alphabetic())
        {
            return skip_while(line, idx + word.len(), is_filler);
        }
    }
    idx
}

// ==================== name-scan ====================

/// Read the class name that follows the class reference.
///
/// One leading separator (dash or colon) is consumed first, so
/// `Class 25 – Clothing (90%)` yields `Clothing`. Hyphens inside words
/// (`Non-alcoholic`) do not end the name.
pub fn scan_name(line: &str, from: usize) -> NameScan {
    let mut start = skip_while(line, from, |c| {
        c.is_whitespace() || is_emphasis(c) || c == '.'
    });
    if let Some(c) = char_at(line, start)
        && (is_dash(c) || c == ':')
    {
        start = skip_while(line, start + c.len_utf8(), |c| {
            c.is_whitespace() || is_emphasis(c)
        });
    }

    let mut prev = ' ';
    for (offset, c) in line[start..].char_indices() {
        let at = start + offset;
        let delimiter = match c {
            '(' => Some(Delimiter::Paren),
            ':' => Some(Delimiter::Colon),
            '–' | '—' => Some(Delimiter::Dash),
            '-' if prev.is_whitespace()
                && char_at(line, at + 1).is_none_or(char::is_whitespace) =>
            {
                Some(Delimiter::Dash)
            }
            d if d.is_ascii_digit() && percent_at(line, at).is_some() => {
                Some(Delimiter::Percent)
            }
            _ => None,
        };
        if delimiter.is_some() {
            return NameScan {
                name: clean_name(&line[start..at]),
                end: at,
                delimiter,
            };
        }
        prev = c;
    }

    NameScan {
        name: clean_name(&line[start..]),
        end: line.len(),
        delimiter: None,
    }
}

fn clean_name(raw: &str) -> String {
    raw.trim().trim_matches(is_emphasis).trim().to_string()
}

// ==================== confidence-scan ====================

/// Locate the confidence marker after the name.
///
/// Precedence: a parenthesised group or `N%` directly after the name wins,
/// and the first integer inside it is the value. Groups holding no integer
/// (`(Software)`, `(high)`) are stepped over, so `(Software) (85%)` still
/// yields 85. Otherwise the first `N%` further along the line is used. A
/// textual group with no number anywhere after it is reported without a
/// value. Values above 100 clamp to 100.
pub fn scan_confidence(line: &str, name: &NameScan) -> Option<ConfidenceMarker> {
    name.delimiter?;
    let after = after_delimiter(line, name);
    let mut at = skip_while(line, after, |c| c.is_whitespace() || is_emphasis(c));
    let mut textual: Option<(usize, usize)> = None;

    loop {
        match char_at(line, at) {
            Some('(') => {
                let (value, end) = paren_group(line, at);
                if let Some(value) = value {
                    return Some(ConfidenceMarker {
                        value: Some(clamp_confidence(value)),
                        start: at,
                        end,
                        adjacent: true,
                        lead_end: end,
                    });
                }
                textual = Some((textual.map_or(at, |(start, _)| start), end));
                at = skip_while(line, end, |c| {
                    c.is_whitespace() || is_emphasis(c) || is_dash(c)
                });
            }
            Some(c) if c.is_ascii_digit() => {
                if let Some((value, end)) = percent_at(line, at) {
                    return Some(ConfidenceMarker {
                        value: Some(clamp_confidence(value)),
                        start: at,
                        end,
                        adjacent: true,
                        lead_end: end,
                    });
                }
                break;
            }
            _ => break,
        }
    }

    let lead_end = textual.map_or(after, |(_, end)| end);
    if let Some((value, start, end)) = find_percent(line, at) {
        return Some(ConfidenceMarker {
            value: Some(clamp_confidence(value)),
            start,
            end,
            adjacent: false,
            lead_end,
        });
    }

    textual.map(|(start, end)| ConfidenceMarker {
        value: None,
        start,
        end,
        adjacent: true,
        lead_end: end,
    })
}

/// First `N%` at or after `from`, widened to enclosing parentheses
fn find_percent(line: &str, from: usize) -> Option<(u32, usize, usize)> {
    let mut idx = from;
    while let Some(c) = char_at(line, idx) {
        if c.is_ascii_digit() {
            if let Some((value, end)) = percent_at(line, idx) {
                let (start, end) = widen_to_parens(line, idx, end);
                return Some((value, start, end));
            }
            idx += leading_integer(&line[idx..]).map_or(1, |(_, len)| len);
        } else {
            idx += c.len_utf8();
        }
    }
    None
}

/// `(` at `open`: first integer inside and the offset past `)`
fn paren_group(line: &str, open: usize) -> (Option<u32>, usize) {
    let inner_start = open + 1;
    match line[inner_start..].find(')') {
        Some(close) => (
            first_integer(&line[inner_start..inner_start + close]),
            inner_start + close + 1,
        ),
        None => (first_integer(&line[inner_start..]), line.len()),
    }
}

/// Grow an `N%` span to cover enclosing parentheses, if any
fn widen_to_parens(line: &str, start: usize, end: usize) -> (usize, usize) {
    let before = line[..start].trim_end();
    let after = skip_while(line, end, char::is_whitespace);
    if before.ends_with('(') && char_at(line, after) == Some(')') {
        (before.len() - 1, after + 1)
    } else {
        (start, end)
    }
}

fn clamp_confidence(value: u32) -> u8 {
    u8::try_from(value.min(100)).unwrap_or(100)
}

// ==================== list-split ====================

/// The slice of the line holding specification terms.
///
/// After an adjacent marker: everything that follows it. With a marker
/// further along: the text after the name delimiter with the marker cut
/// out. Without a marker: the text after a colon or dash delimiter.
pub fn specification_region(
    line: &str,
    name: &NameScan,
    marker: Option<&ConfidenceMarker>,
) -> String {
    match marker {
        Some(m) if m.adjacent => line[m.end..].to_string(),
        Some(m) => {
            let from = m.lead_end.min(m.start);
            format!("{}{}", &line[from..m.start], &line[m.end..])
        }
        None => match name.delimiter {
            Some(Delimiter::Colon | Delimiter::Dash) => {
                line[after_delimiter(line, name)..].to_string()
            }
            _ => String::new(),
        },
    }
}

/// Split terms on `;`, or on `,` when the text has no semicolon.
///
/// Semicolons win so that comma-bearing terms such as
/// `retail services for clothing, footwear` stay intact.
///
/// A leading `confidence` label left over from the marker is dropped.
pub fn split_specifications(region: &str) -> Vec<String> {
    let text = strip_confidence_label(trim_separators(region));
    let separator = if text.contains(';') { ';' } else { ',' };
    text.split(separator)
        .map(|s| s.trim().trim_matches(is_emphasis).trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ==================== scanning helpers ====================

fn trim_separators(text: &str) -> &str {
    text.trim_start_matches(|c: char| {
        c.is_whitespace() || is_emphasis(c) || is_dash(c) || matches!(c, ',' | ';' | ':' | '.')
    })
}

/// `confidence: 90%` and `90% confidence` leave the bare label behind
fn strip_confidence_label(text: &str) -> &str {
    const LABEL: &str = "confidence";
    let Some(rest) = text
        .get(..LABEL.len())
        .filter(|head| head.eq_ignore_ascii_case(LABEL))
        .map(|_| text[LABEL.len()..].trim_start())
    else {
        return text;
    };
    if rest.is_empty() || rest.starts_with([':', ',', ';']) {
        trim_separators(rest)
    } else {
        text
    }
}

fn after_delimiter(line: &str, name: &NameScan) -> usize {
    match name.delimiter {
        Some(Delimiter::Colon | Delimiter::Dash) => {
            name.end + char_at(line, name.end).map_or(0, char::len_utf8)
        }
        Some(Delimiter::Paren | Delimiter::Percent) => name.end,
        None => line.len(),
    }
}

/// Integer at `at` followed (after optional spaces) by `%`: value and end past `%`
fn percent_at(line: &str, at: usize) -> Option<(u32, usize)> {
    let (value, len) = leading_integer(&line[at..])?;
    let after = skip_while(line, at + len, char::is_whitespace);
    (char_at(line, after) == Some('%')).then_some((value, after + 1))
}

/// Leading run of ASCII digits as `(value, byte length)`; saturates on overflow
fn leading_integer(s: &str) -> Option<(u32, usize)> {
    let len = s.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let value = s[..len].bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    });
    Some((value, len))
}

fn first_integer(s: &str) -> Option<u32> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    leading_integer(&s[start..]).map(|(value, _)| value)
}

fn skip_while(line: &str, from: usize, pred: impl Fn(char) -> bool) -> usize {
    line[from..]
        .char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(line.len(), |(i, _)| from + i)
}

fn char_at(line: &str, idx: usize) -> Option<char> {
    line.get(idx..).and_then(|s| s.chars().next())
}

fn is_dash(c: char) -> bool {
    matches!(c, '-' | '–' | '—' | '−')
}

fn is_emphasis(c: char) -> bool {
    matches!(c, '*' | '_' | '`')
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== class-scan ====================

    #[test]
    fn test_class_ref_basic() {
        let r = scan_class_ref("Class 25 – Clothing").unwrap();
        assert_eq!(r.number, 25);
        assert_eq!(r.start, 0);
        assert_eq!(r.end, 8);
    }

    #[test]
    fn test_class_ref_case_insensitive_with_prefixes() {
        assert_eq!(scan_class_ref("CLASS #9 software").unwrap().number, 9);
        assert_eq!(scan_class_ref("class: 35").unwrap().number, 35);
        assert_eq!(scan_class_ref("Class No. 41 – Education").unwrap().number, 41);
        assert_eq!(scan_class_ref("Nice class number 42").unwrap().number, 42);
        assert_eq!(scan_class_ref("Classes 25 and 35").unwrap().number, 25);
    }

    #[test]
    fn test_class_ref_anchors_to_indicator_not_first_integer() {
        // A list number before the indicator is ignored
        assert_eq!(scan_class_ref("1. Class 25 – Clothing").unwrap().number, 25);
    }

    #[test]
    fn test_class_ref_requires_word_boundary() {
        assert!(scan_class_ref("subclass 5").is_none());
        assert!(scan_class_ref("classification 25").is_none());
    }

    #[test]
    fn test_class_ref_skips_indicator_without_number() {
        assert!(scan_class_ref("Here are the classes:").is_none());
        assert_eq!(
            scan_class_ref("The class that fits is class 16").unwrap().number,
            16
        );
    }

    #[test]
    fn test_class_ref_out_of_range_is_reported_as_written() {
        assert_eq!(scan_class_ref("class 99 – Nonexistent").unwrap().number, 99);
    }

    #[test]
    fn test_class_ref_huge_number_saturates() {
        assert_eq!(
            scan_class_ref("Class 99999999999999").unwrap().number,
            u32::MAX
        );
    }

    // ==================== name-scan ====================

    fn name_of(line: &str) -> NameScan {
        let r = scan_class_ref(line).unwrap();
        scan_name(line, r.end)
    }

    #[test]
    fn test_name_until_paren() {
        let n = name_of("Class 25 – Clothing (90%), T-shirts");
        assert_eq!(n.name, "Clothing");
        assert_eq!(n.delimiter, Some(Delimiter::Paren));
    }

    #[test]
    fn test_name_keeps_inner_hyphen() {
        let n = name_of("Class 32 - Non-alcoholic beverages (70%)");
        assert_eq!(n.name, "Non-alcoholic beverages");
    }

    #[test]
    fn test_name_until_spaced_hyphen() {
        let n = name_of("Class 9: Software - 80% - apps");
        assert_eq!(n.name, "Software");
        assert_eq!(n.delimiter, Some(Delimiter::Dash));
    }

    #[test]
    fn test_name_until_colon() {
        let n = name_of("Class 41 – Education: training; workshops");
        assert_eq!(n.name, "Education");
        assert_eq!(n.delimiter, Some(Delimiter::Colon));
    }

    #[test]
    fn test_name_until_percent() {
        let n = name_of("Class 25 Clothing 90%, shirts");
        assert_eq!(n.name, "Clothing");
        assert_eq!(n.delimiter, Some(Delimiter::Percent));
    }

    #[test]
    fn test_name_strips_markdown() {
        let n = name_of("**Class 25 – Clothing** (90%)");
        assert_eq!(n.name, "Clothing");
    }

    #[test]
    fn test_missing_name_is_empty() {
        let n = name_of("Class 25 (90%), T-shirts");
        assert_eq!(n.name, "");
        assert_eq!(n.delimiter, Some(Delimiter::Paren));
    }

    #[test]
    fn test_name_to_end_of_line() {
        let n = name_of("Class 25 Clothing");
        assert_eq!(n.name, "Clothing");
        assert_eq!(n.delimiter, None);
    }

    // ==================== confidence-scan ====================

    fn marker_of(line: &str) -> Option<ConfidenceMarker> {
        scan_confidence(line, &name_of(line))
    }

    #[test]
    fn test_confidence_in_parens() {
        let m = marker_of("Class 25 – Clothing (90%), T-shirts").unwrap();
        assert_eq!(m.value, Some(90));
        assert!(m.adjacent);
    }

    #[test]
    fn test_confidence_first_integer_inside_parens_wins() {
        let m = marker_of("Class 25 – Clothing (85% of 100), T-shirts").unwrap();
        assert_eq!(m.value, Some(85));
    }

    #[test]
    fn test_confidence_textual_has_no_value() {
        let m = marker_of("Class 9 – Software (high), apps").unwrap();
        assert_eq!(m.value, None);
        assert!(m.adjacent);
    }

    #[test]
    fn test_confidence_percent_after_dash() {
        let m = marker_of("Class 9: Software - 80% - apps").unwrap();
        assert_eq!(m.value, Some(80));
        assert!(m.adjacent);
    }

    #[test]
    fn test_confidence_clamped() {
        let m = marker_of("Class 9 – Software (150%)").unwrap();
        assert_eq!(m.value, Some(100));
    }

    #[test]
    fn test_confidence_later_on_line() {
        let m = marker_of("Class 35 – Advertising: retail services; online ads (75%)").unwrap();
        assert_eq!(m.value, Some(75));
        assert!(!m.adjacent);
    }

    #[test]
    fn test_confidence_steps_over_textual_group() {
        let line = "Class 9 – Scientific Apparatus (Software) (85%), downloadable software; apps";
        let m = marker_of(line).unwrap();
        assert_eq!(m.value, Some(85));
        assert!(m.adjacent);
        assert_eq!(&line[m.start..m.end], "(85%)");
    }

    #[test]
    fn test_confidence_percent_after_textual_group_and_dash() {
        let line = "Class 25 (Clothing) - 90% - shirts; hats";
        let m = marker_of(line).unwrap();
        assert_eq!(m.value, Some(90));
        assert_eq!(&line[m.start..m.end], "90%");
    }

    #[test]
    fn test_confidence_distant_percent_after_textual_group() {
        let line = "Class 9 – Software (high), apps 80%";
        let m = marker_of(line).unwrap();
        assert_eq!(m.value, Some(80));
        assert!(!m.adjacent);
        assert_eq!(&line[m.lead_end..m.start], ", apps ");
    }

    #[test]
    fn test_no_confidence() {
        assert!(marker_of("Class 41 – Education: training; workshops").is_none());
        assert!(marker_of("Class 25 Clothing").is_none());
    }

    // ==================== list-split ====================

    #[test]
    fn test_split_prefers_semicolons() {
        assert_eq!(
            split_specifications(", retail services for clothing, footwear; online advertising"),
            vec!["retail services for clothing, footwear", "online advertising"]
        );
    }

    #[test]
    fn test_split_on_commas_without_semicolons() {
        assert_eq!(
            split_specifications(", shirts, hats , ,caps"),
            vec!["shirts", "hats", "caps"]
        );
    }

    #[test]
    fn test_split_keeps_duplicates_and_order() {
        assert_eq!(
            split_specifications("mugs; cups; mugs"),
            vec!["mugs", "cups", "mugs"]
        );
    }

    #[test]
    fn test_split_empty() {
        assert!(split_specifications("").is_empty());
        assert!(split_specifications(" ; , ").is_empty());
    }

    #[test]
    fn test_region_excises_distant_marker() {
        let line = "Class 35 – Advertising: retail services; online ads (75%)";
        let name = name_of(line);
        let marker = scan_confidence(line, &name);
        let region = specification_region(line, &name, marker.as_ref());
        assert_eq!(
            split_specifications(&region),
            vec!["retail services", "online ads"]
        );
    }

    #[test]
    fn test_split_drops_confidence_label() {
        assert!(split_specifications(" confidence: ").is_empty());
        assert_eq!(
            split_specifications(" Confidence, shirts"),
            vec!["shirts"]
        );
        assert_eq!(
            split_specifications("confidence-building workshops; coaching"),
            vec!["confidence-building workshops", "coaching"]
        );
        assert_eq!(
            split_specifications("confidence coaching; mentoring"),
            vec!["confidence coaching", "mentoring"]
        );
    }

    #[test]
    fn test_region_skips_textual_group() {
        let line = "Class 9 – Software (high), apps 80%";
        let name = name_of(line);
        let marker = scan_confidence(line, &name);
        let region = specification_region(line, &name, marker.as_ref());
        assert_eq!(split_specifications(&region), vec!["apps"]);
    }

    #[test]
    fn test_region_empty_without_delimiter() {
        let name = NameScan {
            name: "x".to_string(),
            end: 3,
            delimiter: None,
        };
        assert_eq!(specification_region("abc", &name, None), "");
    }
}
