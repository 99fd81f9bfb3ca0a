use crate::parsing::money::MONEY_PATTERN;
use regex::Regex;
use std::sync::LazyLock;

/// Dual-column layout: two rubrics rendered side by side on one physical
/// line ("SALARIO 2.000,00 INSS 200,00"). Without this split the second
/// rubric's label would be concatenated into the first value's line item.
static DUAL_COLUMN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(.+?)\s+({MONEY_PATTERN})\s+(.+?)\s+({MONEY_PATTERN})"
    ))
    .expect("dual-column regex")
});

/// Single-column layout: one rubric per line, value anchored at line end.
static SINGLE_COLUMN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(.+?)\s+({MONEY_PATTERN})\s*$")).expect("single-column regex")
});

/// Leading rubric code: digits, dots, slashes, dashes, optional trailing dash
/// ("001 - ", "5.20/", "102-").
static CODE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d./-]+\s*-?\s*").expect("code prefix regex"));

/// Everything outside word characters, whitespace, slash, dot, and dash.
static NON_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s/.\-]").expect("non-label regex"));

/// Extract zero, one, or two raw (label, value) pairs from a stripped line.
///
/// The dual-column attempt runs first; only if no two side-by-side pairs are
/// found does the line fall back to the end-anchored single match.
pub fn extract_fields(line: &str) -> Vec<(String, String)> {
    let line = line.trim();

    if let Some(caps) = DUAL_COLUMN_RE.captures(line) {
        return vec![
            (caps[1].to_string(), caps[2].to_string()),
            (caps[3].to_string(), caps[4].to_string()),
        ];
    }

    if let Some(caps) = SINGLE_COLUMN_RE.captures(line) {
        return vec![(caps[1].to_string(), caps[2].to_string())];
    }

    Vec::new()
}

/// Clean a raw label: strip the leading numeric/code prefix, drop characters
/// outside the label alphabet, and trim.
pub fn clean_label(raw: &str) -> String {
    let stripped = CODE_PREFIX_RE.replace(raw.trim(), "");
    let cleaned = NON_LABEL_RE.replace_all(&stripped, "");
    cleaned.trim().to_string()
}
