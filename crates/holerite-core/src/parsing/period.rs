use crate::model::{ExtractOptions, UNIDENTIFIED_PERIOD};
use regex::Regex;
use std::sync::LazyLock;

/// Only the leading lines of a page are scanned for the period. Line-item
/// sections further down often carry admission dates and payment dates that
/// would false-positive.
const HEADER_LINES: usize = 15;

const MONTHS_FULL: &str =
    "JANEIRO|FEVEREIRO|MAR[ÇC]O|ABRIL|MAIO|JUNHO|JULHO|AGOSTO|SETEMBRO|OUTUBRO|NOVEMBRO|DEZEMBRO";
const MONTHS_ABBREV: &str = "JAN|FEV|MAR|ABR|MAI|JUN|JUL|AGO|SET|OUT|NOV|DEZ";

/// Rule 1: a known header label, optional punctuation, then a date.
static LABELED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:per[ií]odo|ref|m[eê]s\s*/\s*ano|compet[eê]ncia|data)\b\s*[.:]*\s*((?:{MONTHS_FULL}|{MONTHS_ABBREV})[/\s-]+\d{{4}}|\d{{2}}/\d{{4}})"
    ))
    .expect("labeled period regex")
});

/// Rule 2: an unanchored MM/YYYY or MONTHNAME/YYYY token.
static DATE_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b((?:{MONTHS_FULL}|{MONTHS_ABBREV})/\d{{4}}|\d{{2}}/\d{{4}})\b"
    ))
    .expect("date token regex")
});

/// Rule 3: a full month name followed by a year ("Março de 2021").
static MONTH_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b({MONTHS_FULL})\b(?:\s+de)?[\s/-]+(\d{{4}})\b"
    ))
    .expect("month-year regex")
});

/// Determine the pay-period label for a page.
///
/// Heuristic cascade over the header block, first match wins; each rule is
/// stricter than the next is permissive, trading precision for recall across
/// inconsistent issuer layouts. `previous` is the last identified label from
/// earlier pages, used only when `carry_forward_period` is enabled.
pub fn identify_period(page_text: &str, previous: Option<&str>, opts: &ExtractOptions) -> String {
    let header: String = page_text
        .lines()
        .take(HEADER_LINES)
        .collect::<Vec<_>>()
        .join("\n");

    if let Some(caps) = LABELED_RE.captures(&header) {
        return caps[1].trim().to_string();
    }

    if let Some(caps) = DATE_TOKEN_RE.captures(&header) {
        return caps[1].to_string();
    }

    if let Some(caps) = MONTH_YEAR_RE.captures(&header) {
        return format!("{}/{}", &caps[1], &caps[2]);
    }

    if opts.carry_forward_period {
        if let Some(prev) = previous.filter(|p| *p != UNIDENTIFIED_PERIOD) {
            return prev.to_string();
        }
    }

    UNIDENTIFIED_PERIOD.to_string()
}
