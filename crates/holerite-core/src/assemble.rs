use crate::classify::{classify_field, LineField};
use crate::extraction::PageContent;
use crate::model::{
    Aggregate, ExtractOptions, PageRecord, ParseWarning, ParsedDocument, ResultTable,
    UNIDENTIFIED_PERIOD,
};
use crate::parsing::line::extract_fields;
use crate::parsing::money;
use crate::parsing::period::identify_period;
use regex::Regex;
use std::sync::LazyLock;

/// Safety net for net pay. The net label and its value are sometimes
/// separated by a page-break artifact the per-line classifier cannot
/// segment, so a whole-page sweep across line breaks runs when the line
/// pass left the net key empty.
static NET_SWEEP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?is)L[IÍ]QUIDO.+?({})", money::MONEY_PATTERN)).expect("net sweep regex")
});

/// Run the extraction engine over already-extracted page text.
///
/// Pure with respect to its input: the same pages and options always produce
/// the same records. Pages contribute at most one record each; pages with no
/// text or no data fields beyond the period are skipped with a warning.
pub fn extract_pages(pages: &[PageContent], opts: &ExtractOptions) -> ParsedDocument {
    let mut records = Vec::new();
    let mut warnings = Vec::new();
    let mut previous_period: Option<String> = None;

    for page in pages {
        if page.is_blank() {
            warnings.push(ParseWarning {
                page_number: page.page_number,
                message: "no extractable text on page (scanned image?)".into(),
            });
            continue;
        }

        let record = assemble_page(page, previous_period.as_deref(), opts);

        if record.period() != UNIDENTIFIED_PERIOD {
            previous_period = Some(record.period().to_string());
        }

        if record.data_field_count() > 0 {
            records.push(record);
        } else {
            warnings.push(ParseWarning {
                page_number: page.page_number,
                message: "page yielded no salary fields beyond the period".into(),
            });
        }
    }

    ParsedDocument {
        table: ResultTable { records },
        warnings,
    }
}

/// Accumulate classified line fields for one page into a record.
pub fn assemble_page(
    page: &PageContent,
    previous_period: Option<&str>,
    opts: &ExtractOptions,
) -> PageRecord {
    let text = page.text();
    let period = identify_period(&text, previous_period, opts);
    let mut record = PageRecord::new(page.page_number, period);

    for raw_line in &page.lines {
        for (raw_label, value) in extract_fields(raw_line) {
            match classify_field(&raw_label, &value, opts) {
                Some(LineField::Item { key, value }) => record.insert_item(key, value),
                Some(LineField::Aggregate { kind, value }) => record.insert_aggregate(kind, value),
                None => {}
            }
        }
    }

    if !record.contains(Aggregate::Net.column_name()) {
        if let Some(value) = sweep_net_value(&text) {
            record.insert_aggregate(Aggregate::Net, value);
        }
    }

    record
}

fn sweep_net_value(text: &str) -> Option<String> {
    let caps = NET_SWEEP_RE.captures(text)?;
    let value = caps[1].to_string();
    money::parse_monetary(&value).map(|_| value)
}
