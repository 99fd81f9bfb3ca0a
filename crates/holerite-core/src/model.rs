use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Column key holding the pay period of each record.
pub const PERIOD_KEY: &str = "Mês/Ano";

/// Sentinel period label for pages where no date pattern matched.
pub const UNIDENTIFIED_PERIOD: &str = "Não Identificado";

/// Separator used when the same rubric appears more than once on a page.
pub const DUPLICATE_SEPARATOR: &str = " | ";

/// Footer aggregate categories recognized in payslip summaries.
///
/// These are fixed labels printed once per payslip, distinct from per-rubric
/// line items. Routing into this set is last-write-wins: a page has one
/// footer section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
    /// Social-security contribution base ("BASE INSS", "TRIBUTÁVEL INSS").
    BaseInss,
    /// FGTS calculation base.
    BaseFgts,
    /// FGTS deposit amount ("VALOR FGTS", "DEPÓSITO FGTS").
    FgtsValue,
    /// Net pay ("VALOR LÍQUIDO").
    Net,
    /// Gross earnings total ("TOTAL VENCIMENTOS", "TOTAL PROVENTOS").
    TotalGross,
    /// Deductions total ("TOTAL DESCONTOS").
    TotalDeductions,
}

impl Aggregate {
    /// The output column this aggregate is stored under.
    pub fn column_name(&self) -> &'static str {
        match self {
            Aggregate::BaseInss => "BASE INSS (Rodapé)",
            Aggregate::BaseFgts => "BASE FGTS",
            Aggregate::FgtsValue => "Valor FGTS",
            Aggregate::Net => "VALOR LÍQUIDO",
            Aggregate::TotalGross => "TOTAL VENCIMENTOS",
            Aggregate::TotalDeductions => "TOTAL DESCONTOS",
        }
    }
}

/// One extracted payslip page: a mapping from field key to monetary value.
///
/// The map always carries the period under [`PERIOD_KEY`]. Duplicate rubric
/// occurrences are pipe-joined rather than overwritten, so no observed value
/// is silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub page_number: usize,
    pub fields: BTreeMap<String, String>,
}

impl PageRecord {
    pub fn new(page_number: usize, period: String) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(PERIOD_KEY.to_string(), period);
        PageRecord {
            page_number,
            fields,
        }
    }

    pub fn period(&self) -> &str {
        self.fields
            .get(PERIOD_KEY)
            .map(String::as_str)
            .unwrap_or(UNIDENTIFIED_PERIOD)
    }

    /// Add an ordinary earning/deduction line item. A repeated key appends
    /// with [`DUPLICATE_SEPARATOR`] to keep both occurrences traceable.
    pub fn insert_item(&mut self, key: String, value: String) {
        match self.fields.get_mut(&key) {
            Some(existing) => {
                existing.push_str(DUPLICATE_SEPARATOR);
                existing.push_str(&value);
            }
            None => {
                self.fields.insert(key, value);
            }
        }
    }

    /// Set a footer aggregate. Last write wins.
    pub fn insert_aggregate(&mut self, kind: Aggregate, value: String) {
        self.fields.insert(kind.column_name().to_string(), value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of data fields beyond the period key.
    pub fn data_field_count(&self) -> usize {
        self.fields.len().saturating_sub(1)
    }
}

/// Ordered collection of page records, one per page that yielded data.
///
/// Two pages with the same period stay as two distinct rows: the engine does
/// not merge identities across pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultTable {
    pub records: Vec<PageRecord>,
}

impl ResultTable {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Union of all field keys across all records.
    pub fn columns(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .flat_map(|r| r.fields.keys().cloned())
            .collect()
    }
}

/// A recoverable condition noticed during parsing (skipped page, swept-up
/// net value, filtered record). Never aborts processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseWarning {
    pub page_number: usize,
    pub message: String,
}

/// Full output of the extraction engine for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub table: ResultTable,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ParseWarning>,
}

/// Tunable extraction policies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// When a page fails every period heuristic, reuse the previous page's
    /// identified period instead of the sentinel. Speculative, so opt-in.
    pub carry_forward_period: bool,
    /// Require line-item values to parse strictly greater than zero.
    /// Off by default: a zeroed deduction row is real data.
    pub require_positive_values: bool,
}
