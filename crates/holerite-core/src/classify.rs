use crate::model::{Aggregate, ExtractOptions};
use crate::parsing::line::clean_label;
use crate::parsing::money;
use rust_decimal::Decimal;

/// A classified (label, value) pair from one physical line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineField {
    /// Ordinary earning/deduction rubric, keyed by its cleaned label.
    Item { key: String, value: String },
    /// Footer summary figure, keyed by the fixed aggregate vocabulary.
    Aggregate { kind: Aggregate, value: String },
}

/// Keywords that divert a label into footer-aggregate routing. A label
/// containing any of these is never stored as an ordinary line item.
const FOOTER_KEYWORDS: &[&str] = &[
    "BASE",
    "FGTS",
    "TRIBUTÁVEL",
    "TRIBUTAVEL",
    "LÍQUIDO",
    "LIQUIDO",
    "TOTAL",
];

fn is_footer_label(upper: &str) -> bool {
    FOOTER_KEYWORDS.iter().any(|kw| upper.contains(kw))
}

type AggregateRule = (fn(&str) -> bool, Aggregate);

/// Ordered predicate -> tag rules for footer routing; first match wins.
/// FGTS deposit labels must be tested before the bare-FGTS base rule.
const AGGREGATE_RULES: &[AggregateRule] = &[
    (is_inss_base, Aggregate::BaseInss),
    (is_fgts_value, Aggregate::FgtsValue),
    (is_fgts_base, Aggregate::BaseFgts),
    (is_net, Aggregate::Net),
    (is_total_gross, Aggregate::TotalGross),
    (is_total_deductions, Aggregate::TotalDeductions),
];

fn is_inss_base(upper: &str) -> bool {
    upper.contains("BASE INSS")
        || upper.contains("TRIBUTÁVEL INSS")
        || upper.contains("TRIBUTAVEL INSS")
}

fn is_fgts_value(upper: &str) -> bool {
    upper.contains("VALOR FGTS")
        || upper.contains("DEPÓSITO FGTS")
        || upper.contains("DEPOSITO FGTS")
}

fn is_fgts_base(upper: &str) -> bool {
    upper.contains("FGTS")
}

fn is_net(upper: &str) -> bool {
    upper.contains("LÍQUIDO") || upper.contains("LIQUIDO")
}

fn is_total_gross(upper: &str) -> bool {
    upper.contains("TOTAL VENCIMENTOS") || upper.contains("TOTAL PROVENTOS")
}

fn is_total_deductions(upper: &str) -> bool {
    upper.contains("TOTAL DESCONTOS")
}

/// Map an uppercased footer label to its aggregate category, if any rule
/// recognizes it. An unrecognized footer label (e.g. "BASE IRRF") maps to
/// nothing and the pair is dropped.
pub fn route_aggregate(upper: &str) -> Option<Aggregate> {
    AGGREGATE_RULES
        .iter()
        .find(|(matches, _)| matches(upper))
        .map(|(_, kind)| *kind)
}

/// Classify a raw (label, value) pair into a line field, or discard it.
///
/// Discards: cleaned label shorter than 2 chars; value that fails the
/// decimal parse; page-footer noise ("PÁGINA"); non-positive values when the
/// strict policy is enabled. Footer-keyword labels are routed through
/// [`route_aggregate`] and consumed either way; ordinary line items
/// additionally require a key longer than 2 chars.
pub fn classify_field(raw_label: &str, value: &str, opts: &ExtractOptions) -> Option<LineField> {
    let label = clean_label(raw_label);
    if label.chars().count() < 2 {
        return None;
    }

    let parsed = money::parse_monetary(value)?;

    let upper = label.to_uppercase();
    if upper.contains("PÁGINA") || upper.contains("PAGINA") {
        return None;
    }
    if opts.require_positive_values && parsed <= Decimal::ZERO {
        return None;
    }

    if is_footer_label(&upper) {
        return route_aggregate(&upper).map(|kind| LineField::Aggregate {
            kind,
            value: value.to_string(),
        });
    }

    if label.chars().count() <= 2 {
        return None;
    }
    Some(LineField::Item {
        key: label,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(label: &str, value: &str) -> Option<LineField> {
        classify_field(label, value, &ExtractOptions::default())
    }

    #[test]
    fn test_ordinary_line_item() {
        let field = classify("HORAS EXTRAS", "150,50").unwrap();
        assert_eq!(
            field,
            LineField::Item {
                key: "HORAS EXTRAS".into(),
                value: "150,50".into()
            }
        );
    }

    #[test]
    fn test_coded_base_inss_routes_to_aggregate() {
        let field = classify("001 - BASE INSS", "3.500,00").unwrap();
        assert_eq!(
            field,
            LineField::Aggregate {
                kind: Aggregate::BaseInss,
                value: "3.500,00".into()
            }
        );
    }

    #[test]
    fn test_tributavel_inss_routes_to_inss_base() {
        let field = classify("TRIBUTÁVEL INSS", "3.200,00").unwrap();
        assert!(matches!(
            field,
            LineField::Aggregate {
                kind: Aggregate::BaseInss,
                ..
            }
        ));
    }

    #[test]
    fn test_fgts_deposit_beats_fgts_base() {
        let field = classify("VALOR FGTS", "280,00").unwrap();
        assert!(matches!(
            field,
            LineField::Aggregate {
                kind: Aggregate::FgtsValue,
                ..
            }
        ));

        let field = classify("DEPÓSITO FGTS", "280,00").unwrap();
        assert!(matches!(
            field,
            LineField::Aggregate {
                kind: Aggregate::FgtsValue,
                ..
            }
        ));
    }

    #[test]
    fn test_bare_fgts_is_base() {
        let field = classify("BASE FGTS", "3.500,00").unwrap();
        assert!(matches!(
            field,
            LineField::Aggregate {
                kind: Aggregate::BaseFgts,
                ..
            }
        ));

        let field = classify("FGTS", "3.500,00").unwrap();
        assert!(matches!(
            field,
            LineField::Aggregate {
                kind: Aggregate::BaseFgts,
                ..
            }
        ));
    }

    #[test]
    fn test_liquido_variants_route_to_net() {
        for label in ["VALOR LÍQUIDO", "LIQUIDO A RECEBER"] {
            let field = classify(label, "1.800,00").unwrap();
            assert!(matches!(
                field,
                LineField::Aggregate {
                    kind: Aggregate::Net,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_totals_route_to_gross_and_deductions() {
        let field = classify("TOTAL VENCIMENTOS", "2.500,00").unwrap();
        assert!(matches!(
            field,
            LineField::Aggregate {
                kind: Aggregate::TotalGross,
                ..
            }
        ));

        let field = classify("TOTAL PROVENTOS", "2.500,00").unwrap();
        assert!(matches!(
            field,
            LineField::Aggregate {
                kind: Aggregate::TotalGross,
                ..
            }
        ));

        let field = classify("TOTAL DESCONTOS", "700,00").unwrap();
        assert!(matches!(
            field,
            LineField::Aggregate {
                kind: Aggregate::TotalDeductions,
                ..
            }
        ));
    }

    #[test]
    fn test_unrecognized_footer_label_consumed() {
        // Keyword gate matches on BASE/TOTAL but no rule maps it: dropped,
        // never an ordinary line item.
        assert_eq!(classify("BASE IRRF", "2.900,00"), None);
        assert_eq!(classify("TOTAL GERAL", "2.900,00"), None);
    }

    #[test]
    fn test_short_label_discarded() {
        assert_eq!(classify("A", "100,00"), None);
        assert_eq!(classify("AB", "100,00"), None);
    }

    #[test]
    fn test_pagina_noise_discarded() {
        assert_eq!(classify("PÁGINA", "1,00"), None);
        assert_eq!(classify("PAGINA 2 DE", "3,00"), None);
    }

    #[test]
    fn test_zero_value_kept_by_default() {
        assert!(classify("DESCONTO FARMACIA", "0,00").is_some());
    }

    #[test]
    fn test_zero_value_dropped_under_strict_policy() {
        let opts = ExtractOptions {
            require_positive_values: true,
            ..Default::default()
        };
        assert_eq!(classify_field("DESCONTO FARMACIA", "0,00", &opts), None);
        assert!(classify_field("DESCONTO FARMACIA", "10,00", &opts).is_some());
    }
}
