//! Oxidation-State Annotated Formulas
//!
//! Accepts formulas such as `"Na+1Cl-1"`, `"Fe2+3O3-2"` or `"Fe2 +3 O3 -2"`, where a
//! signed oxidation state immediately follows an element's amount. The sign is
//! mandatory; an unsigned number is always read as an amount.

use crate::composition::Composition;
use crate::element::Element;
use crate::error::ParseError;
use std::collections::BTreeMap;
use tracing::debug;

/// Element → assigned oxidation state
pub type OxidationStates = BTreeMap<Element, i32>;

/// Split an annotated formula into its plain composition and the oxidation states
/// that were written inline.
///
/// Formulas without any annotation parse directly and return an empty map.
/// Text after the last annotation is kept in the plain formula without a state.
pub fn parse_oxidation_formula(formula: &str) -> Result<(Composition, OxidationStates), ParseError> {
    let annotations = non_alphabetic_segments(formula)
        .filter_map(annotation)
        .collect::<Result<Vec<_>, _>>()?;

    if annotations.is_empty() {
        return Ok((Composition::from_formula(formula)?, OxidationStates::new()));
    }

    let mut rest = formula;
    let mut fragments = Vec::with_capacity(annotations.len());
    for (text, _) in &annotations {
        let (before, after) = rest
            .split_once(text.as_str())
            .ok_or_else(|| ParseError::AnnotationNotFound(text.clone()))?;
        fragments.push(before);
        rest = after;
    }

    let mut states = OxidationStates::new();
    for (fragment, (text, state)) in fragments.iter().zip(&annotations) {
        let prefix = fragment
            .trim()
            .split(|c: char| c.is_ascii_digit())
            .next()
            .unwrap_or_default();
        if prefix.is_empty() {
            return Err(ParseError::OrphanOxidationState(text.clone()));
        }
        states.insert(prefix.parse::<Element>()?, *state);
    }

    let plain: String = fragments.concat() + rest;
    debug!("Parsed {} oxidation states from '{}' (plain '{}')", states.len(), formula, plain);

    Ok((Composition::from_formula(&plain)?, states))
}

/// Runs of text between letters
fn non_alphabetic_segments(formula: &str) -> impl Iterator<Item = &str> {
    formula
        .split(|c: char| c.is_ascii_alphabetic())
        .filter(|segment| !segment.is_empty())
}

/// Extract the signed oxidation state from a segment such as `"2+3"` or `" 3 -2 "`.
///
/// The digits are those after the last sign character; the sign is the last
/// non-blank run of non-digit characters.
fn annotation(segment: &str) -> Option<Result<(String, i32), ParseError>> {
    let s = segment.trim();
    if s.is_empty() || !s.contains(['+', '-']) {
        return None;
    }

    let digits = s.rsplit(['+', '-']).next().map_or("", str::trim);
    let sign = s
        .split(|c: char| c.is_ascii_digit())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .last()
        .unwrap_or_default();

    let text = format!("{sign}{digits}");
    Some(
        text.parse::<i32>()
            .map(|state| (text.clone(), state))
            .map_err(|_| ParseError::InvalidOxidationState(text.clone())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(pairs: &[(Element, i32)]) -> OxidationStates {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_compact_annotation() {
        let (comp, ox) = parse_oxidation_formula("Fe2+3O3-2").unwrap();
        assert_eq!(comp, Composition::from_formula("Fe2O3").unwrap());
        assert_eq!(ox, states(&[(Element::Fe, 3), (Element::O, -2)]));
    }

    #[test]
    fn test_spaced_annotation() {
        let (comp, ox) = parse_oxidation_formula("Fe2 +3 O3 -2").unwrap();
        assert_eq!(comp, Composition::from_formula("Fe2O3").unwrap());
        assert_eq!(ox, states(&[(Element::Fe, 3), (Element::O, -2)]));
    }

    #[test]
    fn test_unit_amounts() {
        let (comp, ox) = parse_oxidation_formula("Na+1Cl-1").unwrap();
        assert_eq!(comp, Composition::from_formula("NaCl").unwrap());
        assert_eq!(ox, states(&[(Element::Na, 1), (Element::Cl, -1)]));
    }

    #[test]
    fn test_plain_formula_has_no_states() {
        let (comp, ox) = parse_oxidation_formula("NaCl").unwrap();
        assert_eq!(comp, Composition::from_formula("NaCl").unwrap());
        assert!(ox.is_empty());

        let (comp, ox) = parse_oxidation_formula("Fe2O3").unwrap();
        assert_eq!(comp.num_elements(), 2);
        assert!(ox.is_empty());
    }

    #[test]
    fn test_trailing_unannotated_element() {
        let (comp, ox) = parse_oxidation_formula("Li+1Fe+2PO4").unwrap();
        assert_eq!(comp, Composition::from_formula("LiFePO4").unwrap());
        assert_eq!(ox, states(&[(Element::Li, 1), (Element::Fe, 2)]));
    }

    #[test]
    fn test_annotation_without_element() {
        let err = parse_oxidation_formula("+3Fe2").unwrap_err();
        assert_eq!(err, ParseError::OrphanOxidationState("+3".to_string()));
    }

    #[test]
    fn test_malformed_annotations() {
        assert_eq!(
            parse_oxidation_formula("Fe+"),
            Err(ParseError::InvalidOxidationState("+".to_string()))
        );
        assert!(matches!(
            parse_oxidation_formula("Fe2+ 3O3"),
            Err(ParseError::AnnotationNotFound(_))
        ));
        assert!(matches!(
            parse_oxidation_formula("NaCl2-1"),
            Err(ParseError::UnknownElement(_))
        ));
    }

    #[test]
    fn test_annotation_extraction() {
        assert_eq!(annotation("2+3"), Some(Ok(("+3".to_string(), 3))));
        assert_eq!(annotation(" 3 -2 "), Some(Ok(("-2".to_string(), -2))));
        assert_eq!(annotation("+1"), Some(Ok(("+1".to_string(), 1))));
        assert_eq!(annotation("23"), None);
        assert_eq!(annotation("  "), None);
    }
}
