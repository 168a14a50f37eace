//! Grouped five-number summaries.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::SummaryError;
use crate::model::{GroupSummaries, GroupSummary, Sample, SummaryEntry};
use crate::quantile::five_number_sorted;

/// Partitions `samples` by group and computes a five-number summary
/// per group.
///
/// Groups keep the order of their first appearance in the input.
/// Every sample value must already be finite; the summarizer performs
/// no coercion and returns no partial result on error.
pub fn summarize(samples: &[Sample]) -> Result<GroupSummaries, SummaryError> {
    if samples.is_empty() {
        return Err(SummaryError::EmptyInput);
    }

    let mut order: Vec<String> = Vec::new();
    let mut by_group: HashMap<String, Vec<f64>> = HashMap::new();
    for (index, sample) in samples.iter().enumerate() {
        if !sample.value.is_finite() {
            return Err(SummaryError::InvalidSample {
                group: sample.group.clone(),
                index,
            });
        }
        by_group
            .entry(sample.group.clone())
            .or_insert_with(|| {
                order.push(sample.group.clone());
                Vec::new()
            })
            .push(sample.value);
    }

    let mut entries = Vec::with_capacity(order.len());
    for group in order {
        let mut values = by_group.remove(&group).unwrap_or_default();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let (min, q1, median, q3, max) = five_number_sorted(&values);
        entries.push(SummaryEntry {
            group,
            count: values.len(),
            summary: GroupSummary {
                min,
                q1,
                median,
                q3,
                max,
            },
        });
    }

    Ok(GroupSummaries::from_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn samples(pairs: &[(&str, f64)]) -> Vec<Sample> {
        pairs.iter().map(|(g, v)| Sample::new(*g, *v)).collect()
    }

    #[test]
    fn test_single_element_group() {
        let out = summarize(&samples(&[("A", 10.0)])).unwrap();
        let s = out.get("A").unwrap();
        assert_eq!((s.min, s.q1, s.median, s.q3, s.max), (10.0, 10.0, 10.0, 10.0, 10.0));
    }

    #[test]
    fn test_known_interpolation_example() {
        let out = summarize(&samples(&[("A", 1.0), ("A", 2.0), ("A", 3.0), ("A", 4.0)])).unwrap();
        let s = out.get("A").unwrap();
        assert!((s.q1 - 1.75).abs() < EPS);
        assert!((s.median - 2.5).abs() < EPS);
        assert!((s.q3 - 3.25).abs() < EPS);
    }

    #[test]
    fn test_ordering_invariant() {
        let out = summarize(&samples(&[
            ("A", 9.0),
            ("A", 1.0),
            ("A", 4.0),
            ("A", 4.0),
            ("A", 7.0),
        ]))
        .unwrap();
        let s = out.get("A").unwrap();
        assert!(s.min <= s.q1 && s.q1 <= s.median && s.median <= s.q3 && s.q3 <= s.max);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 9.0);
    }

    #[test]
    fn test_idempotent() {
        let input = samples(&[("A", 3.0), ("B", 5.0), ("A", 8.0), ("B", 2.0)]);
        let first = summarize(&input).unwrap();
        let second = summarize(&input).unwrap();
        for (a, b) in first.entries().iter().zip(second.entries()) {
            assert_eq!(a.group, b.group);
            assert_eq!(a.summary, b.summary);
        }
    }

    #[test]
    fn test_groups_are_independent() {
        let base = summarize(&samples(&[("A", 1.0), ("A", 3.0), ("B", 10.0), ("B", 20.0)])).unwrap();
        let changed =
            summarize(&samples(&[("A", 1.0), ("A", 3.0), ("B", 100.0), ("B", 200.0)])).unwrap();
        assert_eq!(base.get("A").unwrap(), changed.get("A").unwrap());
        assert_ne!(base.get("B").unwrap(), changed.get("B").unwrap());
    }

    #[test]
    fn test_first_appearance_order() {
        let out = summarize(&samples(&[("C", 1.0), ("A", 2.0), ("C", 3.0), ("B", 4.0)])).unwrap();
        let groups: Vec<&str> = out.groups().collect();
        assert_eq!(groups, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(summarize(&[]), Err(SummaryError::EmptyInput));
    }

    #[test]
    fn test_non_finite_sample_rejected() {
        let err = summarize(&samples(&[("A", 1.0), ("A", f64::NAN)])).unwrap_err();
        assert_eq!(
            err,
            SummaryError::InvalidSample {
                group: "A".to_string(),
                index: 1,
            }
        );
        let err = summarize(&samples(&[("B", f64::INFINITY)])).unwrap_err();
        assert!(matches!(err, SummaryError::InvalidSample { .. }));
    }

    #[test]
    fn test_unknown_group() {
        let out = summarize(&samples(&[("A", 1.0)])).unwrap();
        assert_eq!(
            out.get("Z"),
            Err(SummaryError::UnknownGroup("Z".to_string()))
        );
    }

    #[test]
    fn test_counts() {
        let out = summarize(&samples(&[("A", 1.0), ("B", 2.0), ("A", 3.0)])).unwrap();
        assert_eq!(out.entries()[0].count, 2);
        assert_eq!(out.entries()[1].count, 1);
    }
}
