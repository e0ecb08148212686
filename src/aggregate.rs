//! Grouping and reduction of record tables.
//!
//! Implements the rollup pattern shared by the three charts: partition
//! records by one or two categorical keys (preserving first-seen label
//! order), then reduce each partition's like counts to a statistic. All
//! functions here are pure.

use std::collections::{HashMap, HashSet};

use crate::data::Record;

/// Partition records by a key, preserving first-seen key order.
///
/// Each partition holds the like counts of its records, in source order.
fn partition<'a>(
    records: &'a [Record],
    key: impl Fn(&'a Record) -> &'a str,
) -> Vec<(String, Vec<f32>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<f32>)> = Vec::new();

    for record in records {
        let k = key(record);
        let slot = *index.entry(k).or_insert_with(|| {
            groups.push((k.to_string(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record.likes as f32);
    }

    groups
}

/// Group records by a single key and reduce each group's like counts.
///
/// Keys appear in first-occurrence order. Every group is non-empty by
/// construction (a key only exists because some record produced it).
pub fn rollup<'a, T>(
    records: &'a [Record],
    key: impl Fn(&'a Record) -> &'a str,
    reduce: impl Fn(&[f32]) -> T,
) -> Vec<(String, T)> {
    partition(records, key)
        .into_iter()
        .map(|(k, values)| {
            let reduced = reduce(&values);
            (k, reduced)
        })
        .collect()
}

/// A reduced value for one (outer, inner) key pair.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedValue<T> {
    /// Outer grouping label.
    pub outer: String,
    /// Inner grouping label.
    pub inner: String,
    /// Reduced statistic for the leaf partition.
    pub value: T,
}

/// Group records by two keys and reduce each leaf partition.
///
/// The nested mapping (outer key -> inner key -> statistic) is flattened to
/// a list of triples: outer keys in first-occurrence order, and within each
/// outer key, inner keys in first-occurrence order.
pub fn rollup_pair<'a, T>(
    records: &'a [Record],
    outer_key: impl Fn(&'a Record) -> &'a str,
    inner_key: impl Fn(&'a Record) -> &'a str,
    reduce: impl Fn(&[f32]) -> T,
) -> Vec<GroupedValue<T>> {
    let mut outer_index: HashMap<&str, usize> = HashMap::new();
    let mut outer_groups: Vec<(String, Vec<&'a Record>)> = Vec::new();

    for record in records {
        let k = outer_key(record);
        let slot = *outer_index.entry(k).or_insert_with(|| {
            outer_groups.push((k.to_string(), Vec::new()));
            outer_groups.len() - 1
        });
        outer_groups[slot].1.push(record);
    }

    let mut triples = Vec::new();
    for (outer, members) in outer_groups {
        let mut inner_index: HashMap<&str, usize> = HashMap::new();
        let mut inner_groups: Vec<(String, Vec<f32>)> = Vec::new();
        for record in members {
            let k = inner_key(record);
            let slot = *inner_index.entry(k).or_insert_with(|| {
                inner_groups.push((k.to_string(), Vec::new()));
                inner_groups.len() - 1
            });
            inner_groups[slot].1.push(record.likes as f32);
        }
        for (inner, values) in inner_groups {
            triples.push(GroupedValue {
                outer: outer.clone(),
                inner,
                value: reduce(&values),
            });
        }
    }

    triples
}

/// Distinct outer labels of a triple list, in first-occurrence order.
#[must_use]
pub fn outer_domain<T>(triples: &[GroupedValue<T>]) -> Vec<String> {
    distinct(triples.iter().map(|t| t.outer.as_str()))
}

/// Distinct inner labels of a triple list, in first-occurrence order.
#[must_use]
pub fn inner_domain<T>(triples: &[GroupedValue<T>]) -> Vec<String> {
    distinct(triples.iter().map(|t| t.inner.as_str()))
}

fn distinct<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for label in labels {
        if seen.insert(label) {
            out.push(label.to_string());
        }
    }
    out
}

/// Arithmetic mean of a non-empty value list.
#[must_use]
pub fn mean(values: &[f32]) -> f32 {
    values.iter().sum::<f32>() / values.len() as f32
}

/// Five-number summary of a distribution: min, quartiles, max.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumberSummary {
    /// Minimum value.
    pub min: f32,
    /// First quartile (25th percentile).
    pub q1: f32,
    /// Median (50th percentile).
    pub median: f32,
    /// Third quartile (75th percentile).
    pub q3: f32,
    /// Maximum value.
    pub max: f32,
}

impl FiveNumberSummary {
    /// Compute the summary from an unordered value list.
    ///
    /// Quartiles use linear-interpolation quantiles over the sorted values
    /// (the R-7 method: `index = p * (n - 1)`, interpolating between the
    /// bracketing elements). Returns `None` for empty input.
    pub fn from_values(values: &[f32]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Some(Self {
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3: quantile_sorted(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

/// R-7 quantile of an ascending-sorted, non-empty value list.
fn quantile_sorted(sorted: &[f32], p: f32) -> f32 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let h = p * (n - 1) as f32;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;

    if lo == hi || hi >= n {
        sorted[lo.min(n - 1)]
    } else {
        let t = h - lo as f32;
        sorted[lo] * (1.0 - t) + sorted[hi] * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, platform: &str, post_type: &str, age_group: &str, likes: u32) -> Record {
        Record {
            date: date.to_string(),
            platform: platform.to_string(),
            post_type: post_type.to_string(),
            age_group: age_group.to_string(),
            likes,
        }
    }

    #[test]
    fn test_five_number_summary_scenario() {
        // Teen group with likes 10, 20, 30.
        let summary = FiveNumberSummary::from_values(&[10.0, 20.0, 30.0]).unwrap();
        assert!((summary.min - 10.0).abs() < 1e-6);
        assert!((summary.q1 - 15.0).abs() < 1e-6);
        assert!((summary.median - 20.0).abs() < 1e-6);
        assert!((summary.q3 - 25.0).abs() < 1e-6);
        assert!((summary.max - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_five_number_summary_single() {
        let summary = FiveNumberSummary::from_values(&[42.0]).unwrap();
        assert_eq!(summary.min, 42.0);
        assert_eq!(summary.q1, 42.0);
        assert_eq!(summary.median, 42.0);
        assert_eq!(summary.q3, 42.0);
        assert_eq!(summary.max, 42.0);
    }

    #[test]
    fn test_five_number_summary_empty() {
        assert!(FiveNumberSummary::from_values(&[]).is_none());
    }

    #[test]
    fn test_quantile_even_length() {
        // Sorted [1, 2, 3, 4]: median interpolates between 2 and 3.
        let sorted = vec![1.0, 2.0, 3.0, 4.0];
        assert!((quantile_sorted(&sorted, 0.5) - 2.5).abs() < 1e-6);
        assert!((quantile_sorted(&sorted, 0.25) - 1.75).abs() < 1e-6);
        assert!((quantile_sorted(&sorted, 0.75) - 3.25).abs() < 1e-6);
    }

    #[test]
    fn test_mean() {
        assert!((mean(&[10.0, 30.0]) - 20.0).abs() < 1e-6);
        assert!((mean(&[5.0]) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_rollup_first_seen_order() {
        let records = vec![
            record("3/1", "X", "Video", "Adult", 10),
            record("3/1", "X", "Video", "Teen", 20),
            record("3/2", "X", "Video", "Adult", 30),
        ];
        let groups = rollup(&records, |r| r.age_group.as_str(), mean);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Adult");
        assert_eq!(groups[1].0, "Teen");
        assert!((groups[0].1 - 20.0).abs() < 1e-6);
        assert!((groups[1].1 - 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_rollup_pair_scenario() {
        // ("X", "Video") with likes 10 and 30 -> mean 20.00.
        let records = vec![
            record("3/1", "X", "Video", "Teen", 10),
            record("3/2", "X", "Video", "Teen", 30),
        ];
        let triples = rollup_pair(
            &records,
            |r| r.platform.as_str(),
            |r| r.post_type.as_str(),
            mean,
        );
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].outer, "X");
        assert_eq!(triples[0].inner, "Video");
        assert!((triples[0].value - 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_rollup_pair_domains() {
        let records = vec![
            record("3/1", "Insta", "Image", "Teen", 1),
            record("3/1", "Face", "Video", "Teen", 2),
            record("3/1", "Insta", "Video", "Teen", 3),
            record("3/1", "Face", "Image", "Teen", 4),
        ];
        let triples = rollup_pair(
            &records,
            |r| r.platform.as_str(),
            |r| r.post_type.as_str(),
            mean,
        );
        assert_eq!(outer_domain(&triples), vec!["Insta", "Face"]);
        // Inner labels in first-occurrence order across the flattened triples.
        assert_eq!(inner_domain(&triples), vec!["Image", "Video"]);
    }

    #[test]
    fn test_rollup_empty_records() {
        let groups = rollup(&[], |r| r.age_group.as_str(), mean);
        assert!(groups.is_empty());
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================
