//! # Predicate Evaluation
//!
//! A search is a single ordered pass over the listings. Criteria are normalized
//! once, then every record is tested against the conjunction of the active
//! criteria, short-circuiting in a fixed order: type, price, bedrooms,
//! postcode, date. Matching records are cloned into the output in their
//! original order; the input is never touched.
//!
//! A record's calendar instant is derived before any predicate runs, so a
//! listing with a malformed `added` date is reported whether or not some
//! earlier predicate would have excluded it.

use crate::calendar::added_instant;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::InvalidRecordPolicy;
use crate::criteria::SearchCriteria;
use crate::error::{Result, SearchError};
use crate::model::Property;
use crate::normalize::{Constraint, NormalizedCriteria};
use crate::store::ListingStore;

/// A listing left out of a search because its data is malformed.
#[derive(Debug)]
pub struct SkippedRecord {
    pub id: String,
    pub error: SearchError,
}

#[derive(Debug, Default)]
pub struct SearchReport {
    pub matches: Vec<Property>,
    pub skipped: Vec<SkippedRecord>,
}

/// Filter `records` down to those matching every active criterion.
///
/// Fails on the first record whose `added` date cannot be resolved.
pub fn search(records: &[Property], criteria: &SearchCriteria) -> Result<Vec<Property>> {
    let normalized = NormalizedCriteria::from_criteria(criteria);
    let mut matches = Vec::new();
    for record in records {
        if evaluate(record, &normalized)? {
            matches.push(record.clone());
        }
    }
    tracing::debug!(
        total = records.len(),
        matched = matches.len(),
        active = normalized.active_count(),
        "search complete"
    );
    Ok(matches)
}

/// Like [`search`], but records with malformed data are skipped and reported
/// instead of aborting the search.
pub fn search_skipping(records: &[Property], criteria: &SearchCriteria) -> SearchReport {
    let normalized = NormalizedCriteria::from_criteria(criteria);
    let mut report = SearchReport::default();
    for record in records {
        match evaluate(record, &normalized) {
            Ok(true) => report.matches.push(record.clone()),
            Ok(false) => {}
            Err(error) => {
                tracing::warn!(id = %record.id, %error, "skipping listing with malformed data");
                report.skipped.push(SkippedRecord {
                    id: record.id.clone(),
                    error,
                });
            }
        }
    }
    tracing::debug!(
        total = records.len(),
        matched = report.matches.len(),
        skipped = report.skipped.len(),
        "search complete"
    );
    report
}

/// Whether one record satisfies all active criteria.
pub fn evaluate(record: &Property, criteria: &NormalizedCriteria) -> Result<bool> {
    let added = added_instant(&record.added)?;

    Ok(matches_kind(record, &criteria.kind)
        && in_range(record.price, &criteria.min_price, &criteria.max_price)
        && in_range(
            f64::from(record.bedrooms),
            &criteria.min_bedrooms,
            &criteria.max_bedrooms,
        )
        && matches_postcode(record, &criteria.postcode)
        && in_range(added, &criteria.date_from, &criteria.date_to))
}

fn matches_kind(record: &Property, kind: &Constraint<String>) -> bool {
    match kind.bound() {
        Some(kind) => record.kind.to_lowercase() == kind.to_lowercase(),
        None => true,
    }
}

fn matches_postcode(record: &Property, prefix: &Constraint<String>) -> bool {
    match prefix.bound() {
        Some(prefix) => record.postcode.to_lowercase().starts_with(prefix.as_str()),
        None => true,
    }
}

/// Inclusive range test; an unconstrained end is open.
fn in_range<T: PartialOrd>(value: T, min: &Constraint<T>, max: &Constraint<T>) -> bool {
    if min.bound().is_some_and(|min| *min > value) {
        return false;
    }
    if max.bound().is_some_and(|max| *max < value) {
        return false;
    }
    true
}

/// Run a search against a listing store.
pub fn run<S: ListingStore>(
    store: &S,
    criteria: &SearchCriteria,
    policy: InvalidRecordPolicy,
) -> Result<CmdResult> {
    let records = store.list_properties()?;
    let active = NormalizedCriteria::from_criteria(criteria).active_count();

    let mut result = match policy {
        InvalidRecordPolicy::Abort => {
            CmdResult::default().with_listed_properties(search(&records, criteria)?)
        }
        InvalidRecordPolicy::Skip => {
            let report = search_skipping(&records, criteria);
            let mut result = CmdResult::default().with_listed_properties(report.matches);
            for skipped in &report.skipped {
                result.add_message(CmdMessage::warning(format!(
                    "Skipped listing {}: {}",
                    skipped.id, skipped.error
                )));
            }
            result.skipped = report.skipped;
            result
        }
    };
    result.total = records.len();
    result.active_criteria = active;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::RawValue;
    use crate::model::AddedDate;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn sample() -> Vec<Property> {
        vec![
            Property::new("p1", "House", 300000.0, 3, "BR1 1AA", AddedDate::new(10, "January", 2024)),
            Property::new("p2", "Flat", 200000.0, 2, "NW1 2BB", AddedDate::new(5, "March", 2025)),
            Property::new("p3", "House", 1200000.0, 5, "SW15 3CC", AddedDate::new(20, "November", 2024)),
        ]
    }

    fn ids(props: &[Property]) -> Vec<&str> {
        props.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        let records = sample();
        let result = search(&records, &SearchCriteria::default()).unwrap();
        assert_eq!(result, records);
    }

    #[test]
    fn filters_by_type_case_insensitively() {
        let records = sample();
        for kind in ["house", "HOUSE", "House", " house "] {
            let result = search(&records, &SearchCriteria::new().kind(kind)).unwrap();
            assert_eq!(ids(&result), vec!["p1", "p3"], "{kind:?}");
        }
    }

    #[test]
    fn filters_by_price_range() {
        let result = search(
            &sample(),
            &SearchCriteria::new().min_price("250000").max_price("500000"),
        )
        .unwrap();
        assert_eq!(ids(&result), vec!["p1"]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let records = sample();
        let at_max = search(&records, &SearchCriteria::new().max_price(300000)).unwrap();
        assert_eq!(ids(&at_max), vec!["p1", "p2"]);

        let below = search(&records, &SearchCriteria::new().max_price(299999)).unwrap();
        assert_eq!(ids(&below), vec!["p2"]);

        let at_min = search(&records, &SearchCriteria::new().min_price(1200000)).unwrap();
        assert_eq!(ids(&at_min), vec!["p3"]);
    }

    #[test]
    fn filters_by_bedroom_range() {
        let result = search(
            &sample(),
            &SearchCriteria::new().min_bedrooms("2").max_bedrooms("4"),
        )
        .unwrap();
        assert_eq!(ids(&result), vec!["p1", "p2"]);
    }

    #[test]
    fn filters_by_postcode_prefix_over_whole_postcode() {
        let records = sample();
        let result = search(&records, &SearchCriteria::new().postcode("nw")).unwrap();
        assert_eq!(ids(&result), vec!["p2"]);

        let result = search(&records, &SearchCriteria::new().postcode("SW15 3")).unwrap();
        assert_eq!(ids(&result), vec!["p3"]);

        // Prefix, not substring.
        let result = search(&records, &SearchCriteria::new().postcode("1AA")).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn combined_criteria() {
        let criteria = SearchCriteria::new()
            .kind("House")
            .min_price(250000)
            .max_price(1000000)
            .postcode("BR1");
        let result = search(&sample(), &criteria).unwrap();
        assert_eq!(ids(&result), vec!["p1"]);
    }

    #[test]
    fn contradictory_criteria_match_nothing() {
        let criteria = SearchCriteria::new().kind("Flat").min_bedrooms(4);
        assert!(search(&sample(), &criteria).unwrap().is_empty());
    }

    #[test]
    fn date_range_from_iso_strings() {
        let criteria = SearchCriteria::new()
            .date_from("2024-11-01")
            .date_to("2025-12-31");
        let result = search(&sample(), &criteria).unwrap();
        assert_eq!(ids(&result), vec!["p2", "p3"]);
    }

    #[test]
    fn date_range_from_date_values() {
        let from = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        let result = search(&sample(), &SearchCriteria::new().date_from(from)).unwrap();
        assert_eq!(ids(&result), vec!["p2", "p3"]);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let criteria = SearchCriteria::new()
            .date_from("2024-11-20")
            .date_to("2024-11-20");
        let result = search(&sample(), &criteria).unwrap();
        assert_eq!(ids(&result), vec!["p3"]);
    }

    #[test]
    fn malformed_criteria_widen_instead_of_failing() {
        let criteria = SearchCriteria::new()
            .min_price("lots")
            .max_bedrooms("a few")
            .date_from("last week")
            .date_to(RawValue::Bool(false));
        let records = sample();
        assert_eq!(search(&records, &criteria).unwrap(), records);
    }

    #[test]
    fn invalid_month_aborts_search() {
        let mut records = sample();
        records[1].added.month = "Marchember".into();

        let err = search(&records, &SearchCriteria::default()).unwrap_err();
        assert!(matches!(err, SearchError::InvalidMonthName(ref m) if m == "Marchember"));
    }

    #[test]
    fn invalid_month_surfaces_even_when_record_fails_earlier_predicate() {
        let mut records = sample();
        records[1].added.month = "Marchember".into();

        // p2 is a Flat, so the type predicate alone would exclude it.
        let err = search(&records, &SearchCriteria::new().kind("House")).unwrap_err();
        assert!(matches!(err, SearchError::InvalidMonthName(_)));
    }

    #[test]
    fn skipping_search_reports_bad_records() {
        let mut records = sample();
        records[0].added.month = "Janvier".into();

        let report = search_skipping(&records, &SearchCriteria::default());
        assert_eq!(ids(&report.matches), vec!["p2", "p3"]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].id, "p1");
        assert!(report.skipped[0].error.is_data_integrity());
    }

    #[test]
    fn search_does_not_mutate_input() {
        let records = sample();
        let before = records.clone();
        let _ = search(&records, &SearchCriteria::new().kind("Flat")).unwrap();
        assert_eq!(records, before);
    }

    #[test]
    fn run_reports_totals() {
        let store = InMemoryStore::with_properties(sample());
        let result = run(
            &store,
            &SearchCriteria::new().kind("house"),
            InvalidRecordPolicy::Abort,
        )
        .unwrap();
        assert_eq!(ids(&result.listed_properties), vec!["p1", "p3"]);
        assert_eq!(result.total, 3);
        assert_eq!(result.active_criteria, 1);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn run_with_skip_policy_warns() {
        let mut records = sample();
        records[2].added.month = "Nov".into();
        let store = InMemoryStore::with_properties(records);

        let result = run(&store, &SearchCriteria::default(), InvalidRecordPolicy::Skip).unwrap();
        assert_eq!(ids(&result.listed_properties), vec!["p1", "p2"]);
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("p3"));
    }

    #[test]
    fn run_with_abort_policy_fails() {
        let mut records = sample();
        records[2].added.month = "Nov".into();
        let store = InMemoryStore::with_properties(records);

        assert!(run(&store, &SearchCriteria::default(), InvalidRecordPolicy::Abort).is_err());
    }
}
