use serde::Serialize;

use super::aggregate::{project_for_scatter, summarize_by_site, summarize_outcome};
use super::filter::filter_records;
use super::model::{
    LaunchDataset, LaunchRecord, OutcomeSummary, PayloadRange, ScatterPoint, SiteSelector,
};

// ---------------------------------------------------------------------------
// Chart inputs for one control state
// ---------------------------------------------------------------------------

/// Everything the two charts need after a control change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardUpdate {
    pub selector: SiteSelector,
    pub range: PayloadRange,
    /// Pie data: successes per site for `ALL`, Success/Failure otherwise.
    pub summary: OutcomeSummary,
    pub scatter_points: Vec<ScatterPoint>,
    /// The filtered rows both charts were computed from, in input order.
    #[serde(skip)]
    pub records: Vec<LaunchRecord>,
}

/// Single entry point for the presentation layer: payload filter, then site
/// filter, then both aggregations over the same subset.
pub fn on_site_or_range_change(
    dataset: &LaunchDataset,
    selector: &SiteSelector,
    range: &PayloadRange,
) -> DashboardUpdate {
    log::debug!(
        "Recomputing charts for site={selector} range=[{}, {}]",
        range.low(),
        range.high()
    );

    let subset = filter_records(&dataset.records, selector, range);

    DashboardUpdate {
        selector: selector.clone(),
        range: *range,
        summary: site_pie(&subset, selector),
        scatter_points: project_for_scatter(&subset),
        records: subset.into_iter().cloned().collect(),
    }
}

/// Pie summary for an already filtered subset.
///
/// `ALL` counts successes per site and ignores failures; a single site
/// counts both outcomes.
pub fn site_pie(subset: &[&LaunchRecord], selector: &SiteSelector) -> OutcomeSummary {
    match selector {
        SiteSelector::All => summarize_by_site(subset),
        SiteSelector::Site(_) => summarize_outcome(subset),
    }
}

/// Scatter points for the given controls, without computing the pie.
pub fn scatter_for(
    dataset: &LaunchDataset,
    selector: &SiteSelector,
    range: &PayloadRange,
) -> Vec<ScatterPoint> {
    let subset = filter_records(&dataset.records, selector, range);
    project_for_scatter(&subset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{FAILURE_LABEL, SUCCESS_LABEL};

    fn example_dataset() -> LaunchDataset {
        let rec = |site: &str, payload: f64, class: u8, cat: &str| LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            class,
            booster_version_category: cat.to_string(),
        };
        LaunchDataset::from_records(vec![
            rec("A", 500.0, 1, "v1.1"),
            rec("A", 1500.0, 0, "FT"),
            rec("B", 800.0, 1, "B4"),
        ])
    }

    fn range(low: f64, high: f64) -> PayloadRange {
        PayloadRange::new(low, high).unwrap()
    }

    #[test]
    fn all_sites_with_narrow_range() {
        let ds = example_dataset();
        let update = on_site_or_range_change(&ds, &SiteSelector::All, &range(0.0, 1000.0));

        assert_eq!(update.summary.get("A"), Some(1));
        assert_eq!(update.summary.get("B"), Some(1));
        assert_eq!(update.summary.len(), 2);

        let points: Vec<(f64, u8)> = update
            .scatter_points
            .iter()
            .map(|p| (p.payload_mass_kg, p.class))
            .collect();
        assert_eq!(points, vec![(500.0, 1), (800.0, 1)]);
        assert_eq!(update.scatter_points[0].booster_version_category, "v1.1");
    }

    #[test]
    fn single_site_counts_both_outcomes() {
        let ds = example_dataset();
        let update = on_site_or_range_change(&ds, &SiteSelector::site("A"), &range(0.0, 2000.0));

        assert_eq!(update.summary.get(SUCCESS_LABEL), Some(1));
        assert_eq!(update.summary.get(FAILURE_LABEL), Some(1));
        assert_eq!(update.scatter_points.len(), 2);
    }

    #[test]
    fn unknown_site_gives_zero_pie_and_no_points() {
        let ds = example_dataset();
        let update = on_site_or_range_change(&ds, &SiteSelector::site("C"), &ds.payload_bounds());

        assert_eq!(update.summary.get(SUCCESS_LABEL), Some(0));
        assert_eq!(update.summary.get(FAILURE_LABEL), Some(0));
        assert!(update.scatter_points.is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let ds = example_dataset();
        let sel = SiteSelector::site("A");
        let r = range(400.0, 1600.0);
        let first = on_site_or_range_change(&ds, &sel, &r);
        let second = on_site_or_range_change(&ds, &sel, &r);
        assert_eq!(first, second);
    }

    #[test]
    fn site_summary_never_exceeds_total_successes() {
        let ds = example_dataset();
        let update = on_site_or_range_change(&ds, &SiteSelector::All, &ds.payload_bounds());
        assert!(update.summary.total() <= ds.total_successes());
    }

    #[test]
    fn scatter_path_matches_combined_update() {
        let ds = example_dataset();
        let sel = SiteSelector::site("B");
        let r = ds.payload_bounds();
        let update = on_site_or_range_change(&ds, &sel, &r);
        assert_eq!(scatter_for(&ds, &sel, &r), update.scatter_points);
    }

    #[test]
    fn update_serializes_selector_as_text() {
        let ds = example_dataset();
        let update = on_site_or_range_change(&ds, &SiteSelector::All, &range(0.0, 1000.0));
        let json: serde_json::Value = serde_json::to_value(&update).unwrap();
        assert_eq!(json["selector"], "ALL");
        assert_eq!(json["range"]["low"], 0.0);
        assert_eq!(json["summary"][0]["key"], "A");
        assert_eq!(json["scatter_points"][1]["payload_mass_kg"], 800.0);
        assert!(json.get("records").is_none());
    }

    #[test]
    fn rows_match_the_charted_subset() {
        let ds = example_dataset();
        let update = on_site_or_range_change(&ds, &SiteSelector::site("A"), &range(0.0, 1000.0));
        assert_eq!(update.records, vec![ds.records[0].clone()]);

        let update = on_site_or_range_change(&ds, &SiteSelector::All, &range(0.0, 1000.0));
        let payloads: Vec<f64> = update.records.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(payloads, vec![500.0, 800.0]);
        assert_eq!(update.records.len(), update.scatter_points.len());
    }
}
