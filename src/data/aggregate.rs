use super::model::{LaunchRecord, OutcomeSummary, ScatterPoint, FAILURE_LABEL, SUCCESS_LABEL};

// ---------------------------------------------------------------------------
// Pie-chart summaries
// ---------------------------------------------------------------------------

/// Successful launches per site, keyed in order of first appearance.
///
/// Failures are not counted, but a site whose launches all failed still
/// appears with a count of zero.
pub fn summarize_by_site(subset: &[&LaunchRecord]) -> OutcomeSummary {
    let mut summary = OutcomeSummary::default();
    for rec in subset {
        summary.add(&rec.launch_site, usize::from(rec.is_success()));
    }
    summary
}

/// Success and failure counts. Both keys are always present, so an empty
/// subset produces `{Success: 0, Failure: 0}`.
pub fn summarize_outcome(subset: &[&LaunchRecord]) -> OutcomeSummary {
    let successes = subset.iter().filter(|r| r.is_success()).count();
    let mut summary = OutcomeSummary::default();
    summary.add(SUCCESS_LABEL, successes);
    summary.add(FAILURE_LABEL, subset.len() - successes);
    summary
}

// ---------------------------------------------------------------------------
// Scatter projection
// ---------------------------------------------------------------------------

/// Column projection for the payload/outcome scatter, input order preserved.
pub fn project_for_scatter(subset: &[&LaunchRecord]) -> Vec<ScatterPoint> {
    subset
        .iter()
        .map(|rec| ScatterPoint {
            payload_mass_kg: rec.payload_mass_kg,
            class: rec.class,
            booster_version_category: rec.booster_version_category.clone(),
        })
        .collect()
}
