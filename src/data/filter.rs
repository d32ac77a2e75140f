use super::model::{LaunchRecord, PayloadRange, SiteSelector};

// ---------------------------------------------------------------------------
// Row filters
// ---------------------------------------------------------------------------

/// Return the records whose payload lies inside `range` (inclusive), in
/// input order.
pub fn filter_by_payload<'a>(
    records: &'a [LaunchRecord],
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|rec| range.contains(rec.payload_mass_kg))
        .collect()
}

/// Keep only the records launched from the selected site.
///
/// * [`SiteSelector::All`] → the subset is returned unchanged
/// * [`SiteSelector::Site`] → exact name match; an unknown site yields an
///   empty subset
pub fn filter_by_site<'a>(
    subset: Vec<&'a LaunchRecord>,
    selector: &SiteSelector,
) -> Vec<&'a LaunchRecord> {
    match selector {
        SiteSelector::All => subset,
        SiteSelector::Site(_) => subset
            .into_iter()
            .filter(|rec| selector.matches(&rec.launch_site))
            .collect(),
    }
}

/// Payload filter followed by site filter.
pub fn filter_records<'a>(
    records: &'a [LaunchRecord],
    selector: &SiteSelector,
    range: &PayloadRange,
) -> Vec<&'a LaunchRecord> {
    filter_by_site(filter_by_payload(records, range), selector)
}
