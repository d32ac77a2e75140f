use crate::color::ColorMap;
use crate::data::dashboard::{on_site_or_range_change, DashboardUpdate};
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelector, FAILURE_LABEL, SUCCESS_LABEL};

/// Slider span used when every payload fits below it.
pub const DEFAULT_SLIDER_MAX: f64 = 10_000.0;
/// Slider step and mark spacing.
pub const SLIDER_STEP: f64 = 1_000.0;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup; never replaced.
    dataset: LaunchDataset,

    /// Current dropdown value.
    pub selector: SiteSelector,

    /// Current slider values.
    pub payload_low: f64,
    pub payload_high: f64,

    /// Upper end of the payload sliders.
    pub slider_max: f64,

    /// Chart inputs and visible rows for the current controls (cached).
    pub update: DashboardUpdate,

    /// Scatter colours per booster version category.
    pub category_colors: ColorMap,

    /// Pie colours per site and per outcome label.
    pub pie_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state for a freshly loaded dataset and initial controls.
    pub fn new(dataset: LaunchDataset, selector: SiteSelector, range: PayloadRange) -> Self {
        let slider_max =
            DEFAULT_SLIDER_MAX.max((dataset.max_payload / SLIDER_STEP).ceil() * SLIDER_STEP);

        let category_colors = ColorMap::new(dataset.booster_categories.as_slice());
        let mut pie_keys = dataset.sites.clone();
        pie_keys.push(SUCCESS_LABEL.to_string());
        pie_keys.push(FAILURE_LABEL.to_string());
        let pie_colors = ColorMap::new(pie_keys.as_slice());

        let update = on_site_or_range_change(&dataset, &selector, &range);

        Self {
            dataset,
            selector,
            payload_low: range.low(),
            payload_high: range.high(),
            slider_max,
            update,
            category_colors,
            pie_colors,
            status_message: None,
        }
    }

    pub fn dataset(&self) -> &LaunchDataset {
        &self.dataset
    }

    /// Change the site dropdown and recompute.
    pub fn set_selector(&mut self, selector: SiteSelector) {
        if self.selector != selector {
            log::debug!("Dropdown selection: {selector}");
            self.selector = selector;
            self.refresh();
        }
    }

    /// Move the lower slider; the upper one is pushed along to keep
    /// `low <= high`.
    pub fn set_payload_low(&mut self, low: f64) {
        self.payload_low = low;
        if self.payload_high < low {
            self.payload_high = low;
        }
        self.refresh();
    }

    /// Move the upper slider; the lower one is pushed along to keep
    /// `low <= high`.
    pub fn set_payload_high(&mut self, high: f64) {
        self.payload_high = high;
        if self.payload_low > high {
            self.payload_low = high;
        }
        self.refresh();
    }

    /// Put both sliders back on the dataset's payload bounds.
    pub fn reset_range(&mut self) {
        self.payload_low = self.dataset.min_payload;
        self.payload_high = self.dataset.max_payload;
        self.refresh();
    }

    /// Recompute chart data and visible rows after a control change.
    ///
    /// Both come from one filtering pass in [`on_site_or_range_change`].
    pub fn refresh(&mut self) {
        match PayloadRange::new(self.payload_low, self.payload_high) {
            Ok(range) => {
                self.update = on_site_or_range_change(&self.dataset, &self.selector, &range);
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("{e}");
                self.status_message = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn state() -> AppState {
        let rec = |site: &str, payload: f64, class: u8| LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            class,
            booster_version_category: "FT".to_string(),
        };
        let ds = LaunchDataset::from_records(vec![
            rec("A", 500.0, 1),
            rec("A", 1500.0, 0),
            rec("B", 800.0, 1),
        ]);
        let range = ds.payload_bounds();
        AppState::new(ds, SiteSelector::All, range)
    }

    fn visible_payloads(st: &AppState) -> Vec<f64> {
        st.update.records.iter().map(|r| r.payload_mass_kg).collect()
    }

    #[test]
    fn initial_state_shows_everything() {
        let st = state();
        assert_eq!(st.update.records, st.dataset().records);
        assert_eq!(st.update.summary.get("A"), Some(1));
        assert_eq!(st.payload_low, 500.0);
        assert_eq!(st.payload_high, 1500.0);
        assert_eq!(st.slider_max, DEFAULT_SLIDER_MAX);
    }

    #[test]
    fn selecting_a_site_switches_pie_mode() {
        let mut st = state();
        st.set_selector(SiteSelector::site("A"));
        assert_eq!(st.update.summary.get(SUCCESS_LABEL), Some(1));
        assert_eq!(st.update.summary.get(FAILURE_LABEL), Some(1));
        assert_eq!(visible_payloads(&st), vec![500.0, 1500.0]);
    }

    #[test]
    fn sliders_never_cross() {
        let mut st = state();
        st.set_payload_low(2000.0);
        assert_eq!(st.payload_high, 2000.0);
        assert!(st.update.records.is_empty());
        assert!(st.update.scatter_points.is_empty());

        st.set_payload_high(600.0);
        assert_eq!(st.payload_low, 600.0);
        assert!(st.status_message.is_none());

        st.reset_range();
        assert_eq!((st.payload_low, st.payload_high), (500.0, 1500.0));
        assert_eq!(visible_payloads(&st), vec![500.0, 1500.0, 800.0]);
    }

    #[test]
    fn slider_span_grows_for_heavy_payloads() {
        let ds = LaunchDataset::from_records(vec![LaunchRecord {
            launch_site: "A".into(),
            payload_mass_kg: 15_600.0,
            class: 1,
            booster_version_category: "B5".into(),
        }]);
        let range = ds.payload_bounds();
        let st = AppState::new(ds, SiteSelector::All, range);
        assert_eq!(st.slider_max, 16_000.0);
    }
}
