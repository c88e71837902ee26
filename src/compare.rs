use crate::{extract::Measurements, format::title_case};

/// A test name present in both runs, with its gas reading from each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison<'a> {
    pub name: &'a str,
    pub local: u64,
    pub fork: u64,
}

impl Comparison<'_> {
    /// Signed gas difference, fork minus local. Exact for any pair of `u64` readings.
    pub fn diff(&self) -> i128 {
        self.fork as i128 - self.local as i128
    }

    /// Percentage difference relative to the local reading, `None` when the
    /// local reading is zero.
    pub fn pct_diff(&self) -> Option<f64> {
        (self.local > 0).then(|| self.diff() as f64 / self.local as f64 * 100.0)
    }

    /// Percentage shown in the table, where a zero local reading reports 0.
    pub fn display_pct(&self) -> f64 {
        self.pct_diff().unwrap_or_default()
    }

    pub fn display_name(&self) -> String {
        title_case(self.name)
    }
}

/// Joins the two runs on test name, in ascending name order.
///
/// Names measured only in one of the runs are dropped.
pub fn matched<'a>(local: &'a Measurements, fork: &Measurements) -> Vec<Comparison<'a>> {
    local
        .iter()
        .filter_map(|(name, local)| {
            fork.get(name).map(|fork| Comparison { name, local, fork })
        })
        .collect()
}
