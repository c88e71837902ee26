use crate::{compare::Comparison, error::CompareError};

/// Every absolute percentage difference must stay strictly below this value
/// for the runs to count as consistent.
pub const CONSISTENCY_THRESHOLD_PCT: f64 = 2.0;

/// Aggregates over the matched pairs of a comparison.
///
/// Pairs with a zero local reading count towards `differences` but are left
/// out of `pct_differences`. Averages and extrema over an empty list are
/// errors, not zeros.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub differences: Vec<i128>,
    pub pct_differences: Vec<f64>,
}

impl Summary {
    pub fn new(pairs: &[Comparison<'_>]) -> Self {
        Self {
            differences: pairs.iter().map(Comparison::diff).collect(),
            pct_differences: pairs.iter().filter_map(Comparison::pct_diff).collect(),
        }
    }

    pub fn tests_compared(&self) -> usize {
        self.differences.len()
    }

    pub fn avg_abs_difference(&self) -> Result<f64, CompareError> {
        if self.differences.is_empty() {
            return Err(CompareError::NoOverlap);
        }
        let total: u128 = self
            .differences
            .iter()
            .map(|diff| diff.unsigned_abs())
            .sum();
        Ok(total as f64 / self.differences.len() as f64)
    }

    /// Summed in ascending key order, so the result can differ in the last
    /// bit from a sum in file order; printed values are unaffected.
    pub fn avg_pct_difference(&self) -> Result<f64, CompareError> {
        let pcts = self.abs_pcts()?;
        Ok(pcts.iter().sum::<f64>() / pcts.len() as f64)
    }

    pub fn max_pct_difference(&self) -> Result<f64, CompareError> {
        Ok(self.abs_pcts()?.into_iter().fold(f64::MIN, f64::max))
    }

    pub fn min_pct_difference(&self) -> Result<f64, CompareError> {
        Ok(self.abs_pcts()?.into_iter().fold(f64::MAX, f64::min))
    }

    pub fn consistent(&self) -> bool {
        self.pct_differences
            .iter()
            .all(|pct| pct.abs() < CONSISTENCY_THRESHOLD_PCT)
    }

    fn abs_pcts(&self) -> Result<Vec<f64>, CompareError> {
        if self.pct_differences.is_empty() {
            return Err(CompareError::NoPositiveBaseline);
        }
        Ok(self.pct_differences.iter().map(|pct| pct.abs()).collect())
    }
}
