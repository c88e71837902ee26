use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::CompareError;

static GAS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)_GAS: ([0-9]+)").expect("gas line pattern"));

/// Gas measurements of a single run, keyed by test name.
///
/// Keys iterate in ascending lexicographic order. A name seen more than
/// once keeps the value of its last occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Measurements(BTreeMap<String, u64>);

impl Measurements {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut measurements = Self::default();
        for line in lines {
            measurements.add_line(line.as_ref());
        }
        measurements
    }

    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut measurements = Self::default();
        for line in reader.lines() {
            measurements.add_line(&line?);
        }
        Ok(measurements)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CompareError> {
        let path = path.as_ref();
        let read_error = |source| CompareError::Read {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_error)?;
        let measurements = Self::from_reader(BufReader::new(file)).map_err(read_error)?;
        tracing::debug!(
            path = %path.display(),
            count = measurements.len(),
            "Extracted gas measurements"
        );
        Ok(measurements)
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(name, gas)| (name.as_str(), *gas))
    }

    fn add_line(&mut self, line: &str) {
        if let Some((name, gas)) = parse_line(line) {
            self.0.insert(name.to_string(), gas);
        }
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Measurements {
    fn from_iter<T: IntoIterator<Item = (S, u64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(name, gas)| (name.into(), gas)).collect())
    }
}

/// Returns the first `<NAME>_GAS: <digits>` pair found anywhere in the line.
pub fn parse_line(line: &str) -> Option<(&str, u64)> {
    let captures = GAS_LINE.captures(line)?;
    let name = captures.get(1)?.as_str();
    let digits = captures.get(2)?.as_str();
    match digits.parse::<u64>() {
        Ok(gas) => Some((name, gas)),
        Err(e) => {
            tracing::warn!(name, digits, "Skipping gas value: {e}");
            None
        }
    }
}
