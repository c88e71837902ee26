pub mod compare;
pub mod error;
pub mod extract;
pub mod format;
pub mod report;
pub mod summary;

use std::{io::Write, path::Path};

use crate::{error::CompareError, extract::Measurements, report::OutputFormat};

/// Default measurement log of the local (anvil) run.
pub const LOCAL_LOG: &str = "gas_results_after.log";
/// Default measurement log of the forked-mainnet run.
pub const FORK_LOG: &str = "gas_results_fork_with_logs.log";

pub fn run<W: Write>(
    local: impl AsRef<Path>,
    fork: impl AsRef<Path>,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), CompareError> {
    let local = Measurements::load(local)?;
    let fork = Measurements::load(fork)?;
    report::render(&local, &fork, format, out)
}
