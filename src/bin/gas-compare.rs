use std::io::Write as _;

use eyre::WrapErr as _;
use gas_compare::{FORK_LOG, LOCAL_LOG, report::OutputFormat};
use tracing_subscriber::EnvFilter;

// cargo run --release --bin gas-compare [local.log] [fork.log] [table|json]

fn main() -> eyre::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let local_path = args
        .first()
        .cloned()
        .unwrap_or_else(|| LOCAL_LOG.to_string());
    let fork_path = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| FORK_LOG.to_string());
    let format = args
        .get(2)
        .map(|format| format.parse::<OutputFormat>())
        .transpose()?
        .unwrap_or_default();
    tracing::debug!(local = %local_path, fork = %fork_path, ?format, "Starting gas comparison");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    gas_compare::run(&local_path, &fork_path, format, &mut out)
        .wrap_err_with(|| format!("comparing {local_path} against {fork_path}"))?;
    out.flush()?;
    Ok(())
}
